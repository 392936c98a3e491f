//! Package metadata types.
//!
//! Normalized view of a registry package document, resolved against its
//! `latest` dist-tag.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// License shown when the package document declares none
pub const UNKNOWN_LICENSE: &str = "Unknown";

/// Normalized package metadata for the `latest` version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    /// Version the `latest` dist-tag points at, empty if the tag is missing
    pub version: String,
    pub description: String,
    pub license: String,
    pub homepage: String,
    /// Repository URL without `git+` prefix or `.git` suffix
    pub repository: String,
    pub keywords: Vec<String>,
    pub dependencies: IndexMap<String, String>,
    pub dev_dependencies: IndexMap<String, String>,
    pub maintainers: Vec<String>,
    /// ISO timestamp of the latest publish, empty if unknown
    pub last_publish: String,
}

impl PackageInfo {
    /// Number of runtime dependencies of the latest version
    pub fn dependency_count(&self) -> usize {
        self.dependencies.len()
    }

    /// Number of dev dependencies of the latest version
    pub fn dev_dependency_count(&self) -> usize {
        self.dev_dependencies.len()
    }
}

/// Strip VCS noise from a repository URL.
///
/// `git+https://github.com/expressjs/express.git` becomes
/// `https://github.com/expressjs/express`.
pub fn clean_repository_url(url: &str) -> String {
    let url = url.strip_prefix("git+").unwrap_or(url);
    url.strip_suffix(".git").unwrap_or(url).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_counts() {
        let pkg = PackageInfo {
            name: "koa".to_string(),
            version: "2.15.3".to_string(),
            description: String::new(),
            license: UNKNOWN_LICENSE.to_string(),
            homepage: String::new(),
            repository: String::new(),
            keywords: Vec::new(),
            dependencies: IndexMap::from([
                ("accepts".to_string(), "^1.3.5".to_string()),
                ("debug".to_string(), "^4.3.2".to_string()),
            ]),
            dev_dependencies: IndexMap::new(),
            maintainers: Vec::new(),
            last_publish: String::new(),
        };

        assert_eq!(pkg.dependency_count(), 2);
        assert_eq!(pkg.dev_dependency_count(), 0);
    }

    #[test]
    fn test_clean_repository_url() {
        assert_eq!(
            clean_repository_url("git+https://github.com/expressjs/express.git"),
            "https://github.com/expressjs/express"
        );
        assert_eq!(
            clean_repository_url("https://github.com/lodash/lodash"),
            "https://github.com/lodash/lodash"
        );
        assert_eq!(
            clean_repository_url("git+ssh://git@github.com/user/repo.git"),
            "ssh://git@github.com/user/repo"
        );
        // Shorthand forms pass through untouched
        assert_eq!(clean_repository_url("github:user/repo"), "github:user/repo");
        assert_eq!(clean_repository_url(""), "");
    }
}
