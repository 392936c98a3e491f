//! Version history types.

use serde::{Deserialize, Serialize};

/// Keys of the registry `time` map that are not versions
pub const TIME_SENTINEL_KEYS: [&str; 2] = ["created", "modified"];

/// A published version and when it was published
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    pub version: String,
    /// Publish timestamp as reported by the registry
    pub date: String,
}

impl VersionEntry {
    pub fn new(version: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            date: date.into(),
        }
    }

    /// Whether a `time` map key names a version rather than a sentinel
    pub fn is_version_key(key: &str) -> bool {
        !TIME_SENTINEL_KEYS.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_keys_are_not_versions() {
        assert!(!VersionEntry::is_version_key("created"));
        assert!(!VersionEntry::is_version_key("modified"));
        assert!(VersionEntry::is_version_key("4.21.0"));
    }
}
