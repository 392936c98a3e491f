//! npm registry API response types
//!
//! These mirror the upstream JSON. Every field the registry may omit or send
//! as `null` is optional here; defaults are applied in the client.

use indexmap::IndexMap;
use npm_scout_core::types::DailyDownloads;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Full package document (`GET {registry}/{name}`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Packument {
    /// Package name
    #[serde(default)]
    pub name: String,
    /// Named version pointers, e.g. `latest`
    #[serde(rename = "dist-tags")]
    pub dist_tags: Option<IndexMap<String, String>>,
    /// Per-version manifests, left undecoded; only the one being shown is
    /// decoded, via [`Packument::manifest`]
    pub versions: Option<IndexMap<String, Value>>,
    /// Package description
    pub description: Option<String>,
    /// License
    pub license: Option<LicenseField>,
    /// Homepage URL
    pub homepage: Option<String>,
    /// Repository information
    pub repository: Option<RepositoryField>,
    /// Keywords
    pub keywords: Option<Vec<String>>,
    /// Current maintainers
    pub maintainers: Option<Vec<Maintainer>>,
    /// Version → publish time, plus the `created` and `modified` sentinels.
    /// Values are kept loose because unpublished packages store an object here.
    pub time: Option<IndexMap<String, Value>>,
}

impl Packument {
    /// Decode the manifest of one version.
    ///
    /// Old packages carry manifests with odd shapes (arrays where maps are
    /// expected and so on). A manifest that is missing or does not decode
    /// yields an empty one instead of failing the whole document.
    pub fn manifest(&self, version: &str) -> VersionManifest {
        self.versions
            .as_ref()
            .and_then(|versions| versions.get(version))
            .and_then(|raw| VersionManifest::deserialize(raw).ok())
            .unwrap_or_default()
    }
}

/// Version-scoped fields of a package document
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VersionManifest {
    /// Dependencies
    pub dependencies: Option<IndexMap<String, String>>,
    /// Dev dependencies
    #[serde(rename = "devDependencies")]
    pub dev_dependencies: Option<IndexMap<String, String>>,
}

/// `license` is an SPDX string, or a `{type, url}` object in older packages
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum LicenseField {
    Spdx(String),
    Object {
        #[serde(rename = "type")]
        kind: Option<String>,
        url: Option<String>,
    },
    /// Anything else, e.g. an array of license objects
    Other(Value),
}

impl LicenseField {
    /// License identifier, if one is declared
    pub fn identifier(&self) -> Option<&str> {
        match self {
            LicenseField::Spdx(id) => Some(id.as_str()),
            LicenseField::Object { kind, .. } => kind.as_deref(),
            LicenseField::Other(_) => None,
        }
    }
}

/// `repository` is a bare URL string or an object with a `url` member
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RepositoryField {
    Url(String),
    Object {
        #[serde(rename = "type")]
        kind: Option<String>,
        url: Option<String>,
        directory: Option<String>,
    },
    Other(Value),
}

impl RepositoryField {
    /// Raw repository URL, empty if the object form carries none
    pub fn url(&self) -> &str {
        match self {
            RepositoryField::Url(url) => url,
            RepositoryField::Object { url, .. } => url.as_deref().unwrap_or(""),
            RepositoryField::Other(_) => "",
        }
    }
}

/// Maintainer entry: a `{name, email}` object, or a `"name <email>"`
/// person string in older packages
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Maintainer {
    Person {
        name: Option<String>,
        email: Option<String>,
    },
    Text(String),
    Other(Value),
}

impl Maintainer {
    /// Display name, if the entry carries one
    pub fn name(&self) -> Option<&str> {
        let name = match self {
            Maintainer::Person { name, .. } => name.as_deref()?,
            Maintainer::Text(person) => person.split(['<', '(']).next().unwrap_or(person),
            Maintainer::Other(_) => return None,
        };
        let name = name.trim();
        (!name.is_empty()).then_some(name)
    }
}

/// Search endpoint response (`GET {registry}/-/v1/search`)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchResponse {
    pub objects: Option<Vec<SearchObject>>,
    pub total: Option<u64>,
}

/// One search hit
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchObject {
    pub package: SearchPackage,
    pub score: SearchScore,
    #[serde(rename = "searchScore")]
    pub search_score: Option<f64>,
}

/// Package summary inside a search hit
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchPackage {
    pub name: String,
    #[serde(default)]
    pub version: String,
    pub description: Option<String>,
    pub keywords: Option<Vec<String>>,
}

/// Relevance score of a search hit
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchScore {
    /// Combined relevance, nominally in 0.0..=1.0
    #[serde(rename = "final")]
    pub final_score: f64,
}

/// Downloads range response (`GET {downloads}/range/{period}/{name}`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DownloadRangeResponse {
    pub package: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub downloads: Vec<DailyDownloads>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_field_forms() {
        let bare: RepositoryField =
            serde_json::from_str("\"https://github.com/lodash/lodash\"").unwrap();
        assert_eq!(bare.url(), "https://github.com/lodash/lodash");

        let object: RepositoryField = serde_json::from_str(
            r#"{"type": "git", "url": "git+https://github.com/expressjs/express.git"}"#,
        )
        .unwrap();
        assert_eq!(object.url(), "git+https://github.com/expressjs/express.git");

        let no_url: RepositoryField = serde_json::from_str(r#"{"type": "git"}"#).unwrap();
        assert_eq!(no_url.url(), "");
    }

    #[test]
    fn test_license_field_forms() {
        let spdx: LicenseField = serde_json::from_str("\"MIT\"").unwrap();
        assert_eq!(spdx.identifier(), Some("MIT"));

        let legacy: LicenseField = serde_json::from_str(
            r#"{"type": "BSD", "url": "http://example.com/license"}"#,
        )
        .unwrap();
        assert_eq!(legacy.identifier(), Some("BSD"));

        let list: LicenseField = serde_json::from_str(r#"[{"type": "MIT"}]"#).unwrap();
        assert_eq!(list.identifier(), None);
    }

    #[test]
    fn test_maintainer_forms() {
        let maintainers: Vec<Maintainer> = serde_json::from_str(
            r#"[
                {"name": "alice", "email": "a@x"},
                "bob <b@x>",
                "carol",
                {"email": "nobody@x"},
                " <d@x>",
                42
            ]"#,
        )
        .unwrap();

        let names: Vec<Option<&str>> = maintainers.iter().map(Maintainer::name).collect();
        assert_eq!(
            names,
            vec![Some("alice"), Some("bob"), Some("carol"), None, None, None]
        );
    }

    #[test]
    fn test_malformed_manifests_do_not_fail_the_document() {
        let doc: Packument = serde_json::from_str(
            r#"{
                "name": "ancient",
                "dist-tags": {"latest": "0.0.2"},
                "versions": {
                    "0.0.1": {"dependencies": []},
                    "0.0.2": {"dependencies": {"lodash": "*"}, "devDependencies": "none"}
                }
            }"#,
        )
        .unwrap();

        assert!(doc.manifest("0.0.1").dependencies.is_none());
        assert!(doc.manifest("0.0.2").dependencies.is_none());
        assert!(doc.manifest("9.9.9").dependencies.is_none());
    }

    #[test]
    fn test_manifest_decodes_requested_version() {
        let doc: Packument = serde_json::from_str(
            r#"{
                "versions": {
                    "0.0.1": {"dependencies": []},
                    "1.0.0": {"dependencies": {"debug": "^4.0.0"}, "devDependencies": {"mocha": "^10"}}
                }
            }"#,
        )
        .unwrap();

        let manifest = doc.manifest("1.0.0");
        assert_eq!(manifest.dependencies.unwrap()["debug"], "^4.0.0");
        assert_eq!(manifest.dev_dependencies.unwrap()["mocha"], "^10");
    }

    #[test]
    fn test_packument_tolerates_missing_and_null_fields() {
        let doc: Packument = serde_json::from_str(
            r#"{"time": {"created": "2010-01-01T00:00:00Z"}, "keywords": null, "license": null}"#,
        )
        .unwrap();
        assert_eq!(doc.name, "");
        assert!(doc.dist_tags.is_none());
        assert!(doc.keywords.is_none());
        assert!(doc.license.is_none());
        assert_eq!(doc.time.map(|t| t.len()), Some(1));
    }

    #[test]
    fn test_unpublished_time_entry_parses() {
        let doc: Packument = serde_json::from_str(
            r#"{"name": "gone", "time": {"unpublished": {"time": "2020-01-01T00:00:00Z"}}}"#,
        )
        .unwrap();
        assert!(doc.time.unwrap()["unpublished"].is_object());
    }
}
