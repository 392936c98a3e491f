//! HTTP client for the npm registry and downloads API

use std::cmp::Reverse;
use std::time::Duration;

use chrono::{DateTime, NaiveDate};
use reqwest::{header, Client, ClientBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;
use url::Url;

use npm_scout_core::error::ScoutError;
use npm_scout_core::types::{
    clean_repository_url, DownloadPeriod, DownloadStats, PackageInfo, SearchResult, VersionEntry,
    UNKNOWN_LICENSE,
};

use crate::api::{DownloadRangeResponse, LicenseField, Maintainer, Packument, SearchResponse};
use crate::RegistryResult;

/// Public npm registry
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";
/// Public npm downloads API
pub const DEFAULT_DOWNLOADS_URL: &str = "https://api.npmjs.org/downloads";

/// Connection settings for the registry client
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Base URL of the package registry
    pub registry_url: String,
    /// Base URL of the downloads API
    pub downloads_url: String,
    /// Deadline for a single request, connect through body
    pub timeout: Duration,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
            downloads_url: DEFAULT_DOWNLOADS_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("npm-scout/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Client for registry search, package documents and download counts
#[derive(Debug, Clone)]
pub struct RegistryClient {
    /// Underlying HTTP client with connection pooling
    client: Client,
    /// Base registry URL
    registry_url: Url,
    /// Base downloads API URL
    downloads_url: Url,
}

impl RegistryClient {
    /// Create a client for the public npm endpoints
    pub fn new() -> RegistryResult<Self> {
        Self::with_config(RegistryConfig::default())
    }

    /// Create a client with custom endpoints and timeout
    pub fn with_config(config: RegistryConfig) -> RegistryResult<Self> {
        let registry_url = parse_base_url("registry_url", &config.registry_url)?;
        let downloads_url = parse_base_url("downloads_url", &config.downloads_url)?;

        let client = ClientBuilder::new()
            .pool_max_idle_per_host(8)
            .pool_idle_timeout(Duration::from_secs(90))
            .timeout(config.timeout)
            .gzip(true)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| ScoutError::network(format!("Failed to create HTTP client: {}", e), e))?;

        Ok(Self {
            client,
            registry_url,
            downloads_url,
        })
    }

    /// Base registry URL in use
    pub fn registry_url(&self) -> &Url {
        &self.registry_url
    }

    /// Base downloads API URL in use
    pub fn downloads_url(&self) -> &Url {
        &self.downloads_url
    }

    /// Search the registry; returns at most `size` results
    pub async fn search(&self, query: &str, size: usize) -> RegistryResult<Vec<SearchResult>> {
        let mut url = endpoint(&self.registry_url, &["-", "v1", "search"])?;
        url.query_pairs_mut()
            .append_pair("text", query)
            .append_pair("size", &size.to_string());

        let response: SearchResponse = self.get_json(url).await?;

        Ok(response
            .objects
            .unwrap_or_default()
            .into_iter()
            .take(size)
            .map(|obj| SearchResult {
                name: obj.package.name,
                version: obj.package.version,
                description: obj.package.description.unwrap_or_default(),
                keywords: obj.package.keywords.unwrap_or_default(),
                score: SearchResult::scale_score(obj.score.final_score),
                downloads: 0,
            })
            .collect())
    }

    /// Fetch the full package document
    pub async fn fetch_packument(&self, name: &str) -> RegistryResult<Packument> {
        let url = endpoint(&self.registry_url, &[name])?;
        self.get_json(url).await
    }

    /// Fetch package metadata resolved against the `latest` dist-tag
    pub async fn package_info(&self, name: &str) -> RegistryResult<PackageInfo> {
        let doc = self.fetch_packument(name).await?;
        Ok(package_info_from(doc))
    }

    /// Fetch the daily download series for `period` and total it
    pub async fn downloads(&self, name: &str, period: DownloadPeriod) -> RegistryResult<DownloadStats> {
        let url = endpoint(&self.downloads_url, &["range", period.as_str(), name])?;
        let response: DownloadRangeResponse = self.get_json(url).await?;

        Ok(DownloadStats::from_daily(
            response.package,
            &response.start,
            &response.end,
            response.downloads,
        ))
    }

    /// List published versions, newest first
    pub async fn versions(&self, name: &str) -> RegistryResult<Vec<VersionEntry>> {
        let doc = self.fetch_packument(name).await?;
        Ok(versions_from(doc))
    }

    /// GET a URL and decode its JSON body; non-2xx becomes `ScoutError::Registry`
    async fn get_json<T>(&self, url: Url) -> RegistryResult<T>
    where
        T: DeserializeOwned,
    {
        debug!(url = %url, "registry request");

        let response = self
            .client
            .get(url.clone())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| ScoutError::network(format!("Failed to fetch {}: {}", url, e), e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!(url = %url, status = status.as_u16(), "registry request failed");
            return Err(ScoutError::Registry {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ScoutError::network(format!("Failed to read {}: {}", url, e), e))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| ScoutError::decode(format!("{}: {}", url, e), e))
    }
}

/// Parse and check a configured base URL
fn parse_base_url(field: &str, raw: &str) -> RegistryResult<Url> {
    let url = Url::parse(raw).map_err(|e| ScoutError::Config {
        field: field.to_string(),
        reason: format!("'{}' is not a valid URL: {}", raw, e),
    })?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ScoutError::Config {
            field: field.to_string(),
            reason: format!("'{}' must be an http(s) URL", raw),
        });
    }
    Ok(url)
}

/// Append path segments to a base URL, percent-encoding each one.
///
/// Scoped names stay a single segment: `@types/node` → `@types%2Fnode`.
fn endpoint(base: &Url, segments: &[&str]) -> RegistryResult<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| ScoutError::Config {
            field: "base_url".to_string(),
            reason: format!("'{}' cannot be a base URL", base),
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Resolve a package document against its `latest` dist-tag.
///
/// A missing tag, or a manifest that does not decode, yields an empty
/// version and/or empty dependency maps.
pub fn package_info_from(doc: Packument) -> PackageInfo {
    let version = doc
        .dist_tags
        .as_ref()
        .and_then(|tags| tags.get("latest"))
        .cloned()
        .unwrap_or_default();
    let manifest = doc.manifest(&version);

    let Packument {
        name,
        description,
        license,
        homepage,
        repository,
        keywords,
        maintainers,
        time,
        ..
    } = doc;

    let last_publish = time
        .as_ref()
        .and_then(|t| t.get(&version))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    PackageInfo {
        name,
        version,
        description: description.unwrap_or_default(),
        license: license
            .as_ref()
            .and_then(LicenseField::identifier)
            .unwrap_or(UNKNOWN_LICENSE)
            .to_string(),
        homepage: homepage.unwrap_or_default(),
        repository: repository
            .map(|repo| clean_repository_url(repo.url()))
            .unwrap_or_default(),
        keywords: keywords.unwrap_or_default(),
        dependencies: manifest.dependencies.unwrap_or_default(),
        dev_dependencies: manifest.dev_dependencies.unwrap_or_default(),
        maintainers: maintainers
            .unwrap_or_default()
            .iter()
            .filter_map(Maintainer::name)
            .map(str::to_string)
            .collect(),
        last_publish,
    }
}

/// Extract the version history from a package document, newest first.
///
/// Sentinel keys and non-string entries are skipped. Equal timestamps keep
/// document order; unparseable dates sort last.
pub fn versions_from(doc: Packument) -> Vec<VersionEntry> {
    let mut entries: Vec<VersionEntry> = doc
        .time
        .unwrap_or_default()
        .into_iter()
        .filter(|(key, _)| VersionEntry::is_version_key(key))
        .filter_map(|(key, value)| value.as_str().map(|date| VersionEntry::new(key, date)))
        .collect();

    entries.sort_by_cached_key(|entry| Reverse(publish_millis(&entry.date)));
    entries
}

/// Milliseconds since the epoch for an RFC 3339 timestamp or a bare date
fn publish_millis(date: &str) -> Option<i64> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(date) {
        return Some(parsed.timestamp_millis());
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}
