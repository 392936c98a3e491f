//! npm_versions tool

use npm_scout_core::error::ScoutResult;
use npm_scout_core::types::VersionEntry;
use npm_scout_registry::RegistryClient;
use rmcp::schemars;
use serde::Deserialize;
use tracing::info;

use super::{check_limit, default_limit, deserialize_limit, require_non_empty};

/// Arguments for npm_versions
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct VersionsInput {
    #[schemars(description = "Package name")]
    pub name: String,

    #[serde(default = "default_limit", deserialize_with = "deserialize_limit")]
    #[schemars(with = "u64", range(min = 1, max = 50))]
    #[schemars(description = "Number of versions to show (1-50)")]
    pub count: u64,
}

pub async fn run(client: &RegistryClient, input: VersionsInput) -> ScoutResult<String> {
    require_non_empty("name", &input.name)?;
    let count = check_limit("count", input.count)?;

    info!(package = %input.name, count, "listing versions");
    let versions = client.versions(&input.name).await?;
    Ok(render_versions(&versions, count))
}

/// The first `count` entries (already newest first), one per line
pub fn render_versions(versions: &[VersionEntry], count: usize) -> String {
    versions
        .iter()
        .take(count)
        .map(|v| format!("{} — {}", v.version, v.date))
        .collect::<Vec<_>>()
        .join("\n")
}
