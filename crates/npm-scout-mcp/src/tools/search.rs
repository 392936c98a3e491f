//! npm_search tool

use npm_scout_core::error::ScoutResult;
use npm_scout_core::types::SearchResult;
use npm_scout_registry::RegistryClient;
use rmcp::schemars;
use serde::Deserialize;
use tracing::info;

use super::{check_limit, default_limit, deserialize_limit, require_non_empty};

/// Text returned when the search has no hits
pub const NO_RESULTS: &str = "No packages found.";

/// Arguments for npm_search
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct SearchInput {
    #[schemars(description = "Search query")]
    pub query: String,

    #[serde(default = "default_limit", deserialize_with = "deserialize_limit")]
    #[schemars(with = "u64", range(min = 1, max = 50))]
    #[schemars(description = "Number of results (1-50)")]
    pub size: u64,
}

pub async fn run(client: &RegistryClient, input: SearchInput) -> ScoutResult<String> {
    require_non_empty("query", &input.query)?;
    let size = check_limit("size", input.size)?;

    info!(query = %input.query, size, "searching registry");
    let results = client.search(&input.query, size).await?;
    Ok(render_search(&results))
}

/// Numbered list of hits, or [`NO_RESULTS`]
pub fn render_search(results: &[SearchResult]) -> String {
    if results.is_empty() {
        return NO_RESULTS.to_string();
    }

    results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "{}. **{}** v{} (score: {})\n   {}",
                i + 1,
                r.name,
                r.version,
                r.score,
                r.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
