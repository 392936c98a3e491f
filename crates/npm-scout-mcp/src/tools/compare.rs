//! npm_compare tool
//!
//! Fetches metadata and last-month downloads for both packages concurrently.
//! The four requests are joined with `try_join!`, so the first failure fails
//! the whole comparison and no partial table is rendered.

use npm_scout_core::error::ScoutResult;
use npm_scout_core::types::{DownloadPeriod, DownloadStats, PackageInfo};
use npm_scout_core::utils::format_thousands;
use npm_scout_registry::RegistryClient;
use rmcp::schemars;
use serde::Deserialize;
use tracing::info;

use super::require_non_empty;

/// Arguments for npm_compare
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompareInput {
    #[schemars(description = "First package name")]
    pub package_a: String,

    #[schemars(description = "Second package name")]
    pub package_b: String,
}

pub async fn run(client: &RegistryClient, input: CompareInput) -> ScoutResult<String> {
    require_non_empty("packageA", &input.package_a)?;
    require_non_empty("packageB", &input.package_b)?;

    info!(a = %input.package_a, b = %input.package_b, "comparing packages");
    let (info_a, info_b, downloads_a, downloads_b) = tokio::try_join!(
        client.package_info(&input.package_a),
        client.package_info(&input.package_b),
        client.downloads(&input.package_a, DownloadPeriod::LastMonth),
        client.downloads(&input.package_b, DownloadPeriod::LastMonth),
    )?;

    Ok(render_comparison(&info_a, &info_b, &downloads_a, &downloads_b))
}

/// Markdown table with one column per package
pub fn render_comparison(
    a: &PackageInfo,
    b: &PackageInfo,
    downloads_a: &DownloadStats,
    downloads_b: &DownloadStats,
) -> String {
    let row = |label: &str, left: String, right: String| format!("| {} | {} | {} |", label, left, right);

    [
        format!("| | {} | {} |", a.name, b.name),
        "|---|---|---|".to_string(),
        row("Version", a.version.clone(), b.version.clone()),
        row("License", a.license.clone(), b.license.clone()),
        row(
            "Dependencies",
            a.dependency_count().to_string(),
            b.dependency_count().to_string(),
        ),
        row(
            "Monthly downloads",
            format_thousands(downloads_a.total),
            format_thousands(downloads_b.total),
        ),
        row("Last published", a.last_publish.clone(), b.last_publish.clone()),
        row(
            "Maintainers",
            a.maintainers.len().to_string(),
            b.maintainers.len().to_string(),
        ),
    ]
    .join("\n")
}
