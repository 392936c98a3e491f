//! npm_downloads tool

use npm_scout_core::error::ScoutResult;
use npm_scout_core::types::{DownloadPeriod, DownloadStats};
use npm_scout_core::utils::format_thousands;
use npm_scout_registry::RegistryClient;
use rmcp::schemars;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::require_non_empty;

/// Download window as the agent names it
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PeriodArg {
    LastDay,
    LastWeek,
    #[default]
    LastMonth,
    LastYear,
}

impl From<PeriodArg> for DownloadPeriod {
    fn from(period: PeriodArg) -> Self {
        match period {
            PeriodArg::LastDay => DownloadPeriod::LastDay,
            PeriodArg::LastWeek => DownloadPeriod::LastWeek,
            PeriodArg::LastMonth => DownloadPeriod::LastMonth,
            PeriodArg::LastYear => DownloadPeriod::LastYear,
        }
    }
}

/// Arguments for npm_downloads
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct DownloadsInput {
    #[schemars(description = "Package name")]
    pub name: String,

    #[serde(default)]
    #[schemars(description = "Time period")]
    pub period: PeriodArg,
}

pub async fn run(client: &RegistryClient, input: DownloadsInput) -> ScoutResult<String> {
    require_non_empty("name", &input.name)?;
    let period = DownloadPeriod::from(input.period);

    info!(package = %input.name, %period, "fetching download counts");
    let stats = client.downloads(&input.name, period).await?;
    Ok(render_downloads(&stats))
}

/// Title, window and thousands-separated total
pub fn render_downloads(stats: &DownloadStats) -> String {
    [
        format!("# {} downloads", stats.package),
        format!("Period: {}", stats.period),
        format!("Total: {}", format_thousands(stats.total)),
    ]
    .join("\n")
}
