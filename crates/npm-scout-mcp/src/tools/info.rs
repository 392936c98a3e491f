//! npm_info tool

use npm_scout_core::error::ScoutResult;
use npm_scout_core::types::PackageInfo;
use npm_scout_core::utils::{or_none, NONE_PLACEHOLDER};
use npm_scout_registry::RegistryClient;
use rmcp::schemars;
use serde::Deserialize;
use tracing::info;

use super::require_non_empty;

/// Arguments shared by the single-package tools (npm_info, npm_deps)
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct PackageInput {
    #[schemars(description = "Package name (e.g. 'express')")]
    pub name: String,
}

impl PackageInput {
    /// Fetch the package after checking the name is not blank
    pub(crate) async fn fetch(&self, client: &RegistryClient) -> ScoutResult<PackageInfo> {
        require_non_empty("name", &self.name)?;
        client.package_info(&self.name).await
    }
}

pub async fn run(client: &RegistryClient, input: PackageInput) -> ScoutResult<String> {
    info!(package = %input.name, "fetching package info");
    let package = input.fetch(client).await?;
    Ok(render_info(&package))
}

/// Multi-line summary of a package's latest version
pub fn render_info(info: &PackageInfo) -> String {
    let deps = if info.dependencies.is_empty() {
        format!("  {}", NONE_PLACEHOLDER)
    } else {
        info.dependencies
            .iter()
            .map(|(name, range)| format!("  {}: {}", name, range))
            .collect::<Vec<_>>()
            .join("\n")
    };
    let keywords = info.keywords.join(", ");

    [
        format!("# {} v{}", info.name, info.version),
        String::new(),
        info.description.clone(),
        String::new(),
        format!("License: {}", info.license),
        format!("Homepage: {}", or_none(&info.homepage)),
        format!("Repository: {}", or_none(&info.repository)),
        format!("Keywords: {}", or_none(&keywords)),
        format!("Maintainers: {}", info.maintainers.join(", ")),
        format!("Last published: {}", info.last_publish),
        String::new(),
        format!("Dependencies ({}):", info.dependency_count()),
        deps,
        String::new(),
        format!("Dev dependencies: {}", info.dev_dependency_count()),
    ]
    .join("\n")
}
