//! npm_deps tool

use indexmap::IndexMap;
use npm_scout_core::error::ScoutResult;
use npm_scout_core::types::PackageInfo;
use npm_scout_core::utils::NONE_PLACEHOLDER;
use npm_scout_registry::RegistryClient;
use tracing::info;

use super::info::PackageInput;

pub async fn run(client: &RegistryClient, input: PackageInput) -> ScoutResult<String> {
    info!(package = %input.name, "listing dependencies");
    let package = input.fetch(client).await?;
    Ok(render_deps(&package))
}

/// Dependency and dev-dependency sections under a titled header
pub fn render_deps(info: &PackageInfo) -> String {
    let mut lines = vec![format!("# {} v{} dependencies", info.name, info.version)];
    push_section(&mut lines, "Dependencies", &info.dependencies);
    push_section(&mut lines, "Dev dependencies", &info.dev_dependencies);
    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, title: &str, deps: &IndexMap<String, String>) {
    if deps.is_empty() {
        lines.push(format!("\n{}: {}", title, NONE_PLACEHOLDER));
        return;
    }

    lines.push(format!("\n{} ({}):", title, deps.len()));
    lines.extend(deps.iter().map(|(name, range)| format!("  {}: {}", name, range)));
}
