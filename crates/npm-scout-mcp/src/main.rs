//! # npm-scout
//!
//! MCP server for the public npm registry.
//!
//! Speaks JSON-RPC on stdin/stdout; all logging goes to stderr so it never
//! interleaves with protocol frames.
//!
//! ```bash
//! npm-scout
//! npm-scout --registry-url https://registry.npmmirror.com --timeout-secs 10
//! RUST_LOG=npm_scout_registry=debug npm-scout
//! ```

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use npm_scout_mcp::NpmScoutServer;
use npm_scout_registry::{RegistryClient, RegistryConfig, DEFAULT_DOWNLOADS_URL, DEFAULT_REGISTRY_URL};
use rmcp::transport::stdio;
use rmcp::ServiceExt;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// MCP server exposing npm registry search, metadata and download tools
#[derive(Parser, Debug)]
#[command(name = "npm-scout", version, about)]
pub struct Cli {
    /// Base URL of the package registry
    #[arg(long, env = "NPM_SCOUT_REGISTRY_URL", default_value = DEFAULT_REGISTRY_URL)]
    pub registry_url: String,

    /// Base URL of the downloads API
    #[arg(long, env = "NPM_SCOUT_DOWNLOADS_URL", default_value = DEFAULT_DOWNLOADS_URL)]
    pub downloads_url: String,

    /// Per-request deadline in seconds
    #[arg(long, env = "NPM_SCOUT_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    fn registry_config(&self) -> RegistryConfig {
        RegistryConfig {
            registry_url: self.registry_url.clone(),
            downloads_url: self.downloads_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            ..RegistryConfig::default()
        }
    }
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.log_json);
    setup_panic_handler();

    info!("Starting npm-scout v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(cli) {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let client = RegistryClient::with_config(cli.registry_config())
        .context("Failed to configure registry client")?;
    info!(
        registry = %client.registry_url(),
        downloads = %client.downloads_url(),
        "registry client ready"
    );

    // Single-threaded: requests interleave only at await points
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create async runtime")?;

    rt.block_on(async {
        let service = NpmScoutServer::new(client)
            .serve(stdio())
            .await
            .context("Failed to start MCP server on stdio")?;
        info!("MCP server ready, listening on stdio");

        let reason = service.waiting().await.context("MCP server task failed")?;
        info!(?reason, "MCP server stopped");
        Ok(())
    })
}

fn setup_logging(verbose: bool, json: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "npm_scout={0},npm_scout_mcp={0},npm_scout_registry={0}",
            level
        ))
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("npm-scout encountered an unexpected error: {}", panic_info);
        eprintln!("npm-scout crashed! This is a bug.");
        eprintln!("Error: {}", panic_info);
    }));
}
