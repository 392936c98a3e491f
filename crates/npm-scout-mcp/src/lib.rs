//! npm-scout MCP server library
//!
//! Exposes read-only npm registry queries to agents as MCP tools.
//!
//! ## Architecture
//!
//! ```text
//! Agent (MCP client)
//!        │  JSON-RPC over stdio (rmcp)
//!        ▼
//! ┌─────────────────┐
//! │ NpmScoutServer  │ ◄── This crate
//! │  ┌───────────┐  │
//! │  │   Tools   │  │ - npm_search
//! │  │           │  │ - npm_info
//! │  │           │  │ - npm_downloads
//! │  │           │  │ - npm_versions
//! │  │           │  │ - npm_compare
//! │  │           │  │ - npm_deps
//! │  └───────────┘  │
//! └────────┬────────┘
//!          ▼
//! ┌─────────────────┐
//! │ RegistryClient  │ npm-scout-registry
//! └─────────────────┘
//! ```

pub mod server;
pub mod tools;

pub use server::NpmScoutServer;

/// Server metadata for MCP protocol
pub const SERVER_NAME: &str = "npm-scout";
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SERVER_INSTRUCTIONS: &str = "Query the public npm registry: search packages, \
inspect metadata and dependencies, list versions, check download counts and compare two packages.";
