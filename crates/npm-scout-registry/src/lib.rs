//! npm registry client for npm-scout
//!
//! This crate fetches package documents, search results and download counts
//! from the public npm endpoints and normalizes them into the core types.
//! Each operation issues exactly one GET; there is no retry and no cache.

pub mod api;
pub mod client;

// Re-export main types
pub use api::{
    DownloadRangeResponse, LicenseField, Maintainer, Packument, RepositoryField, SearchResponse,
    VersionManifest,
};
pub use client::{RegistryClient, RegistryConfig, DEFAULT_DOWNLOADS_URL, DEFAULT_REGISTRY_URL};

use npm_scout_core::error::ScoutError;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, ScoutError>;
