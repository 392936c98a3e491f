//! # npm-scout-core
//!
//! Core types and utilities shared across all npm-scout crates.
//!
//! This crate provides:
//! - Normalized registry types (PackageInfo, SearchResult, DownloadStats, VersionEntry)
//! - ScoutError enum for unified error handling
//! - Text formatting helpers used by the tool renderers
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Core data types
//! - `error`: Error types and result aliases
//! - `utils`: Utility functions and helpers

pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{ScoutError, ScoutResult, INTERNAL_ERROR, INVALID_PARAMS};
pub use types::{
    DailyDownloads, DownloadPeriod, DownloadStats, PackageInfo, SearchResult, VersionEntry,
};
