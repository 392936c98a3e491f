//! Utility functions and helpers.
//!
//! Common functionality used across multiple npm-scout crates.

pub mod format;

// Re-export commonly used utilities
pub use format::{format_thousands, or_none, NONE_PLACEHOLDER};
