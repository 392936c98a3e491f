//! MCP tool implementations
//!
//! Each tool module provides the tool's argument struct (its JSON schema is
//! derived from the struct), a `run()` entry point that validates arguments
//! and calls the registry, and a pure `render_*` function that turns the
//! result into text. [`crate::server`] exposes them over MCP.

pub mod compare;
pub mod deps;
pub mod downloads;
pub mod info;
pub mod search;
pub mod versions;

use npm_scout_core::error::{ScoutError, ScoutResult};
use serde::{de, Deserialize, Deserializer};


/// Smallest accepted `size` / `count`
pub const MIN_LIMIT: u64 = 1;
/// Largest accepted `size` / `count`
pub const MAX_LIMIT: u64 = 50;
/// Default `size` / `count`
pub const DEFAULT_LIMIT: u64 = 10;

/// Reject blank string arguments
pub(crate) fn require_non_empty(field: &str, value: &str) -> ScoutResult<()> {
    if value.trim().is_empty() {
        return Err(ScoutError::invalid_argument(field, "must not be empty"));
    }
    Ok(())
}

/// Check a `size` / `count` argument against [MIN_LIMIT, MAX_LIMIT]
pub(crate) fn check_limit(field: &str, value: u64) -> ScoutResult<usize> {
    if !(MIN_LIMIT..=MAX_LIMIT).contains(&value) {
        return Err(ScoutError::invalid_argument(
            field,
            format!("must be between {} and {}, got {}", MIN_LIMIT, MAX_LIMIT, value),
        ));
    }
    Ok(value as usize)
}

pub(crate) fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

/// Deserialize a `size` / `count` argument.
///
/// JSON Schema's `integer` admits `10.0`, so any number with no fractional
/// part is accepted. Range checking happens later in [`check_limit`].
pub(crate) fn deserialize_limit<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if value.fract() != 0.0 || value < 0.0 || value > u32::MAX as f64 {
        return Err(de::Error::custom(format!(
            "expected a whole number between {} and {}, got {}",
            MIN_LIMIT, MAX_LIMIT, value
        )));
    }
    Ok(value as u64)
}
