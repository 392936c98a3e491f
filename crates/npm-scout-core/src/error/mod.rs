//! Error types and result aliases for npm-scout operations.
//!
//! A single error type covers the registry client, the tool surface and the
//! server binary so errors propagate unchanged from the HTTP layer up to the
//! protocol response.

use thiserror::Error;

/// Unified error type for all npm-scout operations
#[derive(Error, Debug)]
pub enum ScoutError {
    // Registry errors
    #[error("API error ({status}): {body}")]
    Registry { status: u16, body: String },

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Failed to decode registry response: {message}")]
    Decode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // Tool errors
    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },

    // Startup errors
    #[error("Configuration field '{field}' is invalid: {reason}")]
    Config { field: String, reason: String },
}

/// Result type alias for npm-scout operations
pub type ScoutResult<T> = Result<T, ScoutError>;

/// JSON-RPC code for a call whose arguments are wrong
pub const INVALID_PARAMS: i32 = -32602;
/// JSON-RPC code for everything the caller could not have prevented
pub const INTERNAL_ERROR: i32 = -32603;

impl ScoutError {
    /// Create a network error from any error type
    pub fn network<E>(message: String, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Network {
            message,
            source: Some(Box::new(source)),
        }
    }

    /// Create a decode error from any error type
    pub fn decode<E>(message: String, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Decode {
            message,
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether the caller sent a malformed invocation, as opposed to the
    /// invocation failing upstream
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, ScoutError::InvalidArgument { .. })
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ScoutError::Registry { status: 404, .. } => {
                Some("Check the package name spelling or try npm_search")
            },
            ScoutError::Registry { status: 429, .. } => {
                Some("The registry is rate limiting requests, wait before retrying")
            },
            ScoutError::Network { .. } => Some("Check your internet connection and try again"),
            ScoutError::Config { .. } => Some("Run with --help to see the accepted options"),
            _ => None,
        }
    }

    /// JSON-RPC error code used when this error fails a request outright
    pub fn rpc_code(&self) -> i32 {
        if self.is_invalid_request() {
            INVALID_PARAMS
        } else {
            INTERNAL_ERROR
        }
    }

    /// Error message followed by the suggestion, if there is one
    pub fn report(&self) -> String {
        match self.suggestion() {
            Some(help) => format!("{}\nhelp: {}", self, help),
            None => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_mentions_status() {
        let err = ScoutError::Registry {
            status: 404,
            body: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "API error (404): Not Found");
        assert!(err.suggestion().is_some());
    }

    #[test]
    fn test_rpc_codes() {
        assert_eq!(ScoutError::invalid_argument("size", "out of range").rpc_code(), -32602);
        assert_eq!(ScoutError::Registry { status: 503, body: String::new() }.rpc_code(), -32603);
        assert_eq!(
            ScoutError::Decode { message: "bad json".to_string(), source: None }.rpc_code(),
            INTERNAL_ERROR
        );
    }

    #[test]
    fn test_report_appends_suggestion() {
        let err = ScoutError::Registry {
            status: 404,
            body: "Not Found".to_string(),
        };
        assert_eq!(
            err.report(),
            "API error (404): Not Found\nhelp: Check the package name spelling or try npm_search"
        );

        let err = ScoutError::Registry {
            status: 500,
            body: "oops".to_string(),
        };
        assert_eq!(err.report(), "API error (500): oops");
    }

    #[test]
    fn test_invalid_request_classification() {
        assert!(ScoutError::invalid_argument("size", "out of range").is_invalid_request());
        assert!(!ScoutError::Config { field: "timeout".to_string(), reason: String::new() }.is_invalid_request());
        assert!(!ScoutError::Registry { status: 500, body: String::new() }.is_invalid_request());
    }

    #[test]
    fn test_network_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "deadline elapsed");
        let err = ScoutError::network("request failed".to_string(), io);
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("deadline elapsed"));
        assert!(matches!(err, ScoutError::Network { .. }));
    }
}
