//! Error types for seqlink.
//!
//! Link resolution and line rendering never fail: malformed identifiers are
//! absorbed into [`crate::core::LinkResult::NoLink`]. The errors here cover the
//! surrounding surface only, namely configuration loading and checked
//! coordinate construction.

use std::collections::HashMap;
use thiserror::Error;

/// The main error type for seqlink operations.
#[derive(Debug, Error)]
pub enum SeqlinkError {
    /// The link configuration was rejected.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// A coordinate pair violated the 1-based `start <= end` contract.
    #[error("{0}")]
    InvalidCoordinates(#[from] InvalidCoordinatesError),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for SeqlinkError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Errors raised by [`crate::config::LinkConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A base URL does not use an HTTP scheme.
    #[error("Invalid base URL for '{field}': {value}")]
    InvalidBaseUrl {
        /// The offending configuration field.
        field: String,
        /// The rejected value.
        value: String,
    },

    /// The coordinate window padding is zero.
    #[error("Window padding must be positive")]
    ZeroPadding,
}

impl ConfigError {
    /// Creates an invalid base URL error.
    #[must_use]
    pub fn invalid_base_url(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidBaseUrl {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();

        match self {
            Self::InvalidBaseUrl { field, value } => {
                map.insert("type".to_string(), serde_json::json!("InvalidBaseUrl"));
                map.insert("field".to_string(), serde_json::json!(field));
                map.insert("value".to_string(), serde_json::json!(value));
            }
            Self::ZeroPadding => {
                map.insert("type".to_string(), serde_json::json!("ZeroPadding"));
            }
        }

        map.insert("message".to_string(), serde_json::json!(self.to_string()));
        map
    }
}

/// Error raised when hit coordinates are not a valid 1-based span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid hit coordinates: start={start}, end={end}")]
pub struct InvalidCoordinatesError {
    /// The rejected start.
    pub start: u64,
    /// The rejected end.
    pub end: u64,
}

impl InvalidCoordinatesError {
    /// Creates a new invalid coordinates error.
    #[must_use]
    pub const fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_to_dict() {
        let err = ConfigError::invalid_base_url("locus_browser_base_url", "ftp://x");
        let dict = err.to_dict();

        assert_eq!(dict.get("type").unwrap(), "InvalidBaseUrl");
        assert_eq!(dict.get("field").unwrap(), "locus_browser_base_url");
        assert_eq!(dict.get("value").unwrap(), "ftp://x");
    }

    #[test]
    fn test_invalid_coordinates_message() {
        let err = InvalidCoordinatesError::new(20, 10);
        assert_eq!(err.to_string(), "Invalid hit coordinates: start=20, end=10");
    }

    #[test]
    fn test_seqlink_error_from_config() {
        let err: SeqlinkError = ConfigError::ZeroPadding.into();
        assert!(matches!(err, SeqlinkError::Config(ConfigError::ZeroPadding)));
        assert_eq!(err.to_string(), "Window padding must be positive");
    }

    #[test]
    fn test_seqlink_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SeqlinkError = json_err.into();
        assert!(err.to_string().starts_with("Serialization error:"));
    }
}
