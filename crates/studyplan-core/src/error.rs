//! Core error types for studyplan-core.
//!
//! This module defines the error hierarchy using thiserror: one enum per
//! concern, aggregated by [`CoreError`] for callers that handle the library
//! as a whole.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studyplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Allocation input violations
    #[error("Allocation error: {0}")]
    Allocation(#[from] AllocationError),

    /// Suggestion flow failures
    #[error("Suggestion error: {0}")]
    Suggestion(#[from] SuggestionError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Storage seam errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Allocation input violations.
///
/// These are deterministic functions of the input, so retrying without
/// changing the input is pointless; callers should prompt for corrected
/// values instead. Allocation is all-or-nothing: no partial plan is
/// returned alongside one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AllocationError {
    /// No subjects to split the time budget across.
    #[error("Cannot allocate study time for an empty subject list")]
    EmptyInput,

    /// A numeric input fell outside its allowed range.
    #[error("Invalid value for '{field}': {value} (allowed range: {min} to {max})")]
    InvalidRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Failures in the suggestion flow.
///
/// Unparseable model output is NOT represented here -- it resolves to the
/// fallback interpretation instead. Only failures to obtain a response at
/// all are errors, and they must stay visible to the caller rather than
/// being absorbed into a fallback suggestion.
#[derive(Error, Debug)]
pub enum SuggestionError {
    /// Network, timeout, HTTP, or response-envelope failure reaching the
    /// completion backend.
    #[error("Completion service unavailable: {message}")]
    UpstreamUnavailable {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },
}

impl SuggestionError {
    /// Wrap a reqwest transport failure.
    pub(crate) fn from_transport(source: reqwest::Error) -> Self {
        let message = if source.is_timeout() {
            "completion request timed out".to_string()
        } else {
            format!("completion request failed: {source}")
        };
        Self::UpstreamUnavailable {
            message,
            source: Some(source),
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Missing required configuration key (e.g. an unset API key variable)
    #[error("Missing required configuration key: {0}")]
    MissingKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Errors surfaced by store implementations behind the persistence seams.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Backend-specific failure
    #[error("Storage backend error: {0}")]
    Backend(String),

    /// IO failure
    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Record (de)serialization failure
    #[error("Storage serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
