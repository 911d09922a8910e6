//! Error types for the okta-swa CLI

use thiserror::Error;

/// Result type alias for okta-swa operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Okta API transport errors.
///
/// HTTP status codes are never errors here: a rejected creation is a
/// `CreateOutcome`, not an `ApiError`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Could not build request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to Okta".to_string())
        } else if err.is_builder() {
            ApiError::InvalidRequest(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Environment variable OKTA_AUTH_TOKEN needs to be set.\nPlease contact the IT team at ithelp@signifyd.com"
    )]
    MissingToken,

    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Credential CSV errors
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Column '{column}' not found (available: {available})")]
    MissingColumn { column: String, available: String },

    #[error("Cannot read {path}: {source}")]
    Open { path: String, source: csv::Error },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
