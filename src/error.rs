//! Configuration error types for the Lightspeed API client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! credentials or URLs are rejected before any request is sent.
//!
//! # Example
//!
//! ```rust
//! use lightspeed_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while building client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Lightspeed bearer token.")]
    EmptyAccessToken,

    /// API URL is invalid.
    #[error("Invalid API URL '{url}'. Please provide an http(s) URL (e.g., 'https://api.merchantos.com/API/').")]
    InvalidApiUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Account identifier is invalid.
    #[error("Invalid account id '{id}'. Expected a non-empty identifier without path separators.")]
    InvalidAccountId {
        /// The invalid identifier that was provided.
        id: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClient {
        /// Why construction failed.
        reason: String,
    },
}
