//! Request error types for the Lightspeed API client.
//!
//! # Error Handling
//!
//! - [`UnavailableError`]: The service could not be reached (connection refused,
//!   timeout, malformed HTTP). Retried on GET and POST-JSON requests.
//! - [`RequestError`]: The exchange completed (or was abandoned on a path that does
//!   not retry) but produced nothing usable.
//! - [`InvalidRequestError`]: A request failed validation before it was sent.
//! - [`ApiError`]: Unified error type returned by every client operation.
//!
//! Errors reported by the remote service inside a parsed envelope (`errorClass`,
//! `error`, `errors`) are not Rust errors; see
//! [`Envelope::remote_error`](crate::clients::Envelope::remote_error).
//!
//! # Example
//!
//! ```rust,ignore
//! use lightspeed_api::{ApiError, RequestError};
//!
//! match client.categories().await {
//!     Ok(Some(envelope)) => println!("{:?}", envelope.get("Category")),
//!     Ok(None) => println!("no categories"),
//!     Err(ApiError::Request(RequestError::Transport(e))) => {
//!         println!("cannot reach {}: {}", e.url, e.message)
//!     }
//!     Err(ApiError::Request(RequestError::NoData)) => println!("empty response"),
//!     Err(other) => println!("{other}"),
//! }
//! ```

use thiserror::Error;

use crate::error::ConfigError;

/// Error returned when the API cannot be reached.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("API is unavailable at {url}: {message}")]
pub struct UnavailableError {
    /// The URL the request targeted.
    pub url: String,
    /// The underlying transport message.
    pub message: String,
}

impl UnavailableError {
    pub(crate) fn from_reqwest(url: &str, error: &reqwest::Error) -> Self {
        Self {
            url: url.to_string(),
            message: error.to_string(),
        }
    }
}

/// Error returned when a request fails validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A body was attached to a GET request.
    #[error("Cannot send a body with {method}.")]
    UnexpectedBody {
        /// The HTTP method that does not take a body.
        method: String,
    },

    /// An XML body was attached to a method other than POST.
    #[error("XML bodies are only supported with post, not {method}.")]
    XmlNotSupported {
        /// The HTTP method the XML body was attached to.
        method: String,
    },
}

/// Error returned when a request produced no usable response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The response body could not be parsed as a JSON object.
    #[error("Could not parse response: {message}")]
    Parse {
        /// The parser's message.
        message: String,
    },

    /// The response parsed but contained no data.
    #[error("Response contains no data")]
    NoData,

    /// The transport failed on a path that does not retry (PUT, XML POST).
    #[error("Request was not completed: {0}")]
    Transport(UnavailableError),

    /// The account-discovery response carried no account identifier.
    #[error("Account response contains no accountID")]
    MissingAccount,

    /// The request URL could not be resolved against the base URL.
    #[error("Invalid request URL '{url}': {message}")]
    InvalidUrl {
        /// The fragment or override that failed to resolve.
        url: String,
        /// The URL parser's message.
        message: String,
    },

    /// The request failed validation.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequestError),
}

/// Unified error type for all client operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API could not be reached.
    ///
    /// Produced by the transport layer; [`LightspeedClient`](crate::clients::LightspeedClient)
    /// retries it or converts it to [`RequestError::Transport`].
    #[error(transparent)]
    Unavailable(#[from] UnavailableError),

    /// The request produced no usable response.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// The client configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<InvalidRequestError> for ApiError {
    fn from(error: InvalidRequestError) -> Self {
        Self::Request(RequestError::InvalidRequest(error))
    }
}
