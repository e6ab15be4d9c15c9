//! HTTP client types for Lightspeed API communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`LightspeedClient`]: The account-scoped client with retrying request entry points
//! - [`HttpClient`]: The async transport that performs a single exchange
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`Envelope`]: A parsed JSON response
//! - [`XmlResponse`]: A raw response from an XML request
//! - [`Action`]: The resource endpoints and their URL fragments
//! - [`RetryBudget`]: Per-call retry accounting
//!
//! # Example
//!
//! ```rust,ignore
//! use lightspeed_api::clients::{Action, QueryParams};
//!
//! let mut params = QueryParams::new();
//! params.insert("offset".to_string(), "0".to_string());
//!
//! let envelope = client.request(Action::Vendor, None, params).await?;
//! ```

mod action;
mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;
mod retry;

pub use action::{resolve_fragment, Action, UnknownActionError, ROOT_FRAGMENT};
pub use errors::{ApiError, InvalidRequestError, RequestError, UnavailableError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder, QueryParams, RequestBody};
pub use http_response::{Envelope, RemoteError, XmlResponse};
pub use retry::RetryBudget;

pub use rest::LightspeedClient;
