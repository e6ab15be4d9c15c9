//! # Lightspeed Retail API Rust Client
//!
//! An async Rust client for the Lightspeed Retail (formerly MerchantOS) REST
//! API, providing type-safe configuration, account discovery, a retrying
//! transport and named operations over the store's resources.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`LightspeedConfig`] and [`LightspeedConfigBuilder`]
//! - Validated newtypes for the access token, API URL and account id
//! - An account-scoped [`LightspeedClient`] with generic `request`,
//!   `post_request`, `put_request` and `post_request_xml` entry points
//! - Automatic retry of GET and JSON POST requests on transport failure
//! - Domain operations for categories, items, customers, sales, vendors,
//!   manufacturers, departments and price levels via [`resources`]
//! - Filter-syntax helpers in [`resources::filters`]
//!
//! ## Quick Start
//!
//! ```rust
//! use lightspeed_api::{AccessToken, LightspeedConfig};
//!
//! let config = LightspeedConfig::builder()
//!     .access_token(AccessToken::new("your-access-token").unwrap())
//!     .max_retries(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_retries(), 3);
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use lightspeed_api::{LightspeedClient, LightspeedConfig, AccessToken};
//! use lightspeed_api::resources::{ProductSearchParams, SaleListParams};
//!
//! let config = LightspeedConfig::builder()
//!     .access_token(AccessToken::new("your-access-token")?)
//!     .build()?;
//!
//! // Discovers the account id and scopes every request to it
//! let client = LightspeedClient::connect(&config).await?;
//!
//! let found = client
//!     .search_products("sneaker", &ProductSearchParams::default())
//!     .await?;
//!
//! let sales = client.get_sales(42, &SaleListParams::default()).await?;
//! ```
//!
//! ## Error Handling
//!
//! Every fallible operation returns [`ApiError`]:
//!
//! - [`ApiError::Request`] covers unparseable or empty responses, transport
//!   failures on PUT and XML requests
//!   ([`RequestError::Transport`]), and invalid requests
//! - [`ApiError::Config`] covers construction failures
//!
//! No public operation returns [`ApiError::Unavailable`]. GET and JSON POST
//! requests retry transport failures and return an empty envelope once every
//! attempt has failed; PUT and XML requests report them as
//! [`RequestError::Transport`].
//!
//! Errors reported by the service inside a response envelope are logged and
//! returned as-is; see [`Envelope::remote_error`].
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber.
//! Supply [`LightspeedConfigBuilder::log_dispatch`] to route a client's
//! events to a specific dispatcher.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: The client holds no mutable state and is `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, AccountId, ApiUrl, LightspeedConfig, LightspeedConfigBuilder};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    Action, ApiError, Envelope, HttpClient, HttpMethod, HttpRequest, HttpRequestBuilder,
    InvalidRequestError, LightspeedClient, QueryParams, RemoteError, RequestError,
    UnavailableError, XmlResponse,
};
