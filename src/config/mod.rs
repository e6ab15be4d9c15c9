//! Configuration types for the Lightspeed API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`LightspeedConfig`]: The configuration struct holding all client settings
//! - [`LightspeedConfigBuilder`]: A builder for constructing [`LightspeedConfig`] instances
//! - [`AccessToken`]: A validated bearer token with masked debug output
//! - [`ApiUrl`]: A validated API root URL
//! - [`AccountId`]: A Lightspeed account identifier
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use lightspeed_api::{AccessToken, LightspeedConfig};
//!
//! let config = LightspeedConfig::builder()
//!     .access_token(AccessToken::new("my-token").unwrap())
//!     .max_retries(3)
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_retries(), 3);
//! ```

mod newtypes;

pub use newtypes::{AccessToken, AccountId, ApiUrl, DEFAULT_API_URL};

use std::time::Duration;

use tracing::Dispatch;

use crate::error::ConfigError;

/// Default number of retries after the first attempt fails with a transport error.
pub const DEFAULT_MAX_RETRIES: u32 = 5;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Lightspeed API client.
///
/// `LightspeedConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Logging
///
/// The client emits [`tracing`] events and never installs a global subscriber.
/// Pass a [`Dispatch`] through [`LightspeedConfigBuilder::log_dispatch`] to route
/// the client's events to a specific subscriber; otherwise they go to whatever
/// subscriber is current for the calling task.
#[derive(Clone, Debug)]
pub struct LightspeedConfig {
    access_token: AccessToken,
    api_url: ApiUrl,
    max_retries: u32,
    retry_delay: Duration,
    timeout: Duration,
    user_agent_prefix: Option<String>,
    log_dispatch: Option<Dispatch>,
}

impl LightspeedConfig {
    /// Creates a new builder for constructing a `LightspeedConfig`.
    #[must_use]
    pub fn builder() -> LightspeedConfigBuilder {
        LightspeedConfigBuilder::new()
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the API root URL.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns how many times a failed request is re-issued.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the fixed delay between retries.
    #[must_use]
    pub const fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the injected tracing dispatcher, if configured.
    #[must_use]
    pub const fn log_dispatch(&self) -> Option<&Dispatch> {
        self.log_dispatch.as_ref()
    }
}

// Verify LightspeedConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LightspeedConfig>();
};

/// Builder for constructing [`LightspeedConfig`] instances.
///
/// # Defaults
///
/// - `api_url`: [`DEFAULT_API_URL`]
/// - `max_retries`: [`DEFAULT_MAX_RETRIES`]
/// - `retry_delay`: zero (retries are issued immediately)
/// - `timeout`: [`DEFAULT_TIMEOUT`]
/// - `user_agent_prefix`: `None`
/// - `log_dispatch`: `None`
#[derive(Debug, Default)]
pub struct LightspeedConfigBuilder {
    access_token: Option<AccessToken>,
    api_url: Option<ApiUrl>,
    max_retries: Option<u32>,
    retry_delay: Option<Duration>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
    log_dispatch: Option<Dispatch>,
}

impl LightspeedConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the API root URL.
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets how many times a request failing with a transport error is re-issued.
    #[must_use]
    pub const fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Sets a fixed delay between retries.
    #[must_use]
    pub const fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = Some(delay);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Routes the client's tracing events to `dispatch`.
    #[must_use]
    pub fn log_dispatch(mut self, dispatch: Dispatch) -> Self {
        self.log_dispatch = Some(dispatch);
        self
    }

    /// Builds the [`LightspeedConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `access_token` is not set.
    pub fn build(self) -> Result<LightspeedConfig, ConfigError> {
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(LightspeedConfig {
            access_token,
            api_url: self.api_url.unwrap_or_default(),
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            retry_delay: self.retry_delay.unwrap_or(Duration::ZERO),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
            log_dispatch: self.log_dispatch,
        })
    }
}
