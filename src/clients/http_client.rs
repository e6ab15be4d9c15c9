//! HTTP transport for Lightspeed API communication.
//!
//! This module provides the [`HttpClient`] type, which resolves request URLs,
//! attaches authentication headers, performs a single HTTP exchange and
//! classifies its outcome. Retrying is left to the caller.

use std::collections::HashMap;

use url::Url;

use crate::clients::action::resolve_fragment;
use crate::clients::errors::{ApiError, RequestError, UnavailableError};
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestBody};
use crate::clients::http_response::{Envelope, XmlResponse};
use crate::config::LightspeedConfig;
use crate::error::ConfigError;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Lightspeed API.
///
/// The client handles:
/// - URL resolution against a base URL
/// - Default headers including User-Agent and the bearer token
/// - Failure classification ([`UnavailableError`] vs [`RequestError`])
/// - Debug tracing of every response body
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL that action fragments and relative overrides resolve against.
    base_url: Url,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `config` - Supplies the access token, timeout and `user_agent_prefix`
    /// * `base_url` - The URL action fragments resolve against
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the underlying reqwest client
    /// cannot be created (e.g., TLS initialization failure).
    pub fn new(config: &LightspeedConfig, base_url: Url) -> Result<Self, ConfigError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Lightspeed API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "Authorization".to_string(),
            config.access_token().bearer(),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ConfigError::HttpClient {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url,
            default_headers,
        })
    }

    /// Returns a client that resolves against `base_url`, keeping the
    /// connection pool and headers.
    #[must_use]
    pub fn with_base_url(self, base_url: Url) -> Self {
        Self { base_url, ..self }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Resolves the final request URL.
    ///
    /// The override, when present, wins over the action's fragment. Either is
    /// joined against the base URL, so an absolute override replaces it.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::InvalidUrl`] if the join fails.
    pub fn resolve_url(&self, action: &str, url: Option<&str>) -> Result<Url, RequestError> {
        let target = url.unwrap_or_else(|| resolve_fragment(action));
        self.base_url
            .join(target)
            .map_err(|e| RequestError::InvalidUrl {
                url: target.to_string(),
                message: e.to_string(),
            })
    }

    /// Sends a request and parses the response body as a JSON envelope.
    ///
    /// The HTTP status is not inspected; the API reports failures inside the
    /// envelope.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Unavailable`] if the exchange fails at the transport level
    /// - [`RequestError::Parse`] if the body is not a JSON object
    /// - [`RequestError::InvalidRequest`] / [`RequestError::InvalidUrl`] if the
    ///   request cannot be built
    pub async fn send_json(&self, request: &HttpRequest) -> Result<Envelope, ApiError> {
        let (_, body) = self.exchange(request).await?;
        Ok(Envelope::from_slice(&body)?)
    }

    /// Sends a request and returns the raw response body and status.
    ///
    /// # Errors
    ///
    /// Same transport and validation errors as [`send_json`](Self::send_json);
    /// the body is never parsed.
    pub async fn send_raw(&self, request: &HttpRequest) -> Result<XmlResponse, ApiError> {
        let (status, body) = self.exchange(request).await?;
        Ok(XmlResponse { body, status })
    }

    async fn exchange(&self, request: &HttpRequest) -> Result<(u16, Vec<u8>), ApiError> {
        request.verify()?;
        let url = self.resolve_url(&request.action, request.url.as_deref())?;

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(url.clone()),
            HttpMethod::Post => self.client.post(url.clone()),
            HttpMethod::Put => self.client.put(url.clone()),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.header("Content-Type", body.content_type());
            req_builder = match body {
                RequestBody::Json(value) => req_builder.body(value.to_string()),
                RequestBody::Xml(xml) => req_builder.body(xml.clone()),
            };
        }

        let res = req_builder
            .send()
            .await
            .map_err(|e| UnavailableError::from_reqwest(url.as_str(), &e))?;
        let status = res.status().as_u16();
        let body = res
            .bytes()
            .await
            .map_err(|e| UnavailableError::from_reqwest(url.as_str(), &e))?
            .to_vec();

        tracing::debug!(
            method = %request.http_method,
            url = %url,
            status,
            body = %String::from_utf8_lossy(&body),
            "Lightspeed API response"
        );

        Ok((status, body))
    }
}
