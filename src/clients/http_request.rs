//! HTTP request types for the Lightspeed API client.
//!
//! This module provides the [`HttpRequest`] type and its builder. A request
//! names an action (resolved to a URL fragment by [`resolve_fragment`]), an
//! optional URL override, the query parameters exactly as the caller supplied
//! them, and an optional body.
//!
//! [`resolve_fragment`]: crate::clients::resolve_fragment

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidRequestError;

/// Query parameters sent with a request, passed through verbatim.
pub type QueryParams = HashMap<String, String>;

/// HTTP methods used by the Lightspeed API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
        }
    }
}

/// A request body.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// A JSON document (`application/json`).
    Json(serde_json::Value),
    /// A raw XML document (`application/xml`).
    Xml(String),
}

impl RequestBody {
    /// Returns the MIME type string for this body.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json(_) => "application/json",
            Self::Xml(_) => "application/xml",
        }
    }
}

/// An HTTP request to be sent to the Lightspeed API.
///
/// # Example
///
/// ```rust
/// use lightspeed_api::clients::{Action, HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, Action::Item)
///     .query_param("offset", "0")
///     .build()
///     .unwrap();
///
/// let put_request = HttpRequest::builder(HttpMethod::Put, Action::Customer)
///     .url("Customer/42.json")
///     .json(json!({"firstName": "Ada"}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The action name used to look up the URL fragment.
    pub action: String,
    /// A URL (absolute, or relative to the account base URL) that replaces the
    /// action's fragment.
    pub url: Option<String>,
    /// Query parameters to append to the URL.
    pub query: QueryParams,
    /// The request body, if any.
    pub body: Option<RequestBody>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, action: impl AsRef<str>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, action)
    }

    /// Returns whether a transport failure on this request may be retried.
    ///
    /// Only GET and JSON POST requests are re-issued.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self.http_method {
            HttpMethod::Get => true,
            HttpMethod::Post => matches!(self.body, Some(RequestBody::Json(_))),
            HttpMethod::Put => false,
        }
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError`] if:
    /// - `http_method` is `Post` or `Put` but `body` is `None`
    /// - `http_method` is `Get` and `body` is `Some`
    /// - an XML body is attached to anything but `Post`
    pub fn verify(&self) -> Result<(), InvalidRequestError> {
        let method = self.http_method.to_string();
        match (self.http_method, &self.body) {
            (HttpMethod::Post | HttpMethod::Put, None) => {
                Err(InvalidRequestError::MissingBody { method })
            }
            (HttpMethod::Get, Some(_)) => Err(InvalidRequestError::UnexpectedBody { method }),
            (HttpMethod::Put, Some(RequestBody::Xml(_))) => {
                Err(InvalidRequestError::XmlNotSupported { method })
            }
            _ => Ok(()),
        }
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    action: String,
    url: Option<String>,
    query: QueryParams,
    body: Option<RequestBody>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, action: impl AsRef<str>) -> Self {
        Self {
            http_method: method,
            action: action.as_ref().to_string(),
            url: None,
            query: QueryParams::new(),
            body: None,
        }
    }

    /// Overrides the action's URL fragment.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the override only when `url` is `Some`.
    #[must_use]
    pub fn maybe_url(mut self, url: Option<&str>) -> Self {
        self.url = url.map(String::from);
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Sets a JSON body.
    #[must_use]
    pub fn json(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(RequestBody::Json(body.into()));
        self
    }

    /// Sets a raw XML body.
    #[must_use]
    pub fn xml(mut self, body: impl Into<String>) -> Self {
        self.body = Some(RequestBody::Xml(body.into()));
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            action: self.action,
            url: self.url,
            query: self.query,
            body: self.body,
        };
        request.verify()?;
        Ok(request)
    }
}
