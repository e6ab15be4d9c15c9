//! Response types for the Lightspeed API client.
//!
//! JSON responses are wrapped in an [`Envelope`]: the top-level object the API
//! returns, keyed by resource name (`"Item"`, `"Customer"`, ...) or carrying an
//! error indicator. XML flows bypass JSON entirely and return an
//! [`XmlResponse`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::errors::RequestError;

/// The top-level JSON object returned by the Lightspeed API.
///
/// # Example
///
/// ```rust
/// use lightspeed_api::clients::Envelope;
/// use serde_json::json;
///
/// let envelope = Envelope::from_value(json!({"Item": [{"itemID": "1"}]})).unwrap();
/// assert!(envelope.contains("Item"));
/// assert!(envelope.remote_error().is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Envelope(Map<String, Value>);

impl Envelope {
    /// Creates an empty envelope.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wraps a parsed JSON value.
    ///
    /// `null` becomes an empty envelope.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Parse`] if the value is neither an object nor `null`.
    pub fn from_value(value: Value) -> Result<Self, RequestError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::empty()),
            other => Err(RequestError::Parse {
                message: format!("expected a JSON object, found {}", json_kind(&other)),
            }),
        }
    }

    /// Parses a raw response body.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Parse`] if the body is not a JSON object.
    pub fn from_slice(body: &[u8]) -> Result<Self, RequestError> {
        let value: Value = serde_json::from_slice(body).map_err(|e| RequestError::Parse {
            message: e.to_string(),
        })?;
        Self::from_value(value)
    }

    /// Returns `true` if the envelope has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the envelope has a top-level `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the value under a top-level `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the error reported by the remote service, if any.
    ///
    /// Detects `errorClass`, `error` and `errors` keys.
    #[must_use]
    pub fn remote_error(&self) -> Option<RemoteError> {
        let class = self.string_field("errorClass");
        let error = self
            .0
            .get("error")
            .or_else(|| self.0.get("errors"))
            .filter(|value| !value.is_null())
            .cloned();

        if class.is_none() && error.is_none() {
            return None;
        }

        Some(RemoteError {
            class,
            message: self.string_field("message"),
            error,
        })
    }

    /// Keeps the envelope only if it carries `key`.
    #[must_use]
    pub fn expect_key(self, key: &str) -> Option<Self> {
        self.contains(key).then_some(self)
    }

    /// Returns the underlying JSON object.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consumes the envelope, returning the underlying JSON object.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }

    fn string_field(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(text) if !text.is_empty() => Some(text.clone()),
            Value::Null | Value::String(_) => None,
            other => Some(other.to_string()),
        }
    }
}

/// An error reported by the remote service inside an otherwise valid envelope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteError {
    /// The `errorClass` value.
    pub class: Option<String>,
    /// The `message` value.
    pub message: Option<String>,
    /// The `error` or `errors` value.
    pub error: Option<Value>,
}

/// A raw response from an XML request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlResponse {
    /// The response body bytes, never empty.
    pub body: Vec<u8>,
    /// The HTTP status code.
    pub status: u16,
}

impl XmlResponse {
    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status >= 200 && self.status <= 299
    }

    /// Returns the body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
