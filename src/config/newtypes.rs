//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around credential and URL values that
//! validate their contents on construction. Invalid values are rejected with clear
//! error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use url::Url;

/// The default Lightspeed Retail API root.
pub const DEFAULT_API_URL: &str = "https://api.merchantos.com/API/";

/// A validated Lightspeed bearer access token.
///
/// The token is opaque to this crate. It must be non-empty, and its value is
/// masked in debug output to keep it out of logs.
///
/// # Example
///
/// ```rust
/// use lightspeed_api::AccessToken;
///
/// let token = AccessToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty or blank.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }

    /// Returns the `Authorization` header value for this token.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated API root URL.
///
/// Only `http` and `https` URLs are accepted. The path is normalized to end with
/// a `/` so relative fragments such as `Account.json` resolve beneath it.
///
/// # Example
///
/// ```rust
/// use lightspeed_api::ApiUrl;
///
/// let url = ApiUrl::new("http://localhost:8080/API").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:8080/API/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Creates a new validated API URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiUrl`] if the URL cannot be parsed, has a
    /// scheme other than `http`/`https`, or cannot carry a path.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let invalid = || ConfigError::InvalidApiUrl { url: raw.clone() };

        let mut parsed = Url::parse(raw.trim()).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
            return Err(invalid());
        }

        if !parsed.path().ends_with('/') {
            let path = format!("{}/", parsed.path());
            parsed.set_path(&path);
        }
        parsed.set_query(None);
        parsed.set_fragment(None);

        Ok(Self(parsed))
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the account-discovery endpoint beneath this root.
    ///
    /// # Errors
    ///
    /// Returns [`url::ParseError`] if the join fails.
    pub fn account_url(&self) -> Result<Url, url::ParseError> {
        self.0.join("Account.json")
    }

    /// Returns the per-account base URL (`{root}Account/{id}/`).
    ///
    /// # Errors
    ///
    /// Returns [`url::ParseError`] if the join fails.
    pub fn account_base(&self, account: &AccountId) -> Result<Url, url::ParseError> {
        self.0.join(&format!("Account/{}/", account.as_ref()))
    }
}

impl Default for ApiUrl {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_API_URL).expect("default API URL is valid"))
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// A Lightspeed account identifier.
///
/// The account-discovery endpoint reports `accountID` either as a string or as a
/// number; both deserialize into this type.
///
/// # Example
///
/// ```rust
/// use lightspeed_api::AccountId;
///
/// let id: AccountId = serde_json::from_str("12345").unwrap();
/// assert_eq!(id.as_ref(), "12345");
///
/// let id: AccountId = serde_json::from_str(r#""67890""#).unwrap();
/// assert_eq!(id.as_ref(), "67890");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AccountId(String);

impl AccountId {
    /// Creates a new validated account identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidAccountId`] if the id is empty or contains
    /// characters that would change the URL path (`/`, `?`, `#`).
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into().trim().to_string();
        if id.is_empty() || id.contains(['/', '?', '#']) {
            return Err(ConfigError::InvalidAccountId { id });
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for AccountId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        let id = match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text,
            Raw::Number(number) => number.to_string(),
        };
        Self::new(id).map_err(de::Error::custom)
    }
}
