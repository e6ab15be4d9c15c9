//! Account-scoped client for the Lightspeed Retail REST API.
//!
//! This module provides [`LightspeedClient`], which discovers the account on
//! construction and exposes the generic request entry points (`request`,
//! `post_request`, `put_request`, `post_request_xml`) that the resource
//! methods in [`crate::resources`] build on.

use std::future::Future;
use std::time::Duration;

use serde_json::Value;
use tracing::instrument::WithSubscriber;
use tracing::Dispatch;
use url::Url;

use crate::clients::{
    ApiError, Envelope, HttpClient, HttpMethod, HttpRequest, QueryParams, RequestError,
    RetryBudget, XmlResponse,
};
use crate::config::{AccountId, LightspeedConfig};

/// Action name used for account discovery, which has no mapped fragment.
const ACCOUNT_ACTION: &str = "account";

/// Client for one Lightspeed account.
///
/// Holds no mutable state: retry counts are scoped to each call, so a single
/// client can be shared across tasks.
///
/// # Example
///
/// ```rust,ignore
/// use lightspeed_api::{AccessToken, LightspeedClient, LightspeedConfig};
///
/// let config = LightspeedConfig::builder()
///     .access_token(AccessToken::new("token")?)
///     .build()?;
///
/// let client = LightspeedClient::connect(&config).await?;
/// println!("account {}", client.account_id());
///
/// if let Some(categories) = client.categories().await? {
///     println!("{:?}", categories.get("Category"));
/// }
/// ```
#[derive(Debug)]
pub struct LightspeedClient {
    executor: Executor,
    account_id: AccountId,
    account_url: Url,
    log_dispatch: Option<Dispatch>,
}

// Verify LightspeedClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<LightspeedClient>();
};

impl LightspeedClient {
    /// Creates a client, discovering the account id from the access token.
    ///
    /// Performs one GET to `{api_url}Account.json` (retried like any other GET)
    /// and scopes every later request to `{api_url}Account/{accountID}/`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Config`] if the HTTP client cannot be created
    /// - [`RequestError::MissingAccount`] if the response has no `Account.accountID`
    /// - any error from the discovery request itself
    pub async fn connect(config: &LightspeedConfig) -> Result<Self, ApiError> {
        let discover = async {
            let http_client = HttpClient::new(config, config.api_url().as_url().clone())?;
            let executor = Executor::new(http_client, config);

            let account_url = account_url(config)?;
            let request = HttpRequest::builder(HttpMethod::Get, ACCOUNT_ACTION)
                .url(account_url.as_str())
                .build()?;
            let envelope = executor.json(request).await?;
            let account_id = account_id_from(&envelope).ok_or(RequestError::MissingAccount)?;

            tracing::debug!(account_id = %account_id, "Discovered Lightspeed account");
            Ok::<_, ApiError>((executor, account_id))
        };

        let (executor, account_id) = match config.log_dispatch() {
            Some(dispatch) => discover.with_subscriber(dispatch.clone()).await?,
            None => discover.await?,
        };

        Self::assemble(config, executor, account_id)
    }

    /// Creates a client for an already known account, skipping discovery.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the HTTP client cannot be created, or
    /// [`RequestError::InvalidUrl`] if the account base URL cannot be built.
    pub fn with_account(
        config: &LightspeedConfig,
        account_id: AccountId,
    ) -> Result<Self, ApiError> {
        let http_client = HttpClient::new(config, config.api_url().as_url().clone())?;
        Self::assemble(config, Executor::new(http_client, config), account_id)
    }

    fn assemble(
        config: &LightspeedConfig,
        mut executor: Executor,
        account_id: AccountId,
    ) -> Result<Self, ApiError> {
        let base_url = config
            .api_url()
            .account_base(&account_id)
            .map_err(|e| RequestError::InvalidUrl {
                url: format!("Account/{account_id}/"),
                message: e.to_string(),
            })?;
        executor.http_client = executor.http_client.with_base_url(base_url);

        Ok(Self {
            executor,
            account_id,
            account_url: account_url(config)?,
            log_dispatch: config.log_dispatch().cloned(),
        })
    }

    /// Returns the account this client is scoped to.
    #[must_use]
    pub const fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    /// Returns the account base URL that actions resolve against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        self.executor.http_client.base_url()
    }

    /// Returns the account-discovery URL.
    #[must_use]
    pub const fn account_url(&self) -> &Url {
        &self.account_url
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.executor.http_client
    }

    /// Sends a GET request for `action` (or the `url` override).
    ///
    /// Transport failures are retried up to the configured ceiling; once it
    /// is exhausted an empty envelope is returned rather than an error.
    /// Envelopes carrying a remote error are logged and returned.
    ///
    /// # Errors
    ///
    /// - [`RequestError::Parse`] if the body is not a JSON object
    /// - [`RequestError::NoData`] if the completed response is empty
    pub async fn request(
        &self,
        action: impl AsRef<str>,
        url: Option<&str>,
        params: QueryParams,
    ) -> Result<Envelope, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Get, action)
            .maybe_url(url)
            .query(params)
            .build()?;
        self.traced(self.executor.json(request)).await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// Retried exactly like [`request`](Self::request).
    ///
    /// # Errors
    ///
    /// Same as [`request`](Self::request).
    pub async fn post_request(
        &self,
        action: impl AsRef<str>,
        url: Option<&str>,
        body: Value,
        params: QueryParams,
    ) -> Result<Envelope, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Post, action)
            .maybe_url(url)
            .query(params)
            .json(body)
            .build()?;
        self.traced(self.executor.json(request)).await
    }

    /// Sends a PUT request with a JSON body. Never retried.
    ///
    /// # Errors
    ///
    /// - [`RequestError::Transport`] if the service cannot be reached
    /// - otherwise the same as [`request`](Self::request)
    pub async fn put_request(
        &self,
        action: impl AsRef<str>,
        url: Option<&str>,
        body: Value,
        params: QueryParams,
    ) -> Result<Envelope, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Put, action)
            .maybe_url(url)
            .query(params)
            .json(body)
            .build()?;
        self.traced(self.executor.json(request)).await
    }

    /// Posts a raw XML document and returns the raw response. Never retried.
    ///
    /// # Errors
    ///
    /// - [`RequestError::Transport`] if the service cannot be reached
    /// - [`RequestError::NoData`] if the response body is empty
    pub async fn post_request_xml(
        &self,
        action: impl AsRef<str>,
        url: Option<&str>,
        xml: impl Into<String>,
        params: QueryParams,
    ) -> Result<XmlResponse, ApiError> {
        let request = HttpRequest::builder(HttpMethod::Post, action)
            .maybe_url(url)
            .query(params)
            .xml(xml)
            .build()?;
        self.traced(self.executor.xml(request)).await
    }

    async fn traced<F: Future>(&self, future: F) -> F::Output {
        match &self.log_dispatch {
            Some(dispatch) => future.with_subscriber(dispatch.clone()).await,
            None => future.await,
        }
    }
}

/// Runs requests through the transport, applying the retry and
/// response-validation policy.
#[derive(Debug)]
struct Executor {
    http_client: HttpClient,
    max_retries: u32,
    retry_delay: Duration,
}

impl Executor {
    fn new(http_client: HttpClient, config: &LightspeedConfig) -> Self {
        Self {
            http_client,
            max_retries: config.max_retries(),
            retry_delay: config.retry_delay(),
        }
    }

    async fn json(&self, request: HttpRequest) -> Result<Envelope, ApiError> {
        let envelope = if request.is_retryable() {
            match self.send_with_retries(&request).await? {
                Some(envelope) => envelope,
                None => return Ok(Envelope::empty()),
            }
        } else {
            self.http_client
                .send_json(&request)
                .await
                .map_err(transport_failure)?
        };

        if envelope.is_empty() {
            return Err(RequestError::NoData.into());
        }

        if let Some(remote) = envelope.remote_error() {
            tracing::warn!(
                action = %request.action,
                url = ?request.url,
                params = ?request.query,
                error_class = ?remote.class,
                message = ?remote.message,
                error = ?remote.error,
                "Error response received"
            );
        }

        Ok(envelope)
    }

    async fn xml(&self, request: HttpRequest) -> Result<XmlResponse, ApiError> {
        let response = self
            .http_client
            .send_raw(&request)
            .await
            .map_err(transport_failure)?;

        if response.body.is_empty() {
            return Err(RequestError::NoData.into());
        }
        Ok(response)
    }

    /// Returns `Ok(None)` once the retry budget is exhausted.
    async fn send_with_retries(
        &self,
        request: &HttpRequest,
    ) -> Result<Option<Envelope>, ApiError> {
        let mut budget = RetryBudget::new(self.max_retries);
        loop {
            let error = match self.http_client.send_json(request).await {
                Err(ApiError::Unavailable(error)) => error,
                other => return other.map(Some),
            };

            if !budget.try_retry() {
                tracing::warn!(
                    action = %request.action,
                    url = %error.url,
                    attempts = budget.attempts(),
                    params = ?request.query,
                    error = %error.message,
                    "Request aborting, max retries completed"
                );
                return Ok(None);
            }

            tracing::warn!(
                action = %request.action,
                url = %error.url,
                retry = budget.retries(),
                params = ?request.query,
                error = %error.message,
                "Error found in request, retrying"
            );

            if !self.retry_delay.is_zero() {
                tokio::time::sleep(self.retry_delay).await;
            }
        }
    }
}

fn account_url(config: &LightspeedConfig) -> Result<Url, RequestError> {
    config
        .api_url()
        .account_url()
        .map_err(|e| RequestError::InvalidUrl {
            url: "Account.json".to_string(),
            message: e.to_string(),
        })
}

/// Surfaces transport failures on non-retried paths as request errors.
fn transport_failure(error: ApiError) -> ApiError {
    match error {
        ApiError::Unavailable(unavailable) => RequestError::Transport(unavailable).into(),
        other => other,
    }
}

/// Reads `Account.accountID`, taking the first account when several are listed.
fn account_id_from(envelope: &Envelope) -> Option<AccountId> {
    let account = match envelope.get("Account")? {
        Value::Array(accounts) => accounts.first()?,
        account => account,
    };
    serde_json::from_value(account.get("accountID")?.clone()).ok()
}
