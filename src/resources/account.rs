//! Account record for the access token.

use crate::clients::{ApiError, Envelope, LightspeedClient, QueryParams};

impl LightspeedClient {
    /// Fetches the account record for the access token.
    ///
    /// Sent to `{api_url}Account.json` rather than the account base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_account(&self) -> Result<Option<Envelope>, ApiError> {
        Ok(self
            .request("account", Some(self.account_url().as_str()), QueryParams::new())
            .await?
            .expect_key("Account"))
    }
}
