//! Category listings.

use crate::clients::{Action, ApiError, Envelope, LightspeedClient, QueryParams};
use crate::resources::query;

impl LightspeedClient {
    /// Lists every category.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn categories(&self) -> Result<Option<Envelope>, ApiError> {
        Ok(self
            .request(Action::Category, None, QueryParams::new())
            .await?
            .expect_key("Category"))
    }

    /// Lists categories at node depth 1.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn leaf_categories(&self) -> Result<Option<Envelope>, ApiError> {
        Ok(self
            .request(Action::Category, None, query([("nodeDepth", "1".to_string())]))
            .await?
            .expect_key("Category"))
    }
}
