//! Reference data: manufacturers, vendors, departments and price levels.

use crate::clients::{Action, ApiError, Envelope, LightspeedClient, QueryParams};
use crate::resources::query;

impl LightspeedClient {
    /// Lists manufacturers starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn manufacturers(&self, offset: u32) -> Result<Option<Envelope>, ApiError> {
        self.paged(Action::Manufacturer, offset, "Manufacturer").await
    }

    /// Lists vendors starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_vendors(&self, offset: u32) -> Result<Option<Envelope>, ApiError> {
        self.paged(Action::Vendor, offset, "Vendor").await
    }

    /// Lists departments starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn departments(&self, offset: u32) -> Result<Option<Envelope>, ApiError> {
        self.paged(Action::Department, offset, "Department").await
    }

    /// Lists price levels.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn price_levels(&self) -> Result<Option<Envelope>, ApiError> {
        Ok(self
            .request(Action::PriceLevel, None, QueryParams::new())
            .await?
            .expect_key("PriceLevel"))
    }

    async fn paged(
        &self,
        action: Action,
        offset: u32,
        key: &str,
    ) -> Result<Option<Envelope>, ApiError> {
        Ok(self
            .request(action, None, query([("offset", offset.to_string())]))
            .await?
            .expect_key(key))
    }
}
