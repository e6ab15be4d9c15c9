//! Customer lookup, creation and update.

use serde_json::Value;

use crate::clients::{Action, ApiError, Envelope, LightspeedClient, QueryParams};
use crate::resources::filters::relations;
use crate::resources::query;

const CUSTOMER_KEY: &str = "Customer";

impl LightspeedClient {
    /// Finds customers by contact email, with their contact details loaded.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_customers(&self, email: &str) -> Result<Option<Envelope>, ApiError> {
        Ok(self
            .request(Action::Customer, None, email_query(email))
            .await?
            .expect_key(CUSTOMER_KEY))
    }

    /// Fetches one customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_customer_using_id(
        &self,
        customer_id: u64,
    ) -> Result<Option<Envelope>, ApiError> {
        let params = query([("customerID", customer_id.to_string())]);
        Ok(self
            .request(Action::Customer, None, params)
            .await?
            .expect_key(CUSTOMER_KEY))
    }

    /// Creates a customer from a JSON document.
    ///
    /// Retried on transport failure like any JSON POST.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use serde_json::json;
    ///
    /// let created = client
    ///     .create_customer(json!({"firstName": "Ada", "lastName": "Lovelace"}))
    ///     .await?;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn create_customer(&self, customer: Value) -> Result<Option<Envelope>, ApiError> {
        Ok(self
            .post_request(Action::Customer, None, customer, QueryParams::new())
            .await?
            .expect_key(CUSTOMER_KEY))
    }

    /// Replaces fields of an existing customer. Sent once, never retried.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Transport`](crate::clients::RequestError::Transport)
    /// if the service cannot be reached, or any other [`ApiError`] if the
    /// request fails.
    pub async fn update_customer(
        &self,
        customer_id: u64,
        customer: Value,
    ) -> Result<Option<Envelope>, ApiError> {
        let url = format!("Customer/{customer_id}.json");
        Ok(self
            .put_request(Action::Customer, Some(&url), customer, QueryParams::new())
            .await?
            .expect_key(CUSTOMER_KEY))
    }
}

fn email_query(email: &str) -> QueryParams {
    query([
        ("load_relations", relations(&["Contact"])),
        ("Contact.email", email.to_string()),
    ])
}
