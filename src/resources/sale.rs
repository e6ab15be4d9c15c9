//! Sales history and sale creation.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::clients::{Action, ApiError, Envelope, LightspeedClient, QueryParams, XmlResponse};
use crate::resources::filters::at_least;
use crate::resources::query;

/// Sort direction for sales by timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SaleOrder {
    /// Oldest first.
    Ascending,
    /// Newest first.
    #[default]
    Descending,
}

impl SaleOrder {
    /// Value of the `orderby_desc` parameter.
    #[must_use]
    pub const fn orderby_desc(self) -> &'static str {
        match self {
            Self::Ascending => "0",
            Self::Descending => "1",
        }
    }
}

/// Options for [`LightspeedClient::get_sales`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaleListParams {
    /// Sort direction (default: newest first).
    pub order: SaleOrder,

    /// Only sales at or after this instant.
    pub since: Option<DateTime<Utc>>,
}

impl LightspeedClient {
    /// Lists a customer's sales with every relation loaded.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_sales(
        &self,
        customer_id: u64,
        params: &SaleListParams,
    ) -> Result<Option<Envelope>, ApiError> {
        Ok(self
            .request(Action::Sale, None, sales_query(customer_id, params))
            .await?
            .expect_key("Sale"))
    }

    /// Posts a sale XML document and returns the raw response.
    ///
    /// # Errors
    ///
    /// - [`RequestError::Transport`](crate::clients::RequestError::Transport)
    ///   if the service cannot be reached
    /// - [`RequestError::NoData`](crate::clients::RequestError::NoData) if the
    ///   response body is empty
    pub async fn generate_sale(&self, sale_xml: &str) -> Result<XmlResponse, ApiError> {
        self.post_request_xml(Action::SaleXml, None, sale_xml, QueryParams::new())
            .await
    }
}

fn sales_query(customer_id: u64, params: &SaleListParams) -> QueryParams {
    let mut query = query([
        ("load_relations", "all".to_string()),
        ("Customer.customerID", customer_id.to_string()),
        ("orderby", "timeStamp".to_string()),
        ("orderby_desc", params.order.orderby_desc().to_string()),
    ]);
    if let Some(since) = params.since {
        query.insert(
            "timeStamp".to_string(),
            at_least(since.to_rfc3339_opts(SecondsFormat::Secs, true)),
        );
    }
    query
}
