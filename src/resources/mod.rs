//! Domain operations over the Lightspeed Retail resources.
//!
//! Every operation is an async method on
//! [`LightspeedClient`](crate::clients::LightspeedClient). Read operations
//! return `Ok(Some(envelope))` when the response carries the resource's
//! top-level key (`Item`, `Customer`, `Sale`, ...) and `Ok(None)` otherwise,
//! which covers not-found results, remote error envelopes and exhausted
//! retries alike.
//!
//! | Module | Operations |
//! |---|---|
//! | `account` | `get_account` |
//! | `category` | `categories`, `leaf_categories` |
//! | `item` | `product_detail`, `list_products`, `get_products`, `search_products`, `search_products_brand`, `fetch_all_products`, `generate_coupon` |
//! | `customer` | `get_customers`, `get_customer_using_id`, `create_customer`, `update_customer` |
//! | `sale` | `get_sales`, `generate_sale` |
//! | `catalog` | `manufacturers`, `get_vendors`, `departments`, `price_levels` |
//!
//! # Example
//!
//! ```rust,ignore
//! use lightspeed_api::resources::ProductListParams;
//!
//! let params = ProductListParams {
//!     shop_id: Some(1),
//!     ..Default::default()
//! };
//!
//! if let Some(items) = client.list_products(&[12, 14], &params).await? {
//!     println!("{:?}", items.get("Item"));
//! }
//! ```

mod account;
mod catalog;
mod category;
mod customer;
pub mod filters;
mod item;
mod sale;

pub use item::{
    ProductListParams, ProductPageParams, ProductSearchParams, DEFAULT_FETCH_ALL_LIMIT,
    DEFAULT_LISTING_LIMIT,
};
pub use sale::{SaleListParams, SaleOrder};

use crate::clients::QueryParams;

/// Builds a parameter map from literal keys.
fn query<const N: usize>(pairs: [(&str, String); N]) -> QueryParams {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_collects_pairs() {
        let params = query([("offset", "0".to_string()), ("limit", "60".to_string())]);
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("offset"), Some(&"0".to_string()));
        assert_eq!(params.get("limit"), Some(&"60".to_string()));
    }
}
