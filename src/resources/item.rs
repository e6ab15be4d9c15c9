//! Item (product) lookups, listings and searches.
//!
//! Listings are ordered newest first and restricted to items that are
//! stocked or have a reorder level, matching what a storefront would show.

use crate::clients::{Action, ApiError, Envelope, LightspeedClient, QueryParams, XmlResponse};
use crate::resources::filters::{contains, either, in_list, relations};
use crate::resources::query;

const ITEM_KEY: &str = "Item";

const DETAIL_RELATIONS: &[&str] = &[
    "Images",
    "ItemShops",
    "Manufacturer",
    "CustomFieldValues",
    "ItemVendorNums",
];
const BATCH_RELATIONS: &[&str] = &["Images", "ItemShops", "Manufacturer"];
const LISTING_RELATIONS: &[&str] = &["Images", "Manufacturer", "ItemShops", "Tags"];
const SEARCH_RELATIONS: &[&str] = &["Images", "Manufacturer", "ItemShops", "Category", "Tags"];

const STOCKED_CLAUSES: &[&str] = &["ItemShops.reorderLevel=>,0", "ItemShops.qoh=>,0"];

/// Page size used by [`LightspeedClient::list_products`] and the searches.
pub const DEFAULT_LISTING_LIMIT: u32 = 60;

/// Page size used by [`LightspeedClient::fetch_all_products`].
pub const DEFAULT_FETCH_ALL_LIMIT: u32 = 100;

/// Options for product listings.
///
/// # Example
///
/// ```rust
/// use lightspeed_api::resources::ProductListParams;
///
/// let params = ProductListParams {
///     offset: Some(120),
///     shop_id: Some(1),
///     ..Default::default()
/// };
/// assert_eq!(params.limit, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductListParams {
    /// Number of items to skip (default: 0).
    pub offset: Option<u32>,

    /// Page size (default depends on the operation).
    pub limit: Option<u32>,

    /// Restrict stock information to one shop.
    pub shop_id: Option<u64>,

    /// Return only items carrying this tag.
    pub tag: Option<String>,
}

/// Paging for [`LightspeedClient::fetch_all_products`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductPageParams {
    /// Number of items to skip (default: 0).
    pub offset: Option<u32>,

    /// Page size (default: 100).
    pub limit: Option<u32>,
}

/// Options for product searches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductSearchParams {
    /// Restrict results to these categories. Ignored when empty.
    pub category_ids: Vec<u64>,

    /// Number of items to skip (default: 0).
    pub offset: Option<u32>,

    /// Page size (default: 60).
    pub limit: Option<u32>,

    /// Restrict stock information to one shop.
    pub shop_id: Option<u64>,
}

impl LightspeedClient {
    /// Fetches one item with its images, shop stock, manufacturer, custom
    /// fields and vendor numbers.
    ///
    /// Returns `None` when the response has no `Item` key.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn product_detail(&self, item_id: u64) -> Result<Option<Envelope>, ApiError> {
        Ok(self
            .request(Action::Item, None, detail_query(item_id))
            .await?
            .expect_key(ITEM_KEY))
    }

    /// Lists stocked items in the given categories, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn list_products(
        &self,
        category_ids: &[u64],
        params: &ProductListParams,
    ) -> Result<Option<Envelope>, ApiError> {
        Ok(self
            .request(Action::Item, None, list_query(category_ids, params))
            .await?
            .expect_key(ITEM_KEY))
    }

    /// Fetches several items by id in one request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn get_products(&self, item_ids: &[u64]) -> Result<Option<Envelope>, ApiError> {
        let params = query([
            ("itemID", in_list(item_ids)),
            ("load_relations", relations(BATCH_RELATIONS)),
        ]);
        Ok(self
            .request(Action::Item, None, params)
            .await?
            .expect_key(ITEM_KEY))
    }

    /// Searches stocked items whose description contains `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn search_products(
        &self,
        text: &str,
        params: &ProductSearchParams,
    ) -> Result<Option<Envelope>, ApiError> {
        let params = search_query(("description", contains(text)), params);
        Ok(self
            .request(Action::Item, None, params)
            .await?
            .expect_key(ITEM_KEY))
    }

    /// Lists stocked items from one manufacturer.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn search_products_brand(
        &self,
        manufacturer_id: u64,
        params: &ProductSearchParams,
    ) -> Result<Option<Envelope>, ApiError> {
        let params = search_query(
            ("Manufacturer.manufacturerID", manufacturer_id.to_string()),
            params,
        );
        Ok(self
            .request(Action::Item, None, params)
            .await?
            .expect_key(ITEM_KEY))
    }

    /// Pages through the whole catalogue, newest first, without the stock
    /// filter.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn fetch_all_products(
        &self,
        params: &ProductPageParams,
    ) -> Result<Option<Envelope>, ApiError> {
        Ok(self
            .request(Action::Item, None, fetch_all_query(params))
            .await?
            .expect_key(ITEM_KEY))
    }

    /// Posts an item XML document, used to create coupons.
    ///
    /// The raw response is returned without interpretation.
    ///
    /// # Errors
    ///
    /// - [`RequestError::Transport`](crate::clients::RequestError::Transport)
    ///   if the service cannot be reached
    /// - [`RequestError::NoData`](crate::clients::RequestError::NoData) if the
    ///   response body is empty
    pub async fn generate_coupon(&self, coupon_xml: &str) -> Result<XmlResponse, ApiError> {
        self.post_request_xml(Action::ItemXml, None, coupon_xml, QueryParams::new())
            .await
    }
}

fn detail_query(item_id: u64) -> QueryParams {
    query([
        ("itemID", item_id.to_string()),
        ("load_relations", relations(DETAIL_RELATIONS)),
    ])
}

fn list_query(category_ids: &[u64], params: &ProductListParams) -> QueryParams {
    let mut query = listing_query(
        LISTING_RELATIONS,
        params.offset,
        params.limit.unwrap_or(DEFAULT_LISTING_LIMIT),
    );
    query.insert("categoryID".to_string(), in_list(category_ids));
    query.insert("or".to_string(), either(STOCKED_CLAUSES));
    apply_shop_and_tag(&mut query, params);
    query
}

fn search_query(criterion: (&str, String), params: &ProductSearchParams) -> QueryParams {
    let mut query = listing_query(
        SEARCH_RELATIONS,
        params.offset,
        params.limit.unwrap_or(DEFAULT_LISTING_LIMIT),
    );
    query.insert(criterion.0.to_string(), criterion.1);
    if !params.category_ids.is_empty() {
        query.insert("categoryID".to_string(), in_list(&params.category_ids));
    }
    query.insert("or".to_string(), either(STOCKED_CLAUSES));
    if let Some(shop_id) = params.shop_id {
        query.insert("ItemShops.shopID".to_string(), shop_id.to_string());
    }
    query
}

fn fetch_all_query(params: &ProductPageParams) -> QueryParams {
    listing_query(
        LISTING_RELATIONS,
        params.offset,
        params.limit.unwrap_or(DEFAULT_FETCH_ALL_LIMIT),
    )
}

fn listing_query(load: &[&str], offset: Option<u32>, limit: u32) -> QueryParams {
    query([
        ("offset", offset.unwrap_or(0).to_string()),
        ("limit", limit.to_string()),
        ("load_relations", relations(load)),
        ("orderby", "createTime".to_string()),
        ("orderby_desc", "1".to_string()),
    ])
}

fn apply_shop_and_tag(query: &mut QueryParams, params: &ProductListParams) {
    if let Some(shop_id) = params.shop_id {
        query.insert("ItemShops.shopID".to_string(), shop_id.to_string());
    }
    if let Some(tag) = &params.tag {
        query.insert("tag".to_string(), tag.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<'a>(query: &'a QueryParams, key: &str) -> Option<&'a str> {
        query.get(key).map(String::as_str)
    }

    #[test]
    fn test_detail_query_loads_all_relations() {
        let query = detail_query(99);
        assert_eq!(value(&query, "itemID"), Some("99"));
        assert_eq!(
            value(&query, "load_relations"),
            Some(r#"["Images","ItemShops","Manufacturer","CustomFieldValues","ItemVendorNums"]"#)
        );
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn test_list_query_defaults() {
        let query = list_query(&[1, 2, 3], &ProductListParams::default());

        assert_eq!(value(&query, "categoryID"), Some("IN,[1, 2, 3]"));
        assert_eq!(value(&query, "offset"), Some("0"));
        assert_eq!(value(&query, "limit"), Some("60"));
        assert_eq!(value(&query, "orderby"), Some("createTime"));
        assert_eq!(value(&query, "orderby_desc"), Some("1"));
        assert_eq!(
            value(&query, "or"),
            Some("ItemShops.reorderLevel=>,0|ItemShops.qoh=>,0")
        );
        assert_eq!(
            value(&query, "load_relations"),
            Some(r#"["Images","Manufacturer","ItemShops","Tags"]"#)
        );
        assert!(!query.contains_key("ItemShops.shopID"));
        assert!(!query.contains_key("tag"));
    }

    #[test]
    fn test_list_query_with_shop_and_tag() {
        let params = ProductListParams {
            offset: Some(60),
            limit: Some(30),
            shop_id: Some(4),
            tag: Some("summer".to_string()),
        };
        let query = list_query(&[7], &params);

        assert_eq!(value(&query, "offset"), Some("60"));
        assert_eq!(value(&query, "limit"), Some("30"));
        assert_eq!(value(&query, "ItemShops.shopID"), Some("4"));
        assert_eq!(value(&query, "tag"), Some("summer"));
    }

    #[test]
    fn test_search_query_omits_empty_categories() {
        let query = search_query(
            ("description", contains("boot")),
            &ProductSearchParams::default(),
        );

        assert_eq!(value(&query, "description"), Some("~,%boot%"));
        assert!(!query.contains_key("categoryID"));
        assert_eq!(
            value(&query, "load_relations"),
            Some(r#"["Images","Manufacturer","ItemShops","Category","Tags"]"#)
        );
        assert_eq!(
            value(&query, "or"),
            Some("ItemShops.reorderLevel=>,0|ItemShops.qoh=>,0")
        );
    }

    #[test]
    fn test_search_query_with_categories_and_shop() {
        let params = ProductSearchParams {
            category_ids: vec![5, 6],
            shop_id: Some(2),
            ..Default::default()
        };
        let query = search_query(("Manufacturer.manufacturerID", "11".to_string()), &params);

        assert_eq!(value(&query, "Manufacturer.manufacturerID"), Some("11"));
        assert_eq!(value(&query, "categoryID"), Some("IN,[5, 6]"));
        assert_eq!(value(&query, "ItemShops.shopID"), Some("2"));
    }

    #[test]
    fn test_fetch_all_query_has_no_stock_filter() {
        let query = fetch_all_query(&ProductPageParams::default());

        assert_eq!(value(&query, "limit"), Some("100"));
        assert_eq!(value(&query, "offset"), Some("0"));
        assert!(!query.contains_key("or"));
        assert!(!query.contains_key("categoryID"));
    }

    #[test]
    fn test_fetch_all_query_sends_only_paging_relations_and_sort() {
        let query = fetch_all_query(&ProductPageParams {
            offset: Some(300),
            limit: Some(50),
        });

        let mut keys: Vec<&str> = query.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["limit", "load_relations", "offset", "orderby", "orderby_desc"]
        );
        assert_eq!(value(&query, "offset"), Some("300"));
        assert_eq!(value(&query, "limit"), Some("50"));
        assert_eq!(
            value(&query, "load_relations"),
            Some(r#"["Images","Manufacturer","ItemShops","Tags"]"#)
        );
    }
}
