//! Integration tests for the domain operations in `lightspeed_api::resources`.
//!
//! Each test mounts the exact parameter set an operation is expected to send
//! and checks how the response is surfaced:
//! - `Some(envelope)` when the resource key is present
//! - `None` for remote errors or missing keys
//! - raw bodies for the XML operations

use std::time::Duration;

use chrono::{TimeZone, Utc};
use lightspeed_api::resources::{
    ProductListParams, ProductPageParams, ProductSearchParams, SaleListParams, SaleOrder,
};
use lightspeed_api::{AccessToken, ApiError, ApiUrl, LightspeedClient, LightspeedConfig, RequestError};
use serde_json::json;
use wiremock::matchers::{body_json, body_string, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCOUNT_BASE: &str = "/API/Account/12345";

async fn connect(server: &MockServer) -> LightspeedClient {
    Mock::given(method("GET"))
        .and(path("/API/Account.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"Account": {"accountID": "12345"}})),
        )
        .mount(server)
        .await;

    let config = LightspeedConfig::builder()
        .access_token(AccessToken::new("test-token").unwrap())
        .api_url(ApiUrl::new(format!("{}/API/", server.uri())).unwrap())
        .timeout(Duration::from_millis(250))
        .build()
        .unwrap();
    LightspeedClient::connect(&config).await.unwrap()
}

fn ok(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

// === Account and categories ===

#[tokio::test]
async fn test_get_account_uses_discovery_url() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    let account = client.get_account().await.unwrap().unwrap();
    assert_eq!(
        account.get("Account"),
        Some(&json!({"accountID": "12345"}))
    );
}

#[tokio::test]
async fn test_leaf_categories_requests_node_depth_one() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("{ACCOUNT_BASE}/Category.json")))
        .and(query_param("nodeDepth", "1"))
        .respond_with(ok(json!({"Category": [{"categoryID": "1"}]})))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client.leaf_categories().await.unwrap().is_some());
}

#[tokio::test]
async fn test_categories_missing_key_is_none() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("{ACCOUNT_BASE}/Category.json")))
        .respond_with(ok(json!({"@attributes": {"count": "0"}})))
        .mount(&server)
        .await;

    assert!(client.categories().await.unwrap().is_none());
}

// === Items ===

#[tokio::test]
async fn test_list_products_sends_listing_filters() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("{ACCOUNT_BASE}/Item.json")))
        .and(query_param("categoryID", "IN,[1, 2, 3]"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "60"))
        .and(query_param(
            "load_relations",
            r#"["Images","Manufacturer","ItemShops","Tags"]"#,
        ))
        .and(query_param("orderby", "createTime"))
        .and(query_param("orderby_desc", "1"))
        .and(query_param("or", "ItemShops.reorderLevel=>,0|ItemShops.qoh=>,0"))
        .and(query_param("ItemShops.shopID", "1"))
        .respond_with(ok(json!({"Item": [{"itemID": "10"}, {"itemID": "11"}]})))
        .expect(1)
        .mount(&server)
        .await;

    let params = ProductListParams {
        shop_id: Some(1),
        ..Default::default()
    };
    let items = client
        .list_products(&[1, 2, 3], &params)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(items.get("Item").and_then(|v| v.as_array()).map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_list_products_remote_error_is_none() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("{ACCOUNT_BASE}/Item.json")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "httpCode": "400",
            "errorClass": "InvalidQuery",
            "message": "Bad categoryID"
        })))
        .mount(&server)
        .await;

    let result = client
        .list_products(&[99], &ProductListParams::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_product_detail_loads_relations() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("{ACCOUNT_BASE}/Item.json")))
        .and(query_param("itemID", "55"))
        .and(query_param(
            "load_relations",
            r#"["Images","ItemShops","Manufacturer","CustomFieldValues","ItemVendorNums"]"#,
        ))
        .respond_with(ok(json!({"Item": {"itemID": "55"}})))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client.product_detail(55).await.unwrap().is_some());
}

#[tokio::test]
async fn test_get_products_by_ids() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("{ACCOUNT_BASE}/Item.json")))
        .and(query_param("itemID", "IN,[4, 8]"))
        .and(query_param(
            "load_relations",
            r#"["Images","ItemShops","Manufacturer"]"#,
        ))
        .respond_with(ok(json!({"Item": [{"itemID": "4"}, {"itemID": "8"}]})))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client.get_products(&[4, 8]).await.unwrap().is_some());
}

#[tokio::test]
async fn test_search_products_wraps_query_in_wildcards() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("{ACCOUNT_BASE}/Item.json")))
        .and(query_param("description", "~,%blue shirt%"))
        .and(query_param("categoryID", "IN,[3]"))
        .and(query_param(
            "load_relations",
            r#"["Images","Manufacturer","ItemShops","Category","Tags"]"#,
        ))
        .respond_with(ok(json!({"Item": []})))
        .expect(1)
        .mount(&server)
        .await;

    let params = ProductSearchParams {
        category_ids: vec![3],
        ..Default::default()
    };
    assert!(client
        .search_products("blue shirt", &params)
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_search_products_brand_filters_manufacturer() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("{ACCOUNT_BASE}/Item.json")))
        .and(query_param("Manufacturer.manufacturerID", "21"))
        .and(query_param("limit", "60"))
        .respond_with(ok(json!({"Item": {"itemID": "2"}})))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client
        .search_products_brand(21, &ProductSearchParams::default())
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_fetch_all_products_uses_larger_page() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("{ACCOUNT_BASE}/Item.json")))
        .and(query_param("offset", "200"))
        .and(query_param("limit", "100"))
        .respond_with(ok(json!({"Item": []})))
        .expect(1)
        .mount(&server)
        .await;

    let params = ProductPageParams {
        offset: Some(200),
        ..Default::default()
    };
    assert!(client.fetch_all_products(&params).await.unwrap().is_some());

    let requests = server.received_requests().await.unwrap();
    let sent = requests
        .iter()
        .find(|request| request.url.path().ends_with("/Item.json"))
        .unwrap();
    assert!(!sent
        .url
        .query_pairs()
        .any(|(key, _)| key == "ItemShops.shopID" || key == "tag" || key == "or"));
}

#[tokio::test]
async fn test_exhausted_retries_surface_as_none() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("{ACCOUNT_BASE}/Item.json")))
        .respond_with(ok(json!({"Item": []})).set_delay(Duration::from_secs(2)))
        .expect(6)
        .mount(&server)
        .await;

    let result = client.get_products(&[1]).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_generate_coupon_posts_item_xml() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("POST"))
        .and(path(format!("{ACCOUNT_BASE}/Item")))
        .and(body_string("<Item><description>Coupon</description></Item>"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<Item><itemID>5</itemID></Item>"))
        .expect(1)
        .mount(&server)
        .await;

    let response = client
        .generate_coupon("<Item><description>Coupon</description></Item>")
        .await
        .unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.text(), "<Item><itemID>5</itemID></Item>");
}

// === Customers ===

#[tokio::test]
async fn test_get_customers_by_email() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("{ACCOUNT_BASE}/Customer.json")))
        .and(query_param("Contact.email", "ada@example.com"))
        .and(query_param("load_relations", r#"["Contact"]"#))
        .respond_with(ok(json!({"Customer": {"customerID": "42"}})))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client
        .get_customers("ada@example.com")
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_get_customer_using_id() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("{ACCOUNT_BASE}/Customer.json")))
        .and(query_param("customerID", "42"))
        .respond_with(ok(json!({"@attributes": {"count": "0"}})))
        .mount(&server)
        .await;

    assert!(client.get_customer_using_id(42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_customer_posts_body() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("POST"))
        .and(path(format!("{ACCOUNT_BASE}/Customer.json")))
        .and(body_json(json!({"firstName": "Ada", "lastName": "Lovelace"})))
        .respond_with(ok(json!({"Customer": {"customerID": "43"}})))
        .expect(1)
        .mount(&server)
        .await;

    let created = client
        .create_customer(json!({"firstName": "Ada", "lastName": "Lovelace"}))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(created.get("Customer"), Some(&json!({"customerID": "43"})));
}

#[tokio::test]
async fn test_update_customer_puts_to_customer_url() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("PUT"))
        .and(path(format!("{ACCOUNT_BASE}/Customer/42.json")))
        .and(body_json(json!({"firstName": "Augusta"})))
        .respond_with(ok(json!({"Customer": {"customerID": "42", "firstName": "Augusta"}})))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client
        .update_customer(42, json!({"firstName": "Augusta"}))
        .await
        .unwrap();
    assert!(updated.is_some());
}

// === Sales ===

#[tokio::test]
async fn test_get_sales_orders_by_timestamp() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("{ACCOUNT_BASE}/Sale.json")))
        .and(query_param("load_relations", "all"))
        .and(query_param("Customer.customerID", "42"))
        .and(query_param("orderby", "timeStamp"))
        .and(query_param("orderby_desc", "0"))
        .and(query_param("timeStamp", ">=,2024-06-01T00:00:00Z"))
        .respond_with(ok(json!({"Sale": [{"saleID": "1"}]})))
        .expect(1)
        .mount(&server)
        .await;

    let params = SaleListParams {
        order: SaleOrder::Ascending,
        since: Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()),
    };
    assert!(client.get_sales(42, &params).await.unwrap().is_some());
}

#[tokio::test]
async fn test_generate_sale_empty_body_is_no_data() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("POST"))
        .and(path(format!("{ACCOUNT_BASE}/Sale")))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let result = client.generate_sale("<Sale/>").await;
    assert!(matches!(result, Err(ApiError::Request(RequestError::NoData))));
}

#[tokio::test]
async fn test_generate_sale_is_not_retried() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("POST"))
        .and(path(format!("{ACCOUNT_BASE}/Sale")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<Sale/>")
                .set_delay(Duration::from_secs(2)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = client.generate_sale("<Sale/>").await;
    assert!(matches!(
        result,
        Err(ApiError::Request(RequestError::Transport(_)))
    ));
}

// === Reference data ===

#[tokio::test]
async fn test_paged_reference_data() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    for (fragment, key) in [
        ("Manufacturer.json", "Manufacturer"),
        ("Vendor.json", "Vendor"),
        ("Department.json", "Department"),
    ] {
        Mock::given(method("GET"))
            .and(path(format!("{ACCOUNT_BASE}/{fragment}")))
            .and(query_param("offset", "100"))
            .respond_with(ok(json!({ key: [] })))
            .expect(1)
            .mount(&server)
            .await;
    }

    assert!(client.manufacturers(100).await.unwrap().is_some());
    assert!(client.get_vendors(100).await.unwrap().is_some());
    assert!(client.departments(100).await.unwrap().is_some());
}

#[tokio::test]
async fn test_price_levels() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("{ACCOUNT_BASE}/PriceLevel.json")))
        .respond_with(ok(json!({"PriceLevel": [{"priceLevelID": "1"}]})))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client.price_levels().await.unwrap().is_some());
}
