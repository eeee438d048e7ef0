//! Integration tests for the REST client request pipeline.
//!
//! These tests run the client against a local mock server and check route
//! resolution, query composition, request signing and response decoding.

use lemon_squeezy::clients::{HttpMethod, JSON_API_MEDIA_TYPE};
use lemon_squeezy::rest::resources::{
    Checkout, Order, Store, Subscription, SubscriptionItem, User,
};
use lemon_squeezy::rest::{
    decode_response, json_api_body, Data, Endpoint, ErrorSchema, IncludedResource, Pagination,
    QueryParams, WriteBody,
};
use lemon_squeezy::{ApiHost, ApiKey, LemonSqueezyConfig, RestClient, RestError};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "test-api-key";

/// Creates a client pointed at the mock server.
fn create_test_client(server: &MockServer) -> RestClient {
    let config = LemonSqueezyConfig::builder()
        .api_key(ApiKey::new(API_KEY).unwrap())
        .api_host(ApiHost::new(server.uri()).unwrap())
        .build()
        .unwrap();
    RestClient::new(&config)
}

fn load_fixture(name: &str) -> Value {
    let path = format!("{}/tests/fixtures/{name}.json", env!("CARGO_MANIFEST_DIR"));
    let text = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}

fn list_document(resource: &Value, total: u64) -> Value {
    json!({
        "meta": {
            "page": {
                "currentPage": 2,
                "from": 6,
                "lastPage": 3,
                "perPage": 5,
                "to": 10,
                "total": total
            }
        },
        "jsonapi": {"version": "1.0"},
        "links": {
            "first": "https://api.lemonsqueezy.com/v1/orders?page%5Bnumber%5D=1&page%5Bsize%5D=5",
            "last": "https://api.lemonsqueezy.com/v1/orders?page%5Bnumber%5D=3&page%5Bsize%5D=5",
            "next": "https://api.lemonsqueezy.com/v1/orders?page%5Bnumber%5D=3&page%5Bsize%5D=5",
            "prev": "https://api.lemonsqueezy.com/v1/orders?page%5Bnumber%5D=1&page%5Bsize%5D=5"
        },
        "data": [resource]
    })
}

// ============================================================================
// Route Resolution and Signing Tests
// ============================================================================

#[tokio::test]
async fn test_find_order_by_id() {
    let server = MockServer::start().await;
    let mut fixture = load_fixture("order");
    fixture["data"]["id"] = json!("42");

    Mock::given(method("GET"))
        .and(path("/v1/orders/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let order = Order::find(&client, "42", None).await.unwrap();

    assert_eq!(order.data.id, "42");
    assert_eq!(order.data.kind, "orders");
    assert_eq!(order.identifier, "104e18a2-d755-4d4b-80c4-a6c1dcbe1c10");
    assert_eq!(order.total, 1199);
    assert_eq!(order.total_formatted, "$11.99");
}

#[tokio::test]
async fn test_requests_carry_auth_and_media_type_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/users/me"))
        .and(header("Authorization", format!("Bearer {API_KEY}").as_str()))
        .and(header("Accept", JSON_API_MEDIA_TYPE))
        .and(header("Content-Type", JSON_API_MEDIA_TYPE))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("user")))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let me = User::me(&client).await.unwrap();

    assert_eq!(me.name, "Darlene Daugherty");
    assert_eq!(me.email, "gernser@yahoo.com");
}

// ============================================================================
// Query Composition Tests
// ============================================================================

#[tokio::test]
async fn test_list_orders_sends_page_parameters_first() {
    let server = MockServer::start().await;
    let fixture = load_fixture("order");

    Mock::given(method("GET"))
        .and(path("/v1/orders"))
        .and(query_param("page[size]", "5"))
        .and(query_param("page[number]", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_document(&fixture["data"], 11)))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let query = QueryParams::new().filter("store_id", "1");
    let page = Order::all(&client, Some(Pagination::page(2).with_size(5)), Some(query))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("page[size]=5&page[number]=2&filter[store_id]=1")
    );

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].store_id, 1);
    let meta = page.page().unwrap();
    assert_eq!(meta.current_page, 2);
    assert_eq!(meta.total, 11);
    assert!(page.has_next_page());
    assert_eq!(page.next_page(), Some(Pagination::page(3).with_size(5)));
}

#[tokio::test]
async fn test_list_without_page_number_sends_no_page_parameters() {
    let server = MockServer::start().await;
    let fixture = load_fixture("order");

    Mock::given(method("GET"))
        .and(path("/v1/orders"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_document(&fixture["data"], 1)))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    Order::all(&client, None, None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_id_with_path_characters_stays_in_its_route() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("user")))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("order")))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    Order::find(&client, "../users/me", None).await.unwrap();
    Order::find(&client, "42?include=store", None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.path(), "/v1/orders/..%2Fusers%2Fme");
    assert_eq!(requests[1].url.path(), "/v1/orders/42%3Finclude=store");
    assert_eq!(requests[1].url.query(), None);
}

#[tokio::test]
async fn test_current_usage_hits_nested_route() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/subscription-items/7/current-usage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonapi": {"version": "1.0"},
            "meta": {
                "period_start": "2023-08-10T10:46:24+00:00",
                "period_end": "2023-09-10T10:46:24+00:00",
                "quantity": 5,
                "interval_unit": "month",
                "interval_quantity": 1
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let usage = SubscriptionItem::current_usage(&client, "7").await.unwrap();

    assert_eq!(usage.meta.quantity, 5);
    assert_eq!(usage.meta.interval_unit, "month");
}

// ============================================================================
// Write Operation Tests
// ============================================================================

#[tokio::test]
async fn test_subscription_update_sends_patch_body_verbatim() {
    let server = MockServer::start().await;

    let mut attributes = WriteBody::new();
    attributes.insert("variant_id".to_string(), json!(11));
    attributes.insert("invoice_immediately".to_string(), json!(true));
    let body = json_api_body("subscriptions", Some("1"), attributes);

    Mock::given(method("PATCH"))
        .and(path("/v1/subscriptions/1"))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("subscription")))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let updated = Subscription::update(&client, "1", &body).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        String::from_utf8(requests[0].body.clone()).unwrap(),
        r#"{"data":{"type":"subscriptions","id":"1","attributes":{"variant_id":11,"invoice_immediately":true}}}"#
    );
    assert_eq!(updated.status, "active");
}

#[tokio::test]
async fn test_subscription_cancel_sends_delete_without_body() {
    let server = MockServer::start().await;

    let mut cancelled = load_fixture("subscription");
    cancelled["data"]["attributes"]["status"] = json!("cancelled");
    cancelled["data"]["attributes"]["cancelled"] = json!(true);

    Mock::given(method("DELETE"))
        .and(path("/v1/subscriptions/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cancelled))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let subscription = Subscription::cancel(&client, "1").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].body.is_empty());
    assert!(subscription.cancelled);
    assert_eq!(subscription.status, "cancelled");
}

#[tokio::test]
async fn test_checkout_create_posts_to_collection() {
    let server = MockServer::start().await;

    let mut attributes = WriteBody::new();
    attributes.insert("custom_price".to_string(), json!(50000));
    let mut body = json_api_body("checkouts", None, attributes);
    body["data"]["relationships"] = json!({
        "store": {"data": {"type": "stores", "id": "1"}},
        "variant": {"data": {"type": "variants", "id": "1"}}
    });

    Mock::given(method("POST"))
        .and(path("/v1/checkouts"))
        .and(body_json(&body))
        .respond_with(ResponseTemplate::new(201).set_body_json(load_fixture("checkout")))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let checkout = Checkout::create(&client, &body).await.unwrap();

    assert_eq!(checkout.custom_price, Some(50000));
    assert!(checkout.url.contains("/checkout/custom/"));
}

// ============================================================================
// Response Decoding Tests
// ============================================================================

#[tokio::test]
async fn test_error_payload_decodes_regardless_of_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/orders/999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "jsonapi": {"version": "1.0"},
            "errors": [{
                "detail": "The requested resource could not be found.",
                "status": "404",
                "title": "Not Found"
            }]
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = Order::find(&client, "999", None).await;

    match result {
        Err(RestError::Api(error)) => {
            assert_eq!(error.errors.len(), 1);
            assert_eq!(error.errors[0].title, "Not Found");
            assert!(error.is_not_found());
        }
        other => panic!("Expected RestError::Api, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_legacy_error_payload_decodes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/stores/1"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "title": "Validation failed",
            "detail": "The store could not be loaded.",
            "errors": [{"message": "store_id is invalid"}]
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = Store::find(&client, "1", None).await;

    match result {
        Err(RestError::Api(error)) => {
            assert_eq!(error.schema, ErrorSchema::Legacy);
            assert_eq!(error.errors[0].title, "Validation failed");
            assert_eq!(error.errors[1].title, "store_id is invalid");
            assert_eq!(error.status(), None);
        }
        other => panic!("Expected RestError::Api, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_unrecognized_body_is_kept_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/orders/1"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = Order::find(&client, "1", None).await;

    match result {
        Err(RestError::Unknown { body, .. }) => {
            assert_eq!(body.as_deref(), Some("<html>Bad Gateway</html>"));
        }
        other => panic!("Expected RestError::Unknown, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_success_shape_wins_over_sibling_errors() {
    let server = MockServer::start().await;

    let mut document = load_fixture("order");
    document["errors"] = json!([{"title": "Deprecated", "detail": "Use v2"}]);

    Mock::given(method("GET"))
        .and(path("/v1/orders/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(document))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let order: Data<Order> = Order::find(&client, "1", None).await.unwrap();

    assert_eq!(order.id, "1");
    assert_eq!(order.errors.as_ref().unwrap()[0].title, "Deprecated");
}

#[tokio::test]
async fn test_included_resources_decode_by_type() {
    let server = MockServer::start().await;

    let mut document = load_fixture("order");
    let store = load_fixture("store")["data"].clone();
    let customer = load_fixture("customer")["data"].clone();
    document["included"] = json!([store, customer]);

    Mock::given(method("GET"))
        .and(path("/v1/orders/1"))
        .and(query_param("include", "store,customer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(document))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let query = QueryParams::new().include(&["store", "customer"]);
    let order = Order::find(&client, "1", Some(query)).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("include=store,customer"));

    let included = order.included();
    assert_eq!(included.len(), 2);
    match &included[0] {
        IncludedResource::Store(store) => assert_eq!(store.name, "My Store"),
        other => panic!("Expected a store, got: {other:?}"),
    }
    match &included[1] {
        IncludedResource::Customer(customer) => assert_eq!(customer.email, "johndoe@example.com"),
        other => panic!("Expected a customer, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_flat_included_store_decodes() {
    let server = MockServer::start().await;

    let store = load_fixture("store")["data"].clone();
    let mut flat = store["attributes"].clone();
    flat["id"] = store["id"].clone();
    flat["type"] = store["type"].clone();

    let mut document = load_fixture("order");
    document["included"] = json!([flat]);

    Mock::given(method("GET"))
        .and(path("/v1/orders/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(document))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let order = Order::find(&client, "1", None).await.unwrap();

    match order.included() {
        [IncludedResource::Store(store)] => {
            assert_eq!(store.id, "1");
            assert_eq!(store.slug, "my-store");
        }
        other => panic!("Expected one store, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_unknown_included_resource_is_unknown_error() {
    let server = MockServer::start().await;

    let mut document = load_fixture("order");
    document["included"] = json!([{"type": "widgets", "id": "9", "attributes": {"size": 3}}]);

    Mock::given(method("GET"))
        .and(path("/v1/orders/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(document))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = Order::find(&client, "1", None).await;

    match result {
        Err(RestError::Unknown { reason, .. }) => assert!(reason.contains("widgets")),
        other => panic!("Expected RestError::Unknown, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_send_exposes_rate_limit_and_raw_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/users/me"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Ratelimit-Limit", "300")
                .insert_header("X-Ratelimit-Remaining", "42")
                .set_body_json(load_fixture("user")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client
        .send(&Endpoint::Me, HttpMethod::Get, None, None, None)
        .await
        .unwrap();

    let rate_limit = response.rate_limit.unwrap();
    assert_eq!(rate_limit.limit, 300);
    assert_eq!(rate_limit.remaining, 42);

    let me: Data<User> = decode_response(&response.body).unwrap();
    assert_eq!(me.name, "Darlene Daugherty");
}

// ============================================================================
// Transport Error Tests
// ============================================================================

#[tokio::test]
async fn test_unreachable_host_is_http_error() {
    let config = LemonSqueezyConfig::builder()
        .api_key(ApiKey::new(API_KEY).unwrap())
        .api_host(ApiHost::new("http://127.0.0.1:9").unwrap())
        .build()
        .unwrap();
    let client = RestClient::new(&config);

    let result = User::me(&client).await;
    assert!(matches!(result, Err(RestError::Http(_))));
}
