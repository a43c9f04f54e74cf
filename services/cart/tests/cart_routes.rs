use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use cart_service::web::{
    rest::{CartItemResponse, CartResponse, CartSummaryResponse, HEALTH_MESSAGE},
    router, AppState,
};
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::sync::Arc;
use storefront_http::ErrorResponse;
use tower::ServiceExt;

fn app() -> Router {
    router(Arc::new(AppState::in_memory()))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn parse<T: DeserializeOwned>(bytes: &[u8]) -> T {
    serde_json::from_slice(bytes).unwrap()
}

fn dec(value: &str) -> Decimal {
    value.parse().unwrap()
}

#[tokio::test]
async fn health_is_not_mistaken_for_a_user() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/cart/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), HEALTH_MESSAGE);
}

#[tokio::test]
async fn get_creates_an_empty_cart() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/cart/alice", None).await;
    assert_eq!(status, StatusCode::OK);
    let cart: CartResponse = parse(&body);
    assert_eq!(cart.user_id, "alice");
    assert!(cart.items.is_empty());
    assert_eq!(cart.total_items, 0);
    assert_eq!(cart.total_amount, Decimal::ZERO);

    // The cart now exists, so clearing it succeeds.
    let (status, _) = send(&app, Method::DELETE, "/api/cart/alice", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn duplicate_adds_merge_with_first_price() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/cart/u1/items",
        Some(json!({"productId": 10, "productName": "Pen", "quantity": 2, "price": 5.00})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let first: CartItemResponse = parse(&body);
    assert_eq!(first.id, 1);
    assert_eq!(first.user_id, "u1");

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/cart/u1/items",
        Some(json!({
            "id": 77,
            "userId": "mallory",
            "productId": 10,
            "productName": "Other",
            "quantity": 3,
            "price": 9.99
        })),
    )
    .await;
    let merged: CartItemResponse = parse(&body);
    assert_eq!(merged.id, 1);
    assert_eq!(merged.quantity, 5);
    assert_eq!(merged.price, dec("5.00"));
    assert_eq!(merged.product_name, "Pen");
    assert_eq!(merged.user_id, "u1");

    let (_, body) = send(&app, Method::GET, "/api/cart/u1", None).await;
    let cart: CartResponse = parse(&body);
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.total_items, 5);
    assert_eq!(cart.total_amount, dec("25"));
}

#[tokio::test]
async fn update_sets_quantity_and_reports_missing_keys() {
    let app = app();
    send(
        &app,
        Method::POST,
        "/api/cart/u2/items",
        Some(json!({"productId": 1, "productName": "Mug", "quantity": 1, "price": 4.5})),
    )
    .await;

    let quantity = |n: i32| Some(json!({ "quantity": n }));
    let (status, _) = send(&app, Method::PUT, "/api/cart/u2/items/1", quantity(5)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, body) = send(&app, Method::GET, "/api/cart/u2/summary", None).await;
    let summary: CartSummaryResponse = parse(&body);
    assert_eq!(summary.total_items, 5);
    assert_eq!(summary.total_amount, dec("22.5"));

    let (status, body) = send(&app, Method::PUT, "/api/cart/u2/items/9", quantity(1)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(parse::<ErrorResponse>(&body).error, "Item not found");

    let (status, body) = send(&app, Method::PUT, "/api/cart/ghost/items/1", quantity(1)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(parse::<ErrorResponse>(&body).error, "Cart not found");
}

#[tokio::test]
async fn remove_then_readd_gets_a_fresh_id() {
    let app = app();
    for product_id in [1, 2] {
        send(
            &app,
            Method::POST,
            "/api/cart/u3/items",
            Some(json!({"productId": product_id, "quantity": 1, "price": 1})),
        )
        .await;
    }

    let (status, _) = send(&app, Method::DELETE, "/api/cart/u3/items/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::DELETE, "/api/cart/u3/items/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/cart/u3/items",
        Some(json!({"productId": 1, "quantity": 1, "price": 1})),
    )
    .await;
    assert_eq!(parse::<CartItemResponse>(&body).id, 3);
}

#[tokio::test]
async fn clear_empties_cart_and_restarts_ids() {
    let app = app();
    let (status, body) = send(&app, Method::DELETE, "/api/cart/u4", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(parse::<ErrorResponse>(&body).error, "Cart not found");

    for product_id in [5, 6, 7] {
        send(
            &app,
            Method::POST,
            "/api/cart/u4/items",
            Some(json!({"productId": product_id, "quantity": 2, "price": 3})),
        )
        .await;
    }
    let (status, _) = send(&app, Method::DELETE, "/api/cart/u4", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = send(&app, Method::GET, "/api/cart/u4/summary", None).await;
    let summary: CartSummaryResponse = parse(&body);
    assert_eq!(summary.item_count, 0);
    assert_eq!(summary.total_items, 0);
    assert_eq!(summary.total_amount, Decimal::ZERO);

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/cart/u4/items",
        Some(json!({"productId": 8, "quantity": 1, "price": 1})),
    )
    .await;
    assert_eq!(parse::<CartItemResponse>(&body).id, 1);
}

#[tokio::test]
async fn summary_of_unknown_user_is_all_zero() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/cart/nobody/summary", None).await;
    assert_eq!(status, StatusCode::OK);
    let summary: Value = parse(&body);
    assert_eq!(summary["totalItems"], json!(0));
    assert_eq!(summary["itemCount"], json!(0));
    assert_eq!(parse::<CartSummaryResponse>(&body).total_amount, Decimal::ZERO);

    // Reading the summary must not register a cart.
    let (status, _) = send(&app, Method::DELETE, "/api/cart/nobody", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn overflowing_totals_answer_500_instead_of_panicking() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/cart/whale/items",
        Some(json!({"productId": 1, "quantity": 2, "price": 7e28})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    for uri in ["/api/cart/whale/summary", "/api/cart/whale"] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(parse::<ErrorResponse>(&body).error, "Internal server error");
    }

    // Other carts on the same service keep working.
    let (status, _) = send(&app, Method::GET, "/api/cart/minnow/summary", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/cart/u5/items",
        Some(json!({"productName": "no id"})),
    )
    .await;
    assert!(status.is_client_error());
}
