use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, header::LOCATION, Method, Request, StatusCode},
    Router,
};
use catalog_service::web::{
    rest::{CategoryResponse, HEALTH_MESSAGE},
    router, AppState,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    router(Arc::new(AppState::seeded()))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
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
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, bytes.to_vec())
}

fn names(body: &[u8]) -> Vec<String> {
    let categories: Vec<CategoryResponse> = serde_json::from_slice(body).unwrap();
    categories.into_iter().map(|c| c.name).collect()
}

#[tokio::test]
async fn static_routes_win_over_id() {
    let app = app();
    let (status, _, body) = send(&app, Method::GET, "/api/catalog/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, HEALTH_MESSAGE.as_bytes());

    let (status, _, body) = send(&app, Method::GET, "/api/catalog/search?query=cloth", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), ["Clothing"]);
}

#[tokio::test]
async fn search_requires_query_parameter() {
    let (status, _, _) = send(&app(), Method::GET, "/api/catalog/search", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_is_a_soft_delete() {
    let app = app();
    let (status, _, _) = send(&app, Method::DELETE, "/api/catalog/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, _, body) = send(&app, Method::GET, "/api/catalog", None).await;
    assert_eq!(names(&body), ["Clothing", "Books"]);
    let (status, _, _) = send(&app, Method::GET, "/api/catalog/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Still stored, so it can be updated back to active.
    let (status, _, _) = send(
        &app,
        Method::PUT,
        "/api/catalog/1",
        Some(json!({"name": "Gadgets", "description": "d", "imageUrl": "", "isActive": true})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _, body) = send(&app, Method::GET, "/api/catalog/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let category: CategoryResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(category.name, "Gadgets");
}

#[tokio::test]
async fn create_forces_active_and_sets_location() {
    let app = app();
    let (status, headers, body) = send(
        &app,
        Method::POST,
        "/api/catalog",
        Some(json!({
            "name": "Garden",
            "description": "Outdoor",
            "imageUrl": "x",
            "isActive": false
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(headers[LOCATION], "/api/catalog/4");
    let created: CategoryResponse = serde_json::from_slice(&body).unwrap();
    assert!(created.is_active);
    assert_eq!(created.id, 4);
}

#[tokio::test]
async fn unknown_ids_are_404() {
    let app = app();
    let (status, _, body) = send(&app, Method::DELETE, "/api/catalog/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["error"], "Category 99 not found");

    let (status, _, _) =
        send(&app, Method::PUT, "/api/catalog/99", Some(json!({"name": "x"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
