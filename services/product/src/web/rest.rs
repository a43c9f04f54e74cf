//! services/product/src/web/rest.rs
//!
//! Axum handlers for the product REST API and its OpenAPI definition.

use crate::web::state::AppState;
use axum::{
    extract::{Path, State},
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Json},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use storefront_core::domain::{NewProduct, Product};
use storefront_http::{ErrorResponse, HttpError};
use utoipa::{OpenApi, ToSchema};

pub const HEALTH_MESSAGE: &str = "Product Service is healthy!";

#[derive(OpenApi)]
#[openapi(
    paths(
        list_products_handler,
        get_product_handler,
        create_product_handler,
        update_product_handler,
        delete_product_handler,
        health_handler,
    ),
    components(schemas(ProductResponse, ProductRequest, ErrorResponse)),
    tags((name = "Product API", description = "Product listing held in memory."))
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub stock_quantity: i32,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            price: p.price,
            stock_quantity: p.stock_quantity,
            category: p.category,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// Body of create and update requests. Server-owned fields are ignored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    #[serde(default)]
    pub stock_quantity: i32,
    #[serde(default)]
    pub category: String,
}

impl From<ProductRequest> for NewProduct {
    fn from(req: ProductRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            stock_quantity: req.stock_quantity,
            category: req.category,
        }
    }
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

#[utoipa::path(
    get,
    path = "/api/product",
    responses((status = 200, description = "All products", body = [ProductResponse]))
)]
pub async fn list_products_handler(
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProductResponse>>, HttpError> {
    let products = app_state.products.list_products().await?;
    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/api/product/{id}",
    responses(
        (status = 200, description = "The product", body = ProductResponse),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    params(("id" = i32, Path, description = "Product id."))
)]
pub async fn get_product_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ProductResponse>, HttpError> {
    let product = app_state.products.get_product(id).await?;
    Ok(Json(product.into()))
}

/// Create a product. The response carries a `Location` header for the new resource.
#[utoipa::path(
    post,
    path = "/api/product",
    request_body = ProductRequest,
    responses((status = 201, description = "Product created", body = ProductResponse))
)]
pub async fn create_product_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<ProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let product = app_state.products.create_product(req.into()).await?;
    let location = format!("/api/product/{}", product.id);
    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(ProductResponse::from(product)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/product/{id}",
    request_body = ProductRequest,
    responses(
        (status = 204, description = "Product updated"),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    params(("id" = i32, Path, description = "Product id."))
)]
pub async fn update_product_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(req): Json<ProductRequest>,
) -> Result<StatusCode, HttpError> {
    app_state.products.update_product(id, req.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/product/{id}",
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    params(("id" = i32, Path, description = "Product id."))
)]
pub async fn delete_product_handler(
    State(app_state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, HttpError> {
    app_state.products.delete_product(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/product/health",
    responses((status = 200, description = "Service is up", body = String))
)]
pub async fn health_handler() -> &'static str {
    HEALTH_MESSAGE
}
