//! services/cart/src/web/rest.rs
//!
//! Contains the Axum handlers for the cart REST API and the master
//! definition for its OpenAPI specification.

use crate::web::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use storefront_core::{
    domain::{Cart, CartItem, CartSummary, ItemQuantityUpdate, NewCartItem},
    ports::PortError,
};
use storefront_http::{ErrorResponse, HttpError};
use tracing::debug;
use utoipa::{OpenApi, ToSchema};

pub const HEALTH_MESSAGE: &str = "Cart Service is healthy!";

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        get_cart_handler,
        add_item_handler,
        update_item_handler,
        remove_item_handler,
        clear_cart_handler,
        cart_summary_handler,
        health_handler,
    ),
    components(
        schemas(
            CartResponse,
            CartItemResponse,
            AddItemRequest,
            UpdateItemRequest,
            CartSummaryResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "Cart API", description = "Per-user shopping carts held in memory.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemResponse {
    pub id: i32,
    pub product_id: i32,
    pub product_name: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub quantity: i32,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            product_name: item.product_name,
            price: item.price,
            quantity: item.quantity,
            user_id: item.user_id,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// A cart together with its derived totals.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub user_id: String,
    pub items: Vec<CartItemResponse>,
    #[schema(value_type = f64)]
    pub total_amount: Decimal,
    pub total_items: i64,
}

/// Fails when the cart's total does not fit in a `Decimal`.
impl TryFrom<Cart> for CartResponse {
    type Error = PortError;

    fn try_from(cart: Cart) -> Result<Self, Self::Error> {
        let total_amount = cart.total_amount().ok_or_else(|| {
            PortError::Unexpected(format!("Cart total for {} overflowed", cart.user_id))
        })?;
        let total_items = cart.total_items();
        Ok(Self {
            user_id: cart.user_id,
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
            total_amount,
            total_items,
        })
    }
}

/// Payload for adding a product to a cart. Any `id`, `userId` or timestamps
/// sent by the client are ignored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub product_id: i32,
    #[serde(default)]
    pub product_name: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub quantity: i32,
}

impl From<AddItemRequest> for NewCartItem {
    fn from(req: AddItemRequest) -> Self {
        Self {
            product_id: req.product_id,
            product_name: req.product_name,
            price: req.price,
            quantity: req.quantity,
        }
    }
}

/// Only `quantity` is read; it replaces the stored quantity.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartSummaryResponse {
    pub total_items: i64,
    #[schema(value_type = f64)]
    pub total_amount: Decimal,
    pub item_count: usize,
}

impl From<CartSummary> for CartSummaryResponse {
    fn from(summary: CartSummary) -> Self {
        Self {
            total_items: summary.total_items,
            total_amount: summary.total_amount,
            item_count: summary.item_count,
        }
    }
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Fetch a user's cart, creating an empty one on first access.
#[utoipa::path(
    get,
    path = "/api/cart/{user_id}",
    responses(
        (status = 200, description = "The user's cart", body = CartResponse),
        (status = 500, description = "Cart total overflowed", body = ErrorResponse)
    ),
    params(("user_id" = String, Path, description = "Owner of the cart."))
)]
pub async fn get_cart_handler(
    State(app_state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<CartResponse>, HttpError> {
    debug!(%user_id, "Fetching cart");
    let cart = app_state.carts.get_or_create_cart(&user_id).await?;
    Ok(Json(CartResponse::try_from(cart)?))
}

/// Add a product to the cart, merging with an existing line for the same product.
#[utoipa::path(
    post,
    path = "/api/cart/{user_id}/items",
    request_body = AddItemRequest,
    responses(
        (status = 200, description = "The stored line item", body = CartItemResponse)
    ),
    params(("user_id" = String, Path, description = "Owner of the cart."))
)]
pub async fn add_item_handler(
    State(app_state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(req): Json<AddItemRequest>,
) -> Result<Json<CartItemResponse>, HttpError> {
    let item = app_state.carts.add_item(&user_id, req.into()).await?;
    Ok(Json(item.into()))
}

/// Set the quantity of a line item.
#[utoipa::path(
    put,
    path = "/api/cart/{user_id}/items/{item_id}",
    request_body = UpdateItemRequest,
    responses(
        (status = 204, description = "Quantity updated"),
        (status = 404, description = "Cart or item not found", body = ErrorResponse)
    ),
    params(
        ("user_id" = String, Path, description = "Owner of the cart."),
        ("item_id" = i32, Path, description = "Line item id within the cart.")
    )
)]
pub async fn update_item_handler(
    State(app_state): State<Arc<AppState>>,
    Path((user_id, item_id)): Path<(String, i32)>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<StatusCode, HttpError> {
    app_state
        .carts
        .update_item(
            &user_id,
            item_id,
            ItemQuantityUpdate {
                quantity: req.quantity,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Remove a line item from the cart.
#[utoipa::path(
    delete,
    path = "/api/cart/{user_id}/items/{item_id}",
    responses(
        (status = 204, description = "Item removed"),
        (status = 404, description = "Cart or item not found", body = ErrorResponse)
    ),
    params(
        ("user_id" = String, Path, description = "Owner of the cart."),
        ("item_id" = i32, Path, description = "Line item id within the cart.")
    )
)]
pub async fn remove_item_handler(
    State(app_state): State<Arc<AppState>>,
    Path((user_id, item_id)): Path<(String, i32)>,
) -> Result<StatusCode, HttpError> {
    app_state.carts.remove_item(&user_id, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Remove every item from the cart. The cart itself stays addressable.
#[utoipa::path(
    delete,
    path = "/api/cart/{user_id}",
    responses(
        (status = 204, description = "Cart emptied"),
        (status = 404, description = "Cart not found", body = ErrorResponse)
    ),
    params(("user_id" = String, Path, description = "Owner of the cart."))
)]
pub async fn clear_cart_handler(
    State(app_state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, HttpError> {
    app_state.carts.clear_cart(&user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Totals for a cart; zeros when the user has no cart yet.
#[utoipa::path(
    get,
    path = "/api/cart/{user_id}/summary",
    responses(
        (status = 200, description = "Cart totals", body = CartSummaryResponse),
        (status = 500, description = "Cart total overflowed", body = ErrorResponse)
    ),
    params(("user_id" = String, Path, description = "Owner of the cart."))
)]
pub async fn cart_summary_handler(
    State(app_state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<CartSummaryResponse>, HttpError> {
    let summary = app_state.carts.summary(&user_id).await?;
    Ok(Json(summary.into()))
}

#[utoipa::path(
    get,
    path = "/api/cart/health",
    responses((status = 200, description = "Service is up", body = String))
)]
pub async fn health_handler() -> &'static str {
    HEALTH_MESSAGE
}
