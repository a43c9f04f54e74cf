pub mod rest;
pub mod state;

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

pub use rest::ApiDoc;
use rest::{
    add_item_handler, cart_summary_handler, clear_cart_handler, get_cart_handler, health_handler,
    remove_item_handler, update_item_handler,
};
pub use state::AppState;

/// Builds the cart API router. `/api/cart/health` is a static segment and
/// therefore takes priority over `/api/cart/{user_id}`.
pub fn router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/cart/health", get(health_handler))
        .route(
            "/api/cart/{user_id}",
            get(get_cart_handler).delete(clear_cart_handler),
        )
        .route("/api/cart/{user_id}/items", post(add_item_handler))
        .route(
            "/api/cart/{user_id}/items/{item_id}",
            put(update_item_handler).delete(remove_item_handler),
        )
        .route("/api/cart/{user_id}/summary", get(cart_summary_handler))
        .with_state(app_state)
}
