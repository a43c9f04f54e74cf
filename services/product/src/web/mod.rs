pub mod rest;
pub mod state;

use axum::{routing::get, Router};
use std::sync::Arc;

pub use rest::ApiDoc;
use rest::{
    create_product_handler, delete_product_handler, get_product_handler, health_handler,
    list_products_handler, update_product_handler,
};
pub use state::AppState;

pub fn router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/product",
            get(list_products_handler).post(create_product_handler),
        )
        .route("/api/product/health", get(health_handler))
        .route(
            "/api/product/{id}",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
        .with_state(app_state)
}
