pub mod rest;
pub mod state;

use axum::{routing::get, Router};
use std::sync::Arc;

pub use rest::ApiDoc;
use rest::{
    create_category_handler, delete_category_handler, get_category_handler, health_handler,
    list_categories_handler, search_categories_handler, update_category_handler,
};
pub use state::AppState;

/// `search` and `health` are static segments, so they are matched before `{id}`.
pub fn router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/api/catalog",
            get(list_categories_handler).post(create_category_handler),
        )
        .route("/api/catalog/search", get(search_categories_handler))
        .route("/api/catalog/health", get(health_handler))
        .route(
            "/api/catalog/{id}",
            get(get_category_handler)
                .put(update_category_handler)
                .delete(delete_category_handler),
        )
        .with_state(app_state)
}
