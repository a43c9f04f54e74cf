//! services/cart/src/bin/cart.rs

use cart_service::{
    web::{router, ApiDoc, AppState},
    DEFAULT_BIND_ADDRESS,
};
use std::sync::Arc;
use storefront_http::{build_app, init_tracing, serve, ApiError, Config};
use tracing::info;
use utoipa::OpenApi;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Config::from_env(DEFAULT_BIND_ADDRESS)?;
    init_tracing(config.log_level);
    info!("Configuration loaded. Starting cart service...");

    // --- 2. Build the Shared AppState ---
    let app_state = Arc::new(AppState::in_memory());

    // --- 3. Create the Web Router & Start the Server ---
    let app = build_app(&config, router(app_state), ApiDoc::openapi())?;
    serve("cart service", &config, app).await
}
