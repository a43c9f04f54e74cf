//! services/product/src/web/state.rs

use crate::adapters::InMemoryProductRepository;
use std::sync::Arc;
use storefront_core::ports::ProductRepository;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<dyn ProductRepository>,
}

impl AppState {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    /// State backed by the seeded in-memory product list.
    pub fn seeded() -> Self {
        Self::new(Arc::new(InMemoryProductRepository::seeded()))
    }
}
