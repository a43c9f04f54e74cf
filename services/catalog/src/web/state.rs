//! services/catalog/src/web/state.rs

use crate::adapters::InMemoryCategoryRepository;
use std::sync::Arc;
use storefront_core::ports::CategoryRepository;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryRepository>,
}

impl AppState {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    /// State backed by the seeded in-memory category list.
    pub fn seeded() -> Self {
        Self::new(Arc::new(InMemoryCategoryRepository::seeded()))
    }
}
