//! services/cart/src/web/state.rs
//!
//! Defines the state shared by all cart handlers.

use std::sync::Arc;
use storefront_core::{ports::CartRepository, CartStore};

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub carts: Arc<dyn CartRepository>,
}

impl AppState {
    pub fn new(carts: Arc<dyn CartRepository>) -> Self {
        Self { carts }
    }

    /// State backed by a fresh, empty `CartStore`.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(CartStore::new()))
    }
}
