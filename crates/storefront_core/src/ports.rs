//! crates/storefront_core/src/ports.rs
//!
//! Defines the service contracts (traits) the HTTP layers depend on.
//! Each service wires a concrete, in-memory implementation behind these traits,
//! so handlers never touch a collection directly.

use async_trait::async_trait;

use crate::domain::{
    Cart, CartItem, CartSummary, Category, CategoryUpdate, ItemQuantityUpdate, NewCartItem,
    NewCategory, NewProduct, Product,
};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    #[error("Cart not found")]
    CartNotFound(String),
    #[error("Item not found")]
    ItemNotFound(i32),
    #[error("{0} not found")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl PortError {
    /// True for every "missing key" outcome, which callers render as 404.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CartNotFound(_) | Self::ItemNotFound(_) | Self::NotFound(_)
        )
    }
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Returns the cart for `user_id`, registering an empty one first if needed.
    async fn get_or_create_cart(&self, user_id: &str) -> PortResult<Cart>;

    /// Adds or merges an item and returns the stored line.
    async fn add_item(&self, user_id: &str, item: NewCartItem) -> PortResult<CartItem>;

    async fn update_item(
        &self,
        user_id: &str,
        item_id: i32,
        patch: ItemQuantityUpdate,
    ) -> PortResult<()>;

    async fn remove_item(&self, user_id: &str, item_id: i32) -> PortResult<()>;

    async fn clear_cart(&self, user_id: &str) -> PortResult<()>;

    /// Never fails; an unknown user yields an all-zero summary.
    async fn summary(&self, user_id: &str) -> PortResult<CartSummary>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list_products(&self) -> PortResult<Vec<Product>>;

    async fn get_product(&self, id: i32) -> PortResult<Product>;

    async fn create_product(&self, product: NewProduct) -> PortResult<Product>;

    /// Overwrites every descriptive field of an existing product.
    async fn update_product(&self, id: i32, product: NewProduct) -> PortResult<()>;

    async fn delete_product(&self, id: i32) -> PortResult<()>;
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list_active_categories(&self) -> PortResult<Vec<Category>>;

    async fn get_active_category(&self, id: i32) -> PortResult<Category>;

    async fn create_category(&self, category: NewCategory) -> PortResult<Category>;

    async fn update_category(&self, id: i32, update: CategoryUpdate) -> PortResult<()>;

    /// Soft delete: the category stays stored with `is_active = false`.
    async fn deactivate_category(&self, id: i32) -> PortResult<()>;

    /// Case-insensitive substring match over name and description of active categories.
    async fn search_categories(&self, query: &str) -> PortResult<Vec<Category>>;
}
