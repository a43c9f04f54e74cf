//! crates/storefront_core/src/domain.rs
//!
//! Defines the pure, core data structures shared by the storefront services.
//! These structs are independent of any HTTP or serialization format.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

//=========================================================================================
// Carts
//=========================================================================================

/// One product entry within a cart, with its own quantity and identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    /// Unique within the owning cart; assigned by the store.
    pub id: i32,
    pub product_id: i32,
    pub product_name: String,
    /// Unit price at the time of the first add.
    pub price: Decimal,
    pub quantity: i32,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartItem {
    /// `price * quantity` for this line, or `None` if it exceeds `Decimal`'s range.
    pub fn line_total(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

/// The collection of line items associated with one user identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    pub user_id: String,
    /// Insertion order of the first add for each product.
    pub items: Vec<CartItem>,
}

impl Cart {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            items: Vec::new(),
        }
    }

    /// Sum of `price * quantity` over all items. `None` when any line or the
    /// running sum overflows; prices and quantities are stored unvalidated, so
    /// this is reachable from ordinary adds.
    pub fn total_amount(&self) -> Option<Decimal> {
        self.items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.line_total()?))
    }

    /// Sum of quantities over all items.
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|item| i64::from(item.quantity)).sum()
    }

    pub fn summary(&self) -> Option<CartSummary> {
        Some(CartSummary {
            total_items: self.total_items(),
            total_amount: self.total_amount()?,
            item_count: self.items.len(),
        })
    }
}

/// The client-supplied part of a cart item on add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCartItem {
    pub product_id: i32,
    pub product_name: String,
    pub price: Decimal,
    pub quantity: i32,
}

/// Absolute quantity to set on an existing cart item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemQuantityUpdate {
    pub quantity: i32,
}

/// Derived totals of a cart, computed on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartSummary {
    pub total_items: i64,
    pub total_amount: Decimal,
    /// Number of distinct line items, not the sum of quantities.
    pub item_count: usize,
}

//=========================================================================================
// Products
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Descriptive fields of a product, used both to create and to overwrite one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub stock_quantity: i32,
    pub category: String,
}

//=========================================================================================
// Categories
//=========================================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image_url: String,
    /// Inactive categories are hidden from reads but still updatable.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryUpdate {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub is_active: bool,
}
