//! crates/storefront_core/src/cart_store.rs
//!
//! The in-memory cart aggregate. `CartStore` is the exclusive owner of the
//! user -> cart mapping. Every operation runs under one store-wide lock, so a
//! get-or-create followed by a merge or id assignment is atomic as a unit.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};
use crate::domain::{Cart, CartItem, CartSummary, ItemQuantityUpdate, NewCartItem};
use crate::ports::{CartRepository, PortError, PortResult};

/// Failures of cart operations that do not auto-create the cart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CartError {
    #[error("Cart not found")]
    CartNotFound(String),
    #[error("Item not found")]
    ItemNotFound { user_id: String, item_id: i32 },
    #[error("Cart total for {0} exceeds the representable amount")]
    TotalOverflow(String),
}

impl From<CartError> for PortError {
    fn from(err: CartError) -> Self {
        match err {
            CartError::CartNotFound(user_id) => PortError::CartNotFound(user_id),
            CartError::ItemNotFound { item_id, .. } => PortError::ItemNotFound(item_id),
            err @ CartError::TotalOverflow(_) => PortError::Unexpected(err.to_string()),
        }
    }
}

pub struct CartStore {
    carts: Mutex<HashMap<String, Cart>>,
    clock: Arc<dyn Clock>,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("carts", &self.carts.lock().len())
            .finish_non_exhaustive()
    }
}

impl CartStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            carts: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Returns a snapshot of the cart for `user_id`, creating an empty one on first access.
    pub fn get_or_create_cart(&self, user_id: &str) -> Cart {
        let mut carts = self.carts.lock();
        entry(&mut carts, user_id).clone()
    }

    /// Looks a cart up without registering it.
    pub fn find_cart(&self, user_id: &str) -> Option<Cart> {
        self.carts.lock().get(user_id).cloned()
    }

    /// Merges into the line with the same `product_id`, or appends a new line.
    ///
    /// On merge only the quantity and `updated_at` change: the stored name and
    /// price win over the candidate's. New lines get `max(id) + 1`, or 1 in an
    /// empty cart. Quantity and price are accepted as given.
    pub fn add_item(&self, user_id: &str, candidate: NewCartItem) -> CartItem {
        let now = self.clock.now();
        let mut carts = self.carts.lock();
        let cart = entry(&mut carts, user_id);

        if let Some(existing) = cart
            .items
            .iter_mut()
            .find(|item| item.product_id == candidate.product_id)
        {
            // Quantities are unvalidated; wrap rather than panic at the i32 edge.
            existing.quantity = existing.quantity.wrapping_add(candidate.quantity);
            existing.updated_at = now;
            debug!(
                user_id,
                item_id = existing.id,
                quantity = existing.quantity,
                "Merged cart item"
            );
            return existing.clone();
        }

        let id = next_item_id(cart);
        let item = CartItem {
            id,
            product_id: candidate.product_id,
            product_name: candidate.product_name,
            price: candidate.price,
            quantity: candidate.quantity,
            user_id: user_id.to_owned(),
            created_at: now,
            updated_at: now,
        };
        cart.items.push(item.clone());
        info!(user_id, item_id = id, product_id = item.product_id, "Added cart item");
        item
    }

    /// Sets the quantity of an existing line to exactly `patch.quantity`.
    pub fn update_item(
        &self,
        user_id: &str,
        item_id: i32,
        patch: ItemQuantityUpdate,
    ) -> Result<(), CartError> {
        let now = self.clock.now();
        let mut carts = self.carts.lock();
        let item = find_item_mut(&mut carts, user_id, item_id)?;
        item.quantity = patch.quantity;
        item.updated_at = now;
        info!(user_id, item_id, quantity = patch.quantity, "Updated cart item");
        Ok(())
    }

    pub fn remove_item(&self, user_id: &str, item_id: i32) -> Result<(), CartError> {
        let mut carts = self.carts.lock();
        let cart = carts
            .get_mut(user_id)
            .ok_or_else(|| CartError::CartNotFound(user_id.to_owned()))?;
        let position = cart
            .items
            .iter()
            .position(|item| item.id == item_id)
            .ok_or_else(|| CartError::ItemNotFound {
                user_id: user_id.to_owned(),
                item_id,
            })?;
        cart.items.remove(position);
        info!(user_id, item_id, "Removed cart item");
        Ok(())
    }

    /// Empties the cart; the cart itself stays registered.
    pub fn clear_cart(&self, user_id: &str) -> Result<(), CartError> {
        let mut carts = self.carts.lock();
        let cart = carts
            .get_mut(user_id)
            .ok_or_else(|| CartError::CartNotFound(user_id.to_owned()))?;
        let removed = cart.items.len();
        cart.items.clear();
        info!(user_id, removed, "Cleared cart");
        Ok(())
    }

    /// Live totals for `user_id`; all zeros when the cart was never referenced.
    pub fn summary(&self, user_id: &str) -> Result<CartSummary, CartError> {
        let carts = self.carts.lock();
        let Some(cart) = carts.get(user_id) else {
            return Ok(CartSummary::default());
        };
        cart.summary().ok_or_else(|| {
            warn!(user_id, "Cart total overflowed");
            CartError::TotalOverflow(user_id.to_owned())
        })
    }
}

fn entry<'a>(carts: &'a mut HashMap<String, Cart>, user_id: &str) -> &'a mut Cart {
    carts.entry(user_id.to_owned()).or_insert_with(|| {
        debug!(user_id, "Creating empty cart");
        Cart::new(user_id)
    })
}

fn next_item_id(cart: &Cart) -> i32 {
    cart.items.iter().map(|item| item.id).max().map_or(1, |max| max + 1)
}

fn find_item_mut<'a>(
    carts: &'a mut HashMap<String, Cart>,
    user_id: &str,
    item_id: i32,
) -> Result<&'a mut CartItem, CartError> {
    carts
        .get_mut(user_id)
        .ok_or_else(|| CartError::CartNotFound(user_id.to_owned()))?
        .items
        .iter_mut()
        .find(|item| item.id == item_id)
        .ok_or_else(|| CartError::ItemNotFound {
            user_id: user_id.to_owned(),
            item_id,
        })
}

//=========================================================================================
// CartRepository Implementation
//=========================================================================================

#[async_trait]
impl CartRepository for CartStore {
    async fn get_or_create_cart(&self, user_id: &str) -> PortResult<Cart> {
        Ok(CartStore::get_or_create_cart(self, user_id))
    }

    async fn add_item(&self, user_id: &str, item: NewCartItem) -> PortResult<CartItem> {
        Ok(CartStore::add_item(self, user_id, item))
    }

    async fn update_item(
        &self,
        user_id: &str,
        item_id: i32,
        patch: ItemQuantityUpdate,
    ) -> PortResult<()> {
        Ok(CartStore::update_item(self, user_id, item_id, patch)?)
    }

    async fn remove_item(&self, user_id: &str, item_id: i32) -> PortResult<()> {
        Ok(CartStore::remove_item(self, user_id, item_id)?)
    }

    async fn clear_cart(&self, user_id: &str) -> PortResult<()> {
        Ok(CartStore::clear_cart(self, user_id)?)
    }

    async fn summary(&self, user_id: &str) -> PortResult<CartSummary> {
        Ok(CartStore::summary(self, user_id)?)
    }
}
