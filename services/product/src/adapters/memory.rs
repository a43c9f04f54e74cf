//! services/product/src/adapters/memory.rs
//!
//! The process-local product list, the concrete implementation of the
//! `ProductRepository` port.

use async_trait::async_trait;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use std::sync::Arc;
use storefront_core::{
    domain::{NewProduct, Product},
    ports::{PortError, PortResult, ProductRepository},
    Clock, SystemClock,
};
use tracing::info;

pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryProductRepository {
    pub fn new(products: Vec<Product>, clock: Arc<dyn Clock>) -> Self {
        Self {
            products: RwLock::new(products),
            clock,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Arc::new(SystemClock))
    }

    /// A repository holding the three demo products, stamped with the current time.
    pub fn seeded() -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let now = clock.now();
        let seed = [
            ("Laptop", "High-performance laptop", Decimal::new(99999, 2), 50),
            ("Smartphone", "Latest smartphone model", Decimal::new(69999, 2), 100),
            ("Headphones", "Wireless noise-canceling headphones", Decimal::new(19999, 2), 75),
        ];
        let products = seed
            .into_iter()
            .zip(1..)
            .map(|((name, description, price, stock_quantity), id)| Product {
                id,
                name: name.to_string(),
                description: description.to_string(),
                price,
                stock_quantity,
                category: "Electronics".to_string(),
                created_at: now,
                updated_at: now,
            })
            .collect();
        Self::new(products, clock)
    }
}

fn not_found(id: i32) -> PortError {
    PortError::NotFound(format!("Product {}", id))
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_products(&self) -> PortResult<Vec<Product>> {
        Ok(self.products.read().clone())
    }

    async fn get_product(&self, id: i32) -> PortResult<Product> {
        self.products
            .read()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create_product(&self, product: NewProduct) -> PortResult<Product> {
        let now = self.clock.now();
        let mut products = self.products.write();
        let id = products.iter().map(|p| p.id).max().map_or(1, |max| max + 1);
        let created = Product {
            id,
            name: product.name,
            description: product.description,
            price: product.price,
            stock_quantity: product.stock_quantity,
            category: product.category,
            created_at: now,
            updated_at: now,
        };
        products.push(created.clone());
        info!(product_id = id, "Created product");
        Ok(created)
    }

    async fn update_product(&self, id: i32, product: NewProduct) -> PortResult<()> {
        let now = self.clock.now();
        let mut products = self.products.write();
        let existing = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found(id))?;
        existing.name = product.name;
        existing.description = product.description;
        existing.price = product.price;
        existing.stock_quantity = product.stock_quantity;
        existing.category = product.category;
        existing.updated_at = now;
        info!(product_id = id, "Updated product");
        Ok(())
    }

    async fn delete_product(&self, id: i32) -> PortResult<()> {
        let mut products = self.products.write();
        let position = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| not_found(id))?;
        products.remove(position);
        info!(product_id = id, "Deleted product");
        Ok(())
    }
}
