//! services/catalog/src/adapters/memory.rs
//!
//! The process-local category list behind the `CategoryRepository` port.
//! Deleting a category only deactivates it; inactive categories are invisible
//! to every read but can still be updated (and reactivated).

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use storefront_core::{
    domain::{Category, CategoryUpdate, NewCategory},
    ports::{CategoryRepository, PortError, PortResult},
    Clock, SystemClock,
};
use tracing::{debug, info};

pub struct InMemoryCategoryRepository {
    categories: RwLock<Vec<Category>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryCategoryRepository {
    pub fn new(categories: Vec<Category>, clock: Arc<dyn Clock>) -> Self {
        Self {
            categories: RwLock::new(categories),
            clock,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Arc::new(SystemClock))
    }

    pub fn seeded() -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let now = clock.now();
        let seed = [
            (
                "Electronics",
                "Electronic devices and gadgets",
                "https://example.com/electronics.jpg",
            ),
            ("Clothing", "Fashion and apparel", "https://example.com/clothing.jpg"),
            ("Books", "Books and literature", "https://example.com/books.jpg"),
        ];
        let categories = seed
            .into_iter()
            .zip(1..)
            .map(|((name, description, image_url), id)| Category {
                id,
                name: name.to_string(),
                description: description.to_string(),
                image_url: image_url.to_string(),
                is_active: true,
                created_at: now,
                updated_at: now,
            })
            .collect();
        Self::new(categories, clock)
    }
}

fn not_found(id: i32) -> PortError {
    PortError::NotFound(format!("Category {}", id))
}

/// Unicode-aware, case-insensitive substring test.
fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list_active_categories(&self) -> PortResult<Vec<Category>> {
        Ok(self
            .categories
            .read()
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect())
    }

    async fn get_active_category(&self, id: i32) -> PortResult<Category> {
        self.categories
            .read()
            .iter()
            .find(|c| c.id == id && c.is_active)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn create_category(&self, category: NewCategory) -> PortResult<Category> {
        let now = self.clock.now();
        let mut categories = self.categories.write();
        let id = categories.iter().map(|c| c.id).max().map_or(1, |max| max + 1);
        let created = Category {
            id,
            name: category.name,
            description: category.description,
            image_url: category.image_url,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        categories.push(created.clone());
        info!(category_id = id, "Created category");
        Ok(created)
    }

    async fn update_category(&self, id: i32, update: CategoryUpdate) -> PortResult<()> {
        let now = self.clock.now();
        let mut categories = self.categories.write();
        let existing = categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found(id))?;
        existing.name = update.name;
        existing.description = update.description;
        existing.image_url = update.image_url;
        existing.is_active = update.is_active;
        existing.updated_at = now;
        info!(category_id = id, is_active = update.is_active, "Updated category");
        Ok(())
    }

    async fn deactivate_category(&self, id: i32) -> PortResult<()> {
        let now = self.clock.now();
        let mut categories = self.categories.write();
        let existing = categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| not_found(id))?;
        existing.is_active = false;
        existing.updated_at = now;
        info!(category_id = id, "Deactivated category");
        Ok(())
    }

    async fn search_categories(&self, query: &str) -> PortResult<Vec<Category>> {
        let needle = query.to_lowercase();
        debug!(query, "Searching categories");
        Ok(self
            .categories
            .read()
            .iter()
            .filter(|c| {
                c.is_active
                    && (contains_ignore_case(&c.name, &needle)
                        || contains_ignore_case(&c.description, &needle))
            })
            .cloned()
            .collect())
    }
}
