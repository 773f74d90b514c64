//! In-memory resource store.
//!
//! [`Catalog`] owns the product sequence, the id allocator and the fixed
//! category list for the life of the process. Products and the allocator sit
//! behind one `RwLock`, so an insert allocates its id and appends the record
//! in a single critical section and readers never see a half-applied write.

use tokio::sync::RwLock;
use tracing::debug;

use crate::model::{Category, CategoryId, Product, ProductId, ProductInput};

/// Strictly increasing product id sequence.
#[derive(Debug)]
pub struct IdAllocator {
    last: ProductId,
}

impl IdAllocator {
    /// Continues after the largest id in `existing` (or from 0 when empty).
    pub fn seeded_from<'a>(existing: impl IntoIterator<Item = &'a Product>) -> Self {
        let last = existing.into_iter().map(|p| p.id).max().unwrap_or(0);
        Self { last }
    }

    pub fn next(&mut self) -> ProductId {
        self.last += 1;
        self.last
    }
}

struct Inner {
    products: Vec<Product>,
    ids: IdAllocator,
}

/// The authoritative product and category collection.
pub struct Catalog {
    inner: RwLock<Inner>,
    categories: Vec<Category>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        let ids = IdAllocator::seeded_from(&products);
        Self {
            inner: RwLock::new(Inner { products, ids }),
            categories,
        }
    }

    /// The fixed state the service starts with: products 1..=5 and
    /// categories 1..=3.
    pub fn seeded() -> Self {
        let categories = vec![
            category(1, "Computación"),
            category(2, "Telefonía"),
            category(3, "Accesorios"),
        ];
        let products = vec![
            product(1, "Laptop", "Ultrabook 13 pulgadas", 1),
            product(2, "Smartphone", "Pantalla OLED 6.1''", 2),
            product(3, "Teclado", "Mecánico retroiluminado", 3),
            product(4, "Mouse", "Ergonómico inalámbrico", 3),
            product(5, "Monitor", "4K UHD 27 pulgadas", 1),
        ];
        Self::new(products, categories)
    }

    /// All products in insertion order.
    pub async fn list(&self) -> Vec<Product> {
        self.inner.read().await.products.clone()
    }

    /// Products whose `category_id` equals `category_id`, in insertion order.
    /// Unknown categories simply match nothing.
    pub async fn list_by_category(&self, category_id: CategoryId) -> Vec<Product> {
        self.inner
            .read()
            .await
            .products
            .iter()
            .filter(|p| p.category_id == Some(category_id))
            .cloned()
            .collect()
    }

    pub async fn find_by_id(&self, id: ProductId) -> Option<Product> {
        self.inner.read().await.products.iter().find(|p| p.id == id).cloned()
    }

    pub async fn insert(&self, input: ProductInput) -> Product {
        let mut inner = self.inner.write().await;
        let id = inner.ids.next();
        let product = Product::from_input(id, input);
        inner.products.push(product.clone());
        debug!(id, "product inserted");
        product
    }

    /// Overwrites the product's fields in place, keeping its id and position.
    pub async fn replace(&self, id: ProductId, input: ProductInput) -> Option<Product> {
        let mut inner = self.inner.write().await;
        let slot = inner.products.iter_mut().find(|p| p.id == id)?;
        *slot = Product::from_input(id, input);
        debug!(id, "product replaced");
        Some(slot.clone())
    }

    /// Removes the product, preserving the order of the rest.
    pub async fn remove_by_id(&self, id: ProductId) -> bool {
        let mut inner = self.inner.write().await;
        match inner.products.iter().position(|p| p.id == id) {
            Some(idx) => {
                inner.products.remove(idx);
                debug!(id, "product removed");
                true
            }
            None => false,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.products.len()
    }
}

impl Default for Catalog {
    fn default() -> Self { Self::seeded() }
}

fn category(id: CategoryId, name: &str) -> Category {
    Category { id, name: name.to_owned() }
}

fn product(id: ProductId, name: &str, description: &str, category_id: CategoryId) -> Product {
    Product {
        id,
        name: name.to_owned(),
        description: description.to_owned(),
        category_id: Some(category_id),
    }
}
