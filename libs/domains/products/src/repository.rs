use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products ordered by ascending id
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Insert a new product, failing with `Duplicate` if the id is taken
    async fn insert(&self, product: Product) -> ProductResult<Product>;

    /// Replace the mutable fields of an existing product.
    ///
    /// Returns `false` when no row has `product.product_id`.
    async fn update(&self, product: Product) -> ProductResult<bool>;

    /// Returns `false` when nothing was deleted.
    async fn delete(&self, id: i64) -> ProductResult<bool>;
}

/// In-memory implementation for development and tests
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<BTreeMap<i64, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn insert(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        if products.contains_key(&product.product_id) {
            return Err(ProductError::Duplicate(product.product_id));
        }

        products.insert(product.product_id, product.clone());

        tracing::info!(product_id = product.product_id, "Created product");
        Ok(product)
    }

    async fn update(&self, product: Product) -> ProductResult<bool> {
        let mut products = self.products.write().await;

        match products.get_mut(&product.product_id) {
            Some(existing) => {
                tracing::info!(product_id = product.product_id, "Updated product");
                *existing = product;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: i64) -> ProductResult<bool> {
        let mut products = self.products.write().await;
        let removed = products.remove(&id).is_some();

        if removed {
            tracing::info!(product_id = id, "Deleted product");
        }

        Ok(removed)
    }
}
