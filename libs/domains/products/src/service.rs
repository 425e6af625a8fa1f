use std::sync::Arc;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::repository::ProductRepository;

/// Service layer for Product business logic
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn find_all_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    /// `None` when no persisted product has this id
    pub async fn find_product_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let product = self.repository.find_by_id(id).await?;
        Ok(product.filter(Product::is_persisted))
    }

    /// Persist a new product; an existing id yields `Duplicate`
    pub async fn create_product(&self, product: Product) -> ProductResult<()> {
        self.repository.insert(product).await?;
        Ok(())
    }

    /// Overwrite `existing` with the mutable fields of `new_data`.
    ///
    /// The id always comes from `existing`.
    pub async fn update_product(&self, new_data: Product, existing: Product) -> ProductResult<()> {
        let id = existing.product_id;
        let merged = Product {
            product_id: id,
            ..new_data
        };

        if !self.repository.update(merged).await? {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }

    pub async fn delete_product(&self, product: Product) -> ProductResult<()> {
        let id = product.product_id;

        if !self.repository.delete(id).await? {
            return Err(ProductError::NotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    fn product(id: i64, name: &str, price: f64) -> Product {
        Product {
            product_id: id,
            name: name.to_string(),
            description: "desc".to_string(),
            price,
            currency_code: "USD".to_string(),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_hides_non_persisted_rows() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(0))
            .returning(|_| Ok(Some(product(0, "ghost", 1.0))));

        let service = ProductService::new(mock_repo);
        assert!(service.find_product_by_id(0).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_id_returns_product() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(4))
            .returning(|_| Ok(Some(product(4, "Mug", 6.0))));

        let service = ProductService::new(mock_repo);
        let found = service.find_product_by_id(4).await.unwrap();
        assert_eq!(found.map(|p| p.name), Some("Mug".to_string()));
    }

    #[tokio::test]
    async fn test_create_propagates_duplicate() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_insert()
            .times(1)
            .returning(|p| Err(ProductError::Duplicate(p.product_id)));

        let service = ProductService::new(mock_repo);
        let result = service.create_product(product(1, "Mug", 6.0)).await;

        assert!(matches!(result, Err(ProductError::Duplicate(1))));
    }

    #[tokio::test]
    async fn test_update_keeps_existing_id() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_update()
            .withf(|p| p.product_id == 8 && p.name == "Renamed" && p.price == 12.0)
            .times(1)
            .returning(|_| Ok(true));

        let service = ProductService::new(mock_repo);
        service
            .update_product(product(999, "Renamed", 12.0), product(8, "Old", 3.0))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_of_vanished_row_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_update().returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);
        let result = service
            .update_product(product(8, "New", 1.0), product(8, "Old", 1.0))
            .await;

        assert!(matches!(result, Err(ProductError::NotFound(8))));
    }

    #[tokio::test]
    async fn test_delete_of_vanished_row_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_delete()
            .with(eq(5))
            .returning(|_| Ok(false));

        let service = ProductService::new(mock_repo);
        let result = service.delete_product(product(5, "Lamp", 1.0)).await;

        assert!(matches!(result, Err(ProductError::NotFound(5))));
    }

    #[tokio::test]
    async fn test_database_failure_propagates() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_all()
            .returning(|| Err(ProductError::Database("connection reset".to_string())));

        let service = ProductService::new(mock_repo);
        assert!(matches!(
            service.find_all_products().await,
            Err(ProductError::Database(_))
        ));
    }
}
