use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder, SqlErr};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::Product,
    repository::ProductRepository,
};

pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::ProductId)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn insert(&self, product: Product) -> ProductResult<Product> {
        let id = product.product_id;

        let model = self
            .base
            .insert(entity::ActiveModel::for_insert(product))
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => ProductError::Duplicate(id),
                _ => ProductError::from(e),
            })?;

        tracing::info!(product_id = model.product_id, "Created product");
        Ok(model.into())
    }

    async fn update(&self, product: Product) -> ProductResult<bool> {
        let id = product.product_id;

        match self
            .base
            .update(entity::ActiveModel::for_update(product))
            .await
        {
            Ok(_) => {
                tracing::info!(product_id = id, "Updated product");
                Ok(true)
            }
            Err(DbErr::RecordNotUpdated) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: i64) -> ProductResult<bool> {
        let rows = self.base.delete_by_id(id).await?;

        if rows > 0 {
            tracing::info!(product_id = id, "Deleted product");
        }

        Ok(rows > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: i64, name: &str) -> entity::Model {
        let now = Utc::now().into();
        entity::Model {
            product_id: id,
            name: name.to_string(),
            description: String::new(),
            price: 4.5,
            currency_code: "USD".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_find_all_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "a"), model(2, "b")]])
            .into_connection();

        let repo = PgProductRepository::new(db);
        let products = repo.find_all().await.unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[1].name, "b");
    }

    #[tokio::test]
    async fn test_delete_reports_missing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();

        let repo = PgProductRepository::new(db);

        assert!(repo.delete(1).await.unwrap());
        assert!(!repo.delete(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_query_failure_becomes_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let repo = PgProductRepository::new(db);
        let result = repo.find_by_id(1).await;

        assert!(matches!(result, Err(ProductError::Database(_))));
    }
}
