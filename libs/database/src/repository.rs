//! Generic single-table repository on top of SeaORM.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait,
};

/// Primary-key CRUD for a single entity.
///
/// Domain repositories wrap this and add their own queries on top, using
/// [`BaseRepository::db`] for anything beyond single-row access.
#[derive(Debug, Clone)]
pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E> BaseRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub async fn find_by_id<K>(&self, id: K) -> Result<Option<E::Model>, DbErr>
    where
        K: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        E::find_by_id(id).one(&self.db).await
    }

    pub async fn insert(&self, model: E::ActiveModel) -> Result<E::Model, DbErr> {
        model.insert(&self.db).await
    }

    /// Fails with [`DbErr::RecordNotUpdated`] when no row matches the primary key.
    pub async fn update(&self, model: E::ActiveModel) -> Result<E::Model, DbErr> {
        model.update(&self.db).await
    }

    /// Returns the number of deleted rows.
    pub async fn delete_by_id<K>(&self, id: K) -> Result<u64, DbErr>
    where
        K: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    mod widget {
        use sea_orm::entity::prelude::*;

        #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
        #[sea_orm(table_name = "widgets")]
        pub struct Model {
            #[sea_orm(primary_key, auto_increment = false)]
            pub id: i64,
            pub label: String,
        }

        #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
        pub enum Relation {}

        impl ActiveModelBehavior for ActiveModel {}
    }

    #[tokio::test]
    async fn test_find_by_id_returns_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![widget::Model {
                id: 7,
                label: "bolt".to_string(),
            }]])
            .into_connection();

        let repo = BaseRepository::<widget::Entity>::new(db);
        let found = repo.find_by_id(7_i64).await.unwrap();

        assert_eq!(found.map(|w| w.label), Some("bolt".to_string()));
    }

    #[tokio::test]
    async fn test_find_by_id_returns_none_for_empty_result() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<widget::Model>::new()])
            .into_connection();

        let repo = BaseRepository::<widget::Entity>::new(db);
        assert!(repo.find_by_id(99_i64).await.unwrap().is_none());
    }
}
