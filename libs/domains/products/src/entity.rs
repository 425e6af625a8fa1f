use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::Product;

/// Sea-ORM Entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub currency_code: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            product_id: model.product_id,
            name: model.name,
            description: model.description,
            price: model.price,
            currency_code: model.currency_code,
        }
    }
}

impl ActiveModel {
    /// Full row for an INSERT, both timestamps set to now.
    pub fn for_insert(product: Product) -> Self {
        let now: DateTimeWithTimeZone = Utc::now().into();

        ActiveModel {
            product_id: Set(product.product_id),
            name: Set(product.name),
            description: Set(product.description),
            price: Set(product.price),
            currency_code: Set(product.currency_code),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    /// Mutable columns for an UPDATE keyed on `product_id`; `created_at` is untouched.
    pub fn for_update(product: Product) -> Self {
        ActiveModel {
            product_id: Set(product.product_id),
            name: Set(product.name),
            description: Set(product.description),
            price: Set(product.price),
            currency_code: Set(product.currency_code),
            created_at: NotSet,
            updated_at: Set(Utc::now().into()),
        }
    }
}
