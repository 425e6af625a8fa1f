use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // product_id is client-assigned; the primary key rejects duplicates.
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        big_integer(Products::ProductId)
                            .primary_key()
                            .check(Expr::col(Products::ProductId).gt(0)),
                    )
                    .col(string_len(Products::Name, 255).default(""))
                    .col(text(Products::Description).default(""))
                    .col(double(Products::Price).check(Expr::col(Products::Price).gte(0)))
                    .col(string_len(Products::CurrencyCode, 3).default("USD"))
                    .col(
                        timestamp_with_time_zone(Products::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Products::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_created_at")
                    .table(Products::Table)
                    .col(Products::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    ProductId,
    Name,
    Description,
    Price,
    CurrencyCode,
    CreatedAt,
    UpdatedAt,
}
