use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductRecords::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductRecords::Id))
                    .col(date_time(ProductRecords::LastUpdateDate).not_null())
                    .col(double(ProductRecords::PurchasePrice).not_null())
                    .col(double(ProductRecords::SalePrice).not_null())
                    .col(integer(ProductRecords::ProductId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_records_product")
                            .from(ProductRecords::Table, ProductRecords::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ProductRecords::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ProductRecords {
    Table,
    Id,
    LastUpdateDate,
    PurchasePrice,
    SalePrice,
    ProductId,
}

#[derive(DeriveIden)]
enum Products { Table, Id }
