use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductBatches::Table)
                    .if_not_exists()
                    .col(pk_auto(ProductBatches::Id))
                    .col(integer(ProductBatches::BatchNumber).not_null().unique_key())
                    .col(integer(ProductBatches::CurrentQuantity).not_null())
                    .col(double(ProductBatches::CurrentTemperature).not_null())
                    .col(date(ProductBatches::DueDate).not_null())
                    .col(integer(ProductBatches::InitialQuantity).not_null())
                    .col(date(ProductBatches::ManufacturingDate).not_null())
                    .col(integer(ProductBatches::ManufacturingHour).not_null())
                    .col(double(ProductBatches::MinimumTemperature).not_null())
                    .col(integer(ProductBatches::ProductId).not_null())
                    .col(integer(ProductBatches::SectionId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_batches_product")
                            .from(ProductBatches::Table, ProductBatches::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_batches_section")
                            .from(ProductBatches::Table, ProductBatches::SectionId)
                            .to(Sections::Table, Sections::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ProductBatches::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ProductBatches {
    Table,
    Id,
    BatchNumber,
    CurrentQuantity,
    CurrentTemperature,
    DueDate,
    InitialQuantity,
    ManufacturingDate,
    ManufacturingHour,
    MinimumTemperature,
    ProductId,
    SectionId,
}

#[derive(DeriveIden)]
enum Products { Table, Id }

#[derive(DeriveIden)]
enum Sections { Table, Id }
