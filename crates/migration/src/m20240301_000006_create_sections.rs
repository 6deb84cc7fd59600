//! Create `sections` table.
//! A section is a temperature-controlled area of a warehouse holding one product type.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sections::Table)
                    .if_not_exists()
                    .col(pk_auto(Sections::Id))
                    .col(integer(Sections::SectionNumber).not_null().unique_key())
                    .col(double(Sections::CurrentTemperature).not_null())
                    .col(double(Sections::MinimumTemperature).not_null())
                    .col(integer(Sections::CurrentCapacity).not_null())
                    .col(integer(Sections::MinimumCapacity).not_null())
                    .col(integer(Sections::MaximumCapacity).not_null())
                    .col(integer(Sections::WarehouseId).not_null())
                    .col(integer(Sections::ProductTypeId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sections_warehouse")
                            .from(Sections::Table, Sections::WarehouseId)
                            .to(Warehouses::Table, Warehouses::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sections_product_type")
                            .from(Sections::Table, Sections::ProductTypeId)
                            .to(ProductTypes::Table, ProductTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Sections::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Sections {
    Table,
    Id,
    SectionNumber,
    CurrentTemperature,
    MinimumTemperature,
    CurrentCapacity,
    MinimumCapacity,
    MaximumCapacity,
    WarehouseId,
    ProductTypeId,
}

#[derive(DeriveIden)]
enum Warehouses { Table, Id }

#[derive(DeriveIden)]
enum ProductTypes { Table, Id }
