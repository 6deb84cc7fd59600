use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_auto(Products::Id))
                    .col(string_len(Products::ProductCode, 64).not_null().unique_key())
                    .col(string_len(Products::Description, 256).not_null())
                    .col(double(Products::Width).not_null())
                    .col(double(Products::Height).not_null())
                    .col(double(Products::Length).not_null())
                    .col(double(Products::NetWeight).not_null())
                    .col(double(Products::ExpirationRate).not_null())
                    .col(double(Products::RecommendedFreezingTemperature).not_null())
                    .col(double(Products::FreezingRate).not_null())
                    .col(integer(Products::ProductTypeId).not_null())
                    .col(integer(Products::SellerId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_product_type")
                            .from(Products::Table, Products::ProductTypeId)
                            .to(ProductTypes::Table, ProductTypes::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_seller")
                            .from(Products::Table, Products::SellerId)
                            .to(Sellers::Table, Sellers::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Products::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    ProductCode,
    Description,
    Width,
    Height,
    Length,
    NetWeight,
    ExpirationRate,
    RecommendedFreezingTemperature,
    FreezingRate,
    ProductTypeId,
    SellerId,
}

#[derive(DeriveIden)]
enum ProductTypes { Table, Id }

#[derive(DeriveIden)]
enum Sellers { Table, Id }
