//! Create `localities` table.
//! Localities are referenced by sellers, carriers and warehouses.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Localities::Table)
                    .if_not_exists()
                    .col(pk_auto(Localities::Id))
                    .col(string_len(Localities::LocalityName, 128).not_null())
                    .col(string_len(Localities::ProvinceName, 128).not_null())
                    .col(string_len(Localities::CountryName, 128).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Localities::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Localities {
    Table,
    Id,
    LocalityName,
    ProvinceName,
    CountryName,
}
