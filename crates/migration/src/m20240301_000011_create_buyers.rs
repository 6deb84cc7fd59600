use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Buyers::Table)
                    .if_not_exists()
                    .col(pk_auto(Buyers::Id))
                    .col(string_len(Buyers::CardNumberId, 64).not_null().unique_key())
                    .col(string_len(Buyers::FirstName, 128).not_null())
                    .col(string_len(Buyers::LastName, 128).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Buyers::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Buyers {
    Table,
    Id,
    CardNumberId,
    FirstName,
    LastName,
}
