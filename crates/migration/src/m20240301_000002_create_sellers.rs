use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sellers::Table)
                    .if_not_exists()
                    .col(pk_auto(Sellers::Id))
                    .col(integer(Sellers::Cid).not_null().unique_key())
                    .col(string_len(Sellers::CompanyName, 128).not_null())
                    .col(string_len(Sellers::Address, 256).not_null())
                    .col(string_len(Sellers::Telephone, 32).not_null())
                    .col(integer(Sellers::LocalityId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sellers_locality")
                            .from(Sellers::Table, Sellers::LocalityId)
                            .to(Localities::Table, Localities::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Sellers::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Sellers {
    Table,
    Id,
    Cid,
    CompanyName,
    Address,
    Telephone,
    LocalityId,
}

#[derive(DeriveIden)]
enum Localities { Table, Id }
