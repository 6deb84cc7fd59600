use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Carriers::Table)
                    .if_not_exists()
                    .col(pk_auto(Carriers::Id))
                    .col(string_len(Carriers::Cid, 64).not_null().unique_key())
                    .col(string_len(Carriers::CompanyName, 128).not_null())
                    .col(string_len(Carriers::Address, 256).not_null())
                    .col(string_len(Carriers::Telephone, 32).not_null())
                    .col(integer(Carriers::LocalityId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_carriers_locality")
                            .from(Carriers::Table, Carriers::LocalityId)
                            .to(Localities::Table, Localities::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Carriers::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Carriers {
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
