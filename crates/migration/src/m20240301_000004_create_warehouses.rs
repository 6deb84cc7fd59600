use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Warehouses::Table)
                    .if_not_exists()
                    .col(pk_auto(Warehouses::Id))
                    .col(string_len(Warehouses::WarehouseCode, 64).not_null().unique_key())
                    .col(string_len(Warehouses::Address, 256).not_null())
                    .col(string_len(Warehouses::Telephone, 32).not_null())
                    .col(integer(Warehouses::MinimumCapacity).not_null())
                    .col(double(Warehouses::MinimumTemperature).not_null())
                    .col(integer(Warehouses::LocalityId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_warehouses_locality")
                            .from(Warehouses::Table, Warehouses::LocalityId)
                            .to(Localities::Table, Localities::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Warehouses::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Warehouses {
    Table,
    Id,
    WarehouseCode,
    Address,
    Telephone,
    MinimumCapacity,
    MinimumTemperature,
    LocalityId,
}

#[derive(DeriveIden)]
enum Localities { Table, Id }
