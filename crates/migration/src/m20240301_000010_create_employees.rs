use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(pk_auto(Employees::Id))
                    .col(string_len(Employees::CardNumberId, 64).not_null().unique_key())
                    .col(string_len(Employees::FirstName, 128).not_null())
                    .col(string_len(Employees::LastName, 128).not_null())
                    .col(integer(Employees::WarehouseId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_employees_warehouse")
                            .from(Employees::Table, Employees::WarehouseId)
                            .to(Warehouses::Table, Warehouses::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Employees::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    Id,
    CardNumberId,
    FirstName,
    LastName,
    WarehouseId,
}

#[derive(DeriveIden)]
enum Warehouses { Table, Id }
