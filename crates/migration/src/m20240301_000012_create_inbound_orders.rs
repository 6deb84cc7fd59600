use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InboundOrders::Table)
                    .if_not_exists()
                    .col(pk_auto(InboundOrders::Id))
                    .col(date(InboundOrders::OrderDate).not_null())
                    .col(string_len(InboundOrders::OrderNumber, 64).not_null().unique_key())
                    .col(integer(InboundOrders::EmployeeId).not_null())
                    .col(integer(InboundOrders::ProductBatchId).not_null())
                    .col(integer(InboundOrders::WarehouseId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inbound_orders_employee")
                            .from(InboundOrders::Table, InboundOrders::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inbound_orders_product_batch")
                            .from(InboundOrders::Table, InboundOrders::ProductBatchId)
                            .to(ProductBatches::Table, ProductBatches::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inbound_orders_warehouse")
                            .from(InboundOrders::Table, InboundOrders::WarehouseId)
                            .to(Warehouses::Table, Warehouses::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(InboundOrders::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum InboundOrders {
    Table,
    Id,
    OrderDate,
    OrderNumber,
    EmployeeId,
    ProductBatchId,
    WarehouseId,
}

#[derive(DeriveIden)]
enum Employees { Table, Id }

#[derive(DeriveIden)]
enum ProductBatches { Table, Id }

#[derive(DeriveIden)]
enum Warehouses { Table, Id }
