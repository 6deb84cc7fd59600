//! Create `purchase_orders` table.
//! `order_status_id` is a plain status code; there is no status table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PurchaseOrders::Table)
                    .if_not_exists()
                    .col(pk_auto(PurchaseOrders::Id))
                    .col(string_len(PurchaseOrders::OrderNumber, 64).not_null().unique_key())
                    .col(date(PurchaseOrders::OrderDate).not_null())
                    .col(string_len(PurchaseOrders::TrackingCode, 128).not_null())
                    .col(integer(PurchaseOrders::BuyerId).not_null())
                    .col(integer(PurchaseOrders::CarrierId).not_null())
                    .col(integer(PurchaseOrders::OrderStatusId).not_null())
                    .col(integer(PurchaseOrders::WarehouseId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_orders_buyer")
                            .from(PurchaseOrders::Table, PurchaseOrders::BuyerId)
                            .to(Buyers::Table, Buyers::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_orders_carrier")
                            .from(PurchaseOrders::Table, PurchaseOrders::CarrierId)
                            .to(Carriers::Table, Carriers::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_orders_warehouse")
                            .from(PurchaseOrders::Table, PurchaseOrders::WarehouseId)
                            .to(Warehouses::Table, Warehouses::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PurchaseOrders::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PurchaseOrders {
    Table,
    Id,
    OrderNumber,
    OrderDate,
    TrackingCode,
    BuyerId,
    CarrierId,
    OrderStatusId,
    WarehouseId,
}

#[derive(DeriveIden)]
enum Buyers { Table, Id }

#[derive(DeriveIden)]
enum Carriers { Table, Id }

#[derive(DeriveIden)]
enum Warehouses { Table, Id }
