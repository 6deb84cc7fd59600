use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderDetails::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderDetails::Id))
                    .col(string_len(OrderDetails::CleanlinessStatus, 64).not_null())
                    .col(integer(OrderDetails::Quantity).not_null())
                    .col(double(OrderDetails::Temperature).not_null())
                    .col(integer(OrderDetails::ProductRecordId).not_null())
                    .col(integer(OrderDetails::PurchaseOrderId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_details_product_record")
                            .from(OrderDetails::Table, OrderDetails::ProductRecordId)
                            .to(ProductRecords::Table, ProductRecords::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_details_purchase_order")
                            .from(OrderDetails::Table, OrderDetails::PurchaseOrderId)
                            .to(PurchaseOrders::Table, PurchaseOrders::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(OrderDetails::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum OrderDetails {
    Table,
    Id,
    CleanlinessStatus,
    Quantity,
    Temperature,
    ProductRecordId,
    PurchaseOrderId,
}

#[derive(DeriveIden)]
enum ProductRecords { Table, Id }

#[derive(DeriveIden)]
enum PurchaseOrders { Table, Id }
