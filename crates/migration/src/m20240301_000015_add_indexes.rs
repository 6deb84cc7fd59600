//! Indexes on the foreign-key columns used by the reporting joins.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // PurchaseOrders: counted per buyer
        manager
            .create_index(
                Index::create()
                    .name("idx_purchase_orders_buyer")
                    .table(PurchaseOrders::Table)
                    .col(PurchaseOrders::BuyerId)
                    .to_owned(),
            )
            .await?;

        // InboundOrders: counted per employee
        manager
            .create_index(
                Index::create()
                    .name("idx_inbound_orders_employee")
                    .table(InboundOrders::Table)
                    .col(InboundOrders::EmployeeId)
                    .to_owned(),
            )
            .await?;

        // ProductBatches: summed per section
        manager
            .create_index(
                Index::create()
                    .name("idx_product_batches_section")
                    .table(ProductBatches::Table)
                    .col(ProductBatches::SectionId)
                    .to_owned(),
            )
            .await?;

        // ProductRecords: counted per product
        manager
            .create_index(
                Index::create()
                    .name("idx_product_records_product")
                    .table(ProductRecords::Table)
                    .col(ProductRecords::ProductId)
                    .to_owned(),
            )
            .await?;

        // Sellers and carriers: counted per locality
        manager
            .create_index(
                Index::create()
                    .name("idx_sellers_locality")
                    .table(Sellers::Table)
                    .col(Sellers::LocalityId)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_carriers_locality")
                    .table(Carriers::Table)
                    .col(Carriers::LocalityId)
                    .to_owned(),
            )
            .await?;

        // OrderDetails: listed per purchase order
        manager
            .create_index(
                Index::create()
                    .name("idx_order_details_purchase_order")
                    .table(OrderDetails::Table)
                    .col(OrderDetails::PurchaseOrderId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_purchase_orders_buyer").table(PurchaseOrders::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_inbound_orders_employee").table(InboundOrders::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_product_batches_section").table(ProductBatches::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_product_records_product").table(ProductRecords::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_sellers_locality").table(Sellers::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_carriers_locality").table(Carriers::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_order_details_purchase_order").table(OrderDetails::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PurchaseOrders { Table, BuyerId }

#[derive(DeriveIden)]
enum InboundOrders { Table, EmployeeId }

#[derive(DeriveIden)]
enum ProductBatches { Table, SectionId }

#[derive(DeriveIden)]
enum ProductRecords { Table, ProductId }

#[derive(DeriveIden)]
enum Sellers { Table, LocalityId }

#[derive(DeriveIden)]
enum Carriers { Table, LocalityId }

#[derive(DeriveIden)]
enum OrderDetails { Table, PurchaseOrderId }
