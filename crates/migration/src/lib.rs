//! Migrator registering table migrations in foreign-key dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_localities;
mod m20240301_000002_create_sellers;
mod m20240301_000003_create_carriers;
mod m20240301_000004_create_warehouses;
mod m20240301_000005_create_product_types;
mod m20240301_000006_create_sections;
mod m20240301_000007_create_products;
mod m20240301_000008_create_product_batches;
mod m20240301_000009_create_product_records;
mod m20240301_000010_create_employees;
mod m20240301_000011_create_buyers;
mod m20240301_000012_create_inbound_orders;
mod m20240301_000013_create_purchase_orders;
mod m20240301_000014_create_order_details;
mod m20240301_000015_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_localities::Migration),
            Box::new(m20240301_000002_create_sellers::Migration),
            Box::new(m20240301_000003_create_carriers::Migration),
            Box::new(m20240301_000004_create_warehouses::Migration),
            Box::new(m20240301_000005_create_product_types::Migration),
            Box::new(m20240301_000006_create_sections::Migration),
            Box::new(m20240301_000007_create_products::Migration),
            Box::new(m20240301_000008_create_product_batches::Migration),
            Box::new(m20240301_000009_create_product_records::Migration),
            Box::new(m20240301_000010_create_employees::Migration),
            Box::new(m20240301_000011_create_buyers::Migration),
            Box::new(m20240301_000012_create_inbound_orders::Migration),
            Box::new(m20240301_000013_create_purchase_orders::Migration),
            Box::new(m20240301_000014_create_order_details::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000015_add_indexes::Migration),
        ]
    }
}
