#![cfg(test)]
use chrono::NaiveDate;
use migration::MigratorTrait;
use models::{
    buyer, carrier, locality, product, product_record, product_type, purchase_order, seller, warehouse,
};
use sea_orm::DatabaseConnection;

use models::db::{connect_with_config, DatabaseConfig};

use crate::{errors::ServiceError, registry::Repositories, repository::{Repository, SeaOrmRepository}};

/// Fresh, migrated SQLite database living in memory.
///
/// A single pooled connection keeps every statement on the same in-memory
/// database for the lifetime of the returned handle.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let mut cfg = DatabaseConfig::for_url("sqlite::memory:");
    cfg.max_connections = 1;
    cfg.min_connections = 1;
    cfg.acquire_timeout = std::time::Duration::from_secs(10);
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub async fn seed_locality(db: &DatabaseConnection) -> Result<locality::Model, ServiceError> {
    SeaOrmRepository::<locality::Entity>::new(db.clone())
        .create(locality::Draft {
            locality_name: "Palermo".into(),
            province_name: "Buenos Aires".into(),
            country_name: "Argentina".into(),
        })
        .await
}

/// Ids of the rows a purchase order and its details depend on.
pub struct OrderGraph {
    pub locality_id: i32,
    pub product_type_id: i32,
    pub product_id: i32,
    pub seller_id: i32,
    pub buyer_id: i32,
    pub carrier_id: i32,
    pub warehouse_id: i32,
    pub product_record_id: i32,
}

impl OrderGraph {
    pub fn order(&self, number: &str) -> purchase_order::Draft {
        purchase_order::Draft {
            order_number: number.into(),
            order_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            tracking_code: format!("TRK-{number}"),
            buyer_id: self.buyer_id,
            carrier_id: self.carrier_id,
            order_status_id: 1,
            warehouse_id: self.warehouse_id,
        }
    }
}

/// Seed locality → seller/carrier/warehouse → product → record and a buyer,
/// through whichever backend `repos` wraps.
pub async fn seed_order_graph(repos: &Repositories) -> Result<OrderGraph, ServiceError> {
    let loc = repos
        .localities
        .create(locality::Draft {
            locality_name: "Palermo".into(),
            province_name: "Buenos Aires".into(),
            country_name: "Argentina".into(),
        })
        .await?;
    let seller = repos
        .sellers
        .create(seller::Draft {
            cid: 1,
            company_name: "Frozen Foods".into(),
            address: "Main St".into(),
            telephone: "555".into(),
            locality_id: loc.id,
        })
        .await?;
    let carrier = repos
        .carriers
        .create(carrier::Draft {
            cid: "CID-1".into(),
            company_name: "Fast Trucks".into(),
            address: "Route 9".into(),
            telephone: "556".into(),
            locality_id: loc.id,
        })
        .await?;
    let warehouse = repos
        .warehouses
        .create(warehouse::Draft {
            warehouse_code: "W-1".into(),
            address: "Dock 4".into(),
            telephone: "557".into(),
            minimum_capacity: 10,
            minimum_temperature: -20.0,
            locality_id: loc.id,
        })
        .await?;
    let kind = repos.product_types.create(product_type::Draft { description: "frozen".into() }).await?;
    let product = repos
        .products
        .create(product::Draft {
            product_code: "P-1".into(),
            description: "Peas".into(),
            width: 1.0,
            height: 1.0,
            length: 1.0,
            net_weight: 0.5,
            expiration_rate: 0.1,
            recommended_freezing_temperature: -18.0,
            freezing_rate: 0.2,
            product_type_id: kind.id,
            seller_id: seller.id,
        })
        .await?;
    let record = repos
        .product_records
        .create(product_record::Draft {
            last_update_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap().and_hms_opt(12, 0, 0).unwrap(),
            purchase_price: 10.0,
            sale_price: 15.0,
            product_id: product.id,
        })
        .await?;
    let buyer = repos
        .buyers
        .create(buyer::Draft {
            card_number_id: "189-58-5819".into(),
            first_name: "Ada".into(),
            last_name: "Byron".into(),
        })
        .await?;

    Ok(OrderGraph {
        locality_id: loc.id,
        product_type_id: kind.id,
        product_id: product.id,
        seller_id: seller.id,
        buyer_id: buyer.id,
        carrier_id: carrier.id,
        warehouse_id: warehouse.id,
        product_record_id: record.id,
    })
}
