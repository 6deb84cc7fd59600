//! Join and aggregate queries counting children per parent row.
//!
//! Every report covers all parents when `id` is `None`, or a single parent
//! otherwise; asking for a parent that does not exist is `NotFound`.
//! Parents without children report zero.

pub mod memory;
pub mod seaorm;

use std::sync::Arc;

use async_trait::async_trait;
use models::{
    reports::{
        CarriersByLocality, InboundOrdersByEmployee, ProductsBySection, PurchaseOrdersByBuyer, RecordsByProduct,
        SellersByLocality,
    },
    Table,
};
use tracing::instrument;

use crate::errors::ServiceError;

pub use memory::MemoryReportRepository;
pub use seaorm::SeaOrmReportRepository;

#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn purchase_orders_by_buyer(&self, id: Option<i32>) -> Result<Vec<PurchaseOrdersByBuyer>, ServiceError>;
    async fn inbound_orders_by_employee(&self, id: Option<i32>) -> Result<Vec<InboundOrdersByEmployee>, ServiceError>;
    async fn products_by_section(&self, id: Option<i32>) -> Result<Vec<ProductsBySection>, ServiceError>;
    async fn records_by_product(&self, id: Option<i32>) -> Result<Vec<RecordsByProduct>, ServiceError>;
    async fn sellers_by_locality(&self, id: Option<i32>) -> Result<Vec<SellersByLocality>, ServiceError>;
    async fn carriers_by_locality(&self, id: Option<i32>) -> Result<Vec<CarriersByLocality>, ServiceError>;
}

/// An empty result for a requested parent id means the parent is missing.
pub(crate) fn require_parent<T>(rows: Vec<T>, table: Table, id: Option<i32>) -> Result<Vec<T>, ServiceError> {
    match id {
        Some(id) if rows.is_empty() => Err(ServiceError::not_found(table, id)),
        _ => Ok(rows),
    }
}

/// Pass-through service over the configured [`ReportRepository`].
pub struct ReportService {
    repo: Arc<dyn ReportRepository>,
}

impl ReportService {
    pub fn new(repo: Arc<dyn ReportRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn purchase_orders_by_buyer(&self, id: Option<i32>) -> Result<Vec<PurchaseOrdersByBuyer>, ServiceError> {
        self.repo.purchase_orders_by_buyer(id).await
    }

    #[instrument(skip(self))]
    pub async fn inbound_orders_by_employee(
        &self,
        id: Option<i32>,
    ) -> Result<Vec<InboundOrdersByEmployee>, ServiceError> {
        self.repo.inbound_orders_by_employee(id).await
    }

    #[instrument(skip(self))]
    pub async fn products_by_section(&self, id: Option<i32>) -> Result<Vec<ProductsBySection>, ServiceError> {
        self.repo.products_by_section(id).await
    }

    #[instrument(skip(self))]
    pub async fn records_by_product(&self, id: Option<i32>) -> Result<Vec<RecordsByProduct>, ServiceError> {
        self.repo.records_by_product(id).await
    }

    #[instrument(skip(self))]
    pub async fn sellers_by_locality(&self, id: Option<i32>) -> Result<Vec<SellersByLocality>, ServiceError> {
        self.repo.sellers_by_locality(id).await
    }

    #[instrument(skip(self))]
    pub async fn carriers_by_locality(&self, id: Option<i32>) -> Result<Vec<CarriersByLocality>, ServiceError> {
        self.repo.carriers_by_locality(id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use models::{employee, inbound_order, locality, product, product_batch, product_record, section};

    use super::*;
    use crate::{
        registry::Repositories,
        storage::MemoryDatabase,
        test_support::{get_db, seed_order_graph},
    };

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn batch_draft(number: i32, quantity: i32, product_id: i32, section_id: i32) -> product_batch::Draft {
        product_batch::Draft {
            batch_number: number,
            current_quantity: quantity,
            current_temperature: -18.0,
            due_date: day(30),
            initial_quantity: quantity,
            manufacturing_date: day(1),
            manufacturing_hour: 8,
            minimum_temperature: -20.0,
            product_id,
            section_id,
        }
    }

    fn section_draft(number: i32, warehouse_id: i32, product_type_id: i32) -> section::Draft {
        section::Draft {
            section_number: number,
            current_temperature: -10.0,
            minimum_temperature: -20.0,
            current_capacity: 10,
            minimum_capacity: 1,
            maximum_capacity: 100,
            warehouse_id,
            product_type_id,
        }
    }

    /// One parent of each kind with children and one without, then every report.
    async fn counts_children_per_parent(repos: Repositories) -> Result<(), anyhow::Error> {
        let graph = seed_order_graph(&repos).await?;
        let reports = ReportService::new(repos.reports.clone());

        let idle_buyer = repos
            .buyers
            .create(models::buyer::Draft {
                card_number_id: "B-2".into(),
                first_name: "Grace".into(),
                last_name: "Hopper".into(),
            })
            .await?;
        let empty_locality = repos
            .localities
            .create(locality::Draft {
                locality_name: "Belgrano".into(),
                province_name: "Buenos Aires".into(),
                country_name: "Argentina".into(),
            })
            .await?;
        repos.purchase_orders.create(graph.order("PO-1")).await?;

        let busy = repos
            .employees
            .create(employee::Draft {
                card_number_id: "E-1".into(),
                first_name: "Lucia".into(),
                last_name: "Fernandez".into(),
                warehouse_id: graph.warehouse_id,
            })
            .await?;
        let idle = repos
            .employees
            .create(employee::Draft {
                card_number_id: "E-2".into(),
                first_name: "Mateo".into(),
                last_name: "Gomez".into(),
                warehouse_id: graph.warehouse_id,
            })
            .await?;

        let stocked = repos.sections.create(section_draft(1, graph.warehouse_id, graph.product_type_id)).await?;
        let empty = repos.sections.create(section_draft(2, graph.warehouse_id, graph.product_type_id)).await?;
        let first = repos.product_batches.create(batch_draft(100, 30, graph.product_id, stocked.id)).await?;
        repos.product_batches.create(batch_draft(101, 12, graph.product_id, stocked.id)).await?;
        repos
            .inbound_orders
            .create(inbound_order::Draft {
                order_date: day(2),
                order_number: "IN-1".into(),
                employee_id: busy.id,
                product_batch_id: first.id,
                warehouse_id: graph.warehouse_id,
            })
            .await?;

        repos
            .product_records
            .create(product_record::Draft {
                last_update_date: day(3).and_hms_opt(9, 0, 0).unwrap(),
                purchase_price: 11.0,
                sale_price: 16.0,
                product_id: graph.product_id,
            })
            .await?;
        let unrecorded = repos
            .products
            .create(product::Draft {
                product_code: "P-2".into(),
                description: "Corn".into(),
                width: 1.0,
                height: 1.0,
                length: 1.0,
                net_weight: 0.5,
                expiration_rate: 0.1,
                recommended_freezing_temperature: -18.0,
                freezing_rate: 0.2,
                product_type_id: graph.product_type_id,
                seller_id: graph.seller_id,
            })
            .await?;

        let buyers = reports.purchase_orders_by_buyer(None).await?;
        let counts: Vec<_> = buyers.iter().map(|r| (r.id, r.purchase_orders_count)).collect();
        assert_eq!(counts, vec![(graph.buyer_id, 1), (idle_buyer.id, 0)]);

        let employees = reports.inbound_orders_by_employee(None).await?;
        let counts: Vec<_> = employees.iter().map(|r| (r.id, r.inbound_orders_count)).collect();
        assert_eq!(counts, vec![(busy.id, 1), (idle.id, 0)]);
        assert_eq!(employees[0].warehouse_id, graph.warehouse_id);

        let sections = reports.products_by_section(None).await?;
        let counts: Vec<_> = sections.iter().map(|r| (r.section_id, r.products_count)).collect();
        assert_eq!(counts, vec![(stocked.id, 42), (empty.id, 0)]);
        let one = reports.products_by_section(Some(empty.id)).await?;
        assert_eq!(one, vec![ProductsBySection { section_id: empty.id, section_number: 2, products_count: 0 }]);

        let products = reports.records_by_product(None).await?;
        let counts: Vec<_> = products.iter().map(|r| (r.product_id, r.records_count)).collect();
        assert_eq!(counts, vec![(graph.product_id, 2), (unrecorded.id, 0)]);

        let sellers = reports.sellers_by_locality(None).await?;
        let counts: Vec<_> = sellers.iter().map(|r| (r.locality_id, r.sellers_count)).collect();
        assert_eq!(counts, vec![(graph.locality_id, 1), (empty_locality.id, 0)]);

        let carriers = reports.carriers_by_locality(Some(graph.locality_id)).await?;
        assert_eq!(carriers.len(), 1);
        assert_eq!(carriers[0].carriers_count, 1);
        let carriers = reports.carriers_by_locality(Some(empty_locality.id)).await?;
        assert_eq!(carriers[0].carriers_count, 0);

        assert!(matches!(reports.purchase_orders_by_buyer(Some(999)).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(reports.records_by_product(Some(999)).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn seaorm_counts_children_per_parent() -> Result<(), anyhow::Error> {
        counts_children_per_parent(Repositories::seaorm(get_db().await?)).await
    }

    #[tokio::test]
    async fn memory_counts_children_per_parent() -> Result<(), anyhow::Error> {
        counts_children_per_parent(Repositories::memory(Arc::new(MemoryDatabase::new()))).await
    }
}
