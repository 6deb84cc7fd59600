use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use models::{
    reports::{
        CarriersByLocality, InboundOrdersByEmployee, ProductsBySection, PurchaseOrdersByBuyer, RecordsByProduct,
        SellersByLocality,
    },
    Table,
};

use super::{require_parent, ReportRepository};
use crate::{errors::ServiceError, storage::MemoryDatabase};

/// Reports computed over the in-memory tables.
pub struct MemoryReportRepository {
    db: Arc<MemoryDatabase>,
}

impl MemoryReportRepository {
    pub fn new(db: Arc<MemoryDatabase>) -> Self {
        Self { db }
    }
}

/// Parents selected by `id`, or all of them.
fn parents<'a, T>(rows: &'a BTreeMap<i32, T>, id: Option<i32>) -> impl Iterator<Item = &'a T> {
    rows.iter().filter(move |(k, _)| id.map_or(true, |id| **k == id)).map(|(_, v)| v)
}

fn count<T>(rows: &BTreeMap<i32, T>, matches: impl Fn(&T) -> bool) -> i64 {
    rows.values().filter(|row| matches(row)).count() as i64
}

#[async_trait]
impl ReportRepository for MemoryReportRepository {
    async fn purchase_orders_by_buyer(&self, id: Option<i32>) -> Result<Vec<PurchaseOrdersByBuyer>, ServiceError> {
        let t = self.db.read().await;
        let rows = parents(&t.buyers, id)
            .map(|b| PurchaseOrdersByBuyer {
                id: b.id,
                card_number_id: b.card_number_id.clone(),
                first_name: b.first_name.clone(),
                last_name: b.last_name.clone(),
                purchase_orders_count: count(&t.purchase_orders, |o| o.buyer_id == b.id),
            })
            .collect();
        require_parent(rows, Table::Buyers, id)
    }

    async fn inbound_orders_by_employee(&self, id: Option<i32>) -> Result<Vec<InboundOrdersByEmployee>, ServiceError> {
        let t = self.db.read().await;
        let rows = parents(&t.employees, id)
            .map(|e| InboundOrdersByEmployee {
                id: e.id,
                card_number_id: e.card_number_id.clone(),
                first_name: e.first_name.clone(),
                last_name: e.last_name.clone(),
                warehouse_id: e.warehouse_id,
                inbound_orders_count: count(&t.inbound_orders, |o| o.employee_id == e.id),
            })
            .collect();
        require_parent(rows, Table::Employees, id)
    }

    async fn products_by_section(&self, id: Option<i32>) -> Result<Vec<ProductsBySection>, ServiceError> {
        let t = self.db.read().await;
        let rows = parents(&t.sections, id)
            .map(|s| ProductsBySection {
                section_id: s.id,
                section_number: s.section_number,
                products_count: t
                    .product_batches
                    .values()
                    .filter(|b| b.section_id == s.id)
                    .map(|b| i64::from(b.current_quantity))
                    .sum(),
            })
            .collect();
        require_parent(rows, Table::Sections, id)
    }

    async fn records_by_product(&self, id: Option<i32>) -> Result<Vec<RecordsByProduct>, ServiceError> {
        let t = self.db.read().await;
        let rows = parents(&t.products, id)
            .map(|p| RecordsByProduct {
                product_id: p.id,
                description: p.description.clone(),
                records_count: count(&t.product_records, |r| r.product_id == p.id),
            })
            .collect();
        require_parent(rows, Table::Products, id)
    }

    async fn sellers_by_locality(&self, id: Option<i32>) -> Result<Vec<SellersByLocality>, ServiceError> {
        let t = self.db.read().await;
        let rows = parents(&t.localities, id)
            .map(|l| SellersByLocality {
                locality_id: l.id,
                locality_name: l.locality_name.clone(),
                sellers_count: count(&t.sellers, |s| s.locality_id == l.id),
            })
            .collect();
        require_parent(rows, Table::Localities, id)
    }

    async fn carriers_by_locality(&self, id: Option<i32>) -> Result<Vec<CarriersByLocality>, ServiceError> {
        let t = self.db.read().await;
        let rows = parents(&t.localities, id)
            .map(|l| CarriersByLocality {
                locality_id: l.id,
                locality_name: l.locality_name.clone(),
                carriers_count: count(&t.carriers, |c| c.locality_id == l.id),
            })
            .collect();
        require_parent(rows, Table::Localities, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use models::{product_batch, section};

    fn sample_section(id: i32, number: i32) -> section::Model {
        section::Model {
            id,
            section_number: number,
            current_temperature: 1.0,
            minimum_temperature: 0.0,
            current_capacity: 10,
            minimum_capacity: 1,
            maximum_capacity: 100,
            warehouse_id: 1,
            product_type_id: 1,
        }
    }

    fn sample_batch(id: i32, section_id: i32, quantity: i32) -> product_batch::Model {
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        product_batch::Model {
            id,
            batch_number: id,
            current_quantity: quantity,
            current_temperature: 1.0,
            due_date: day,
            initial_quantity: quantity,
            manufacturing_date: day,
            manufacturing_hour: 8,
            minimum_temperature: 0.0,
            product_id: 1,
            section_id,
        }
    }

    #[tokio::test]
    async fn sums_batch_quantities_per_section() -> Result<(), anyhow::Error> {
        let mut tables = crate::storage::Tables::default();
        tables.sections.insert(1, sample_section(1, 10));
        tables.sections.insert(2, sample_section(2, 20));
        tables.product_batches.insert(1, sample_batch(1, 1, 30));
        tables.product_batches.insert(2, sample_batch(2, 1, 12));
        let reports = MemoryReportRepository::new(Arc::new(MemoryDatabase::with_tables(tables)));

        let all = reports.products_by_section(None).await?;
        assert_eq!(all.iter().map(|r| r.products_count).collect::<Vec<_>>(), vec![42, 0]);

        let one = reports.products_by_section(Some(2)).await?;
        assert_eq!(one, vec![ProductsBySection { section_id: 2, section_number: 20, products_count: 0 }]);

        assert!(matches!(reports.products_by_section(Some(3)).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
