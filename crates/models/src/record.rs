//! Shared contract implemented by every persisted entity.
//!
//! Both repository backends are generic over [`Record`]: the relational one
//! uses it to build active models from drafts and patches, the in-memory one
//! additionally relies on [`Record::unique_key`] and [`Record::references`]
//! to enforce the same constraints the schema declares.
use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

use crate::errors::ModelError;

/// Every table of the schema, in foreign-key dependency order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    Localities,
    Sellers,
    Carriers,
    Warehouses,
    ProductTypes,
    Sections,
    Products,
    ProductBatches,
    ProductRecords,
    Employees,
    Buyers,
    InboundOrders,
    PurchaseOrders,
    OrderDetails,
}

impl Table {
    pub const ALL: [Table; 14] = [
        Table::Localities,
        Table::Sellers,
        Table::Carriers,
        Table::Warehouses,
        Table::ProductTypes,
        Table::Sections,
        Table::Products,
        Table::ProductBatches,
        Table::ProductRecords,
        Table::Employees,
        Table::Buyers,
        Table::InboundOrders,
        Table::PurchaseOrders,
        Table::OrderDetails,
    ];

    /// SQL table name, also the fixture file stem.
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Localities => "localities",
            Table::Sellers => "sellers",
            Table::Carriers => "carriers",
            Table::Warehouses => "warehouses",
            Table::ProductTypes => "product_types",
            Table::Sections => "sections",
            Table::Products => "products",
            Table::ProductBatches => "product_batches",
            Table::ProductRecords => "product_records",
            Table::Employees => "employees",
            Table::Buyers => "buyers",
            Table::InboundOrders => "inbound_orders",
            Table::PurchaseOrders => "purchase_orders",
            Table::OrderDetails => "order_details",
        }
    }

    /// Singular, human-readable entity name used in error messages.
    pub fn entity_name(&self) -> &'static str {
        match self {
            Table::Localities => "locality",
            Table::Sellers => "seller",
            Table::Carriers => "carrier",
            Table::Warehouses => "warehouse",
            Table::ProductTypes => "product type",
            Table::Sections => "section",
            Table::Products => "product",
            Table::ProductBatches => "product batch",
            Table::ProductRecords => "product record",
            Table::Employees => "employee",
            Table::Buyers => "buyer",
            Table::InboundOrders => "inbound order",
            Table::PurchaseOrders => "purchase order",
            Table::OrderDetails => "order detail",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait Record: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Create payload: every attribute except the generated id.
    type Draft: DeserializeOwned + fmt::Debug + Send + Sync + 'static;
    /// Partial update payload: every attribute wrapped in `Option`.
    type Patch: DeserializeOwned + Default + fmt::Debug + Send + Sync + 'static;

    const TABLE: Table;

    fn id(&self) -> i32;

    fn from_draft(id: i32, draft: Self::Draft) -> Self;

    /// Overwrite the fields present in `patch`, leaving the others untouched.
    fn apply(&mut self, patch: Self::Patch);

    fn validate(&self) -> Result<(), ModelError>;

    /// Value of the column carrying a unique constraint, if any.
    fn unique_key(&self) -> Option<String> {
        None
    }

    /// Foreign keys held by this row.
    fn references(&self) -> Vec<(Table, i32)> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_names_are_snake_case_plurals() {
        assert_eq!(Table::ProductBatches.to_string(), "product_batches");
        assert_eq!(Table::ALL.len(), 14);
        assert!(Table::ALL.windows(2).all(|w| w[0] < w[1]));
    }
}
