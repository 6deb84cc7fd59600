//! Aggregate rows returned by the reporting queries.
//!
//! Counts are `i64` because `COUNT`/`SUM` widen to `BIGINT` on PostgreSQL.
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct PurchaseOrdersByBuyer {
    pub id: i32,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub purchase_orders_count: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct InboundOrdersByEmployee {
    pub id: i32,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: i32,
    pub inbound_orders_count: i64,
}

/// Units currently stored in a section, summed over its batches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct ProductsBySection {
    pub section_id: i32,
    pub section_number: i32,
    pub products_count: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct RecordsByProduct {
    pub product_id: i32,
    pub description: String,
    pub records_count: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct SellersByLocality {
    pub locality_id: i32,
    pub locality_name: String,
    pub sellers_count: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct CarriersByLocality {
    pub locality_id: i32,
    pub locality_name: String,
    pub carriers_count: i64,
}
