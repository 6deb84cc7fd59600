//! Data model of the warehouse backend.
//!
//! One SeaORM entity module per table, each carrying its create [`Draft`](buyer::Draft),
//! partial-update [`Patch`](buyer::Patch) and [`Record`] implementation, plus
//! report row types and the database connection helpers.

pub mod db;
pub mod errors;
pub mod record;
pub mod reports;

pub mod buyer;
pub mod carrier;
pub mod employee;
pub mod inbound_order;
pub mod locality;
pub mod order_detail;
pub mod product;
pub mod product_batch;
pub mod product_record;
pub mod product_type;
pub mod purchase_order;
pub mod section;
pub mod seller;
pub mod warehouse;

pub use record::{Record, Table};

#[cfg(test)]
mod tests;
