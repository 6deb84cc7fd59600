//! Repositories and services of the warehouse backend.
//! - `repository`: the uniform CRUD contract with SeaORM and in-memory backends.
//! - `storage`: the in-memory tables and their JSON fixture loader.
//! - `reports` and `purchase_order`: aggregate queries and multi-row writes.
//! - `crud` and `registry`: pass-through services wired for the configured backend.

pub mod crud;
pub mod errors;
pub mod purchase_order;
pub mod registry;
pub mod reports;
pub mod repository;
pub mod storage;
#[cfg(test)]
pub mod test_support;

pub use registry::{Repositories, Services};
