//! Purchase orders created together with their detail lines.

pub mod repository;
pub mod service;

pub use repository::{MemoryPurchaseOrderRepository, PurchaseOrderRepository, SeaOrmPurchaseOrderRepository};
pub use service::PurchaseOrderService;
