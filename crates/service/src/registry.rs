//! Wiring of repositories and services for the configured backend.
use std::sync::Arc;

use models::{
    buyer, carrier, employee, inbound_order, locality, order_detail, product, product_batch, product_record,
    product_type, purchase_order, section, seller, warehouse,
};
use sea_orm::DatabaseConnection;

use crate::{
    crud::*,
    purchase_order::{
        MemoryPurchaseOrderRepository, PurchaseOrderRepository, PurchaseOrderService, SeaOrmPurchaseOrderRepository,
    },
    reports::{MemoryReportRepository, ReportRepository, ReportService, SeaOrmReportRepository},
    repository::{MemoryRepository, Repository, SeaOrmRepository},
    storage::MemoryDatabase,
};

/// One repository per entity plus the reporting and purchase-order repositories,
/// all served by the same backend.
#[derive(Clone)]
pub struct Repositories {
    pub buyers: Arc<dyn Repository<buyer::Model>>,
    pub carriers: Arc<dyn Repository<carrier::Model>>,
    pub employees: Arc<dyn Repository<employee::Model>>,
    pub inbound_orders: Arc<dyn Repository<inbound_order::Model>>,
    pub localities: Arc<dyn Repository<locality::Model>>,
    pub order_details: Arc<dyn Repository<order_detail::Model>>,
    pub products: Arc<dyn Repository<product::Model>>,
    pub product_batches: Arc<dyn Repository<product_batch::Model>>,
    pub product_records: Arc<dyn Repository<product_record::Model>>,
    pub product_types: Arc<dyn Repository<product_type::Model>>,
    pub purchase_orders: Arc<dyn Repository<purchase_order::Model>>,
    pub sections: Arc<dyn Repository<section::Model>>,
    pub sellers: Arc<dyn Repository<seller::Model>>,
    pub warehouses: Arc<dyn Repository<warehouse::Model>>,
    pub reports: Arc<dyn ReportRepository>,
    pub purchase_order_details: Arc<dyn PurchaseOrderRepository>,
}

impl Repositories {
    /// Relational backend sharing one connection pool.
    pub fn seaorm(db: DatabaseConnection) -> Self {
        Self {
            buyers: Arc::new(SeaOrmRepository::<buyer::Entity>::new(db.clone())),
            carriers: Arc::new(SeaOrmRepository::<carrier::Entity>::new(db.clone())),
            employees: Arc::new(SeaOrmRepository::<employee::Entity>::new(db.clone())),
            inbound_orders: Arc::new(SeaOrmRepository::<inbound_order::Entity>::new(db.clone())),
            localities: Arc::new(SeaOrmRepository::<locality::Entity>::new(db.clone())),
            order_details: Arc::new(SeaOrmRepository::<order_detail::Entity>::new(db.clone())),
            products: Arc::new(SeaOrmRepository::<product::Entity>::new(db.clone())),
            product_batches: Arc::new(SeaOrmRepository::<product_batch::Entity>::new(db.clone())),
            product_records: Arc::new(SeaOrmRepository::<product_record::Entity>::new(db.clone())),
            product_types: Arc::new(SeaOrmRepository::<product_type::Entity>::new(db.clone())),
            purchase_orders: Arc::new(SeaOrmRepository::<purchase_order::Entity>::new(db.clone())),
            sections: Arc::new(SeaOrmRepository::<section::Entity>::new(db.clone())),
            sellers: Arc::new(SeaOrmRepository::<seller::Entity>::new(db.clone())),
            warehouses: Arc::new(SeaOrmRepository::<warehouse::Entity>::new(db.clone())),
            reports: Arc::new(SeaOrmReportRepository::new(db.clone())),
            purchase_order_details: Arc::new(SeaOrmPurchaseOrderRepository::new(db)),
        }
    }

    /// In-memory backend; every repository shares `db`.
    pub fn memory(db: Arc<MemoryDatabase>) -> Self {
        Self {
            buyers: Arc::new(MemoryRepository::<buyer::Model>::new(db.clone())),
            carriers: Arc::new(MemoryRepository::<carrier::Model>::new(db.clone())),
            employees: Arc::new(MemoryRepository::<employee::Model>::new(db.clone())),
            inbound_orders: Arc::new(MemoryRepository::<inbound_order::Model>::new(db.clone())),
            localities: Arc::new(MemoryRepository::<locality::Model>::new(db.clone())),
            order_details: Arc::new(MemoryRepository::<order_detail::Model>::new(db.clone())),
            products: Arc::new(MemoryRepository::<product::Model>::new(db.clone())),
            product_batches: Arc::new(MemoryRepository::<product_batch::Model>::new(db.clone())),
            product_records: Arc::new(MemoryRepository::<product_record::Model>::new(db.clone())),
            product_types: Arc::new(MemoryRepository::<product_type::Model>::new(db.clone())),
            purchase_orders: Arc::new(MemoryRepository::<purchase_order::Model>::new(db.clone())),
            sections: Arc::new(MemoryRepository::<section::Model>::new(db.clone())),
            sellers: Arc::new(MemoryRepository::<seller::Model>::new(db.clone())),
            warehouses: Arc::new(MemoryRepository::<warehouse::Model>::new(db.clone())),
            reports: Arc::new(MemoryReportRepository::new(db.clone())),
            purchase_order_details: Arc::new(MemoryPurchaseOrderRepository::new(db)),
        }
    }
}

/// Every service the HTTP layer exposes.
#[derive(Clone)]
pub struct Services {
    pub buyers: Arc<BuyerService>,
    pub carriers: Arc<CarrierService>,
    pub employees: Arc<EmployeeService>,
    pub inbound_orders: Arc<InboundOrderService>,
    pub localities: Arc<LocalityService>,
    pub order_details: Arc<OrderDetailService>,
    pub products: Arc<ProductService>,
    pub product_batches: Arc<ProductBatchService>,
    pub product_records: Arc<ProductRecordService>,
    pub product_types: Arc<ProductTypeService>,
    pub purchase_orders: Arc<PurchaseOrderCrudService>,
    pub sections: Arc<SectionService>,
    pub sellers: Arc<SellerService>,
    pub warehouses: Arc<WarehouseService>,
    pub reports: Arc<ReportService>,
    pub purchase_order_details: Arc<PurchaseOrderService>,
}

impl From<Repositories> for Services {
    fn from(r: Repositories) -> Self {
        Self {
            buyers: Arc::new(CrudService::new(r.buyers)),
            carriers: Arc::new(CrudService::new(r.carriers)),
            employees: Arc::new(CrudService::new(r.employees)),
            inbound_orders: Arc::new(CrudService::new(r.inbound_orders)),
            localities: Arc::new(CrudService::new(r.localities)),
            order_details: Arc::new(CrudService::new(r.order_details)),
            products: Arc::new(CrudService::new(r.products)),
            product_batches: Arc::new(CrudService::new(r.product_batches)),
            product_records: Arc::new(CrudService::new(r.product_records)),
            product_types: Arc::new(CrudService::new(r.product_types)),
            purchase_orders: Arc::new(CrudService::new(r.purchase_orders)),
            sections: Arc::new(CrudService::new(r.sections)),
            sellers: Arc::new(CrudService::new(r.sellers)),
            warehouses: Arc::new(CrudService::new(r.warehouses)),
            reports: Arc::new(ReportService::new(r.reports)),
            purchase_order_details: Arc::new(PurchaseOrderService::new(r.purchase_order_details)),
        }
    }
}
