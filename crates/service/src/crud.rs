//! Pass-through CRUD services, one per entity.
use std::sync::Arc;

use models::{
    buyer, carrier, employee, inbound_order, locality, order_detail, product, product_batch, product_record,
    product_type, purchase_order, section, seller, warehouse, Record,
};
use tracing::instrument;

use crate::{errors::ServiceError, repository::Repository};

/// Thin service delegating each operation to exactly one repository call.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use service::{crud::BuyerService, repository::MemoryRepository, storage::MemoryDatabase};
/// use models::buyer;
///
/// let repo = Arc::new(MemoryRepository::<buyer::Model>::new(Arc::new(MemoryDatabase::new())));
/// let svc = BuyerService::new(repo);
/// let draft = buyer::Draft { card_number_id: "189-58-5819".into(), first_name: "Ada".into(), last_name: "Byron".into() };
/// let created = tokio_test::block_on(svc.create(draft)).unwrap();
/// assert_eq!(created.id, 1);
/// assert_eq!(tokio_test::block_on(svc.find_all()).unwrap().len(), 1);
/// ```
pub struct CrudService<M: Record> {
    repo: Arc<dyn Repository<M>>,
}

impl<M: Record> CrudService<M> {
    pub fn new(repo: Arc<dyn Repository<M>>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self), fields(table = %M::TABLE))]
    pub async fn find_all(&self) -> Result<Vec<M>, ServiceError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self), fields(table = %M::TABLE))]
    pub async fn find_by_id(&self, id: i32) -> Result<M, ServiceError> {
        self.repo.find_by_id(id).await
    }

    #[instrument(skip(self, draft), fields(table = %M::TABLE))]
    pub async fn create(&self, draft: M::Draft) -> Result<M, ServiceError> {
        self.repo.create(draft).await
    }

    #[instrument(skip(self, entity), fields(table = %M::TABLE, id = entity.id()))]
    pub async fn update(&self, entity: M) -> Result<M, ServiceError> {
        self.repo.update(entity).await
    }

    #[instrument(skip(self, patch), fields(table = %M::TABLE))]
    pub async fn partial_update(&self, id: i32, patch: M::Patch) -> Result<M, ServiceError> {
        self.repo.partial_update(id, patch).await
    }

    #[instrument(skip(self), fields(table = %M::TABLE))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete(id).await
    }
}

pub type BuyerService = CrudService<buyer::Model>;
pub type CarrierService = CrudService<carrier::Model>;
pub type EmployeeService = CrudService<employee::Model>;
pub type InboundOrderService = CrudService<inbound_order::Model>;
pub type LocalityService = CrudService<locality::Model>;
pub type OrderDetailService = CrudService<order_detail::Model>;
pub type ProductService = CrudService<product::Model>;
pub type ProductBatchService = CrudService<product_batch::Model>;
pub type ProductRecordService = CrudService<product_record::Model>;
pub type ProductTypeService = CrudService<product_type::Model>;
pub type PurchaseOrderCrudService = CrudService<purchase_order::Model>;
pub type SectionService = CrudService<section::Model>;
pub type SellerService = CrudService<seller::Model>;
pub type WarehouseService = CrudService<warehouse::Model>;
