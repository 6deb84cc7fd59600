use std::sync::Arc;

use models::{order_detail, purchase_order};
use tracing::{info, instrument};

use super::repository::PurchaseOrderRepository;
use crate::errors::ServiceError;

pub struct PurchaseOrderService {
    repo: Arc<dyn PurchaseOrderRepository>,
}

impl PurchaseOrderService {
    pub fn new(repo: Arc<dyn PurchaseOrderRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self, draft), fields(order_number = %draft.order.order_number, lines = draft.order_details.len()))]
    pub async fn create_with_details(
        &self,
        draft: purchase_order::DraftWithDetails,
    ) -> Result<purchase_order::WithDetails, ServiceError> {
        let created = self.repo.create_with_details(draft.order, draft.order_details).await?;
        info!(order_id = created.order.id, "purchase_order_created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn find_details(&self, order_id: i32) -> Result<Vec<order_detail::Model>, ServiceError> {
        self.repo.find_details(order_id).await
    }
}
