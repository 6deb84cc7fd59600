use std::sync::Arc;

use async_trait::async_trait;
use models::{order_detail, purchase_order, Record};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use tracing::warn;

use crate::{
    errors::ServiceError,
    repository::seaorm::{db_err, insertable},
    storage::MemoryDatabase,
};

#[async_trait]
pub trait PurchaseOrderRepository: Send + Sync {
    /// Insert the order header and every detail line as one unit; on any
    /// failure nothing is stored.
    async fn create_with_details(
        &self,
        order: purchase_order::Draft,
        lines: Vec<order_detail::Line>,
    ) -> Result<purchase_order::WithDetails, ServiceError>;

    /// Detail rows of an existing order, ordered by id.
    async fn find_details(&self, order_id: i32) -> Result<Vec<order_detail::Model>, ServiceError>;
}

async fn insert_with_details(
    txn: &DatabaseTransaction,
    header: purchase_order::Model,
    lines: Vec<order_detail::Line>,
) -> Result<purchase_order::WithDetails, ServiceError> {
    let header = insertable::<purchase_order::Entity>(header)
        .insert(txn)
        .await
        .map_err(db_err::<purchase_order::Model>)?;

    let mut details = Vec::with_capacity(lines.len());
    for line in lines {
        let detail = order_detail::Model::from_draft(0, line.into_draft(header.id));
        detail.validate()?;
        let stored = insertable::<order_detail::Entity>(detail)
            .insert(txn)
            .await
            .map_err(db_err::<order_detail::Model>)?;
        details.push(stored);
    }
    Ok(purchase_order::WithDetails { order: header, order_details: details })
}

/// SeaORM-backed implementation running the inserts inside one transaction.
pub struct SeaOrmPurchaseOrderRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmPurchaseOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PurchaseOrderRepository for SeaOrmPurchaseOrderRepository {
    async fn create_with_details(
        &self,
        order: purchase_order::Draft,
        lines: Vec<order_detail::Line>,
    ) -> Result<purchase_order::WithDetails, ServiceError> {
        let header = purchase_order::Model::from_draft(0, order);
        header.validate()?;

        let txn = self.db.begin().await?;
        match insert_with_details(&txn, header, lines).await {
            Ok(created) => {
                txn.commit().await?;
                Ok(created)
            }
            Err(e) => {
                if let Err(rollback) = txn.rollback().await {
                    warn!(error = %rollback, cause = %e, "purchase order rollback failed");
                }
                Err(e)
            }
        }
    }

    async fn find_details(&self, order_id: i32) -> Result<Vec<order_detail::Model>, ServiceError> {
        purchase_order::Entity::find_by_id(order_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found(purchase_order::Model::TABLE, order_id))?;
        let details = order_detail::Entity::find()
            .filter(order_detail::Column::PurchaseOrderId.eq(order_id))
            .order_by_asc(order_detail::Column::Id)
            .all(&self.db)
            .await?;
        Ok(details)
    }
}

/// In-memory implementation; all rows are checked under a single write lock.
pub struct MemoryPurchaseOrderRepository {
    db: Arc<MemoryDatabase>,
}

impl MemoryPurchaseOrderRepository {
    pub fn new(db: Arc<MemoryDatabase>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PurchaseOrderRepository for MemoryPurchaseOrderRepository {
    async fn create_with_details(
        &self,
        order: purchase_order::Draft,
        lines: Vec<order_detail::Line>,
    ) -> Result<purchase_order::WithDetails, ServiceError> {
        let mut tables = self.db.write().await;
        let header = purchase_order::Model::from_draft(tables.next_id::<purchase_order::Model>()?, order);
        let header = tables.put(header)?;

        let mut details: Vec<order_detail::Model> = Vec::with_capacity(lines.len());
        for line in lines {
            let stored = tables
                .next_id::<order_detail::Model>()
                .and_then(|id| tables.put(order_detail::Model::from_draft(id, line.into_draft(header.id))));
            match stored {
                Ok(stored) => details.push(stored),
                Err(e) => {
                    for stored in &details {
                        tables.order_details.remove(&stored.id);
                    }
                    tables.purchase_orders.remove(&header.id);
                    return Err(e);
                }
            }
        }

        Ok(purchase_order::WithDetails { order: header, order_details: details })
    }

    async fn find_details(&self, order_id: i32) -> Result<Vec<order_detail::Model>, ServiceError> {
        let tables = self.db.read().await;
        if !tables.purchase_orders.contains_key(&order_id) {
            return Err(ServiceError::not_found(purchase_order::Model::TABLE, order_id));
        }
        Ok(tables.order_details.values().filter(|d| d.purchase_order_id == order_id).cloned().collect())
    }
}
