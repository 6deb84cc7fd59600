use std::{marker::PhantomData, sync::Arc};

use async_trait::async_trait;

use super::Repository;
use crate::{
    errors::ServiceError,
    storage::{InMemory, MemoryDatabase},
};

/// Map-backed repository sharing one [`MemoryDatabase`] with its siblings.
pub struct MemoryRepository<M> {
    db: Arc<MemoryDatabase>,
    _model: PhantomData<fn() -> M>,
}

impl<M> MemoryRepository<M> {
    pub fn new(db: Arc<MemoryDatabase>) -> Self {
        Self { db, _model: PhantomData }
    }
}

#[async_trait]
impl<M: InMemory> Repository<M> for MemoryRepository<M> {
    async fn find_all(&self) -> Result<Vec<M>, ServiceError> {
        let tables = self.db.read().await;
        Ok(M::rows(&tables).values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<M, ServiceError> {
        let tables = self.db.read().await;
        M::rows(&tables).get(&id).cloned().ok_or_else(|| ServiceError::not_found(M::TABLE, id))
    }

    async fn create(&self, draft: M::Draft) -> Result<M, ServiceError> {
        let mut tables = self.db.write().await;
        let row = M::from_draft(tables.next_id::<M>()?, draft);
        tables.put(row)
    }

    async fn update(&self, entity: M) -> Result<M, ServiceError> {
        entity.validate()?;
        let mut tables = self.db.write().await;
        if !M::rows(&tables).contains_key(&entity.id()) {
            return Err(ServiceError::not_found(M::TABLE, entity.id()));
        }
        tables.put(entity)
    }

    async fn partial_update(&self, id: i32, patch: M::Patch) -> Result<M, ServiceError> {
        let mut tables = self.db.write().await;
        let mut row = M::rows(&tables).get(&id).cloned().ok_or_else(|| ServiceError::not_found(M::TABLE, id))?;
        row.apply(patch);
        tables.put(row)
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let mut tables = self.db.write().await;
        tables.remove::<M>(id).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::{buyer, locality, warehouse, Record};

    fn buyer_draft(card: &str) -> buyer::Draft {
        buyer::Draft { card_number_id: card.into(), first_name: "Ada".into(), last_name: "Byron".into() }
    }

    #[tokio::test]
    async fn crud_cycle() -> Result<(), anyhow::Error> {
        let repo = MemoryRepository::<buyer::Model>::new(Arc::new(MemoryDatabase::new()));
        assert!(repo.find_all().await?.is_empty());

        let b = repo.create(buyer_draft("189-58-5819")).await?;
        assert_eq!(b.id, 1);
        assert_eq!(repo.find_by_id(1).await?, b);

        let patched = repo
            .partial_update(1, buyer::Patch { first_name: Some("Augusta".into()), ..Default::default() })
            .await?;
        assert_eq!(patched.first_name, "Augusta");
        assert_eq!(patched.last_name, "Byron");

        repo.delete(1).await?;
        assert!(matches!(repo.find_by_id(1).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_card_number_is_rejected() -> Result<(), anyhow::Error> {
        let repo = MemoryRepository::<buyer::Model>::new(Arc::new(MemoryDatabase::new()));
        repo.create(buyer_draft("189-58-5819")).await?;
        assert!(matches!(repo.create(buyer_draft("189-58-5819")).await, Err(ServiceError::AlreadyExists(_))));

        let all = repo.find_all().await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].card_number_id, "189-58-5819");
        Ok(())
    }

    #[tokio::test]
    async fn missing_rows_are_not_found() -> Result<(), anyhow::Error> {
        let db = Arc::new(MemoryDatabase::new());
        let warehouses = MemoryRepository::<warehouse::Model>::new(db.clone());
        assert!(matches!(warehouses.delete(999).await, Err(ServiceError::NotFound(_))));

        let buyers = MemoryRepository::<buyer::Model>::new(db);
        let ghost = buyer::Model::from_draft(5, buyer_draft("X-5"));
        assert!(matches!(buyers.update(ghost).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(buyers.partial_update(5, buyer::Patch::default()).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn dangling_reference_persists_nothing() -> Result<(), anyhow::Error> {
        let db = Arc::new(MemoryDatabase::new());
        let warehouses = MemoryRepository::<warehouse::Model>::new(db.clone());
        let draft = || warehouse::Draft {
            warehouse_code: "W-1".into(),
            address: "Dock 4".into(),
            telephone: "555".into(),
            minimum_capacity: 10,
            minimum_temperature: -20.0,
            locality_id: 1,
        };
        assert!(matches!(warehouses.create(draft()).await, Err(ServiceError::ForeignKeyViolation(_))));
        assert!(warehouses.find_all().await?.is_empty());

        let localities = MemoryRepository::<locality::Model>::new(db);
        localities
            .create(locality::Draft {
                locality_name: "Palermo".into(),
                province_name: "Buenos Aires".into(),
                country_name: "Argentina".into(),
            })
            .await?;
        warehouses.create(draft()).await?;
        assert!(matches!(localities.delete(1).await, Err(ServiceError::ForeignKeyViolation(_))));
        Ok(())
    }

    #[tokio::test]
    async fn over_long_code_is_invalid_and_not_stored() -> Result<(), anyhow::Error> {
        let repo = MemoryRepository::<buyer::Model>::new(Arc::new(MemoryDatabase::new()));
        let err = repo.create(buyer_draft(&"9".repeat(65))).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidEntity(_)), "{err:?}");
        assert!(repo.find_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn exhausted_ids_fail_instead_of_wrapping() -> Result<(), anyhow::Error> {
        let mut tables = crate::storage::Tables::default();
        tables.buyers.insert(i32::MAX, buyer::Model::from_draft(i32::MAX, buyer_draft("MAX")));
        let repo = MemoryRepository::<buyer::Model>::new(Arc::new(MemoryDatabase::with_tables(tables)));
        let err = repo.create(buyer_draft("NEXT")).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidEntity(_)), "{err:?}");
        assert_eq!(repo.find_all().await?.len(), 1);
        Ok(())
    }
}
