use std::marker::PhantomData;

use async_trait::async_trait;
use models::Record;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Iterable,
    PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder,
};

use super::Repository;
use crate::errors::ServiceError;

/// SeaORM-backed repository, generic over the entity.
pub struct SeaOrmRepository<E> {
    db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SeaOrmRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, _entity: PhantomData }
    }
}

pub(crate) fn db_err<M: Record>(err: DbErr) -> ServiceError {
    ServiceError::from_db(M::TABLE, err)
}

/// Active model with every column set except the primary key, which the store generates.
pub(crate) fn insertable<E>(model: E::Model) -> E::ActiveModel
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E>,
{
    let mut am = model.into_active_model().reset_all();
    for key in E::PrimaryKey::iter() {
        am.not_set(key.into_column());
    }
    am
}

#[async_trait]
impl<E> Repository<E::Model> for SeaOrmRepository<E>
where
    E: EntityTrait,
    E::Model: Record + IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    async fn find_all(&self) -> Result<Vec<E::Model>, ServiceError> {
        let mut query = E::find();
        for key in E::PrimaryKey::iter() {
            query = query.order_by_asc(key.into_column());
        }
        query.all(&self.db).await.map_err(db_err::<E::Model>)
    }

    async fn find_by_id(&self, id: i32) -> Result<E::Model, ServiceError> {
        E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err::<E::Model>)?
            .ok_or_else(|| ServiceError::not_found(<E::Model as Record>::TABLE, id))
    }

    async fn create(&self, draft: <E::Model as Record>::Draft) -> Result<E::Model, ServiceError> {
        let model = <E::Model as Record>::from_draft(0, draft);
        model.validate()?;
        insertable::<E>(model).insert(&self.db).await.map_err(db_err::<E::Model>)
    }

    async fn update(&self, entity: E::Model) -> Result<E::Model, ServiceError> {
        entity.validate()?;
        let id = entity.id();
        entity
            .into_active_model()
            .reset_all()
            .update(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => ServiceError::not_found(<E::Model as Record>::TABLE, id),
                other => db_err::<E::Model>(other),
            })
    }

    async fn partial_update(&self, id: i32, patch: <E::Model as Record>::Patch) -> Result<E::Model, ServiceError> {
        let mut current = self.find_by_id(id).await?;
        current.apply(patch);
        self.update(current).await
    }

    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let res = E::delete_by_id(id).exec(&self.db).await.map_err(db_err::<E::Model>)?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found(<E::Model as Record>::TABLE, id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_locality};
    use models::{buyer, locality, seller, warehouse};

    fn buyer_draft(card: &str) -> buyer::Draft {
        buyer::Draft { card_number_id: card.into(), first_name: "Ada".into(), last_name: "Byron".into() }
    }

    #[tokio::test]
    async fn create_then_find_round_trips() -> Result<(), anyhow::Error> {
        let repo = SeaOrmRepository::<buyer::Entity>::new(get_db().await?);
        assert!(repo.find_all().await?.is_empty());

        let created = repo.create(buyer_draft("189-58-5819")).await?;
        assert_eq!(created.id, 1);
        assert_eq!(repo.find_by_id(created.id).await?, created);

        let all = repo.find_all().await?;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].card_number_id, "189-58-5819");
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_card_number_already_exists() -> Result<(), anyhow::Error> {
        let repo = SeaOrmRepository::<buyer::Entity>::new(get_db().await?);
        repo.create(buyer_draft("189-58-5819")).await?;
        let err = repo.create(buyer_draft("189-58-5819")).await.unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyExists(_)), "{err:?}");
        assert_eq!(repo.find_all().await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn dangling_foreign_key_persists_nothing() -> Result<(), anyhow::Error> {
        let repo = SeaOrmRepository::<seller::Entity>::new(get_db().await?);
        let err = repo
            .create(seller::Draft {
                cid: 1,
                company_name: "Acme".into(),
                address: "Main St".into(),
                telephone: "555".into(),
                locality_id: 42,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::ForeignKeyViolation(_)), "{err:?}");
        assert!(repo.find_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_and_patch_require_existing_rows() -> Result<(), anyhow::Error> {
        let repo = SeaOrmRepository::<buyer::Entity>::new(get_db().await?);
        let mut b = repo.create(buyer_draft("A-1")).await?;

        b.first_name = "Augusta".into();
        let updated = repo.update(b.clone()).await?;
        assert_eq!(updated.first_name, "Augusta");

        let patched = repo
            .partial_update(b.id, buyer::Patch { last_name: Some("King".into()), ..Default::default() })
            .await?;
        assert_eq!(patched.first_name, "Augusta");
        assert_eq!(patched.last_name, "King");
        assert_eq!(patched.card_number_id, "A-1");

        let missing = buyer::Model { id: 77, ..b };
        assert!(matches!(repo.update(missing).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(
            repo.partial_update(77, buyer::Patch::default()).await,
            Err(ServiceError::NotFound(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn delete_reports_missing_and_referenced_rows() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let warehouses = SeaOrmRepository::<warehouse::Entity>::new(db.clone());
        let err = warehouses.delete(999).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(err.to_string(), "warehouse 999 not found");

        let loc = seed_locality(&db).await?;
        let w = warehouses
            .create(warehouse::Draft {
                warehouse_code: "W-1".into(),
                address: "Dock 4".into(),
                telephone: "555".into(),
                minimum_capacity: 10,
                minimum_temperature: -20.0,
                locality_id: loc.id,
            })
            .await?;

        let localities = SeaOrmRepository::<locality::Entity>::new(db.clone());
        assert!(matches!(localities.delete(loc.id).await, Err(ServiceError::ForeignKeyViolation(_))));

        warehouses.delete(w.id).await?;
        assert!(matches!(warehouses.find_by_id(w.id).await, Err(ServiceError::NotFound(_))));
        localities.delete(loc.id).await?;
        Ok(())
    }

    #[tokio::test]
    async fn validation_runs_before_insert() -> Result<(), anyhow::Error> {
        let repo = SeaOrmRepository::<buyer::Entity>::new(get_db().await?);
        let err = repo.create(buyer_draft("  ")).await.unwrap_err();
        assert!(matches!(err, ServiceError::EmptyEntity(_)));
        Ok(())
    }

    #[tokio::test]
    async fn over_long_code_is_invalid_and_not_stored() -> Result<(), anyhow::Error> {
        let repo = SeaOrmRepository::<buyer::Entity>::new(get_db().await?);
        let err = repo.create(buyer_draft(&"9".repeat(65))).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidEntity(_)), "{err:?}");
        assert!(repo.find_all().await?.is_empty());
        Ok(())
    }
}
