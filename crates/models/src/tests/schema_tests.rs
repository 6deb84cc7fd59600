use anyhow::Result;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, SqlErr};

use super::setup_test_db;
use crate::{buyer, locality, seller, Record};

fn locality_draft() -> locality::Draft {
    locality::Draft {
        locality_name: "Palermo".into(),
        province_name: "Buenos Aires".into(),
        country_name: "Argentina".into(),
    }
}

fn seller_draft(cid: i32, locality_id: i32) -> seller::Draft {
    seller::Draft {
        cid,
        company_name: "Frozen Foods".into(),
        address: "Av. Siempre Viva 742".into(),
        telephone: "555-0101".into(),
        locality_id,
    }
}

#[tokio::test]
async fn migrations_create_every_table() -> Result<()> {
    let db = setup_test_db().await?;
    assert!(locality::Entity::find().all(&db).await?.is_empty());
    assert!(buyer::Entity::find().all(&db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn insert_assigns_ids_and_enforces_foreign_keys() -> Result<()> {
    let db = setup_test_db().await?;

    let mut loc = locality::Model::from_draft(0, locality_draft()).into_active_model().reset_all();
    loc.not_set(locality::Column::Id);
    let loc = loc.insert(&db).await?;
    assert_eq!(loc.id, 1);

    let mut s = seller::Model::from_draft(0, seller_draft(10, loc.id)).into_active_model().reset_all();
    s.not_set(seller::Column::Id);
    let s = s.insert(&db).await?;
    assert_eq!(s.locality_id, loc.id);

    let mut dangling = seller::Model::from_draft(0, seller_draft(11, 999)).into_active_model().reset_all();
    dangling.not_set(seller::Column::Id);
    let err = dangling.insert(&db).await.unwrap_err();
    assert!(matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))), "{err:?}");

    assert_eq!(seller::Entity::find().all(&db).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn unique_codes_are_enforced() -> Result<()> {
    let db = setup_test_db().await?;
    let draft = || buyer::Draft {
        card_number_id: "189-58-5819".into(),
        first_name: "Ada".into(),
        last_name: "Byron".into(),
    };

    let mut first = buyer::Model::from_draft(0, draft()).into_active_model().reset_all();
    first.not_set(buyer::Column::Id);
    first.insert(&db).await?;

    let mut second = buyer::Model::from_draft(0, draft()).into_active_model().reset_all();
    second.not_set(buyer::Column::Id);
    let err = second.insert(&db).await.unwrap_err();
    assert!(matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))), "{err:?}");
    Ok(())
}

#[tokio::test]
async fn referenced_rows_cannot_be_deleted() -> Result<()> {
    let db = setup_test_db().await?;

    let mut loc = locality::Model::from_draft(0, locality_draft()).into_active_model().reset_all();
    loc.not_set(locality::Column::Id);
    let loc = loc.insert(&db).await?;

    let mut s = seller::Model::from_draft(0, seller_draft(10, loc.id)).into_active_model().reset_all();
    s.not_set(seller::Column::Id);
    s.insert(&db).await?;

    let err = locality::Entity::delete_by_id(loc.id).exec(&db).await.unwrap_err();
    assert!(matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))), "{err:?}");
    Ok(())
}
