use anyhow::Result;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, TransactionTrait};

use super::setup_test_db;
use crate::{product_type, Record};

fn draft(description: &str) -> product_type::Draft {
    product_type::Draft { description: description.into() }
}

#[tokio::test]
async fn committed_rows_are_visible() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let mut am = product_type::Model::from_draft(0, draft("frozen")).into_active_model().reset_all();
    am.not_set(product_type::Column::Id);
    let created = am.insert(&txn).await?;
    txn.commit().await?;

    let found = product_type::Entity::find_by_id(created.id).one(&db).await?;
    assert_eq!(found.map(|m| m.description), Some("frozen".to_string()));
    Ok(())
}

#[tokio::test]
async fn rolled_back_rows_are_discarded() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let mut am = product_type::Model::from_draft(0, draft("chilled")).into_active_model().reset_all();
    am.not_set(product_type::Column::Id);
    am.insert(&txn).await?;
    txn.rollback().await?;

    assert!(product_type::Entity::find().all(&db).await?.is_empty());
    Ok(())
}
