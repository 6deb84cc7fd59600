/// Schema constraints exercised through the entities
pub mod schema_tests;

/// Transaction commit and rollback behaviour
pub mod transaction_tests;

use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::db::{connect_with_config, DatabaseConfig};

/// Fresh, fully migrated SQLite database living in memory.
pub(crate) async fn setup_test_db() -> Result<DatabaseConnection> {
    let mut cfg = DatabaseConfig::for_url("sqlite::memory:");
    cfg.max_connections = 1;
    cfg.min_connections = 1;
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
