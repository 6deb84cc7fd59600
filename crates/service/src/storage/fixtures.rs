//! JSON fixture loading for the in-memory backend.
//!
//! Each table is read from `<dir>/<table>.json`, a JSON array of full rows
//! (ids included). Rows are taken as-is; constraints apply to later writes.
use std::{collections::BTreeMap, io::ErrorKind, path::Path, sync::Arc};

use models::Table;
use tokio::fs;
use tracing::{info, warn};

use super::memory::{InMemory, MemoryDatabase, Tables};
use crate::errors::ServiceError;

/// Rows of one table keyed by id; a missing file yields an empty table.
pub async fn load_table<M: InMemory>(dir: &Path) -> Result<BTreeMap<i32, M>, ServiceError> {
    let path = dir.join(format!("{}.json", M::TABLE));
    let bytes = match fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(file = %path.display(), "fixture file missing, table starts empty");
            return Ok(BTreeMap::new());
        }
        Err(e) => return Err(ServiceError::Fixture(format!("{}: {}", path.display(), e))),
    };
    let rows: Vec<M> =
        serde_json::from_slice(&bytes).map_err(|e| ServiceError::Fixture(format!("{}: {}", path.display(), e)))?;
    Ok(rows.into_iter().map(|row| (row.id(), row)).collect())
}

impl MemoryDatabase {
    /// Seed a new store from the fixture files in `dir`.
    pub async fn from_fixtures<P: AsRef<Path>>(dir: P) -> Result<Arc<Self>, ServiceError> {
        let dir = dir.as_ref();
        let tables = Tables::load(dir).await?;
        let rows: usize = Table::ALL.iter().map(|t| tables.len(*t)).sum();
        info!(dir = %dir.display(), rows, "in-memory store seeded from fixtures");
        Ok(Arc::new(Self::with_tables(tables)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::buyer;

    fn temp_dir() -> std::path::PathBuf {
        std::env::temp_dir().join(format!("fixtures_{}", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn seeds_present_tables_and_leaves_others_empty() -> Result<(), anyhow::Error> {
        let dir = temp_dir();
        fs::create_dir_all(&dir).await?;
        fs::write(
            dir.join("buyers.json"),
            r#"[{"id":4,"card_number_id":"402323","first_name":"Jhon","last_name":"Doe"}]"#,
        )
        .await?;

        let db = MemoryDatabase::from_fixtures(&dir).await?;
        let tables = db.read().await;
        assert_eq!(tables.buyers.len(), 1);
        assert_eq!(tables.buyers[&4].first_name, "Jhon");
        assert!(tables.sellers.is_empty());
        assert_eq!(tables.next_id::<buyer::Model>()?, 5);
        drop(tables);

        fs::remove_dir_all(&dir).await.ok();
        Ok(())
    }

    #[tokio::test]
    async fn malformed_file_names_the_file() -> Result<(), anyhow::Error> {
        let dir = temp_dir();
        fs::create_dir_all(&dir).await?;
        fs::write(dir.join("carriers.json"), "{ not json").await?;

        let err = MemoryDatabase::from_fixtures(&dir).await.unwrap_err();
        assert!(matches!(&err, ServiceError::Fixture(msg) if msg.contains("carriers.json")), "{err:?}");

        fs::remove_dir_all(&dir).await.ok();
        Ok(())
    }
}
