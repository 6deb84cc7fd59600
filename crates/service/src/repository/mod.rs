//! Uniform CRUD contract and its two backends.

pub mod memory;
pub mod seaorm;

use async_trait::async_trait;
use models::Record;

use crate::errors::ServiceError;

pub use memory::MemoryRepository;
pub use seaorm::SeaOrmRepository;

/// Data access for one entity type keyed by `i32`.
///
/// Both backends report failures through the same [`ServiceError`] variants,
/// so callers never need to know which one is configured.
#[async_trait]
pub trait Repository<M: Record>: Send + Sync {
    /// Every row ordered by id; an empty table yields an empty vector.
    async fn find_all(&self) -> Result<Vec<M>, ServiceError>;

    async fn find_by_id(&self, id: i32) -> Result<M, ServiceError>;

    /// Insert a new row and return it with its generated id.
    async fn create(&self, draft: M::Draft) -> Result<M, ServiceError>;

    /// Replace every column of the row identified by `entity.id()`.
    async fn update(&self, entity: M) -> Result<M, ServiceError>;

    /// Apply only the fields present in `patch`.
    async fn partial_update(&self, id: i32, patch: M::Patch) -> Result<M, ServiceError>;

    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}
