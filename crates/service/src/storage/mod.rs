//! Process-local storage behind the in-memory repository backend.
//!
//! [`MemoryDatabase`] keeps one ordered map per table behind a single lock and
//! is seeded from JSON fixture files at startup.

pub mod fixtures;
pub mod memory;

pub use memory::{InMemory, MemoryDatabase, Tables};
