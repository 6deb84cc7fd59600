//! Environment/runtime helpers
//!
//! Sanity checks on directories the process expects at startup.

use tracing::warn;

/// Warn when the fixtures directory used to seed the in-memory backend is missing.
///
/// A missing directory is not fatal: every table then starts empty.
pub async fn ensure_fixtures_dir(fixtures_dir: &str) -> bool {
    match tokio::fs::metadata(fixtures_dir).await {
        Ok(meta) if meta.is_dir() => true,
        Ok(_) => {
            warn!(%fixtures_dir, "fixtures path is not a directory; tables start empty");
            false
        }
        Err(_) => {
            warn!(%fixtures_dir, "fixtures directory not found; tables start empty");
            false
        }
    }
}
