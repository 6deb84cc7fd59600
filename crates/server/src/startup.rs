use std::{env, net::SocketAddr, path::Path};

use common::{env::ensure_fixtures_dir, utils::logging::init_logging_from_env};
use configs::{AppConfig, StorageBackend};
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use service::{storage::MemoryDatabase, Repositories, Services};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{errors::StartupError, routes};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// `CONFIG_PATH` (default `config.toml`) when present, otherwise defaults plus environment.
pub fn load_config() -> Result<AppConfig, StartupError> {
    let path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let loaded = if Path::new(&path).exists() {
        configs::load_from_file(&path).and_then(|mut cfg| cfg.normalize_and_validate().map(|_| cfg))
    } else {
        warn!(%path, "config file not found, using environment");
        AppConfig::from_env()
    };
    loaded.map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

/// Repositories for the configured backend, wrapped in their services.
pub async fn build_services(cfg: &AppConfig) -> Result<Services, StartupError> {
    let repos = match cfg.storage.backend {
        StorageBackend::Database => {
            let pool = models::db::DatabaseConfig::from(&cfg.database);
            let db = models::db::connect_with_config(&pool)
                .await
                .map_err(|e| StartupError::Database(e.to_string()))?;
            Migrator::up(&db, None).await.map_err(|e| StartupError::Storage(e.into()))?;
            info!(backend = "database", "migrations applied");
            Repositories::seaorm(db)
        }
        StorageBackend::Memory => {
            ensure_fixtures_dir(&cfg.storage.fixtures_dir).await;
            let db = MemoryDatabase::from_fixtures(&cfg.storage.fixtures_dir).await?;
            Repositories::memory(db)
        }
    };
    Ok(Services::from(repos))
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let cfg = load_config()?;
    let services = build_services(&cfg).await?;
    let app = routes::build_router(services, build_cors());

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, backend = ?cfg.storage.backend, "starting warehouse server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
