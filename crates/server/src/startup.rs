use std::{env, path::Path};

use axum::Router;
use common::utils::logging::{init_logging, LogFormat};
use configs::AppConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Resolve the application config: the TOML file at `CONFIG_PATH`
/// (default `config.toml`) when it exists, otherwise environment variables.
/// A file that exists but does not parse is an error, not a fallback.
pub fn load_config() -> Result<AppConfig, StartupError> {
    let path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    let mut cfg = if Path::new(&path).exists() {
        configs::load_from_file(&path).map_err(|e| StartupError::InvalidConfig(format!("{path}: {e}")))?
    } else {
        let mut cfg = AppConfig::from_env();
        if cfg.database.url.trim().is_empty() {
            cfg.database.url = models::db::DATABASE_URL.clone();
        }
        cfg
    };
    cfg.normalize_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    Ok(cfg)
}

/// Install the tracing subscriber in the configured format.
pub fn init_logging_from(cfg: &AppConfig) {
    let format = cfg.logging.format.parse::<LogFormat>().unwrap_or_else(|e| {
        // subscriber is not up yet
        eprintln!("{e}; using compact logs");
        LogFormat::Compact
    });
    init_logging(format);
}

/// Connect the pool described by `cfg` and apply migrations when enabled.
pub async fn prepare_database(cfg: &AppConfig) -> anyhow::Result<DatabaseConnection> {
    let db = models::db::connect_with_config(&models::db::DatabaseConfig::from(&cfg.database)).await?;
    models::db::test_connection(&db).await?;
    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None).await?;
        info!("database schema up to date");
    } else {
        warn!("auto_migrate disabled; schema is assumed current");
    }
    Ok(db)
}

/// Router over an open database connection.
pub fn build_app(db: DatabaseConnection) -> Router {
    routes::build_router(ServerState::with_database(db), build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        // never resolve; the process is stopped externally
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Serve with an already-resolved config until ctrl-c.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let db = prepare_database(&cfg).await?;
    let app = build_app(db);

    let listener = TcpListener::bind((cfg.server.host.as_str(), cfg.server.port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "kyc api listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("server stopped");
    Ok(())
}
