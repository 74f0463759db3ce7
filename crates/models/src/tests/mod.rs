
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::db::{connect_with_config, DatabaseConfig};

/// Fresh, migrated database for one test.
/// Defaults to a private in-memory SQLite; `TEST_DATABASE_URL` overrides it.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let url = std::env::var("TEST_DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());
    let cfg = DatabaseConfig { url, ..DatabaseConfig::from_env() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
