//! Database access layer for showbill-web
//!
//! One module per entity (venues, artists, shows). Write queries take a
//! `&mut SqliteConnection` so the mutation gateway can run them inside a
//! transaction; read queries borrow the pool directly.

pub mod artists;
pub mod schema;
pub mod shows;
pub mod venues;

use showbill_common::{Error, Result};
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;
use std::path::Path;
use uuid::Uuid;

/// Parse a guid column value; a failure means the row is corrupt.
pub(crate) fn parse_guid(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|e| Error::Internal(format!("Corrupt guid '{}': {}", raw, e)))
}

/// Initialize the database connection pool.
///
/// Creates the parent directory and database file if missing, enforces
/// foreign keys, and brings the schema up to date.
pub async fn init_database_pool(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .foreign_keys(true);

    tracing::debug!("Connecting to database: {}", db_path.display());
    let pool = SqlitePool::connect_with(options).await?;

    schema::initialize_schema(&pool).await?;

    Ok(pool)
}

/// In-memory pool for tests. Capped at one connection so every acquire
/// sees the same in-memory database.
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    use sqlx::sqlite::SqlitePoolOptions;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    schema::initialize_schema(&pool)
        .await
        .expect("Schema initialization failed");

    pool
}
