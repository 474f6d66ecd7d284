//! Schema initialization
//!
//! Creates the venues/artists/shows tables if they don't exist. Shows
//! reference both endpoints; deleting a venue cascades to its shows.

use showbill_common::Result;
use sqlx::SqlitePool;

/// Create all tables and indexes if they don't exist.
pub async fn initialize_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS venues (
            guid TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            address TEXT NOT NULL DEFAULT '',
            phone TEXT NOT NULL DEFAULT '',
            genres TEXT NOT NULL DEFAULT '',
            image_link TEXT NOT NULL DEFAULT '',
            facebook_link TEXT NOT NULL DEFAULT '',
            website_link TEXT NOT NULL DEFAULT '',
            seeking_talent INTEGER NOT NULL DEFAULT 0,
            seeking_description TEXT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS artists (
            guid TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            phone TEXT NOT NULL DEFAULT '',
            genres TEXT NOT NULL DEFAULT '',
            image_link TEXT NOT NULL DEFAULT '',
            facebook_link TEXT NOT NULL DEFAULT '',
            website_link TEXT NOT NULL DEFAULT '',
            seeking_venue INTEGER NOT NULL DEFAULT 0,
            seeking_description TEXT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shows (
            guid TEXT PRIMARY KEY,
            artist_id TEXT NOT NULL REFERENCES artists(guid) ON DELETE CASCADE,
            venue_id TEXT NOT NULL REFERENCES venues(guid) ON DELETE CASCADE,
            start_time TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_venue ON shows(venue_id, start_time)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_artist ON shows(artist_id, start_time)")
        .execute(pool)
        .await?;

    tracing::info!("Database schema initialized (venues, artists, shows)");

    Ok(())
}
