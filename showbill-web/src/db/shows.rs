//! Show database operations
//!
//! Shows are the single join entity between venues and artists. The joined
//! loaders return the stored start_time TEXT unparsed; the view layer parses
//! it for partitioning and surfaces the string form.

use chrono::{DateTime, Utc};
use showbill_common::{time, Result};
use sqlx::{Row, SqliteConnection, SqlitePool};
use uuid::Uuid;

use super::parse_guid;

/// Show record as stored.
#[derive(Debug, Clone)]
pub struct Show {
    pub guid: Uuid,
    pub artist_id: Uuid,
    pub venue_id: Uuid,
    pub start_time: DateTime<Utc>,
}

/// A venue's show joined against its artist.
#[derive(Debug, Clone)]
pub struct ShowWithArtist {
    pub artist_id: Uuid,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

/// An artist's show joined against its venue.
#[derive(Debug, Clone)]
pub struct ShowWithVenue {
    pub venue_id: Uuid,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: String,
}

/// Fully denormalized show row for the show list.
#[derive(Debug, Clone)]
pub struct ShowJoinedRow {
    pub venue_id: Uuid,
    pub venue_name: String,
    pub artist_id: Uuid,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

/// Insert a new show row.
pub async fn insert_show(conn: &mut SqliteConnection, show: &Show) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO shows (guid, artist_id, venue_id, start_time, created_at)
        VALUES (?, ?, ?, ?, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(show.guid.to_string())
    .bind(show.artist_id.to_string())
    .bind(show.venue_id.to_string())
    .bind(time::format_timestamp(show.start_time))
    .execute(conn)
    .await?;

    Ok(())
}

/// All shows for one venue, joined against the artist, in start order.
pub async fn shows_for_venue(pool: &SqlitePool, venue_id: Uuid) -> Result<Vec<ShowWithArtist>> {
    let rows = sqlx::query(
        r#"
        SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
               s.start_time
        FROM shows s
        JOIN artists a ON s.artist_id = a.guid
        WHERE s.venue_id = ?
        ORDER BY s.start_time ASC
        "#,
    )
    .bind(venue_id.to_string())
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| {
            let artist_id: String = row.get("artist_id");
            Ok(ShowWithArtist {
                artist_id: parse_guid(&artist_id)?,
                artist_name: row.get("artist_name"),
                artist_image_link: row.get("artist_image_link"),
                start_time: row.get("start_time"),
            })
        })
        .collect()
}

/// All shows for one artist, joined against the venue, in start order.
pub async fn shows_for_artist(pool: &SqlitePool, artist_id: Uuid) -> Result<Vec<ShowWithVenue>> {
    let rows = sqlx::query(
        r#"
        SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
               s.start_time
        FROM shows s
        JOIN venues v ON s.venue_id = v.guid
        WHERE s.artist_id = ?
        ORDER BY s.start_time ASC
        "#,
    )
    .bind(artist_id.to_string())
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| {
            let venue_id: String = row.get("venue_id");
            Ok(ShowWithVenue {
                venue_id: parse_guid(&venue_id)?,
                venue_name: row.get("venue_name"),
                venue_image_link: row.get("venue_image_link"),
                start_time: row.get("start_time"),
            })
        })
        .collect()
}

/// Every show joined against both endpoints, denormalized for the show list.
pub async fn list_shows_joined(pool: &SqlitePool) -> Result<Vec<ShowJoinedRow>> {
    let rows = sqlx::query(
        r#"
        SELECT s.venue_id, v.name AS venue_name,
               s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
               s.start_time
        FROM shows s
        JOIN artists a ON s.artist_id = a.guid
        JOIN venues v ON s.venue_id = v.guid
        ORDER BY s.rowid ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| {
            let venue_id: String = row.get("venue_id");
            let artist_id: String = row.get("artist_id");
            Ok(ShowJoinedRow {
                venue_id: parse_guid(&venue_id)?,
                venue_name: row.get("venue_name"),
                artist_id: parse_guid(&artist_id)?,
                artist_name: row.get("artist_name"),
                artist_image_link: row.get("artist_image_link"),
                start_time: row.get("start_time"),
            })
        })
        .collect()
}
