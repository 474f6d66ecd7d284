//! Artist database operations

use showbill_common::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};
use uuid::Uuid;

use super::parse_guid;

/// Artist record as stored. `genres` keeps the delimited storage encoding.
#[derive(Debug, Clone)]
pub struct Artist {
    pub guid: Uuid,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Artist listing entry with its upcoming-show count.
#[derive(Debug, Clone)]
pub struct ArtistListingRow {
    pub guid: Uuid,
    pub name: String,
    pub num_upcoming_shows: i64,
}

fn artist_from_row(row: &SqliteRow) -> Result<Artist> {
    let guid_str: String = row.get("guid");
    Ok(Artist {
        guid: parse_guid(&guid_str)?,
        name: row.get("name"),
        city: row.get("city"),
        state: row.get("state"),
        phone: row.get("phone"),
        genres: row.get("genres"),
        image_link: row.get("image_link"),
        facebook_link: row.get("facebook_link"),
        website_link: row.get("website_link"),
        seeking_venue: row.get("seeking_venue"),
        seeking_description: row.get("seeking_description"),
    })
}

/// Insert a new artist row.
pub async fn insert_artist(conn: &mut SqliteConnection, artist: &Artist) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO artists (
            guid, name, city, state, phone, genres,
            image_link, facebook_link, website_link,
            seeking_venue, seeking_description, created_at, updated_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(artist.guid.to_string())
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.genres)
    .bind(&artist.image_link)
    .bind(&artist.facebook_link)
    .bind(&artist.website_link)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .execute(conn)
    .await?;

    Ok(())
}

/// Load an artist by id.
pub async fn load_artist(pool: &SqlitePool, guid: Uuid) -> Result<Option<Artist>> {
    let row = sqlx::query(
        r#"
        SELECT guid, name, city, state, phone, genres,
               image_link, facebook_link, website_link,
               seeking_venue, seeking_description
        FROM artists
        WHERE guid = ?
        "#,
    )
    .bind(guid.to_string())
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(artist_from_row).transpose()
}

/// Check whether an artist exists (transaction-scoped).
pub async fn artist_exists(conn: &mut SqliteConnection, guid: Uuid) -> Result<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM artists WHERE guid = ?")
        .bind(guid.to_string())
        .fetch_one(conn)
        .await?;
    Ok(count > 0)
}

/// Overwrite every field of an existing artist row.
pub async fn update_artist(conn: &mut SqliteConnection, artist: &Artist) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE artists SET
            name = ?, city = ?, state = ?, phone = ?, genres = ?,
            image_link = ?, facebook_link = ?, website_link = ?,
            seeking_venue = ?, seeking_description = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE guid = ?
        "#,
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.genres)
    .bind(&artist.image_link)
    .bind(&artist.facebook_link)
    .bind(&artist.website_link)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .bind(artist.guid.to_string())
    .execute(conn)
    .await?;

    Ok(())
}

/// All artists as (id, name) pairs in insertion order.
pub async fn list_names(pool: &SqlitePool) -> Result<Vec<(Uuid, String)>> {
    let rows = sqlx::query("SELECT guid, name FROM artists ORDER BY rowid ASC")
        .fetch_all(pool)
        .await?;

    rows.iter()
        .map(|row| {
            let guid_str: String = row.get("guid");
            Ok((parse_guid(&guid_str)?, row.get("name")))
        })
        .collect()
}

/// Case-insensitive substring search on artist name. An empty term matches
/// every artist.
pub async fn search_by_name(
    pool: &SqlitePool,
    term: &str,
    now: &str,
) -> Result<Vec<ArtistListingRow>> {
    let rows = sqlx::query(
        r#"
        SELECT a.guid, a.name,
               (SELECT COUNT(*) FROM shows s
                WHERE s.artist_id = a.guid AND s.start_time > ?) AS num_upcoming_shows
        FROM artists a
        WHERE a.name LIKE '%' || ? || '%'
        ORDER BY a.rowid ASC
        "#,
    )
    .bind(now)
    .bind(term)
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|row| {
            let guid_str: String = row.get("guid");
            Ok(ArtistListingRow {
                guid: parse_guid(&guid_str)?,
                name: row.get("name"),
                num_upcoming_shows: row.get("num_upcoming_shows"),
            })
        })
        .collect()
}
