//! Venue database operations

use showbill_common::Result;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};
use uuid::Uuid;

use super::parse_guid;

/// Venue record as stored. `genres` keeps the delimited storage encoding;
/// the view layer decodes it.
#[derive(Debug, Clone)]
pub struct Venue {
    pub guid: Uuid,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Venue listing entry with its upcoming-show count.
#[derive(Debug, Clone)]
pub struct VenueListingRow {
    pub guid: Uuid,
    pub name: String,
    pub city: String,
    pub state: String,
    pub num_upcoming_shows: i64,
}

fn venue_from_row(row: &SqliteRow) -> Result<Venue> {
    let guid_str: String = row.get("guid");
    Ok(Venue {
        guid: parse_guid(&guid_str)?,
        name: row.get("name"),
        city: row.get("city"),
        state: row.get("state"),
        address: row.get("address"),
        phone: row.get("phone"),
        genres: row.get("genres"),
        image_link: row.get("image_link"),
        facebook_link: row.get("facebook_link"),
        website_link: row.get("website_link"),
        seeking_talent: row.get("seeking_talent"),
        seeking_description: row.get("seeking_description"),
    })
}

/// Insert a new venue row.
pub async fn insert_venue(conn: &mut SqliteConnection, venue: &Venue) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO venues (
            guid, name, city, state, address, phone, genres,
            image_link, facebook_link, website_link,
            seeking_talent, seeking_description, created_at, updated_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(venue.guid.to_string())
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.genres)
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .bind(&venue.website_link)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .execute(conn)
    .await?;

    Ok(())
}

/// Load a venue by id.
pub async fn load_venue(pool: &SqlitePool, guid: Uuid) -> Result<Option<Venue>> {
    let row = sqlx::query(
        r#"
        SELECT guid, name, city, state, address, phone, genres,
               image_link, facebook_link, website_link,
               seeking_talent, seeking_description
        FROM venues
        WHERE guid = ?
        "#,
    )
    .bind(guid.to_string())
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(venue_from_row).transpose()
}

/// Check whether a venue exists (transaction-scoped).
pub async fn venue_exists(conn: &mut SqliteConnection, guid: Uuid) -> Result<bool> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM venues WHERE guid = ?")
        .bind(guid.to_string())
        .fetch_one(conn)
        .await?;
    Ok(count > 0)
}

/// Overwrite every field of an existing venue row.
pub async fn update_venue(conn: &mut SqliteConnection, venue: &Venue) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE venues SET
            name = ?, city = ?, state = ?, address = ?, phone = ?, genres = ?,
            image_link = ?, facebook_link = ?, website_link = ?,
            seeking_talent = ?, seeking_description = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE guid = ?
        "#,
    )
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.genres)
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .bind(&venue.website_link)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .bind(venue.guid.to_string())
    .execute(conn)
    .await?;

    Ok(())
}

/// Delete a venue row. Shows referencing it cascade at the schema level.
pub async fn delete_venue(conn: &mut SqliteConnection, guid: Uuid) -> Result<()> {
    sqlx::query("DELETE FROM venues WHERE guid = ?")
        .bind(guid.to_string())
        .execute(conn)
        .await?;
    Ok(())
}

fn listing_from_row(row: &SqliteRow) -> Result<VenueListingRow> {
    let guid_str: String = row.get("guid");
    Ok(VenueListingRow {
        guid: parse_guid(&guid_str)?,
        name: row.get("name"),
        city: row.get("city"),
        state: row.get("state"),
        num_upcoming_shows: row.get("num_upcoming_shows"),
    })
}

/// All venues in insertion order, each with its count of shows starting
/// strictly after `now` (the list-view boundary).
pub async fn list_with_upcoming_counts(pool: &SqlitePool, now: &str) -> Result<Vec<VenueListingRow>> {
    let rows = sqlx::query(
        r#"
        SELECT v.guid, v.name, v.city, v.state,
               (SELECT COUNT(*) FROM shows s
                WHERE s.venue_id = v.guid AND s.start_time > ?) AS num_upcoming_shows
        FROM venues v
        ORDER BY v.rowid ASC
        "#,
    )
    .bind(now)
    .fetch_all(pool)
    .await?;

    rows.iter().map(listing_from_row).collect()
}

/// Case-insensitive substring search on venue name. An empty term matches
/// every venue.
pub async fn search_by_name(pool: &SqlitePool, term: &str, now: &str) -> Result<Vec<VenueListingRow>> {
    let rows = sqlx::query(
        r#"
        SELECT v.guid, v.name, v.city, v.state,
               (SELECT COUNT(*) FROM shows s
                WHERE s.venue_id = v.guid AND s.start_time > ?) AS num_upcoming_shows
        FROM venues v
        WHERE v.name LIKE '%' || ? || '%'
        ORDER BY v.rowid ASC
        "#,
    )
    .bind(now)
    .bind(term)
    .fetch_all(pool)
    .await?;

    rows.iter().map(listing_from_row).collect()
}
