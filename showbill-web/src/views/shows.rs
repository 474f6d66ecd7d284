//! Show list view model

use serde::Serialize;
use showbill_common::Result;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::db::shows;

/// Fully denormalized show entry for the show list page.
#[derive(Debug, Clone, Serialize)]
pub struct ShowView {
    pub venue_id: Uuid,
    pub venue_name: String,
    pub artist_id: Uuid,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

/// Every show joined against both endpoints, in insertion order.
pub async fn list_shows(pool: &SqlitePool) -> Result<Vec<ShowView>> {
    let rows = shows::list_shows_joined(pool).await?;
    Ok(rows
        .into_iter()
        .map(|row| ShowView {
            venue_id: row.venue_id,
            venue_name: row.venue_name,
            artist_id: row.artist_id,
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
            start_time: row.start_time,
        })
        .collect())
}
