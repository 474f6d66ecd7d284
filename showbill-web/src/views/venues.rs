//! Venue view models: grouped listing and detail page

use chrono::{DateTime, Utc};
use serde::Serialize;
use showbill_common::{genres, time, Error, Result};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::db::{shows, venues};

/// One venue entry inside a city/state group.
#[derive(Debug, Clone, Serialize)]
pub struct VenueListItem {
    pub id: Uuid,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Venues sharing a literal (city, state) pair.
#[derive(Debug, Clone, Serialize)]
pub struct CityGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueListItem>,
}

/// A venue's show resolved to its artist for the detail page.
#[derive(Debug, Clone, Serialize)]
pub struct VenueShow {
    pub artist_id: Uuid,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

/// Venue detail page view model.
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    pub id: Uuid,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: String,
    pub facebook_link: String,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: String,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// All venues grouped by (city, state), groups in first-seen order, each
/// venue with its strict-`>` upcoming-show count.
pub async fn list_venues_grouped(pool: &SqlitePool, now: DateTime<Utc>) -> Result<Vec<CityGroup>> {
    let rows = venues::list_with_upcoming_counts(pool, &time::format_timestamp(now)).await?;

    let mut groups: Vec<CityGroup> = Vec::new();
    for row in rows {
        let item = VenueListItem {
            id: row.guid,
            name: row.name,
            num_upcoming_shows: row.num_upcoming_shows,
        };
        match groups
            .iter_mut()
            .find(|g| g.city == row.city && g.state == row.state)
        {
            Some(group) => group.venues.push(item),
            None => groups.push(CityGroup {
                city: row.city,
                state: row.state,
                venues: vec![item],
            }),
        }
    }

    Ok(groups)
}

/// Venue detail with its shows split past/upcoming (boundary `>=` upcoming).
pub async fn venue_detail(pool: &SqlitePool, id: Uuid, now: DateTime<Utc>) -> Result<VenueDetail> {
    let venue = venues::load_venue(pool, id)
        .await?
        .ok_or_else(|| Error::NotFound("Venue not found.".to_string()))?;

    let mut timestamped = Vec::new();
    for row in shows::shows_for_venue(pool, id).await? {
        let start = time::parse_timestamp(&row.start_time)
            .map_err(|e| Error::Internal(format!("Corrupt show start_time: {}", e)))?;
        timestamped.push((
            start,
            VenueShow {
                artist_id: row.artist_id,
                artist_name: row.artist_name,
                artist_image_link: row.artist_image_link,
                start_time: row.start_time,
            },
        ));
    }
    let (past_shows, upcoming_shows) = time::split_past_upcoming(timestamped, now);

    Ok(VenueDetail {
        id: venue.guid,
        name: venue.name,
        genres: genres::decode(&venue.genres),
        address: venue.address,
        city: venue.city,
        state: venue.state,
        phone: venue.phone,
        website: venue.website_link,
        facebook_link: venue.facebook_link,
        seeking_talent: venue.seeking_talent,
        seeking_description: venue.seeking_description,
        image_link: venue.image_link,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })
}
