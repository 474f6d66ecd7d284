//! Artist view models: flat listing and detail page

use chrono::{DateTime, Utc};
use serde::Serialize;
use showbill_common::{genres, time, Error, Result};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::db::{artists, shows};

/// Entry in the flat artist listing.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistListItem {
    pub id: Uuid,
    pub name: String,
}

/// An artist's show resolved to its venue for the detail page.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistShow {
    pub venue_id: Uuid,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: String,
}

/// Artist detail page view model.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    pub id: Uuid,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website: String,
    pub facebook_link: String,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: String,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// All artists as id/name pairs in insertion order.
pub async fn list_artists(pool: &SqlitePool) -> Result<Vec<ArtistListItem>> {
    let rows = artists::list_names(pool).await?;
    Ok(rows
        .into_iter()
        .map(|(id, name)| ArtistListItem { id, name })
        .collect())
}

/// Artist detail with shows split past/upcoming (boundary `>=` upcoming),
/// joined against the venue side.
pub async fn artist_detail(pool: &SqlitePool, id: Uuid, now: DateTime<Utc>) -> Result<ArtistDetail> {
    let artist = artists::load_artist(pool, id)
        .await?
        .ok_or_else(|| Error::NotFound("Artist not found.".to_string()))?;

    let mut timestamped = Vec::new();
    for row in shows::shows_for_artist(pool, id).await? {
        let start = time::parse_timestamp(&row.start_time)
            .map_err(|e| Error::Internal(format!("Corrupt show start_time: {}", e)))?;
        timestamped.push((
            start,
            ArtistShow {
                venue_id: row.venue_id,
                venue_name: row.venue_name,
                venue_image_link: row.venue_image_link,
                start_time: row.start_time,
            },
        ));
    }
    let (past_shows, upcoming_shows) = time::split_past_upcoming(timestamped, now);

    Ok(ArtistDetail {
        id: artist.guid,
        name: artist.name,
        genres: genres::decode(&artist.genres),
        city: artist.city,
        state: artist.state,
        phone: artist.phone,
        website: artist.website_link,
        facebook_link: artist.facebook_link,
        seeking_venue: artist.seeking_venue,
        seeking_description: artist.seeking_description,
        image_link: artist.image_link,
        past_shows_count: past_shows.len(),
        upcoming_shows_count: upcoming_shows.len(),
        past_shows,
        upcoming_shows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use crate::db::venues;
    use chrono::TimeZone;

    #[tokio::test]
    async fn detail_resolves_venue_side_and_partitions() {
        let pool = test_pool().await;
        let a = artists::Artist {
            guid: Uuid::new_v4(),
            name: "Guided Tour".to_string(),
            city: "Portland".to_string(),
            state: "OR".to_string(),
            phone: String::new(),
            genres: "Folk,Indie".to_string(),
            image_link: String::new(),
            facebook_link: String::new(),
            website_link: "https://guidedtour.example".to_string(),
            seeking_venue: true,
            seeking_description: None,
        };
        let v = venues::Venue {
            guid: Uuid::new_v4(),
            name: "The Fillmore".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: String::new(),
            phone: String::new(),
            genres: String::new(),
            image_link: "https://example.com/v.png".to_string(),
            facebook_link: String::new(),
            website_link: String::new(),
            seeking_talent: false,
            seeking_description: None,
        };
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();

        let mut conn = pool.acquire().await.expect("acquire");
        artists::insert_artist(&mut conn, &a).await.expect("artist");
        venues::insert_venue(&mut conn, &v).await.expect("venue");
        for offset in [-60, 60] {
            let show = shows::Show {
                guid: Uuid::new_v4(),
                artist_id: a.guid,
                venue_id: v.guid,
                start_time: now + chrono::Duration::seconds(offset),
            };
            shows::insert_show(&mut conn, &show).await.expect("show");
        }
        drop(conn);

        let detail = artist_detail(&pool, a.guid, now).await.expect("detail");
        assert_eq!(detail.website, "https://guidedtour.example");
        assert_eq!(detail.genres, vec!["Folk", "Indie"]);
        assert_eq!(detail.past_shows_count, 1);
        assert_eq!(detail.upcoming_shows_count, 1);
        assert_eq!(detail.upcoming_shows[0].venue_name, "The Fillmore");
        assert_eq!(
            detail.upcoming_shows[0].venue_image_link,
            "https://example.com/v.png"
        );
    }

    #[tokio::test]
    async fn missing_artist_is_not_found() {
        let pool = test_pool().await;
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let err = artist_detail(&pool, Uuid::new_v4(), now).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
