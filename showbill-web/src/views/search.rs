//! Name search over venues and artists
//!
//! Case-insensitive substring containment against `name` only; an empty
//! term matches everything. Each hit carries the strict-`>` upcoming-show
//! count, same as the listing views.

use chrono::{DateTime, Utc};
use serde::Serialize;
use showbill_common::{time, Result};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::db::{artists, venues};

/// One search hit with its upcoming-show count.
#[derive(Debug, Clone, Serialize)]
pub struct SearchHit {
    pub id: Uuid,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Search result view model: hit count plus the hits.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<SearchHit>,
}

/// Search venues by name.
pub async fn search_venues(
    pool: &SqlitePool,
    term: &str,
    now: DateTime<Utc>,
) -> Result<SearchResults> {
    let rows = venues::search_by_name(pool, term, &time::format_timestamp(now)).await?;
    let data: Vec<SearchHit> = rows
        .into_iter()
        .map(|row| SearchHit {
            id: row.guid,
            name: row.name,
            num_upcoming_shows: row.num_upcoming_shows,
        })
        .collect();
    Ok(SearchResults {
        count: data.len(),
        data,
    })
}

/// Search artists by name.
pub async fn search_artists(
    pool: &SqlitePool,
    term: &str,
    now: DateTime<Utc>,
) -> Result<SearchResults> {
    let rows = artists::search_by_name(pool, term, &time::format_timestamp(now)).await?;
    let data: Vec<SearchHit> = rows
        .into_iter()
        .map(|row| SearchHit {
            id: row.guid,
            name: row.name,
            num_upcoming_shows: row.num_upcoming_shows,
        })
        .collect();
    Ok(SearchResults {
        count: data.len(),
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use crate::db::{artists, shows, venues};
    use chrono::TimeZone;

    #[tokio::test]
    async fn venue_search_matches_case_insensitively() {
        let pool = test_pool().await;
        let jazz_club = venues::Venue {
            guid: Uuid::new_v4(),
            name: "Jazz Club".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            address: String::new(),
            phone: String::new(),
            genres: String::new(),
            image_link: String::new(),
            facebook_link: String::new(),
            website_link: String::new(),
            seeking_talent: false,
            seeking_description: None,
        };
        let rock_house = venues::Venue {
            name: "Rock House".to_string(),
            guid: Uuid::new_v4(),
            ..jazz_club.clone()
        };

        let mut conn = pool.acquire().await.expect("acquire");
        venues::insert_venue(&mut conn, &jazz_club).await.expect("insert");
        venues::insert_venue(&mut conn, &rock_house).await.expect("insert");
        drop(conn);

        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let results = search_venues(&pool, "jazz", now).await.expect("search");
        assert_eq!(results.count, 1);
        assert_eq!(results.data[0].name, "Jazz Club");
    }

    #[tokio::test]
    async fn artist_search_carries_upcoming_counts() {
        let pool = test_pool().await;
        let a = artists::Artist {
            guid: Uuid::new_v4(),
            name: "Night Owls".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            phone: String::new(),
            genres: String::new(),
            image_link: String::new(),
            facebook_link: String::new(),
            website_link: String::new(),
            seeking_venue: false,
            seeking_description: None,
        };
        let v = venues::Venue {
            guid: Uuid::new_v4(),
            name: "Mohawk".to_string(),
            city: "Austin".to_string(),
            state: "TX".to_string(),
            address: String::new(),
            phone: String::new(),
            genres: String::new(),
            image_link: String::new(),
            facebook_link: String::new(),
            website_link: String::new(),
            seeking_talent: false,
            seeking_description: None,
        };
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap();

        let mut conn = pool.acquire().await.expect("acquire");
        artists::insert_artist(&mut conn, &a).await.expect("artist");
        venues::insert_venue(&mut conn, &v).await.expect("venue");
        for offset in [-3600, 3600, 7200] {
            let show = shows::Show {
                guid: Uuid::new_v4(),
                artist_id: a.guid,
                venue_id: v.guid,
                start_time: now + chrono::Duration::seconds(offset),
            };
            shows::insert_show(&mut conn, &show).await.expect("show");
        }
        drop(conn);

        let results = search_artists(&pool, "owls", now).await.expect("search");
        assert_eq!(results.count, 1);
        assert_eq!(results.data[0].num_upcoming_shows, 2);
    }

    #[tokio::test]
    async fn count_always_equals_data_len() {
        let pool = test_pool().await;
        let now = Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap();
        let results = search_venues(&pool, "anything", now).await.expect("search");
        assert_eq!(results.count, results.data.len());
        assert_eq!(results.count, 0);
    }
}
