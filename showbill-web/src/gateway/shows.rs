//! Show mutations

use showbill_common::{Error, Result};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::reject_if_invalid;
use crate::db::{artists, shows, venues};
use crate::forms::ShowForm;

/// Create a show from a validated form. Both foreign keys must resolve.
/// There is no overlap or double-booking check.
pub async fn create_show(pool: &SqlitePool, form: &ShowForm) -> Result<Uuid> {
    reject_if_invalid(form.validate())?;

    let record = form.to_record(Uuid::new_v4())?;
    let mut tx = pool.begin().await?;
    if !artists::artist_exists(&mut tx, record.artist_id).await? {
        return Err(Error::InvalidInput(format!(
            "Unknown artist id {}",
            record.artist_id
        )));
    }
    if !venues::venue_exists(&mut tx, record.venue_id).await? {
        return Err(Error::InvalidInput(format!(
            "Unknown venue id {}",
            record.venue_id
        )));
    }
    shows::insert_show(&mut tx, &record).await?;
    tx.commit().await?;

    tracing::info!(
        "Created show {} (artist {}, venue {})",
        record.guid,
        record.artist_id,
        record.venue_id
    );
    Ok(record.guid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use crate::forms::{ArtistForm, VenueForm};
    use crate::gateway::{create_artist, create_venue};

    async fn seed(pool: &SqlitePool) -> (Uuid, Uuid) {
        let venue_id = create_venue(
            pool,
            &VenueForm {
                name: "Mohawk".to_string(),
                city: "Austin".to_string(),
                state: "TX".to_string(),
                genres: vec!["Rock".to_string()],
                ..Default::default()
            },
        )
        .await
        .expect("venue");
        let artist_id = create_artist(
            pool,
            &ArtistForm {
                name: "Night Owls".to_string(),
                city: "Austin".to_string(),
                state: "TX".to_string(),
                genres: vec!["Rock".to_string()],
                ..Default::default()
            },
        )
        .await
        .expect("artist");
        (artist_id, venue_id)
    }

    #[tokio::test]
    async fn create_show_with_resolvable_endpoints() {
        let pool = test_pool().await;
        let (artist_id, venue_id) = seed(&pool).await;

        let form = ShowForm {
            artist_id: artist_id.to_string(),
            venue_id: venue_id.to_string(),
            start_time: "2026-09-01T20:00:00Z".to_string(),
        };
        create_show(&pool, &form).await.expect("create show");

        let listed = shows::list_shows_joined(&pool).await.expect("list");
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].artist_name, "Night Owls");
    }

    #[tokio::test]
    async fn unknown_artist_rejects_without_insert() {
        let pool = test_pool().await;
        let (_, venue_id) = seed(&pool).await;

        let form = ShowForm {
            artist_id: Uuid::new_v4().to_string(),
            venue_id: venue_id.to_string(),
            start_time: "2026-09-01T20:00:00Z".to_string(),
        };
        let err = create_show(&pool, &form).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let listed = shows::list_shows_joined(&pool).await.expect("list");
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn malformed_start_time_rejects() {
        let pool = test_pool().await;
        let (artist_id, venue_id) = seed(&pool).await;

        let form = ShowForm {
            artist_id: artist_id.to_string(),
            venue_id: venue_id.to_string(),
            start_time: "soon".to_string(),
        };
        let err = create_show(&pool, &form).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[tokio::test]
    async fn shows_in_the_past_are_accepted() {
        let pool = test_pool().await;
        let (artist_id, venue_id) = seed(&pool).await;

        let form = ShowForm {
            artist_id: artist_id.to_string(),
            venue_id: venue_id.to_string(),
            start_time: "2001-01-01T20:00:00Z".to_string(),
        };
        create_show(&pool, &form).await.expect("create show");
    }
}
