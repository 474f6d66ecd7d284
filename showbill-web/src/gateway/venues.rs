//! Venue mutations

use showbill_common::{Error, Result};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::reject_if_invalid;
use crate::db::venues;
use crate::forms::VenueForm;

/// Result of a delete request.
#[derive(Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The venue existed and was removed (shows cascade).
    Deleted,
    /// An empty id is a no-op success, not an error.
    SkippedEmptyId,
}

/// Create a venue from a validated form. Returns the new id.
pub async fn create_venue(pool: &SqlitePool, form: &VenueForm) -> Result<Uuid> {
    reject_if_invalid(form.validate())?;

    let record = form.to_record(Uuid::new_v4());
    let mut tx = pool.begin().await?;
    venues::insert_venue(&mut tx, &record).await?;
    tx.commit().await?;

    tracing::info!("Created venue {} ({})", record.name, record.guid);
    Ok(record.guid)
}

/// Overwrite every field of an existing venue from a validated form.
pub async fn update_venue(pool: &SqlitePool, id: Uuid, form: &VenueForm) -> Result<()> {
    reject_if_invalid(form.validate())?;

    let record = form.to_record(id);
    let mut tx = pool.begin().await?;
    if !venues::venue_exists(&mut tx, id).await? {
        return Err(Error::NotFound(format!("Venue {} not found", id)));
    }
    venues::update_venue(&mut tx, &record).await?;
    tx.commit().await?;

    tracing::info!("Updated venue {} ({})", record.name, id);
    Ok(())
}

/// Delete a venue by its raw id string.
///
/// An empty id is a no-op success; an id that doesn't resolve is a
/// `NotFound` the caller surfaces as a flash, not a hard failure.
pub async fn delete_venue(pool: &SqlitePool, raw_id: &str) -> Result<DeleteOutcome> {
    let raw_id = raw_id.trim();
    if raw_id.is_empty() {
        return Ok(DeleteOutcome::SkippedEmptyId);
    }

    let id = Uuid::parse_str(raw_id)
        .map_err(|_| Error::NotFound("Venue not found. Deletion failed.".to_string()))?;

    let mut tx = pool.begin().await?;
    if !venues::venue_exists(&mut tx, id).await? {
        return Err(Error::NotFound("Venue not found. Deletion failed.".to_string()));
    }
    venues::delete_venue(&mut tx, id).await?;
    tx.commit().await?;

    tracing::info!("Deleted venue {}", id);
    Ok(DeleteOutcome::Deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn valid_form() -> VenueForm {
        VenueForm {
            name: "The Fillmore".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            genres: vec!["Jazz".to_string()],
            ..Default::default()
        }
    }

    async fn venue_count(pool: &SqlitePool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM venues")
            .fetch_one(pool)
            .await
            .expect("count")
    }

    #[tokio::test]
    async fn create_inserts_a_row() {
        let pool = test_pool().await;
        let id = create_venue(&pool, &valid_form()).await.expect("create");

        let loaded = venues::load_venue(&pool, id)
            .await
            .expect("load")
            .expect("present");
        assert_eq!(loaded.name, "The Fillmore");
        assert_eq!(loaded.genres, "Jazz");
    }

    #[tokio::test]
    async fn validation_failure_never_touches_storage() {
        let pool = test_pool().await;
        let form = VenueForm {
            name: String::new(),
            ..valid_form()
        };

        let err = create_venue(&pool, &form).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(venue_count(&pool).await, 0);
    }

    #[tokio::test]
    async fn update_requires_an_existing_row() {
        let pool = test_pool().await;
        let err = update_venue(&pool, Uuid::new_v4(), &valid_form())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn update_is_a_full_overwrite() {
        let pool = test_pool().await;
        let id = create_venue(&pool, &valid_form()).await.expect("create");

        let mut edited = valid_form();
        edited.name = "The Fillmore West".to_string();
        edited.phone = String::new();
        edited.genres = vec!["Rock".to_string()];
        update_venue(&pool, id, &edited).await.expect("update");

        let loaded = venues::load_venue(&pool, id)
            .await
            .expect("load")
            .expect("present");
        assert_eq!(loaded.name, "The Fillmore West");
        assert_eq!(loaded.genres, "Rock");
    }

    #[tokio::test]
    async fn delete_with_empty_id_is_a_noop() {
        let pool = test_pool().await;
        create_venue(&pool, &valid_form()).await.expect("create");

        let outcome = delete_venue(&pool, "  ").await.expect("delete");
        assert_eq!(outcome, DeleteOutcome::SkippedEmptyId);
        assert_eq!(venue_count(&pool).await, 1);
    }

    #[tokio::test]
    async fn delete_of_unknown_id_is_not_found() {
        let pool = test_pool().await;
        let err = delete_venue(&pool, &Uuid::new_v4().to_string())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));

        let err = delete_venue(&pool, "not-a-uuid").await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let pool = test_pool().await;
        let id = create_venue(&pool, &valid_form()).await.expect("create");

        let outcome = delete_venue(&pool, &id.to_string()).await.expect("delete");
        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(venue_count(&pool).await, 0);
    }
}
