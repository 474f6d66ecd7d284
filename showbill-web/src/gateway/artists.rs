//! Artist mutations

use showbill_common::{Error, Result};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::reject_if_invalid;
use crate::db::artists;
use crate::forms::ArtistForm;

/// Create an artist from a validated form. Returns the new id.
pub async fn create_artist(pool: &SqlitePool, form: &ArtistForm) -> Result<Uuid> {
    reject_if_invalid(form.validate())?;

    let record = form.to_record(Uuid::new_v4());
    let mut tx = pool.begin().await?;
    artists::insert_artist(&mut tx, &record).await?;
    tx.commit().await?;

    tracing::info!("Created artist {} ({})", record.name, record.guid);
    Ok(record.guid)
}

/// Overwrite every field of an existing artist from a validated form.
pub async fn update_artist(pool: &SqlitePool, id: Uuid, form: &ArtistForm) -> Result<()> {
    reject_if_invalid(form.validate())?;

    let record = form.to_record(id);
    let mut tx = pool.begin().await?;
    if !artists::artist_exists(&mut tx, id).await? {
        return Err(Error::NotFound(format!("Artist {} not found", id)));
    }
    artists::update_artist(&mut tx, &record).await?;
    tx.commit().await?;

    tracing::info!("Updated artist {} ({})", record.name, id);
    Ok(())
}
