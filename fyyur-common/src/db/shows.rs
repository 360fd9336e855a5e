//! Show database operations

use sqlx::SqlitePool;
use tracing::debug;

use super::artists::artist_exists;
use super::venues::venue_exists;
use super::ShowListing;
use crate::validation::{ShowInput, ValidationErrors};
use crate::{Error, Result};

/// Every show with its venue name, artist name and artist image, ordered by
/// start time (one joined query)
pub async fn list_shows(pool: &SqlitePool) -> Result<Vec<ShowListing>> {
    let shows = sqlx::query_as::<_, ShowListing>(
        r#"
        SELECT s.id AS show_id,
               v.id AS venue_id, v.name AS venue_name,
               a.id AS artist_id, a.name AS artist_name,
               a.image_link AS artist_image_link,
               s.start_time
        FROM shows s
        JOIN venues v ON v.id = s.venue_id
        JOIN artists a ON a.id = s.artist_id
        ORDER BY s.start_time, s.id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(shows)
}

/// Book an artist at a venue, returning the new show's id
///
/// Both ids must reference existing rows; otherwise the insert is refused
/// with `Error::Validation` naming the missing field(s). No overlap check.
pub async fn insert_show(pool: &SqlitePool, input: &ShowInput) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let mut errors = ValidationErrors::new();
    if !artist_exists(&mut *tx, input.artist_id).await? {
        errors.add("artist_id", format!("No artist with id {}.", input.artist_id));
    }
    if !venue_exists(&mut *tx, input.venue_id).await? {
        errors.add("venue_id", format!("No venue with id {}.", input.venue_id));
    }
    if !errors.is_empty() {
        debug!("Show rejected: {}", errors);
        return Err(Error::Validation(errors));
    }

    let result = sqlx::query("INSERT INTO shows (artist_id, venue_id, start_time) VALUES (?, ?, ?)")
        .bind(input.artist_id)
        .bind(input.venue_id)
        .bind(input.start_time)
        .execute(&mut *tx)
        .await?;

    let id = result.last_insert_rowid();
    tx.commit().await?;

    Ok(id)
}
