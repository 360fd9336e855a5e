//! Artist database operations

use sqlx::SqlitePool;

use super::{contains_pattern, Artist, ArtistDetail, BookedShow, RecordSummary, SearchResults, ShowSchedule};
use crate::validation::ArtistInput;
use crate::{time, Error, Result};

const ARTIST_COLUMNS: &str = "id, name, city, state, phone, website_link, facebook_link, \
     image_link, seeking_venue, seeking_description, created_at, updated_at";

/// Every artist as `{id, name, upcoming shows}`, ordered by name
pub async fn list_artists(pool: &SqlitePool) -> Result<Vec<RecordSummary>> {
    artist_summaries(pool, "%").await
}

/// Case-insensitive substring search on artist name
pub async fn search_artists(pool: &SqlitePool, term: &str) -> Result<SearchResults> {
    let matches = artist_summaries(pool, &contains_pattern(term)).await?;
    Ok(SearchResults::from(matches))
}

async fn artist_summaries(pool: &SqlitePool, pattern: &str) -> Result<Vec<RecordSummary>> {
    let rows = sqlx::query_as::<_, RecordSummary>(
        r#"
        SELECT a.id, a.name, COUNT(s.id) AS num_upcoming_shows
        FROM artists a
        LEFT JOIN shows s ON s.artist_id = a.id AND s.start_time > ?
        WHERE a.name LIKE ? ESCAPE '\'
        GROUP BY a.id
        ORDER BY a.name COLLATE NOCASE, a.id
        "#,
    )
    .bind(time::now())
    .bind(pattern)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Most recently listed artists, newest first
pub async fn recent_artists(pool: &SqlitePool, limit: i64) -> Result<Vec<RecordSummary>> {
    let rows = sqlx::query_as::<_, RecordSummary>(
        r#"
        SELECT a.id, a.name, COUNT(s.id) AS num_upcoming_shows
        FROM artists a
        LEFT JOIN shows s ON s.artist_id = a.id AND s.start_time > ?
        GROUP BY a.id
        ORDER BY a.id DESC
        LIMIT ?
        "#,
    )
    .bind(time::now())
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Load artist by id
pub async fn load_artist(pool: &SqlitePool, id: i64) -> Result<Option<Artist>> {
    let artist = sqlx::query_as::<_, Artist>(&format!(
        "SELECT {} FROM artists WHERE id = ?",
        ARTIST_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(artist)
}

/// Load artist with past and upcoming shows (the venue is the other party)
pub async fn load_artist_detail(pool: &SqlitePool, id: i64) -> Result<Option<ArtistDetail>> {
    let Some(artist) = load_artist(pool, id).await? else {
        return Ok(None);
    };

    let shows = sqlx::query_as::<_, BookedShow>(
        r#"
        SELECT s.id AS show_id, v.id AS other_id, v.name AS other_name,
               v.image_link AS other_image_link, s.start_time
        FROM shows s
        JOIN venues v ON v.id = s.venue_id
        WHERE s.artist_id = ?
        ORDER BY s.start_time, s.id
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(Some(ArtistDetail {
        artist,
        shows: ShowSchedule::split(shows, time::now()),
    }))
}

/// Insert an artist, returning its assigned id
pub async fn insert_artist(pool: &SqlitePool, input: &ArtistInput) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        INSERT INTO artists (
            name, city, state, phone, website_link, facebook_link,
            image_link, seeking_venue, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.phone)
    .bind(&input.website_link)
    .bind(&input.facebook_link)
    .bind(&input.image_link)
    .bind(input.seeking_venue)
    .bind(&input.seeking_description)
    .execute(&mut *tx)
    .await?;

    let id = result.last_insert_rowid();
    tx.commit().await?;

    Ok(id)
}

/// Overwrite every editable field of an artist
pub async fn update_artist(pool: &SqlitePool, id: i64, input: &ArtistInput) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE artists SET
            name = ?, city = ?, state = ?, phone = ?,
            website_link = ?, facebook_link = ?, image_link = ?,
            seeking_venue = ?, seeking_description = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.phone)
    .bind(&input.website_link)
    .bind(&input.facebook_link)
    .bind(&input.image_link)
    .bind(input.seeking_venue)
    .bind(&input.seeking_description)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("artist {}", id)));
    }

    tx.commit().await?;
    Ok(())
}

/// Delete an artist; their shows go with them
pub async fn delete_artist(pool: &SqlitePool, id: i64) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("artist {}", id)));
    }

    tx.commit().await?;
    Ok(())
}

pub(crate) async fn artist_exists(conn: &mut sqlx::SqliteConnection, id: i64) -> Result<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM artists WHERE id = ?")
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(found.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{artist, test_pool};

    #[tokio::test]
    async fn test_insert_load_update() {
        let (_dir, pool) = test_pool().await;

        let id = insert_artist(&pool, &artist("Guns N Petals")).await.unwrap();
        let loaded = load_artist(&pool, id).await.unwrap().expect("artist exists");
        assert_eq!(loaded.name, "Guns N Petals");
        assert!(loaded.seeking_venue);
        assert_eq!(loaded.image_link.as_deref(), Some("https://images.example.com/artist.jpg"));

        let mut edited = artist("Guns N Petals");
        edited.state = Some("WA".to_string());
        edited.seeking_venue = false;
        update_artist(&pool, id, &edited).await.unwrap();

        let loaded = load_artist(&pool, id).await.unwrap().unwrap();
        assert_eq!(loaded.state.as_deref(), Some("WA"));
        assert!(!loaded.seeking_venue);
    }

    #[tokio::test]
    async fn test_search_examples() {
        let (_dir, pool) = test_pool().await;
        for name in ["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"] {
            insert_artist(&pool, &artist(name)).await.unwrap();
        }

        assert_eq!(search_artists(&pool, "A").await.unwrap().count, 3);

        let band = search_artists(&pool, "band").await.unwrap();
        assert_eq!(band.count, 1);
        assert_eq!(band.data[0].name, "The Wild Sax Band");
    }

    #[tokio::test]
    async fn test_missing_artist() {
        let (_dir, pool) = test_pool().await;
        assert!(load_artist(&pool, 42).await.unwrap().is_none());
        assert!(matches!(delete_artist(&pool, 42).await, Err(Error::NotFound(_))));
        assert!(matches!(
            update_artist(&pool, 42, &artist("Nobody")).await,
            Err(Error::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_recent_artists_newest_first() {
        let (_dir, pool) = test_pool().await;
        for name in ["Guns N Petals", "Matt Quevedo", "The Wild Sax Band"] {
            insert_artist(&pool, &artist(name)).await.unwrap();
        }

        let recent = recent_artists(&pool, 2).await.unwrap();
        let names: Vec<&str> = recent.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["The Wild Sax Band", "Matt Quevedo"]);
    }
}
