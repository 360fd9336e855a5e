//! Venue database operations

use sqlx::SqlitePool;

use super::{contains_pattern, Area, BookedShow, RecordSummary, SearchResults, ShowSchedule, Venue, VenueDetail};
use crate::validation::VenueInput;
use crate::{time, Error, Result};

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, website_link, facebook_link, \
     image_link, seeking_talent, seeking_description, created_at, updated_at";

#[derive(sqlx::FromRow)]
struct AreaRow {
    id: i64,
    name: String,
    city: Option<String>,
    state: Option<String>,
    num_upcoming_shows: i64,
}

/// All venues grouped by (city, state), each with its upcoming show count
///
/// Areas are ordered by state then city; venues within an area by name.
pub async fn list_venue_areas(pool: &SqlitePool) -> Result<Vec<Area>> {
    let rows = sqlx::query_as::<_, AreaRow>(
        r#"
        SELECT v.id, v.name, v.city, v.state, COUNT(s.id) AS num_upcoming_shows
        FROM venues v
        LEFT JOIN shows s ON s.venue_id = v.id AND s.start_time > ?
        GROUP BY v.id
        ORDER BY COALESCE(v.state, ''), COALESCE(v.city, ''), v.name COLLATE NOCASE, v.id
        "#,
    )
    .bind(time::now())
    .fetch_all(pool)
    .await?;

    let mut areas: Vec<Area> = Vec::new();
    for row in rows {
        let summary = RecordSummary {
            id: row.id,
            name: row.name,
            num_upcoming_shows: row.num_upcoming_shows,
        };
        match areas.last_mut() {
            Some(area) if area.city == row.city && area.state == row.state => {
                area.venues.push(summary);
            }
            _ => areas.push(Area {
                city: row.city,
                state: row.state,
                venues: vec![summary],
            }),
        }
    }

    Ok(areas)
}

/// Every venue as `{id, name, upcoming shows}`, ordered by name
pub async fn list_venues(pool: &SqlitePool) -> Result<Vec<RecordSummary>> {
    venue_summaries(pool, "%").await
}

/// Case-insensitive substring search on venue name
pub async fn search_venues(pool: &SqlitePool, term: &str) -> Result<SearchResults> {
    let matches = venue_summaries(pool, &contains_pattern(term)).await?;
    Ok(SearchResults::from(matches))
}

async fn venue_summaries(pool: &SqlitePool, pattern: &str) -> Result<Vec<RecordSummary>> {
    let rows = sqlx::query_as::<_, RecordSummary>(
        r#"
        SELECT v.id, v.name, COUNT(s.id) AS num_upcoming_shows
        FROM venues v
        LEFT JOIN shows s ON s.venue_id = v.id AND s.start_time > ?
        WHERE v.name LIKE ? ESCAPE '\'
        GROUP BY v.id
        ORDER BY v.name COLLATE NOCASE, v.id
        "#,
    )
    .bind(time::now())
    .bind(pattern)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Most recently listed venues, newest first
pub async fn recent_venues(pool: &SqlitePool, limit: i64) -> Result<Vec<RecordSummary>> {
    let rows = sqlx::query_as::<_, RecordSummary>(
        r#"
        SELECT v.id, v.name, COUNT(s.id) AS num_upcoming_shows
        FROM venues v
        LEFT JOIN shows s ON s.venue_id = v.id AND s.start_time > ?
        GROUP BY v.id
        ORDER BY v.id DESC
        LIMIT ?
        "#,
    )
    .bind(time::now())
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Load venue by id
pub async fn load_venue(pool: &SqlitePool, id: i64) -> Result<Option<Venue>> {
    let venue = sqlx::query_as::<_, Venue>(&format!(
        "SELECT {} FROM venues WHERE id = ?",
        VENUE_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(venue)
}

/// Load venue with its past and upcoming shows
pub async fn load_venue_detail(pool: &SqlitePool, id: i64) -> Result<Option<VenueDetail>> {
    let Some(venue) = load_venue(pool, id).await? else {
        return Ok(None);
    };

    let shows = sqlx::query_as::<_, BookedShow>(
        r#"
        SELECT s.id AS show_id, a.id AS other_id, a.name AS other_name,
               a.image_link AS other_image_link, s.start_time
        FROM shows s
        JOIN artists a ON a.id = s.artist_id
        WHERE s.venue_id = ?
        ORDER BY s.start_time, s.id
        "#,
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(Some(VenueDetail {
        venue,
        shows: ShowSchedule::split(shows, time::now()),
    }))
}

/// Insert a venue, returning its assigned id
pub async fn insert_venue(pool: &SqlitePool, input: &VenueInput) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        INSERT INTO venues (
            name, city, state, address, phone, website_link, facebook_link,
            image_link, seeking_talent, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.address)
    .bind(&input.phone)
    .bind(&input.website_link)
    .bind(&input.facebook_link)
    .bind(&input.image_link)
    .bind(input.seeking_talent)
    .bind(&input.seeking_description)
    .execute(&mut *tx)
    .await?;

    let id = result.last_insert_rowid();
    tx.commit().await?;

    Ok(id)
}

/// Overwrite every editable field of a venue
pub async fn update_venue(pool: &SqlitePool, id: i64, input: &VenueInput) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        UPDATE venues SET
            name = ?, city = ?, state = ?, address = ?, phone = ?,
            website_link = ?, facebook_link = ?, image_link = ?,
            seeking_talent = ?, seeking_description = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.address)
    .bind(&input.phone)
    .bind(&input.website_link)
    .bind(&input.facebook_link)
    .bind(&input.image_link)
    .bind(input.seeking_talent)
    .bind(&input.seeking_description)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("venue {}", id)));
    }

    tx.commit().await?;
    Ok(())
}

/// Delete a venue; its shows go with it
pub async fn delete_venue(pool: &SqlitePool, id: i64) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("venue {}", id)));
    }

    tx.commit().await?;
    Ok(())
}

/// Whether a venue row exists, inside an open transaction
pub(crate) async fn venue_exists(conn: &mut sqlx::SqliteConnection, id: i64) -> Result<bool> {
    let found: Option<i64> = sqlx::query_scalar("SELECT id FROM venues WHERE id = ?")
        .bind(id)
        .fetch_optional(conn)
        .await?;
    Ok(found.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_support::{test_pool, venue};

    #[tokio::test]
    async fn test_insert_and_load_keeps_fields() {
        let (_dir, pool) = test_pool().await;

        let mut input = venue("The Musical Hop", "San Francisco", "CA");
        input.address = Some("1015 Folsom Street".to_string());
        input.website_link = Some("https://www.themusicalhop.com".to_string());
        input.image_link = Some("https://images.example.com/hop.jpg".to_string());
        input.seeking_talent = true;
        input.seeking_description = Some("We are on the lookout for a local artist".to_string());

        let id = insert_venue(&pool, &input).await.unwrap();
        let loaded = load_venue(&pool, id).await.unwrap().expect("venue exists");

        assert_eq!(loaded.name, input.name);
        assert_eq!(loaded.address, input.address);
        assert_eq!(loaded.website_link, input.website_link);
        assert_eq!(loaded.image_link, input.image_link);
        assert!(loaded.seeking_talent);
        assert_eq!(loaded.seeking_description, input.seeking_description);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let (_dir, pool) = test_pool().await;
        insert_venue(&pool, &venue("The Musical Hop", "San Francisco", "CA")).await.unwrap();
        insert_venue(&pool, &venue("Park Square Live Music & Coffee", "San Francisco", "CA"))
            .await
            .unwrap();
        insert_venue(&pool, &venue("The Dueling Pianos Bar", "New York", "NY")).await.unwrap();

        let hop = search_venues(&pool, "Hop").await.unwrap();
        assert_eq!(hop.count, 1);
        assert_eq!(hop.data[0].name, "The Musical Hop");

        let music = search_venues(&pool, "Music").await.unwrap();
        let names: Vec<&str> = music.data.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Park Square Live Music & Coffee", "The Musical Hop"]);

        assert_eq!(search_venues(&pool, "hop").await.unwrap(), search_venues(&pool, "HOP").await.unwrap());
    }

    #[tokio::test]
    async fn test_search_wildcards_are_literal() {
        let (_dir, pool) = test_pool().await;
        insert_venue(&pool, &venue("The Musical Hop", "San Francisco", "CA")).await.unwrap();

        assert_eq!(search_venues(&pool, "%").await.unwrap().count, 0);
        assert_eq!(search_venues(&pool, "_").await.unwrap().count, 0);
        assert_eq!(search_venues(&pool, "").await.unwrap().count, 1);
    }

    #[tokio::test]
    async fn test_areas_group_by_city_and_state() {
        let (_dir, pool) = test_pool().await;
        insert_venue(&pool, &venue("The Musical Hop", "San Francisco", "CA")).await.unwrap();
        insert_venue(&pool, &venue("The Dueling Pianos Bar", "New York", "NY")).await.unwrap();
        insert_venue(&pool, &venue("Park Square Live Music & Coffee", "San Francisco", "CA"))
            .await
            .unwrap();

        let areas = list_venue_areas(&pool).await.unwrap();
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].city.as_deref(), Some("San Francisco"));
        assert_eq!(areas[0].venues.len(), 2);
        assert_eq!(areas[0].venues[0].name, "Park Square Live Music & Coffee");
        assert_eq!(areas[1].state.as_deref(), Some("NY"));
    }

    #[tokio::test]
    async fn test_update_overwrites_and_missing_is_not_found() {
        let (_dir, pool) = test_pool().await;
        let id = insert_venue(&pool, &venue("The Musical Hop", "San Francisco", "CA")).await.unwrap();

        let mut edited = venue("The Musical Hop II", "Oakland", "CA");
        edited.phone = Some("415-000-1234".to_string());
        update_venue(&pool, id, &edited).await.unwrap();

        let loaded = load_venue(&pool, id).await.unwrap().unwrap();
        assert_eq!(loaded.name, "The Musical Hop II");
        assert_eq!(loaded.city.as_deref(), Some("Oakland"));
        assert_eq!(loaded.phone.as_deref(), Some("415-000-1234"));

        let err = update_venue(&pool, id + 100, &edited).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_then_load_is_none() {
        let (_dir, pool) = test_pool().await;
        let id = insert_venue(&pool, &venue("The Musical Hop", "San Francisco", "CA")).await.unwrap();

        delete_venue(&pool, id).await.unwrap();
        assert!(load_venue(&pool, id).await.unwrap().is_none());
        assert!(load_venue_detail(&pool, id).await.unwrap().is_none());

        let err = delete_venue(&pool, id).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
