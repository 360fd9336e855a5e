//! Database models

use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Minimal row for lists and search results
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct RecordSummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// Venues sharing one (city, state)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Area {
    pub city: Option<String>,
    pub state: Option<String>,
    pub venues: Vec<RecordSummary>,
}

/// Search outcome: match count plus the matches
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<RecordSummary>,
}

impl From<Vec<RecordSummary>> for SearchResults {
    fn from(data: Vec<RecordSummary>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

/// One row of the shows page (shows joined with venue and artist)
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct ShowListing {
    pub show_id: i64,
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// A show as seen from one venue or artist page: the other party of the
/// booking and its image
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct BookedShow {
    pub show_id: i64,
    pub other_id: i64,
    pub other_name: String,
    pub other_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// Shows of one record split around the current time
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShowSchedule {
    pub past: Vec<BookedShow>,
    pub upcoming: Vec<BookedShow>,
}

impl ShowSchedule {
    /// Split shows (ordered by start time) into past and upcoming relative to
    /// `now`. A show starting exactly now counts as past.
    pub fn split(shows: Vec<BookedShow>, now: NaiveDateTime) -> Self {
        let (upcoming, past) = shows.into_iter().partition(|s| s.start_time > now);
        Self { past, upcoming }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VenueDetail {
    pub venue: Venue,
    pub shows: ShowSchedule,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub shows: ShowSchedule,
}
