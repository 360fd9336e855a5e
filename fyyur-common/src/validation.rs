//! Form input validation
//!
//! Raw form structs mirror the HTML forms field-for-field (every value arrives
//! as text). `validate()` turns a raw form into the typed input the storage
//! layer accepts, or into a [`ValidationErrors`] listing every offending field
//! so the form can be re-rendered with messages next to the inputs.

use chrono::NaiveDateTime;
use serde::Deserialize;
use std::fmt;

use crate::db::{Artist, Venue};
use crate::time::parse_start_time;

/// Column width shared by the short text fields (city, state, phone, links)
pub const SHORT_TEXT_MAX: usize = 120;

/// Column width for image URLs
pub const IMAGE_LINK_MAX: usize = 500;

/// One rejected form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every field-level problem found in one submission
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-field error, for checks made outside `validate()` (e.g. missing
    /// foreign rows)
    pub fn single(field: &str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First message recorded for `field`
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// `Ok(value)` when nothing was recorded
    fn finish<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// Raw forms
// ============================================================================

/// Venue form as submitted
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VenueForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    #[serde(alias = "site_link")]
    pub website_link: String,
    pub facebook_link: String,
    pub image_link: String,
    /// Checkbox: absent when unchecked
    pub seeking_talent: Option<String>,
    pub seeking_description: String,
}

/// Artist form as submitted
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ArtistForm {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    #[serde(alias = "site_link")]
    pub website_link: String,
    pub facebook_link: String,
    pub image_link: String,
    /// Checkbox: absent when unchecked
    pub seeking_venue: Option<String>,
    pub seeking_description: String,
}

/// Show form as submitted
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

/// Search box submission
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchForm {
    pub search_term: String,
}

/// Pre-fill the edit form from the stored row
impl From<&Venue> for VenueForm {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone().unwrap_or_default(),
            state: venue.state.clone().unwrap_or_default(),
            address: venue.address.clone().unwrap_or_default(),
            phone: venue.phone.clone().unwrap_or_default(),
            website_link: venue.website_link.clone().unwrap_or_default(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            image_link: venue.image_link.clone().unwrap_or_default(),
            seeking_talent: venue.seeking_talent.then(|| "y".to_string()),
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }
}

impl From<&Artist> for ArtistForm {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone().unwrap_or_default(),
            state: artist.state.clone().unwrap_or_default(),
            phone: artist.phone.clone().unwrap_or_default(),
            website_link: artist.website_link.clone().unwrap_or_default(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            image_link: artist.image_link.clone().unwrap_or_default(),
            seeking_venue: artist.seeking_venue.then(|| "y".to_string()),
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }
}

impl VenueForm {
    pub fn seeking_talent_checked(&self) -> bool {
        checkbox(&self.seeking_talent)
    }
}

impl ArtistForm {
    pub fn seeking_venue_checked(&self) -> bool {
        checkbox(&self.seeking_venue)
    }
}

// ============================================================================
// Validated input
// ============================================================================

/// Validated venue fields, ready to insert or overwrite a row
#[derive(Debug, Clone, PartialEq)]
pub struct VenueInput {
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
}

/// Validated artist fields, ready to insert or overwrite a row
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistInput {
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Validated show fields. Whether the ids exist is checked at insert time.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowInput {
    pub artist_id: i64,
    pub venue_id: i64,
    pub start_time: NaiveDateTime,
}

impl VenueForm {
    pub fn validate(&self) -> Result<VenueInput, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let input = VenueInput {
            name: required(&mut errors, "name", &self.name),
            city: short_text(&mut errors, "city", &self.city),
            state: short_text(&mut errors, "state", &self.state),
            address: short_text(&mut errors, "address", &self.address),
            phone: phone(&mut errors, "phone", &self.phone),
            website_link: link(&mut errors, "website_link", &self.website_link, SHORT_TEXT_MAX),
            facebook_link: link(&mut errors, "facebook_link", &self.facebook_link, SHORT_TEXT_MAX),
            image_link: link(&mut errors, "image_link", &self.image_link, IMAGE_LINK_MAX),
            seeking_talent: checkbox(&self.seeking_talent),
            seeking_description: short_text(
                &mut errors,
                "seeking_description",
                &self.seeking_description,
            ),
        };

        errors.finish(input)
    }
}

impl ArtistForm {
    pub fn validate(&self) -> Result<ArtistInput, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let input = ArtistInput {
            name: required(&mut errors, "name", &self.name),
            city: short_text(&mut errors, "city", &self.city),
            state: short_text(&mut errors, "state", &self.state),
            phone: phone(&mut errors, "phone", &self.phone),
            website_link: link(&mut errors, "website_link", &self.website_link, SHORT_TEXT_MAX),
            facebook_link: link(&mut errors, "facebook_link", &self.facebook_link, SHORT_TEXT_MAX),
            image_link: link(&mut errors, "image_link", &self.image_link, IMAGE_LINK_MAX),
            seeking_venue: checkbox(&self.seeking_venue),
            seeking_description: short_text(
                &mut errors,
                "seeking_description",
                &self.seeking_description,
            ),
        };

        errors.finish(input)
    }
}

impl ShowForm {
    pub fn validate(&self) -> Result<ShowInput, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let artist_id = record_id(&mut errors, "artist_id", &self.artist_id);
        let venue_id = record_id(&mut errors, "venue_id", &self.venue_id);
        let start_time = match parse_start_time(&self.start_time) {
            Ok(t) => Some(t),
            Err(message) => {
                errors.add("start_time", message);
                None
            }
        };

        match (artist_id, venue_id, start_time) {
            (Some(artist_id), Some(venue_id), Some(start_time)) => errors.finish(ShowInput {
                artist_id,
                venue_id,
                start_time,
            }),
            _ => Err(errors),
        }
    }
}

// ============================================================================
// Field checks
// ============================================================================

fn required(errors: &mut ValidationErrors, field: &str, value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, "This field is required.");
    }
    value.to_string()
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn max_len(errors: &mut ValidationErrors, field: &str, value: Option<String>, max: usize) -> Option<String> {
    if let Some(v) = &value {
        if v.chars().count() > max {
            errors.add(field, format!("Must be at most {} characters.", max));
        }
    }
    value
}

fn short_text(errors: &mut ValidationErrors, field: &str, value: &str) -> Option<String> {
    max_len(errors, field, optional(value), SHORT_TEXT_MAX)
}

fn phone(errors: &mut ValidationErrors, field: &str, value: &str) -> Option<String> {
    let value = short_text(errors, field, value);
    if let Some(v) = &value {
        let allowed = v
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')' | '.'));
        let digits = v.chars().filter(|c| c.is_ascii_digit()).count();
        if !allowed || digits < 7 {
            errors.add(field, "Invalid phone number.");
        }
    }
    value
}

fn link(errors: &mut ValidationErrors, field: &str, value: &str, max: usize) -> Option<String> {
    let value = max_len(errors, field, optional(value), max);
    if let Some(v) = &value {
        let lower = v.to_ascii_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            errors.add(field, "Must be an http:// or https:// URL.");
        }
    }
    value
}

/// HTML checkboxes are omitted when unchecked and send a value ("y", "on",
/// "true") when checked
fn checkbox(value: &Option<String>) -> bool {
    match value.as_deref().map(str::trim) {
        None => false,
        Some(v) => !matches!(v.to_ascii_lowercase().as_str(), "false" | "off" | "n" | "0"),
    }
}

fn record_id(errors: &mut ValidationErrors, field: &str, value: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        errors.add(field, "This field is required.");
        return None;
    }
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Some(id),
        _ => {
            errors.add(field, "Must be a positive whole number.");
            None
        }
    }
}
