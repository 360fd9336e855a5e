//! HTTP handlers for fyyur-web
//!
//! One module per section. Each exposes a `*_routes()` builder merged by
//! [`crate::build_router`].

use axum::{
    http::{StatusCode, Uri},
    response::Response,
};
use tracing::warn;

use crate::error::{WebError, WebResult};
use crate::ui;

pub mod artists;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

pub use artists::artist_routes;
pub use health::health_routes;
pub use home::home_routes;
pub use shows::show_routes;
pub use venues::venue_routes;

/// Parse a record id path segment
///
/// Only the canonical spelling of a positive integer resolves: no sign, no
/// leading zeros. Anything else is 404.
pub(crate) fn parse_id(kind: &str, raw: &str) -> WebResult<i64> {
    let canonical = !raw.is_empty()
        && raw.bytes().all(|b| b.is_ascii_digit())
        && !raw.starts_with('0');
    match raw.parse::<i64>() {
        Ok(id) if canonical => Ok(id),
        _ => Err(WebError::NotFound(format!("{} {}", kind, raw))),
    }
}

/// Any route not matched above
pub async fn fallback(uri: Uri) -> Response {
    warn!("No route for {}", uri.path());
    ui::html_response(StatusCode::NOT_FOUND, ui::errors::not_found_page(None))
}
