//! Home page

use axum::{extract::State, http::StatusCode, response::Response, routing::get, Router};
use fyyur_common::db::{artists, venues};

use crate::error::WebResult;
use crate::flash::IncomingFlash;
use crate::{ui, AppState};

/// Entries in each "recently listed" column
const RECENT_LIMIT: i64 = 10;

/// GET /
async fn home(State(state): State<AppState>, flash: IncomingFlash) -> WebResult<Response> {
    let recent_venues = venues::recent_venues(&state.db, RECENT_LIMIT).await?;
    let recent_artists = artists::recent_artists(&state.db, RECENT_LIMIT).await?;

    let html = ui::home::home_page(&recent_venues, &recent_artists, flash.current());
    Ok(flash.respond(StatusCode::OK, html))
}

pub fn home_routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}
