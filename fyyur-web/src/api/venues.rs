//! Venue handlers
//!
//! Create and edit submissions branch three ways: invalid input re-renders
//! the form (400), a storage failure re-renders it with an error flash (500),
//! success redirects to the detail page with a success flash.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Router,
};
use fyyur_common::db::venues;
use fyyur_common::validation::{SearchForm, VenueForm};
use fyyur_common::ValidationErrors;
use tracing::{debug, error, info, warn};

use super::parse_id;
use crate::error::{WebError, WebResult};
use crate::form::HtmlForm;
use crate::flash::{self, Flash, IncomingFlash};
use crate::ui::fields::FormMode;
use crate::ui::search::SearchKind;
use crate::{ui, AppState};

/// GET /venues
async fn list_venues(State(state): State<AppState>, flash: IncomingFlash) -> WebResult<Response> {
    let areas = venues::list_venue_areas(&state.db).await?;
    Ok(flash.respond(StatusCode::OK, ui::venues::list_page(&areas, flash.current())))
}

/// POST /venues/search
async fn search_venues(
    State(state): State<AppState>,
    HtmlForm(form): HtmlForm<SearchForm>,
) -> WebResult<Response> {
    let results = venues::search_venues(&state.db, &form.search_term).await?;
    debug!("Venue search {:?}: {} results", form.search_term, results.count);

    let html = ui::search::results_page(SearchKind::Venues, &form.search_term, &results);
    Ok(ui::html_response(StatusCode::OK, html))
}

/// GET /venues/:venue_id
async fn show_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
    flash: IncomingFlash,
) -> WebResult<Response> {
    let id = parse_id("Venue", &venue_id)?;
    let detail = venues::load_venue_detail(&state.db, id)
        .await?
        .ok_or_else(|| WebError::NotFound(format!("Venue {}", id)))?;

    Ok(flash.respond(StatusCode::OK, ui::venues::detail_page(&detail, flash.current())))
}

/// GET /venues/create
async fn create_venue_form(flash: IncomingFlash) -> Response {
    let html = ui::venues::form_page(
        FormMode::Create,
        &VenueForm::default(),
        &ValidationErrors::new(),
        flash.current(),
    );
    flash.respond(StatusCode::OK, html)
}

/// POST /venues/create
async fn create_venue(State(state): State<AppState>, HtmlForm(form): HtmlForm<VenueForm>) -> Response {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            warn!("Venue form rejected: {}", errors);
            let html = ui::venues::form_page(FormMode::Create, &form, &errors, None);
            return ui::html_response(StatusCode::BAD_REQUEST, html);
        }
    };

    match venues::insert_venue(&state.db, &input).await {
        Ok(id) => {
            info!(venue_id = id, "Venue listed: {}", input.name);
            flash::redirect(
                &format!("/venues/{}", id),
                Flash::success(format!("Venue {} was successfully listed!", input.name)),
            )
        }
        Err(e) => {
            error!("Failed to insert venue {}: {}", input.name, e);
            let notice = Flash::error(format!(
                "An error occurred. Venue {} could not be listed.",
                input.name
            ));
            let html =
                ui::venues::form_page(FormMode::Create, &form, &ValidationErrors::new(), Some(&notice));
            ui::html_response(StatusCode::INTERNAL_SERVER_ERROR, html)
        }
    }
}

/// GET /venues/:venue_id/edit
async fn edit_venue_form(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
    flash: IncomingFlash,
) -> WebResult<Response> {
    let id = parse_id("Venue", &venue_id)?;
    let venue = venues::load_venue(&state.db, id)
        .await?
        .ok_or_else(|| WebError::NotFound(format!("Venue {}", id)))?;

    let html = ui::venues::form_page(
        FormMode::Edit(id),
        &VenueForm::from(&venue),
        &ValidationErrors::new(),
        flash.current(),
    );
    Ok(flash.respond(StatusCode::OK, html))
}

/// POST /venues/:venue_id/edit
async fn edit_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
    HtmlForm(form): HtmlForm<VenueForm>,
) -> WebResult<Response> {
    let id = parse_id("Venue", &venue_id)?;
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            warn!(venue_id = id, "Venue edit rejected: {}", errors);
            let html = ui::venues::form_page(FormMode::Edit(id), &form, &errors, None);
            return Ok(ui::html_response(StatusCode::BAD_REQUEST, html));
        }
    };

    match venues::update_venue(&state.db, id, &input).await {
        Ok(()) => {
            info!(venue_id = id, "Venue updated: {}", input.name);
            Ok(flash::redirect(
                &format!("/venues/{}", id),
                Flash::success(format!("Venue {} was successfully updated!", input.name)),
            ))
        }
        // Zero rows matched
        Err(e @ fyyur_common::Error::NotFound(_)) => Err(e.into()),
        Err(e) => {
            error!(venue_id = id, "Failed to update venue: {}", e);
            let notice = Flash::error(format!(
                "An error occurred. Venue {} could not be updated.",
                input.name
            ));
            let html = ui::venues::form_page(
                FormMode::Edit(id),
                &form,
                &ValidationErrors::new(),
                Some(&notice),
            );
            Ok(ui::html_response(StatusCode::INTERNAL_SERVER_ERROR, html))
        }
    }
}

/// POST /venues/:venue_id
async fn delete_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
) -> WebResult<Response> {
    let id = parse_id("Venue", &venue_id)?;
    venues::delete_venue(&state.db, id).await?;

    info!(venue_id = id, "Venue deleted");
    Ok(flash::redirect("/", Flash::success("Venue was successfully deleted!")))
}

/// Build venue routes
pub fn venue_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", post(search_venues))
        .route("/venues/create", get(create_venue_form).post(create_venue))
        .route("/venues/:venue_id", get(show_venue).post(delete_venue))
        .route("/venues/:venue_id/edit", get(edit_venue_form).post(edit_venue))
}
