//! Show handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    routing::get,
    Router,
};
use fyyur_common::db::{artists, shows, venues};
use fyyur_common::validation::ShowForm;
use fyyur_common::ValidationErrors;
use tracing::{error, info, warn};

use crate::error::WebResult;
use crate::form::HtmlForm;
use crate::flash::{self, Flash, IncomingFlash};
use crate::{ui, AppState};

/// GET /shows
async fn list_shows(State(state): State<AppState>, flash: IncomingFlash) -> WebResult<Response> {
    let all = shows::list_shows(&state.db).await?;
    Ok(flash.respond(StatusCode::OK, ui::shows::list_page(&all, flash.current())))
}

/// Show form with artist and venue choices loaded
async fn render_form(
    state: &AppState,
    form: &ShowForm,
    errors: &ValidationErrors,
    flash: Option<&Flash>,
) -> WebResult<String> {
    let artist_choices = artists::list_artists(&state.db).await?;
    let venue_choices = venues::list_venues(&state.db).await?;
    Ok(ui::shows::form_page(form, &artist_choices, &venue_choices, errors, flash))
}

/// GET /shows/create
async fn create_show_form(State(state): State<AppState>, flash: IncomingFlash) -> WebResult<Response> {
    let html = render_form(&state, &ShowForm::default(), &ValidationErrors::new(), flash.current()).await?;
    Ok(flash.respond(StatusCode::OK, html))
}

/// POST /shows/create
async fn create_show(
    State(state): State<AppState>,
    HtmlForm(form): HtmlForm<ShowForm>,
) -> WebResult<Response> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            warn!("Show form rejected: {}", errors);
            let html = render_form(&state, &form, &errors, None).await?;
            return Ok(ui::html_response(StatusCode::BAD_REQUEST, html));
        }
    };

    match shows::insert_show(&state.db, &input).await {
        Ok(id) => {
            info!(
                show_id = id,
                artist_id = input.artist_id,
                venue_id = input.venue_id,
                "Show listed at {}",
                input.start_time
            );
            Ok(flash::redirect("/shows", Flash::success("Show was successfully listed!")))
        }
        Err(fyyur_common::Error::Validation(errors)) => {
            warn!("Show rejected: {}", errors);
            let html = render_form(&state, &form, &errors, None).await?;
            Ok(ui::html_response(StatusCode::BAD_REQUEST, html))
        }
        Err(e) => {
            error!("Failed to insert show: {}", e);
            let notice = Flash::error("An error occurred. Show could not be listed.");
            let html = render_form(&state, &form, &ValidationErrors::new(), Some(&notice)).await?;
            Ok(ui::html_response(StatusCode::INTERNAL_SERVER_ERROR, html))
        }
    }
}

/// Build show routes
pub fn show_routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(list_shows))
        .route("/shows/create", get(create_show_form).post(create_show))
}
