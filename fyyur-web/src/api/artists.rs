//! Artist handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Router,
};
use fyyur_common::db::artists;
use fyyur_common::validation::{ArtistForm, SearchForm};
use fyyur_common::ValidationErrors;
use tracing::{debug, error, info, warn};

use super::parse_id;
use crate::error::{WebError, WebResult};
use crate::form::HtmlForm;
use crate::flash::{self, Flash, IncomingFlash};
use crate::ui::fields::FormMode;
use crate::ui::search::SearchKind;
use crate::{ui, AppState};

/// GET /artists
async fn list_artists(State(state): State<AppState>, flash: IncomingFlash) -> WebResult<Response> {
    let all = artists::list_artists(&state.db).await?;
    Ok(flash.respond(StatusCode::OK, ui::artists::list_page(&all, flash.current())))
}

/// POST /artists/search
async fn search_artists(
    State(state): State<AppState>,
    HtmlForm(form): HtmlForm<SearchForm>,
) -> WebResult<Response> {
    let results = artists::search_artists(&state.db, &form.search_term).await?;
    debug!("Artist search {:?}: {} results", form.search_term, results.count);

    let html = ui::search::results_page(SearchKind::Artists, &form.search_term, &results);
    Ok(ui::html_response(StatusCode::OK, html))
}

/// GET /artists/:artist_id
async fn show_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    flash: IncomingFlash,
) -> WebResult<Response> {
    let id = parse_id("Artist", &artist_id)?;
    let detail = artists::load_artist_detail(&state.db, id)
        .await?
        .ok_or_else(|| WebError::NotFound(format!("Artist {}", id)))?;

    Ok(flash.respond(StatusCode::OK, ui::artists::detail_page(&detail, flash.current())))
}

/// GET /artists/create
async fn create_artist_form(flash: IncomingFlash) -> Response {
    let html = ui::artists::form_page(
        FormMode::Create,
        &ArtistForm::default(),
        &ValidationErrors::new(),
        flash.current(),
    );
    flash.respond(StatusCode::OK, html)
}

/// POST /artists/create
async fn create_artist(State(state): State<AppState>, HtmlForm(form): HtmlForm<ArtistForm>) -> Response {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            warn!("Artist form rejected: {}", errors);
            let html = ui::artists::form_page(FormMode::Create, &form, &errors, None);
            return ui::html_response(StatusCode::BAD_REQUEST, html);
        }
    };

    match artists::insert_artist(&state.db, &input).await {
        Ok(id) => {
            info!(artist_id = id, "Artist listed: {}", input.name);
            flash::redirect(
                &format!("/artists/{}", id),
                Flash::success(format!("Artist {} was successfully listed!", input.name)),
            )
        }
        Err(e) => {
            error!("Failed to insert artist {}: {}", input.name, e);
            let notice = Flash::error(format!(
                "An error occurred. Artist {} could not be listed.",
                input.name
            ));
            let html =
                ui::artists::form_page(FormMode::Create, &form, &ValidationErrors::new(), Some(&notice));
            ui::html_response(StatusCode::INTERNAL_SERVER_ERROR, html)
        }
    }
}

/// GET /artists/:artist_id/edit
async fn edit_artist_form(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    flash: IncomingFlash,
) -> WebResult<Response> {
    let id = parse_id("Artist", &artist_id)?;
    let artist = artists::load_artist(&state.db, id)
        .await?
        .ok_or_else(|| WebError::NotFound(format!("Artist {}", id)))?;

    let html = ui::artists::form_page(
        FormMode::Edit(id),
        &ArtistForm::from(&artist),
        &ValidationErrors::new(),
        flash.current(),
    );
    Ok(flash.respond(StatusCode::OK, html))
}

/// POST /artists/:artist_id/edit
async fn edit_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    HtmlForm(form): HtmlForm<ArtistForm>,
) -> WebResult<Response> {
    let id = parse_id("Artist", &artist_id)?;
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            warn!(artist_id = id, "Artist edit rejected: {}", errors);
            let html = ui::artists::form_page(FormMode::Edit(id), &form, &errors, None);
            return Ok(ui::html_response(StatusCode::BAD_REQUEST, html));
        }
    };

    match artists::update_artist(&state.db, id, &input).await {
        Ok(()) => {
            info!(artist_id = id, "Artist updated: {}", input.name);
            Ok(flash::redirect(
                &format!("/artists/{}", id),
                Flash::success(format!("Artist {} was successfully updated!", input.name)),
            ))
        }
        // Zero rows matched
        Err(e @ fyyur_common::Error::NotFound(_)) => Err(e.into()),
        Err(e) => {
            error!(artist_id = id, "Failed to update artist: {}", e);
            let notice = Flash::error(format!(
                "An error occurred. Artist {} could not be updated.",
                input.name
            ));
            let html = ui::artists::form_page(
                FormMode::Edit(id),
                &form,
                &ValidationErrors::new(),
                Some(&notice),
            );
            Ok(ui::html_response(StatusCode::INTERNAL_SERVER_ERROR, html))
        }
    }
}

/// POST /artists/:artist_id (and the legacy POST /artist/:artist_id)
async fn delete_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
) -> WebResult<Response> {
    let id = parse_id("Artist", &artist_id)?;
    artists::delete_artist(&state.db, id).await?;

    info!(artist_id = id, "Artist deleted");
    Ok(flash::redirect("/", Flash::success("Artist was successfully deleted!")))
}

/// Build artist routes
pub fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/search", post(search_artists))
        .route("/artists/create", get(create_artist_form).post(create_artist))
        .route("/artists/:artist_id", get(show_artist).post(delete_artist))
        .route("/artists/:artist_id/edit", get(edit_artist_form).post(edit_artist))
        .route("/artist/:artist_id", post(delete_artist))
}
