//! HTML rendering
//!
//! Pages are plain `format!` templates. Every dynamic value passes through
//! [`escape_html`] before it reaches the markup.
//!
//! - **Layout** (`layout`): page shell, navigation, search box, flash banner
//! - **Fields** (`fields`): form inputs with echoed values and field errors
//! - **Home / Venues / Artists / Shows**: one module per section
//! - **Errors** (`errors`): 400 / 404 / 500 pages

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};

use crate::AppState;

pub mod artists;
pub mod errors;
pub mod fields;
pub mod home;
pub mod layout;
pub mod search;
pub mod shows;
pub mod venues;

const FYYUR_CSS: &str = include_str!("fyyur.css");

/// Escape text for element content and quoted attribute values
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// `text/html` response with the given status
pub fn html_response(status: StatusCode, html: String) -> Response {
    (status, Html(html)).into_response()
}

/// GET /static/fyyur.css
pub async fn serve_css() -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        FYYUR_CSS,
    )
        .into_response()
}

/// Build static asset routes
pub fn static_routes() -> Router<AppState> {
    Router::new().route("/static/fyyur.css", get(serve_css))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Park Square" & 'Co'</b>"#),
            "&lt;b&gt;&quot;Park Square&quot; &amp; &#39;Co&#39;&lt;/b&gt;"
        );
    }
}
