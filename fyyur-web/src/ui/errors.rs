//! Error pages

use axum::http::StatusCode;

use super::escape_html;
use super::layout::{page, Section};

fn error_body(code: u16, heading: &str, detail: &str) -> String {
    format!(
        r#"<div class="error-page">
    <div class="code">{}</div>
    <h1>{}</h1>
    <p class="subtitle">{}</p>
    <a class="button" href="/">Back to home</a>
</div>"#,
        code,
        escape_html(heading),
        escape_html(detail)
    )
}

pub fn not_found_page(what: Option<&str>) -> String {
    let detail = what.unwrap_or("The page you are looking for does not exist.");
    page("Not Found", Section::Home, None, &error_body(404, "Not Found", detail))
}

pub fn bad_request_page(detail: &str) -> String {
    request_error_page(StatusCode::BAD_REQUEST, detail)
}

/// Page for any 4xx the request itself caused
pub fn request_error_page(status: StatusCode, detail: &str) -> String {
    let heading = status.canonical_reason().unwrap_or("Bad Request");
    page(heading, Section::Home, None, &error_body(status.as_u16(), heading, detail))
}

pub fn server_error_page() -> String {
    page(
        "Server Error",
        Section::Home,
        None,
        &error_body(500, "Server Error", "Something went wrong. Please try again later."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_escapes_detail() {
        let html = not_found_page(Some("venue <7>"));
        assert!(html.contains("404"));
        assert!(html.contains("venue &lt;7&gt;"));
    }

    #[test]
    fn test_request_error_uses_status_reason() {
        let html = request_error_page(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Expected a form");
        assert!(html.contains("415"));
        assert!(html.contains("Unsupported Media Type"));
        assert!(html.contains("Expected a form"));
    }
}
