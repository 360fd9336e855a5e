//! Error types for fyyur-web
//!
//! Handler errors render as the HTML error pages: 404 for absent records,
//! 400 for rejected input, 500 for storage failures. A body that is not a
//! form keeps the status axum assigns it (415 or 422). Storage details go to
//! the log, never to the page.

use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::ui;

/// Handler error type
#[derive(Debug, Error)]
pub enum WebError {
    /// Record not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Request body was not a decodable form (status taken from the rejection)
    #[error("Form rejected: {0}")]
    Rejected(#[from] FormRejection),

    /// fyyur-common error (status depends on the variant)
    #[error(transparent)]
    Common(#[from] fyyur_common::Error),
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        use fyyur_common::Error as E;
        match self {
            WebError::NotFound(_) | WebError::Common(E::NotFound(_)) => StatusCode::NOT_FOUND,
            WebError::Rejected(rejection) => rejection.status(),
            WebError::Common(E::Validation(_)) => StatusCode::BAD_REQUEST,
            WebError::Common(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();

        let html = match &self {
            WebError::NotFound(what) => {
                warn!("Not found: {}", what);
                ui::errors::not_found_page(Some(what))
            }
            WebError::Common(fyyur_common::Error::NotFound(what)) => {
                warn!("Not found: {}", what);
                ui::errors::not_found_page(Some(what))
            }
            WebError::Rejected(rejection) => {
                warn!("Form rejected: {}", rejection.body_text());
                ui::errors::request_error_page(status, &rejection.body_text())
            }
            WebError::Common(err) if err.is_user_error() => {
                warn!("Rejected request: {}", err);
                ui::errors::bad_request_page(&err.to_string())
            }
            WebError::Common(err) => {
                error!("Request failed: {}", err);
                ui::errors::server_error_page()
            }
        };

        ui::html_response(status, html)
    }
}

/// Result type for handlers
pub type WebResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;
    use fyyur_common::ValidationErrors;

    #[test]
    fn test_status_mapping() {
        assert_eq!(WebError::NotFound("venue 3".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            WebError::from(fyyur_common::Error::NotFound("artist 9".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            WebError::from(fyyur_common::Error::Validation(ValidationErrors::single("name", "required")))
                .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            WebError::from(fyyur_common::Error::Database(sqlx::Error::PoolTimedOut)).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_server_error_hides_details() {
        let response =
            WebError::from(fyyur_common::Error::Database(sqlx::Error::PoolTimedOut)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
