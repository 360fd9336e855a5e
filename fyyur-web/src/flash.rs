//! One-shot flash messages
//!
//! A handler that redirects attaches a [`Flash`] as the `fyyur_flash` cookie
//! (base64 of a small JSON object). The next page render reads it through the
//! [`IncomingFlash`] extractor, shows it, and clears the cookie.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;

use crate::ui;

pub const COOKIE_NAME: &str = "fyyur_flash";

const CLEAR_COOKIE: &str = "fyyur_flash=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }

    /// Cookie-safe encoding (base64url, no padding)
    pub fn encode(&self) -> String {
        // Serializing two plain fields cannot fail
        let json = serde_json::to_vec(self).unwrap_or_default();
        URL_SAFE_NO_PAD.encode(json)
    }

    pub fn decode(value: &str) -> Option<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(value.trim()).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    fn set_cookie(&self) -> String {
        format!("{}={}; Path=/; HttpOnly; SameSite=Lax", COOKIE_NAME, self.encode())
    }
}

/// 303 See Other to `location` carrying `flash` for the next page
pub fn redirect(location: &str, flash: Flash) -> Response {
    let mut response = Redirect::to(location).into_response();
    if let Ok(value) = HeaderValue::from_str(&flash.set_cookie()) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    response
}

/// Find the flash cookie among the request's `Cookie` headers
pub fn from_headers(headers: &HeaderMap) -> Option<Flash> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == COOKIE_NAME)
        .and_then(|(_, value)| Flash::decode(value))
}

/// Flash carried in by the request, if any
#[derive(Debug, Clone, Default)]
pub struct IncomingFlash(pub Option<Flash>);

impl IncomingFlash {
    pub fn current(&self) -> Option<&Flash> {
        self.0.as_ref()
    }

    /// HTML response that also clears the cookie once its message was shown
    pub fn respond(&self, status: StatusCode, html: String) -> Response {
        let mut response = ui::html_response(status, html);
        if self.0.is_some() {
            response
                .headers_mut()
                .append(header::SET_COOKIE, HeaderValue::from_static(CLEAR_COOKIE));
        }
        response
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for IncomingFlash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(IncomingFlash(from_headers(&parts.headers)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode() {
        let flash = Flash::success("Venue The Musical Hop was successfully listed!");
        assert_eq!(Flash::decode(&flash.encode()), Some(flash));
        assert_eq!(Flash::decode("not base64 !!"), None);
    }

    #[test]
    fn test_read_from_cookie_header() {
        let flash = Flash::error("An error occurred. Show could not be listed.");
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {}={}", COOKIE_NAME, flash.encode())).unwrap(),
        );
        assert_eq!(from_headers(&headers), Some(flash));
        assert_eq!(from_headers(&HeaderMap::new()), None);
    }

    #[test]
    fn test_redirect_sets_cookie() {
        let response = redirect("/venues/1", Flash::success("ok"));
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/venues/1");
        let cookie = response.headers()[header::SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("fyyur_flash="));
    }

    #[test]
    fn test_respond_clears_only_when_shown() {
        let shown = IncomingFlash(Some(Flash::success("ok"))).respond(StatusCode::OK, String::new());
        assert!(shown.headers().get(header::SET_COOKIE).is_some());

        let quiet = IncomingFlash(None).respond(StatusCode::OK, String::new());
        assert!(quiet.headers().get(header::SET_COOKIE).is_none());
    }
}
