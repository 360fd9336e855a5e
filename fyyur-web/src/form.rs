//! Form body extractor whose rejections render as HTML error pages

use axum::{
    async_trait,
    extract::{rejection::FormRejection, FromRequest, Request},
    Form,
};
use serde::de::DeserializeOwned;

use crate::error::WebError;

/// `application/x-www-form-urlencoded` body decoded into `T`
///
/// Same as [`axum::Form`] except that a wrong content type or an undecodable
/// body becomes [`WebError::Rejected`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlForm<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for HtmlForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
    Form<T>: FromRequest<S, Rejection = FormRejection>,
{
    type Rejection = WebError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state).await?;
        Ok(HtmlForm(value))
    }
}
