//! Request extractors shared by the CRUD handlers.

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::Json;
use models::Validate;
use serde::de::DeserializeOwned;
use service::errors::ServiceError;
use service::Session;

use crate::errors::JsonApiError;
use crate::state::AppState;

/// One [`Session`] per request, opened from the router's store.
///
/// Put it after `Path` and before the body extractor: if anything later in
/// the request fails, dropping the session rolls it back.
pub struct UnitOfWork(pub Session);

#[async_trait]
impl FromRequestParts<AppState> for UnitOfWork {
    type Rejection = JsonApiError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let session = state.store.begin().await?;
        Ok(Self(session))
    }
}

/// JSON body that must deserialize into `T` and pass [`Validate`].
/// Deserialization failures keep axum's status (422 for missing fields or
/// wrong types, 400 for malformed JSON, 415 for a wrong content type).
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rej| {
            let status = rej.status();
            let title = if status == StatusCode::UNPROCESSABLE_ENTITY {
                "Validation Error"
            } else {
                status.canonical_reason().unwrap_or("Bad Request")
            };
            JsonApiError::new(status, title, Some(rej.body_text()))
        })?;
        value.validate().map_err(ServiceError::from)?;
        Ok(Self(value))
    }
}
