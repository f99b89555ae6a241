//! Handler bodies shared by every entity.
//!
//! Each entity module wraps these in thin, documented handlers; the flow is
//! always check-then-act inside the request's session.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use service::{Companies, Obligations, Repository, Resource, Session};
use tracing::info;

use models::company::CompanyRead;
use models::obligation::ObligationRead;

use crate::errors::JsonApiError;

pub type ApiResult<T> = Result<T, JsonApiError>;

/// A [`Resource`] exposed over HTTP with its response shape.
pub trait Exposed: Resource {
    type Read: From<Self::Model> + Serialize + Send;
}

impl Exposed for Companies {
    type Read = CompanyRead;
}

impl Exposed for Obligations {
    type Read = ObligationRead;
}

pub async fn create<R: Exposed>(session: Session, input: R::New) -> ApiResult<(StatusCode, Json<R::Read>)> {
    let created = Repository::<R>::create(session.conn(), input).await?;
    session.commit().await?;
    info!(resource = R::NAME, id = R::id(&created), "created");
    Ok((StatusCode::CREATED, Json(created.into())))
}

pub async fn read<R: Exposed>(session: Session, id: i32) -> ApiResult<Json<R::Read>> {
    let found = Repository::<R>::require(session.conn(), id).await?;
    Ok(Json(found.into()))
}

pub async fn update<R: Exposed>(session: Session, id: i32, patch: R::Patch) -> ApiResult<Json<R::Read>> {
    Repository::<R>::require(session.conn(), id).await?;
    let updated = Repository::<R>::update(session.conn(), id, patch)
        .await?
        .ok_or_else(|| service::errors::ServiceError::not_found(R::NAME, id))?;
    session.commit().await?;
    info!(resource = R::NAME, id, "updated");
    Ok(Json(updated.into()))
}

pub async fn delete<R: Exposed>(session: Session, id: i32) -> ApiResult<StatusCode> {
    Repository::<R>::require(session.conn(), id).await?;
    let removed = Repository::<R>::delete(session.conn(), id).await?;
    session.commit().await?;
    info!(resource = R::NAME, id, removed, "deleted");
    Ok(StatusCode::NO_CONTENT)
}
