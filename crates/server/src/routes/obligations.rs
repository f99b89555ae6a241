use axum::{extract::Path, http::StatusCode, Json};
use models::obligation::{NewObligation, ObligationPatch, ObligationRead};
use service::Obligations;

use crate::extract::{UnitOfWork, ValidJson};
use crate::routes::crud::{self, ApiResult};

#[utoipa::path(
    post, path = "/v1/obligations", tag = "obligations",
    request_body = crate::openapi::NewObligationDoc,
    responses(
        (status = 201, description = "Obligation created", body = crate::openapi::ObligationDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store error, e.g. unknown empresa_id")
    )
)]
pub async fn create(
    UnitOfWork(session): UnitOfWork,
    ValidJson(input): ValidJson<NewObligation>,
) -> ApiResult<(StatusCode, Json<ObligationRead>)> {
    crud::create::<Obligations>(session, input).await
}

#[utoipa::path(
    get, path = "/v1/obligations/{id}", tag = "obligations",
    params(("id" = i32, Path, description = "Obligation id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ObligationDoc),
        (status = 400, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn read(Path(id): Path<i32>, UnitOfWork(session): UnitOfWork) -> ApiResult<Json<ObligationRead>> {
    crud::read::<Obligations>(session, id).await
}

#[utoipa::path(
    put, path = "/v1/obligations/{id}", tag = "obligations",
    params(("id" = i32, Path, description = "Obligation id")),
    request_body = crate::openapi::ObligationPatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ObligationDoc),
        (status = 400, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    Path(id): Path<i32>,
    UnitOfWork(session): UnitOfWork,
    ValidJson(patch): ValidJson<ObligationPatch>,
) -> ApiResult<Json<ObligationRead>> {
    crud::update::<Obligations>(session, id, patch).await
}

#[utoipa::path(
    delete, path = "/v1/obligations/{id}", tag = "obligations",
    params(("id" = i32, Path, description = "Obligation id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(Path(id): Path<i32>, UnitOfWork(session): UnitOfWork) -> ApiResult<StatusCode> {
    crud::delete::<Obligations>(session, id).await
}
