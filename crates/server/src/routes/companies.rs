use axum::{extract::Path, http::StatusCode, Json};
use models::company::{CompanyPatch, CompanyRead, NewCompany};
use service::Companies;

use crate::extract::{UnitOfWork, ValidJson};
use crate::routes::crud::{self, ApiResult};

#[utoipa::path(
    post, path = "/v1/companies", tag = "companies",
    request_body = crate::openapi::NewCompanyDoc,
    responses(
        (status = 201, description = "Company created", body = crate::openapi::CompanyDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store error, e.g. duplicate cnpj")
    )
)]
pub async fn create(
    UnitOfWork(session): UnitOfWork,
    ValidJson(input): ValidJson<NewCompany>,
) -> ApiResult<(StatusCode, Json<CompanyRead>)> {
    crud::create::<Companies>(session, input).await
}

#[utoipa::path(
    get, path = "/v1/companies/{id}", tag = "companies",
    params(("id" = i32, Path, description = "Company id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CompanyDoc),
        (status = 400, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn read(Path(id): Path<i32>, UnitOfWork(session): UnitOfWork) -> ApiResult<Json<CompanyRead>> {
    crud::read::<Companies>(session, id).await
}

#[utoipa::path(
    put, path = "/v1/companies/{id}", tag = "companies",
    params(("id" = i32, Path, description = "Company id")),
    request_body = crate::openapi::CompanyPatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::CompanyDoc),
        (status = 400, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(
    Path(id): Path<i32>,
    UnitOfWork(session): UnitOfWork,
    ValidJson(patch): ValidJson<CompanyPatch>,
) -> ApiResult<Json<CompanyRead>> {
    crud::update::<Companies>(session, id, patch).await
}

#[utoipa::path(
    delete, path = "/v1/companies/{id}", tag = "companies",
    params(("id" = i32, Path, description = "Company id")),
    responses(
        (status = 204, description = "Deleted together with its obligations"),
        (status = 400, description = "Not Found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(Path(id): Path<i32>, UnitOfWork(session): UnitOfWork) -> ApiResult<StatusCode> {
    crud::delete::<Companies>(session, id).await
}
