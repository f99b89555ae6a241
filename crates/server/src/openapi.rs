//! OpenAPI document served at `/api-docs/openapi.json` (Swagger UI at `/docs`).
//! Field names mirror the JSON wire keys.
#![allow(dead_code)]

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct NewCompanyDoc {
    pub nome: String,
    pub cnpj: String,
    pub endereco: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
}

#[derive(ToSchema)]
pub struct CompanyPatchDoc {
    pub nome: Option<String>,
    pub cnpj: Option<String>,
    pub endereco: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
}

#[derive(ToSchema)]
pub struct CompanyDoc {
    pub id: i32,
    pub nome: String,
    pub cnpj: String,
    pub endereco: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
}

#[derive(ToSchema)]
pub struct NewObligationDoc {
    pub nome: String,
    pub periodicidade: Option<String>,
    pub empresa_id: i32,
}

#[derive(ToSchema)]
pub struct ObligationPatchDoc {
    pub nome: Option<String>,
    pub periodicidade: Option<String>,
    pub empresa_id: Option<i32>,
}

#[derive(ToSchema)]
pub struct ObligationDoc {
    pub id: i32,
    pub nome: String,
    pub periodicidade: Option<String>,
    pub empresa_id: i32,
}

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub detail: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::companies::create,
        crate::routes::companies::read,
        crate::routes::companies::update,
        crate::routes::companies::delete,
        crate::routes::obligations::create,
        crate::routes::obligations::read,
        crate::routes::obligations::update,
        crate::routes::obligations::delete,
    ),
    components(
        schemas(
            HealthResponse,
            NewCompanyDoc,
            CompanyPatchDoc,
            CompanyDoc,
            NewObligationDoc,
            ObligationPatchDoc,
            ObligationDoc,
            ErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "companies", description = "Company registry"),
        (name = "obligations", description = "Accessory obligations owned by a company")
    )
)]
pub struct ApiDoc;
