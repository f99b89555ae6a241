use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{warn, Level};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod companies;
pub mod crud;
pub mod obligations;

/// Liveness plus a store round-trip; 503 when the database does not answer.
#[utoipa::path(
    get, path = "/health", tag = "health",
    responses(
        (status = 200, description = "OK", body = crate::openapi::HealthResponse),
        (status = 503, description = "Database unreachable", body = crate::openapi::HealthResponse)
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<Health>) {
    match state.store.ping().await {
        Ok(()) => (StatusCode::OK, Json(Health::ok())),
        Err(e) => {
            warn!(error = %e, "health check: store unreachable");
            (StatusCode::SERVICE_UNAVAILABLE, Json(Health::degraded()))
        }
    }
}

fn v1_routes() -> Router<AppState> {
    Router::new()
        .route("/companies", post(companies::create))
        .route(
            "/companies/:id",
            get(companies::read).put(companies::update).delete(companies::delete),
        )
        .route("/obligations", post(obligations::create))
        .route(
            "/obligations/:id",
            get(obligations::read).put(obligations::update).delete(obligations::delete),
        )
}

/// Build the full application router: health, the v1 resources and the API docs.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/v1", v1_routes())
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};
    use serde_json::{json, Value};
    use service::Store;
    use tower::ServiceExt;

    async fn app() -> Router {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1).sqlx_logging(false);
        let db = Database::connect(opt).await.expect("sqlite");
        Migrator::up(&db, None).await.expect("migrate");
        build_router(AppState::new(Store::new(db)), CorsLayer::very_permissive())
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut req = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                req = req.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let res = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
        (status, value)
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = app().await;
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn company_lifecycle() {
        let app = app().await;
        let (status, created) = send(
            &app,
            Method::POST,
            "/v1/companies",
            Some(json!({"nome": "Acme", "cnpj": "11.222.333/0001-44", "email": "fiscal@acme.test"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = created["id"].as_i64().unwrap();
        assert_eq!(created["nome"], "Acme");
        assert_eq!(created["endereco"], Value::Null);

        let uri = format!("/v1/companies/{id}");
        let (status, updated) = send(&app, Method::PUT, &uri, Some(json!({"nome": "Acme Ltda"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["nome"], "Acme Ltda");
        assert_eq!(updated["cnpj"], "11.222.333/0001-44");
        assert_eq!(updated["email"], "fiscal@acme.test");

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Not Found");
    }

    #[tokio::test]
    async fn missing_required_field_is_422() {
        let app = app().await;
        let (status, body) = send(&app, Method::POST, "/v1/companies", Some(json!({"nome": "No Tax Id"}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Validation Error");

        let (status, _) = send(&app, Method::POST, "/v1/companies", Some(json!({"nome": " ", "cnpj": "1"}))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn obligation_for_unknown_company_is_500() {
        let app = app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/v1/obligations",
            Some(json!({"nome": "DCTF", "periodicidade": "mensal", "empresa_id": 4242})),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], Value::Null);
    }

    #[tokio::test]
    async fn unknown_obligation_is_not_found() {
        let app = app().await;
        for method in [Method::GET, Method::DELETE] {
            let (status, _) = send(&app, method, "/v1/obligations/77", None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
        let (status, _) = send(&app, Method::PUT, "/v1/obligations/77", Some(json!({"nome": "x"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn openapi_document_is_served() {
        let app = app().await;
        let (status, doc) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(doc["paths"]["/v1/companies/{id}"].is_object());
    }
}
