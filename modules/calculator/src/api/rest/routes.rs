//! Route registration for the calculator module

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use utoipa::OpenApi;

use crate::domain::Service;

use super::{dto, error, handlers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Calculator API",
        description = "A calculator API with history tracking",
        version = "1.0.0"
    ),
    paths(
        handlers::calculate,
        handlers::get_history,
        handlers::clear_history,
        handlers::health_check
    ),
    components(schemas(
        dto::CalculateRequest,
        dto::CalculationDto,
        dto::HistoryResponse,
        dto::ClearHistoryResponse,
        dto::HealthResponse,
        dto::ErrorResponse,
        error::ValidationErrorResponse,
        error::ValidationErrorItem,
        crate::domain::Operation,
    ))
)]
struct ApiDoc;

/// Build the module router with `service` injected into every handler.
///
/// With `enable_docs` the OpenAPI document is built once and served as
/// static JSON at `/openapi.json`.
pub fn build_router(service: Arc<Service>, enable_docs: bool) -> Router {
    let mut router = Router::new()
        .route("/calculate", post(handlers::calculate))
        .route(
            "/history",
            get(handlers::get_history).delete(handlers::clear_history),
        )
        .route("/health", get(handlers::health_check));

    if enable_docs {
        let doc = ApiDoc::openapi();
        router = router.route("/openapi.json", get(move || async move { Json(doc) }));
    }

    router.layer(Extension(service))
}
