//! REST handlers for the calculator module

use std::sync::Arc;

use axum::{Extension, Json};

use crate::domain::{Operation, Service};

use super::dto::{
    CalculateRequest, CalculationDto, ClearHistoryResponse, ErrorResponse, HealthResponse,
    HistoryResponse,
};
use super::error::{ApiError, ApiJson, ValidationErrorResponse};

/// Handler for `POST /calculate`.
///
/// Evaluates the requested operation and records it in the history on
/// success; a rejected operation produces no history entry.
#[utoipa::path(
    post,
    path = "/calculate",
    request_body = CalculateRequest,
    responses(
        (status = 200, description = "Calculation result", body = CalculationDto),
        (status = 400, description = "Rejected operation", body = ErrorResponse),
        (status = 422, description = "Structurally invalid request", body = ValidationErrorResponse),
    ),
    tag = "calculator"
)]
pub async fn calculate(
    Extension(service): Extension<Arc<Service>>,
    ApiJson(req): ApiJson<CalculateRequest>,
) -> Result<Json<CalculationDto>, ApiError> {
    let operation: Operation = req.operation.parse()?;
    let record = service.calculate(operation, req.num1, req.num2)?;
    Ok(Json(record.into()))
}

/// Handler for `GET /history`.
#[utoipa::path(
    get,
    path = "/history",
    responses(
        (status = 200, description = "Retained calculations, most recent first", body = HistoryResponse),
    ),
    tag = "calculator"
)]
pub async fn get_history(Extension(service): Extension<Arc<Service>>) -> Json<HistoryResponse> {
    let history = service.history().into_iter().map(Into::into).collect();
    Json(HistoryResponse { history })
}

/// Handler for `DELETE /history`.
#[utoipa::path(
    delete,
    path = "/history",
    responses(
        (status = 200, description = "History cleared", body = ClearHistoryResponse),
    ),
    tag = "calculator"
)]
pub async fn clear_history(
    Extension(service): Extension<Arc<Service>>,
) -> Json<ClearHistoryResponse> {
    service.clear_history();
    Json(ClearHistoryResponse {
        message: "History cleared successfully".to_owned(),
    })
}

/// Handler for `GET /health`.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    ),
    tag = "calculator"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_owned(),
    })
}
