//! REST DTOs for the calculator module
//!
//! These types are transport-specific (serde + utoipa for REST/OpenAPI).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CalculationRecord, Operation};

/// Request to perform a calculation.
///
/// `operation` stays a free-form string here: an unrecognized name is a
/// rejected operation (400), not a malformed request (422), so parsing
/// happens in the handler rather than in the deserializer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculateRequest {
    /// One of: add, subtract, multiply, divide, modulo, power, sqrt
    pub operation: String,
    /// First operand
    pub num1: f64,
    /// Second operand, required for every operation except sqrt
    #[serde(default)]
    pub num2: Option<f64>,
}

/// A performed calculation, as returned by `POST /calculate` and listed by
/// `GET /history`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CalculationDto {
    pub operation: Operation,
    pub num1: f64,
    /// `null` for unary operations
    pub num2: Option<f64>,
    pub result: f64,
    /// Server-assigned time of the evaluation (RFC 3339, UTC)
    pub timestamp: DateTime<Utc>,
}

impl From<CalculationRecord> for CalculationDto {
    fn from(record: CalculationRecord) -> Self {
        Self {
            operation: record.operation,
            num1: record.operand1,
            num2: record.operand2,
            result: record.result,
            timestamp: record.recorded_at,
        }
    }
}

/// Response for `GET /history`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HistoryResponse {
    /// Retained calculations, most recent first
    pub history: Vec<CalculationDto>,
}

/// Response for `DELETE /history`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClearHistoryResponse {
    pub message: String,
}

/// Response for `GET /health`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Error body for rejected calculations.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
