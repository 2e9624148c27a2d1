//! REST error mapping for the calculator module
//!
//! Two tiers: structurally invalid bodies are rejected at extraction with
//! a 422 and field-level detail; semantically rejected operations map to a
//! 400 with the domain error message verbatim. Neither reaches the ledger.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::CalcError;

use super::dto::ErrorResponse;

/// Dispatcher failure surfaced over REST: `400 {"error": "..."}`.
#[derive(Debug)]
pub struct ApiError(pub CalcError);

impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.0.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// One field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorItem {
    /// Machine-readable error class
    #[serde(rename = "type")]
    pub kind: String,
    /// Location of the offending input, outermost first
    pub loc: Vec<String>,
    /// Human-readable description
    pub msg: String,
}

/// Body of a `422` response for structurally invalid requests.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub detail: Vec<ValidationErrorItem>,
}

/// Structural request failure: `422 {"detail": [{type, loc, msg}]}`.
#[derive(Debug)]
pub struct ValidationError(Vec<ValidationErrorItem>);

impl From<JsonRejection> for ValidationError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonDataError(_) => "json_data_error",
            JsonRejection::JsonSyntaxError(_) => "json_syntax_error",
            JsonRejection::MissingJsonContentType(_) => "missing_content_type",
            _ => "invalid_body",
        };
        Self(vec![ValidationErrorItem {
            kind: kind.to_owned(),
            // The serde message names the offending field where one exists.
            loc: vec!["body".to_owned()],
            msg: rejection.body_text(),
        }])
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let body = ValidationErrorResponse { detail: self.0 };
        (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
    }
}

/// `axum::Json` with the 422 validation body on rejection.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}
