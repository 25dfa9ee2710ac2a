//! # API Error Types
//!
//! What the client sees: every error becomes an HTTP status plus a JSON
//! envelope.
//!
//! ## Wire Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HTTP 400 Bad Request                                                   │
//! │  {                                                                      │
//! │    "error": {                                                           │
//! │      "code": "BAD_REQUEST",                                             │
//! │      "message": "sortBy 'cheapest' must be one of: ..."                 │
//! │    }                                                                    │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Status Mapping
//! | Variant         | Status | Typical source                        |
//! |-----------------|--------|---------------------------------------|
//! | NotFound        | 404    | Missing venue/booking/slot            |
//! | BadRequest      | 400    | Unknown enum value, cancel rejection  |
//! | Unauthenticated | 401    | Missing/invalid token, bad login      |
//! | Validation      | 422    | Field-level input failures            |
//! | Internal        | 500    | Database/JWT/hash failures            |
//!
//! Internal messages are logged server-side and never leaked to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use qa3at_core::{CoreError, ValidationError};
use qa3at_db::DbError;

/// API-level errors, one variant per HTTP outcome.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthenticated(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Unauthenticated(_) => "UNAUTHENTICATED",
            ApiError::Validation(_) => "VALIDATION_ERROR",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // 500 details stay in the logs
        let message = match &self {
            ApiError::Internal(detail) => {
                error!(detail = %detail, "Internal server error");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(json!({
            "error": {
                "code": self.code(),
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

// =============================================================================
// Conversions From Lower Layers
// =============================================================================

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{entity} not found: {id}"))
            }
            DbError::UniqueViolation { field, .. } => {
                ApiError::BadRequest(format!("{field} already exists"))
            }
            DbError::ForeignKeyViolation { .. } => {
                ApiError::BadRequest("Referenced record does not exist".to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::VenueNotFound(_)
            | CoreError::SlotNotFound(_)
            | CoreError::BookingNotFound(_) => ApiError::NotFound(err.to_string()),
            CoreError::CannotCancel { .. } | CoreError::InvalidStatusTransition { .. } => {
                ApiError::BadRequest(err.to_string())
            }
            CoreError::Validation(v) => v.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match &err {
            // Unknown closed-enum values are a 400, not a 422: the request
            // shape is fine, the value is simply not in the accepted set
            ValidationError::NotAllowed { .. } => ApiError::BadRequest(err.to_string()),
            _ => ApiError::Validation(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::NotFound("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Unauthenticated("x".into()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::Validation("x".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_db_not_found_maps_to_404() {
        let err: ApiError = DbError::not_found("Venue", "v-1").into();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn test_cannot_cancel_maps_to_400() {
        let err: ApiError = CoreError::CannotCancel {
            booking_id: "b-1".to_string(),
            status: qa3at_core::BookingStatus::Completed,
        }
        .into();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn test_unknown_enum_value_maps_to_400() {
        let err: ApiError = ValidationError::NotAllowed {
            field: "sortBy".to_string(),
            value: "cheapest".to_string(),
            allowed: vec![],
        }
        .into();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
