//! Response types for the Payroll Computation Engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::calculation::NotFoundReason;
use crate::error::EngineError;
use crate::models::PeriodSummary;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates the error body for a query that found nothing.
    pub fn not_found(reason: NotFoundReason, employee_id: &str) -> Self {
        let code = match reason {
            NotFoundReason::NoRecordsInRange => "NO_RECORDS_IN_RANGE",
            NotFoundReason::UnknownEmployee => "UNKNOWN_EMPLOYEE",
            NotFoundReason::EmployeeNotFoundInRange => "EMPLOYEE_NOT_FOUND_IN_RANGE",
        };
        Self::with_details(code, reason.to_string(), format!("employee_id: {}", employee_id))
    }
}

/// Body of a successful `/payroll/summaries` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodSummariesResponse {
    /// Every summary, ordered by employee id then period.
    pub summaries: Vec<PeriodSummary>,
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 404 response for a query that found nothing.
    pub fn not_found(reason: NotFoundReason, employee_id: &str) -> Self {
        ApiErrorResponse {
            status: StatusCode::NOT_FOUND,
            error: ApiError::not_found(reason, employee_id),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidQuery { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_QUERY",
                    format!("Invalid payroll query: {}", message),
                    "The query range or benefit divisor is not usable",
                ),
            },
            EngineError::InvalidEmployee {
                employee_id,
                field,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_EMPLOYEE",
                    format!(
                        "Invalid employee '{}' field '{}': {}",
                        employee_id, field, message
                    ),
                    "The employee data contains invalid information",
                ),
            },
        }
    }
}
