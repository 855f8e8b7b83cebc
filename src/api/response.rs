//! Response types for the earnings estimator API.
//!
//! This module defines the success body of the `/estimate` endpoint, the
//! error body shared by all endpoints, and the mapping from
//! [`EstimatorError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EstimatorError;
use crate::models::{AuditStep, EarningsInput, EarningsResult};
use crate::presentation::{EarningsBreakdown, ShareLinks};

/// Response body for a successful estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateResponse {
    /// Unique identifier of this estimate.
    pub calculation_id: Uuid,
    /// When the estimate was made.
    pub timestamp: DateTime<Utc>,
    /// Version of the estimator that produced it.
    pub engine_version: String,
    /// The validated input.
    pub input: EarningsInput,
    /// The calculated figures.
    pub result: EarningsResult,
    /// The rendered breakdown.
    pub breakdown: EarningsBreakdown,
    /// Share message and links.
    pub share: ShareLinks,
    /// How each figure was derived.
    pub audit_trace: Vec<AuditStep>,
}

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
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EstimatorError> for ApiErrorResponse {
    fn from(error: EstimatorError) -> Self {
        let message = error.to_string();
        match error {
            EstimatorError::InvalidHours { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_HOURS",
                    message,
                    format!("Received hours value '{}'", value),
                ),
            },
            EstimatorError::MissingWeekendChoice => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("MISSING_WEEKEND_CHOICE", message),
            },
            EstimatorError::MissingCarCategory => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("MISSING_CAR_CATEGORY", message),
            },
            EstimatorError::UnknownCarCategory { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_CAR_CATEGORY",
                    message,
                    "Expected one of: normal, executive, seater",
                ),
            },
            EstimatorError::UnknownTimeSlot { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_TIME_SLOT",
                    message,
                    "Expected one of: early_morning, afternoon, evening, late_night",
                ),
            },
            EstimatorError::InvalidTimeSelection { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_TIME_SELECTION", message),
            },
            EstimatorError::ConfigNotFound { .. }
            | EstimatorError::ConfigParseError { .. }
            | EstimatorError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
        }
    }
}
