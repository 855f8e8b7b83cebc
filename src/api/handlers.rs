//! HTTP request handlers for the earnings estimator API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_earnings;
use crate::config::ConfigLoader;
use crate::error::EstimatorResult;
use crate::presentation::{EarningsBreakdown, ShareLinks};

use super::request::EstimateRequest;
use super::response::{ApiError, ApiErrorResponse, EstimateResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/estimate", post(estimate_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Handler for POST /estimate endpoint.
///
/// Validates the submitted form and returns the estimate, or an advisory
/// error the user can correct.
async fn estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing estimate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::validation_error(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            }
            .into_response();
        }
    };

    let start_time = Instant::now();
    match perform_estimate(&request, state.config()) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                calculation_id = %response.calculation_id,
                hours = response.input.hours_per_week.get(),
                car_category = %response.input.car_category,
                net_weekly = %response.result.net_weekly,
                duration_us = start_time.elapsed().as_micros(),
                "Estimate completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                advisory = err.is_advisory(),
                "Estimate rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Validates a request and produces the full estimate for it.
///
/// The share links use the request's `page_url`, or the configured one when
/// the request has none.
pub fn perform_estimate(
    request: &EstimateRequest,
    config: &ConfigLoader,
) -> EstimatorResult<EstimateResponse> {
    let validated = request.form.validate()?;
    let calculation = calculate_earnings(&validated.input, config.rate_card());

    let share_config = config.share();
    let page_url = request
        .page_url
        .as_deref()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(&share_config.page_url);

    let breakdown =
        EarningsBreakdown::new(&validated.input, &validated.time_slots, &calculation.result);
    let share = ShareLinks::new(&calculation.result, page_url, &share_config.email_subject);

    Ok(EstimateResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        input: validated.input,
        result: calculation.result,
        breakdown,
        share,
        audit_trace: calculation.audit_trace,
    })
}
