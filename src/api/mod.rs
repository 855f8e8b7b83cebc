//! HTTP API module for the earnings estimator.
//!
//! This module provides the REST endpoints that accept the estimator form
//! as JSON and return the estimate, its breakdown and share links.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{create_router, perform_estimate};
pub use request::EstimateRequest;
pub use response::{ApiError, ApiErrorResponse, EstimateResponse};
pub use state::AppState;
