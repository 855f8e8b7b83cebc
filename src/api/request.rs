//! Request types for the earnings estimator API.
//!
//! This module defines the JSON request structure for the `/estimate`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::models::FormSubmission;

/// Request body for the `/estimate` endpoint.
///
/// The form fields sit at the top level of the body. Every field may be
/// omitted; missing choices are reported as advisory errors rather than
/// JSON errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// The submitted form.
    #[serde(flatten)]
    pub form: FormSubmission,
    /// URL of the page the estimate was made on, used in share links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,
}
