//! Application error type mapping to HTTP status codes and envelope format.

use axum::response::{IntoResponse, Response};

use budgie_types::error::ScenarioError;

use crate::http::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
///
/// Every fallible handler bottoms out in the scenario registry; provider
/// failures never surface here (the narrative service absorbs them).
#[derive(Debug)]
pub enum AppError {
    /// Scenario registry / allocation engine errors.
    Scenario(ScenarioError),
}

impl From<ScenarioError> for AppError {
    fn from(e: ScenarioError) -> Self {
        AppError::Scenario(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match &self {
            AppError::Scenario(ScenarioError::NotFound(slug)) => (
                "SCENARIO_NOT_FOUND",
                format!("Scenario '{slug}' not found"),
            ),
            AppError::Scenario(ScenarioError::Allocation(e)) => {
                ("VALIDATION_ERROR", e.to_string())
            }
        };

        ApiResponse::error(code, &message, String::new(), 0).into_response()
    }
}
