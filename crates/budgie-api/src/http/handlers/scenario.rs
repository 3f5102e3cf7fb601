//! Scenario state handlers for the REST API.

use std::time::Instant;

use axum::extract::{Path, State};
use axum::Json;

use budgie_types::scenario::{AllocationUpdate, BudgetUpdate, ScenarioDefinition, ScenarioState};

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/scenarios - List the built-in scenario definitions.
pub async fn list_scenarios(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<ScenarioDefinition>>> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let definitions = state.registry.definitions().to_vec();
    let elapsed = start.elapsed().as_millis() as u64;

    Json(ApiResponse::success(definitions, request_id, elapsed))
}

/// GET /api/v1/scenarios/:slug - Current allocation state.
pub async fn get_scenario(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<ScenarioState>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let snapshot = state.registry.snapshot(&slug)?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(snapshot, request_id, elapsed)))
}

/// PUT /api/v1/scenarios/:slug/allocation - Move one category's slider.
pub async fn update_allocation(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(body): Json<AllocationUpdate>,
) -> Result<Json<ApiResponse<ScenarioState>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let next = state
        .registry
        .allocate(&slug, &body.category_id, body.percentage)?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(next, request_id, elapsed)))
}

/// PUT /api/v1/scenarios/:slug/budget - Change the total budget.
pub async fn update_budget(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(body): Json<BudgetUpdate>,
) -> Result<Json<ApiResponse<ScenarioState>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let next = state.registry.set_total_budget(&slug, body.total_budget)?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(next, request_id, elapsed)))
}

/// POST /api/v1/scenarios/:slug/reset - Back to the even split.
pub async fn reset_scenario(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<ScenarioState>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let next = state.registry.reset(&slug)?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(next, request_id, elapsed)))
}
