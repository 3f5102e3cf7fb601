//! Narrative generation handler.

use std::time::Instant;

use axum::extract::{Path, State};
use axum::Json;

use budgie_types::scenario::ScenarioState;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

/// POST /api/v1/scenarios/:slug/narrative - Generate and store a narrative.
///
/// Always succeeds once the scenario resolves: provider failures are
/// absorbed by the narrative service, which substitutes the fixed apology
/// string. The returned state carries the narrative in `result`.
pub async fn generate_narrative(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<ScenarioState>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let definition = state.registry.definition(&slug)?.clone();
    let snapshot = state.registry.snapshot(&slug)?;

    let narrative = state.narrative.generate(&definition, &snapshot).await;
    let next = state.registry.set_narrative(&slug, &narrative)?;
    let elapsed = start.elapsed().as_millis() as u64;

    Ok(Json(ApiResponse::success(next, request_id, elapsed)))
}
