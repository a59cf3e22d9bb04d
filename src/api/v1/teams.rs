//! Team endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, TeamResponse, ToggleResponse};
use crate::domain::team::{validate_entry, validate_user_id};
use crate::domain::Entry;

/// GET /v1/users/{user_id}/team
pub async fn get_team(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<TeamResponse>, ApiError> {
    validate_user_id(&user_id)?;
    debug!(user_id = %user_id, "Getting team");

    let entries = state.team_service.get_team(&user_id);

    Ok(Json(TeamResponse::new(user_id, entries)))
}

/// POST /v1/users/{user_id}/team/toggle
pub async fn toggle_entry(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(entry): Json<Entry>,
) -> Result<Json<ToggleResponse>, ApiError> {
    validate_user_id(&user_id)?;
    validate_entry(&entry)?;
    debug!(user_id = %user_id, entry_id = %entry.id(), "Toggling team entry");

    let (changed, entries) = state.team_service.toggle_with_team(&user_id, entry);

    Ok(Json(ToggleResponse {
        changed,
        team: TeamResponse::new(user_id, entries),
    }))
}

/// DELETE /v1/users/{user_id}/team
pub async fn clear_team(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    validate_user_id(&user_id)?;
    debug!(user_id = %user_id, "Clearing team");

    state.team_service.clear(&user_id);

    Ok(StatusCode::NO_CONTENT)
}
