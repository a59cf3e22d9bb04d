//! Catalog endpoint

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, CatalogResponse, Json};

/// GET /v1/catalog
pub async fn list_catalog(
    State(state): State<AppState>,
) -> Result<Json<CatalogResponse>, ApiError> {
    debug!("Listing catalog");

    let entries = state.team_service.get_catalog().await?;

    Ok(Json(CatalogResponse::from(entries)))
}
