//! v1 API endpoints

pub mod catalog;
pub mod teams;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(catalog::list_catalog))
        .route(
            "/users/{user_id}/team",
            get(teams::get_team).delete(teams::clear_team),
        )
        .route("/users/{user_id}/team/toggle", post(teams::toggle_entry))
}
