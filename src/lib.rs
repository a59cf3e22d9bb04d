//! Team Roster API
//!
//! Keeps a bounded, ordered team of catalog entries per user:
//! - Toggle membership (add when absent, remove when present)
//! - Teams capped at six entries
//! - Catalog listing passed through from an external source

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use infrastructure::catalog::{PokeApiCatalogClient, PokeApiConfig};
use infrastructure::team::TeamService;

/// Create the application state from configuration
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let client = PokeApiCatalogClient::new(PokeApiConfig::from(&config.catalog))?;

    info!(
        base_url = %config.catalog.base_url,
        limit = config.catalog.limit,
        "Catalog client configured"
    );

    let team_service = TeamService::new(Arc::new(client));

    Ok(AppState::new(Arc::new(team_service)))
}
