//! Application state for shared services

use std::sync::Arc;

use crate::domain::catalog::{CatalogClient, Entry};
use crate::domain::DomainError;
use crate::infrastructure::team::TeamService;

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub team_service: Arc<dyn TeamServiceTrait>,
}

impl AppState {
    pub fn new(team_service: Arc<dyn TeamServiceTrait>) -> Self {
        Self { team_service }
    }
}

/// Trait for team service operations
#[async_trait::async_trait]
pub trait TeamServiceTrait: Send + Sync {
    async fn get_catalog(&self) -> Result<Vec<Entry>, DomainError>;
    fn get_team(&self, user_id: &str) -> Vec<Entry>;
    fn toggle(&self, user_id: &str, entry: Entry) -> bool;
    fn toggle_with_team(&self, user_id: &str, entry: Entry) -> (bool, Vec<Entry>);
    fn clear(&self, user_id: &str);
}

#[async_trait::async_trait]
impl<C: CatalogClient + 'static> TeamServiceTrait for TeamService<C> {
    async fn get_catalog(&self) -> Result<Vec<Entry>, DomainError> {
        TeamService::get_catalog(self).await
    }

    fn get_team(&self, user_id: &str) -> Vec<Entry> {
        TeamService::get_team(self, user_id)
    }

    fn toggle(&self, user_id: &str, entry: Entry) -> bool {
        TeamService::toggle(self, user_id, entry)
    }

    fn toggle_with_team(&self, user_id: &str, entry: Entry) -> (bool, Vec<Entry>) {
        TeamService::toggle_with_team(self, user_id, entry)
    }

    fn clear(&self, user_id: &str) {
        TeamService::clear(self, user_id)
    }
}
