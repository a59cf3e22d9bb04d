//! Catalog and team response bodies

use serde::{Deserialize, Serialize};

use crate::domain::{Entry, MAX_TEAM_SIZE};

/// Catalog listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub entries: Vec<Entry>,
    pub total: usize,
}

impl From<Vec<Entry>> for CatalogResponse {
    fn from(entries: Vec<Entry>) -> Self {
        Self {
            total: entries.len(),
            entries,
        }
    }
}

/// A user's team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamResponse {
    pub user_id: String,
    pub entries: Vec<Entry>,
    pub size: usize,
    pub max_size: usize,
}

impl TeamResponse {
    pub fn new(user_id: impl Into<String>, entries: Vec<Entry>) -> Self {
        Self {
            user_id: user_id.into(),
            size: entries.len(),
            entries,
            max_size: MAX_TEAM_SIZE,
        }
    }
}

/// Result of a toggle request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleResponse {
    /// False when the team was full and the entry was not added
    pub changed: bool,
    pub team: TeamResponse,
}
