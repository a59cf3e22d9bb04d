//! Team service for per-user team rosters

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, warn};

use crate::domain::catalog::{CatalogClient, Entry};
use crate::domain::team::{Team, TeamValidationError};
use crate::domain::DomainError;

/// Team service owning every user's team.
///
/// Teams live in memory for as long as the service does. Users without a
/// stored team are treated as having an empty one; reads never create them.
#[derive(Debug)]
pub struct TeamService<C: CatalogClient> {
    catalog: Arc<C>,
    roster: RwLock<HashMap<String, Team>>,
}

impl<C: CatalogClient> TeamService<C> {
    /// Create a new team service with an empty roster
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            catalog,
            roster: RwLock::new(HashMap::new()),
        }
    }

    /// Create a team service pre-populated with teams.
    ///
    /// Every team is checked against the size bound and uniqueness rules.
    /// Empty teams are not stored.
    pub fn with_teams<I, U>(catalog: Arc<C>, teams: I) -> Result<Self, TeamValidationError>
    where
        I: IntoIterator<Item = (U, Vec<Entry>)>,
        U: Into<String>,
    {
        let mut roster = HashMap::new();

        for (user_id, entries) in teams {
            let team = Team::from_entries(entries)?;

            if !team.is_empty() {
                roster.insert(user_id.into(), team);
            }
        }

        Ok(Self {
            catalog,
            roster: RwLock::new(roster),
        })
    }

    /// Fetch the catalog from the underlying client, errors untouched
    pub async fn get_catalog(&self) -> Result<Vec<Entry>, DomainError> {
        debug!("Fetching catalog");

        match self.catalog.fetch_list().await {
            Ok(entries) => {
                debug!(count = entries.len(), "Catalog fetched");
                Ok(entries)
            }
            Err(e) => {
                warn!(error = %e, "Catalog fetch failed");
                Err(e)
            }
        }
    }

    /// Get a user's team, empty when the user has none
    pub fn get_team(&self, user_id: &str) -> Vec<Entry> {
        self.read_roster()
            .get(user_id)
            .map(|team| team.entries().to_vec())
            .unwrap_or_default()
    }

    /// Toggle an entry in a user's team.
    ///
    /// Returns `false` only when the entry is absent and the team is full.
    pub fn toggle(&self, user_id: &str, entry: Entry) -> bool {
        self.toggle_with_team(user_id, entry).0
    }

    /// Toggle an entry and snapshot the resulting team under the same lock
    pub fn toggle_with_team(&self, user_id: &str, entry: Entry) -> (bool, Vec<Entry>) {
        let entry_id = entry.id().clone();
        let mut roster = self.write_roster();

        let team = roster.entry(user_id.to_string()).or_default();
        let outcome = team.toggle(entry);
        let snapshot = team.entries().to_vec();

        if team.is_empty() {
            roster.remove(user_id);
        }

        info!(
            user_id = %user_id,
            entry_id = %entry_id,
            outcome = %outcome,
            size = snapshot.len(),
            "Toggled team entry"
        );

        (outcome.changed(), snapshot)
    }

    /// Remove every entry from a user's team
    pub fn clear(&self, user_id: &str) {
        let removed = self.write_roster().remove(user_id);

        info!(
            user_id = %user_id,
            cleared = removed.map(|t| t.len()).unwrap_or(0),
            "Cleared team"
        );
    }

    /// Number of users currently holding a non-empty team
    pub fn tracked_users(&self) -> usize {
        self.read_roster().len()
    }

    // Every mutation leaves teams valid, so a poisoned lock is still usable
    fn read_roster(&self) -> RwLockReadGuard<'_, HashMap<String, Team>> {
        self.roster.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_roster(&self) -> RwLockWriteGuard<'_, HashMap<String, Team>> {
        self.roster.write().unwrap_or_else(PoisonError::into_inner)
    }
}
