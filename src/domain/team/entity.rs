//! Team entity and the toggle rule

use serde::Serialize;

use super::validation::{validate_team_entries, TeamValidationError, MAX_TEAM_SIZE};
use crate::domain::catalog::Entry;

/// Result of toggling an entry in a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    /// Entry was absent and has been appended
    Added,
    /// Entry was present and has been removed
    Removed,
    /// Entry was absent but the team is full
    Rejected,
}

impl ToggleOutcome {
    /// Whether the team changed
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

impl std::fmt::Display for ToggleOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Added => write!(f, "added"),
            Self::Removed => write!(f, "removed"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// A user's bounded, ordered, duplicate-free collection of entries.
///
/// Insertion order is the only ordering. Removing an entry keeps the
/// relative order of the survivors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Team {
    entries: Vec<Entry>,
}

impl Team {
    /// Build a team from existing entries, keeping their order
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self, TeamValidationError> {
        validate_team_entries(&entries)?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_TEAM_SIZE
    }

    /// Remove the entry if present, otherwise append it when there is room.
    ///
    /// Removal is always allowed, whatever the current size.
    pub fn toggle(&mut self, entry: Entry) -> ToggleOutcome {
        if let Some(pos) = self.entries.iter().position(|e| e.same_identity(&entry)) {
            self.entries.remove(pos);
            return ToggleOutcome::Removed;
        }

        if self.is_full() {
            return ToggleOutcome::Rejected;
        }

        self.entries.push(entry);
        ToggleOutcome::Added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64) -> Entry {
        Entry::new(id, format!("entry-{}", id), format!("{}.png", id))
    }

    fn full_team() -> Team {
        Team::from_entries((1..=6).map(entry).collect()).unwrap()
    }

    #[test]
    fn test_default_team_is_empty() {
        let team = Team::default();
        assert!(team.is_empty());
        assert!(!team.is_full());
        assert_eq!(team.len(), 0);
    }

    #[test]
    fn test_toggle_adds_absent_entry() {
        let mut team = Team::default();

        assert_eq!(team.toggle(entry(1)), ToggleOutcome::Added);
        assert_eq!(team.entries(), [entry(1)]);
    }

    #[test]
    fn test_toggle_removes_present_entry_by_id() {
        let mut team = Team::default();
        team.toggle(entry(1));

        let renamed = Entry::new(1, "other name", "other.png");

        assert_eq!(team.toggle(renamed), ToggleOutcome::Removed);
        assert!(team.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_team() {
        let mut team = Team::from_entries(vec![entry(1), entry(2)]).unwrap();
        let before = team.clone();

        assert!(team.toggle(entry(3)).changed());
        assert!(team.toggle(entry(3)).changed());
        assert_eq!(team, before);
    }

    #[test]
    fn test_toggle_rejects_when_full() {
        let mut team = full_team();
        let before = team.clone();

        let outcome = team.toggle(entry(7));

        assert_eq!(outcome, ToggleOutcome::Rejected);
        assert!(!outcome.changed());
        assert_eq!(team, before);
    }

    #[test]
    fn test_toggle_removes_from_full_team() {
        let mut team = full_team();

        assert_eq!(team.toggle(entry(3)), ToggleOutcome::Removed);
        assert_eq!(team.len(), 5);
        assert!(!team.entries().iter().any(|e| e.same_identity(&entry(3))));
    }

    #[test]
    fn test_removal_keeps_survivor_order() {
        let mut team = Team::from_entries(vec![entry(4), entry(1), entry(9), entry(2)]).unwrap();

        team.toggle(entry(1));

        let ids: Vec<_> = team.entries().iter().map(|e| e.id().to_string()).collect();
        assert_eq!(ids, ["4", "9", "2"]);
    }

    #[test]
    fn test_bound_and_uniqueness_hold_over_toggle_sequence() {
        let mut team = Team::default();

        // Ids cycle through 1..=9 so adds, removals and rejections all happen
        for step in 0..200i64 {
            team.toggle(entry(step * 7 % 9 + 1));

            assert!(team.len() <= MAX_TEAM_SIZE);
            assert!(validate_team_entries(team.entries()).is_ok());
        }
    }

    #[test]
    fn test_from_entries_rejects_invalid() {
        assert!(Team::from_entries((1..=7).map(entry).collect()).is_err());
        assert!(Team::from_entries(vec![entry(1), entry(1)]).is_err());
    }

    #[test]
    fn test_toggle_outcome_display() {
        assert_eq!(ToggleOutcome::Added.to_string(), "added");
        assert_eq!(ToggleOutcome::Removed.to_string(), "removed");
        assert_eq!(ToggleOutcome::Rejected.to_string(), "rejected");
    }
}
