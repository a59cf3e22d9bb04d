//! Team validation

use std::collections::HashSet;

use thiserror::Error;

use crate::domain::catalog::Entry;

/// Maximum number of entries a team can hold
pub const MAX_TEAM_SIZE: usize = 6;

/// Errors that can occur during team validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamValidationError {
    #[error("User ID cannot be empty")]
    EmptyUserId,

    #[error("Entry name cannot be empty")]
    EmptyEntryName,

    #[error("Team cannot hold more than {max} entries, got {actual}")]
    TooManyEntries { max: usize, actual: usize },

    #[error("Entry '{0}' appears more than once in the team")]
    DuplicateEntry(String),
}

/// Validate a user ID
pub fn validate_user_id(user_id: &str) -> Result<(), TeamValidationError> {
    if user_id.trim().is_empty() {
        return Err(TeamValidationError::EmptyUserId);
    }

    Ok(())
}

/// Validate an entry submitted for toggling
pub fn validate_entry(entry: &Entry) -> Result<(), TeamValidationError> {
    if entry.name().trim().is_empty() {
        return Err(TeamValidationError::EmptyEntryName);
    }

    Ok(())
}

/// Validate a full list of team entries against the size bound and uniqueness
pub fn validate_team_entries(entries: &[Entry]) -> Result<(), TeamValidationError> {
    if entries.len() > MAX_TEAM_SIZE {
        return Err(TeamValidationError::TooManyEntries {
            max: MAX_TEAM_SIZE,
            actual: entries.len(),
        });
    }

    let mut seen = HashSet::with_capacity(entries.len());

    for entry in entries {
        if !seen.insert(entry.id()) {
            return Err(TeamValidationError::DuplicateEntry(entry.id().to_string()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(count: i64) -> Vec<Entry> {
        (1..=count)
            .map(|id| Entry::new(id, format!("entry-{}", id), ""))
            .collect()
    }

    #[test]
    fn test_validate_user_id() {
        assert!(validate_user_id("user1").is_ok());
        assert_eq!(validate_user_id(""), Err(TeamValidationError::EmptyUserId));
        assert_eq!(validate_user_id("   "), Err(TeamValidationError::EmptyUserId));
    }

    #[test]
    fn test_validate_entry() {
        assert!(validate_entry(&Entry::new(1, "Bulbasaur", "")).is_ok());
        assert_eq!(
            validate_entry(&Entry::new(1, " ", "")),
            Err(TeamValidationError::EmptyEntryName)
        );
    }

    #[test]
    fn test_validate_team_entries_bounds() {
        assert!(validate_team_entries(&[]).is_ok());
        assert!(validate_team_entries(&entries(6)).is_ok());
        assert_eq!(
            validate_team_entries(&entries(7)),
            Err(TeamValidationError::TooManyEntries { max: 6, actual: 7 })
        );
    }

    #[test]
    fn test_validate_team_entries_duplicates() {
        let mut list = entries(3);
        list.push(Entry::new(2, "again", ""));

        assert_eq!(
            validate_team_entries(&list),
            Err(TeamValidationError::DuplicateEntry("2".to_string()))
        );
    }
}
