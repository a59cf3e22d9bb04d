//! Team domain module
//!
//! A team is a user's ordered selection of catalog entries, capped at
//! [`MAX_TEAM_SIZE`]. Membership is toggled: present entries are removed,
//! absent ones are appended while there is room.

mod entity;
mod validation;

pub use entity::{Team, ToggleOutcome};
pub use validation::{
    validate_entry, validate_team_entries, validate_user_id, TeamValidationError, MAX_TEAM_SIZE,
};
