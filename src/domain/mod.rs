//! Domain layer - Core business logic and entities

pub mod catalog;
pub mod error;
pub mod team;

pub use catalog::{CatalogClient, Entry, EntryId};
pub use error::DomainError;
pub use team::{Team, TeamValidationError, ToggleOutcome, MAX_TEAM_SIZE};
