//! Catalog domain module
//!
//! Entries are the items a user can pick for a team. They come from an
//! external catalog source reached through [`CatalogClient`].

mod client;
mod entity;

pub use client::CatalogClient;
pub use entity::{Entry, EntryId};

#[cfg(test)]
pub use client::MockCatalogClient;
