//! Catalog client trait

use async_trait::async_trait;

use super::entity::Entry;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Source of catalog entries
///
/// Implementations surface transport and data-source failures as-is; callers
/// add no retry or fallback on top.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch the full catalog list
    async fn fetch_list(&self) -> Result<Vec<Entry>, DomainError>;
}
