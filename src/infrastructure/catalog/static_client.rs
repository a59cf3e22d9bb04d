//! Fixed-content catalog client

use async_trait::async_trait;

use crate::domain::catalog::{CatalogClient, Entry};
use crate::domain::DomainError;

/// Catalog client that always answers with the same list or the same error.
///
/// Useful for offline runs and testing.
#[derive(Debug, Clone)]
pub struct StaticCatalogClient {
    response: Result<Vec<Entry>, DomainError>,
}

impl StaticCatalogClient {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self {
            response: Ok(entries),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            response: Err(error),
        }
    }
}

impl Default for StaticCatalogClient {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[async_trait]
impl CatalogClient for StaticCatalogClient {
    async fn fetch_list(&self) -> Result<Vec<Entry>, DomainError> {
        self.response.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_client_returns_entries() {
        let entries = vec![Entry::new(1, "Bulbasaur", "bulbasaur.png")];
        let client = StaticCatalogClient::new(entries.clone());

        assert_eq!(client.fetch_list().await.unwrap(), entries);
        assert_eq!(client.fetch_list().await.unwrap(), entries);
    }

    #[tokio::test]
    async fn test_static_client_returns_error() {
        let client = StaticCatalogClient::failing(DomainError::provider("catalog", "API Error"));

        let err = client.fetch_list().await.unwrap_err();
        assert_eq!(err, DomainError::provider("catalog", "API Error"));
    }
}
