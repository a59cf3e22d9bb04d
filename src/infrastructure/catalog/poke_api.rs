//! PokeAPI-backed catalog client

use std::time::Duration;

use async_trait::async_trait;
use futures::future::try_join_all;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::domain::catalog::{CatalogClient, Entry};
use crate::domain::DomainError;

const PROVIDER: &str = "catalog";

/// Settings for the HTTP catalog client
#[derive(Debug, Clone)]
pub struct PokeApiConfig {
    pub base_url: String,
    pub limit: usize,
    pub timeout: Duration,
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pokeapi.co/api/v2".to_string(),
            limit: 151,
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ListResponse {
    results: Vec<ListItem>,
}

#[derive(Debug, Deserialize)]
struct ListItem {
    url: String,
}

#[derive(Debug, Deserialize)]
struct DetailResponse {
    id: i64,
    name: String,
    #[serde(default)]
    sprites: Sprites,
    #[serde(default)]
    types: Vec<TypeSlot>,
}

#[derive(Debug, Default, Deserialize)]
struct Sprites {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    slot: u32,
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

impl From<DetailResponse> for Entry {
    fn from(detail: DetailResponse) -> Self {
        let mut types = detail.types;
        types.sort_by_key(|t| t.slot);

        Entry::new(
            detail.id,
            detail.name,
            detail.sprites.front_default.unwrap_or_default(),
        )
        .with_tags(types.into_iter().map(|t| t.kind.name))
    }
}

/// Catalog client that lists entries from a PokeAPI-compatible HTTP API.
///
/// One request fetches the listing, then each entry's details are fetched
/// concurrently. Any failure aborts the whole fetch.
#[derive(Debug, Clone)]
pub struct PokeApiCatalogClient {
    client: reqwest::Client,
    config: PokeApiConfig,
}

impl PokeApiCatalogClient {
    pub fn new(config: PokeApiConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                DomainError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    fn list_url(&self) -> String {
        format!(
            "{}/pokemon?limit={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.limit
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, DomainError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DomainError::provider(PROVIDER, format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response.text().await.unwrap_or_default();
            return Err(DomainError::provider(
                PROVIDER,
                format!("HTTP {}: {}", status, error_body),
            ));
        }

        response.json().await.map_err(|e| {
            DomainError::provider(PROVIDER, format!("Failed to parse response: {}", e))
        })
    }
}

#[async_trait]
impl CatalogClient for PokeApiCatalogClient {
    async fn fetch_list(&self) -> Result<Vec<Entry>, DomainError> {
        let listing: ListResponse = self.get_json(&self.list_url()).await?;
        debug!(count = listing.results.len(), "Fetched catalog listing");

        let details = try_join_all(
            listing
                .results
                .iter()
                .map(|item| self.get_json::<DetailResponse>(&item.url)),
        )
        .await?;

        Ok(details.into_iter().map(Entry::from).collect())
    }
}
