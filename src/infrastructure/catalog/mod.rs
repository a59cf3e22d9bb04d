//! Catalog client implementations

mod poke_api;
mod static_client;

pub use poke_api::{PokeApiCatalogClient, PokeApiConfig};
pub use static_client::StaticCatalogClient;
