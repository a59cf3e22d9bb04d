//! Catalog command - fetches the catalog once and prints it

use clap::Args;

use crate::domain::CatalogClient;
use crate::infrastructure::catalog::{PokeApiCatalogClient, PokeApiConfig};

#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Override the number of entries to fetch
    #[arg(long)]
    pub limit: Option<usize>,

    /// Print compact JSON instead of pretty JSON
    #[arg(long)]
    pub compact: bool,
}

pub async fn run(args: CatalogArgs) -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    let mut client_config = PokeApiConfig::from(&config.catalog);

    if let Some(limit) = args.limit {
        client_config.limit = limit;
    }

    let client = PokeApiCatalogClient::new(client_config)?;
    let entries = client.fetch_list().await?;

    let output = if args.compact {
        serde_json::to_string(&entries)?
    } else {
        serde_json::to_string_pretty(&entries)?
    };

    println!("{}", output);

    Ok(())
}
