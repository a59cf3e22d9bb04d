//! CLI module for the team roster service
//!
//! Subcommands:
//! - `serve`: run the HTTP API
//! - `catalog`: fetch the catalog once and print it

pub mod catalog;
pub mod serve;

use clap::{Parser, Subcommand};

use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Team Roster - per-user teams over an external catalog
#[derive(Parser)]
#[command(name = "team-roster")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Fetch the catalog and print it as JSON
    Catalog(catalog::CatalogArgs),
}

/// Load `.env` and layered configuration, then install logging
pub(crate) fn bootstrap() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    logging::init_logging(&config.logging);

    Ok(config)
}
