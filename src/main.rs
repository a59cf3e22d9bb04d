use clap::Parser;
use team_roster::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Catalog(args) => cli::catalog::run(args).await,
    }
}
