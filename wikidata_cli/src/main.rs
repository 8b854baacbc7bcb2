mod commands;
mod output;

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use wikidata_lib::cache::MemoryCache;
use wikidata_lib::CachedClient;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "wikidata")]
#[command(about = "Query entities, statements and search results from Wikidata")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch entities by ID or by site title
    Entities(commands::entities::EntitiesArgs),
    /// List the statements of an entity
    Claims(commands::claims::ClaimsArgs),
    /// Search entities by label or alias
    Search(commands::search::SearchArgs),
    /// Resolve Wikipedia article titles to Wikidata IDs
    Lookup(commands::lookup::LookupArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wikidata=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.output);

    let ttl = std::env::var("WIKIDATA_CACHE_TTL_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(300);
    let cache = MemoryCache::new(Duration::from_secs(ttl));
    let client = CachedClient::new(cache);

    match &cli.command {
        Commands::Entities(args) => commands::entities::run(args, &client, &format).await?,
        Commands::Claims(args) => commands::claims::run(args, &client, &format).await?,
        Commands::Search(args) => commands::search::run(args, &client, &format).await?,
        Commands::Lookup(args) => commands::lookup::run(args, &client, &format).await?,
    }

    Ok(())
}
