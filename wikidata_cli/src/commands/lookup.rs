use anyhow::Result;
use clap::Args;
use wikidata_lib::validation;
use wikidata_lib::CachedClient;

use crate::output::{build_lookup_rows, print_rows, OutputFormat};

#[derive(Args)]
pub struct LookupArgs {
    /// Wikipedia article titles
    #[arg(required = true)]
    pub titles: Vec<String>,

    /// Wikipedia language edition (e.g. en, de)
    #[arg(long, default_value = "en")]
    pub wiki: String,
}

pub async fn run(args: &LookupArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    let language = validation::validate_language(&args.wiki)?;
    let titles: Vec<String> = args
        .titles
        .iter()
        .map(|t| validation::sanitize_text(t, validation::MAX_SEARCH_LENGTH))
        .collect::<Result<_, _>>()?;

    let ids = client.wikidata_ids_from_wikipedia(&language, &titles).await?;
    print_rows(&build_lookup_rows(&titles, &ids), format)
}
