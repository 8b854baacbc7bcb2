use anyhow::{anyhow, Result};
use clap::Args;
use wikidata_lib::validation;
use wikidata_lib::{CachedClient, EntityType, SearchEntitiesQuery};

use crate::output::{build_search_rows, print_rows, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Text to search labels and aliases for
    pub text: String,

    /// Search language
    #[arg(long, default_value = "en")]
    pub language: String,

    /// Disable language fallback when matching
    #[arg(long)]
    pub strict: bool,

    /// Entity type: item, property, lexeme, form, sense
    #[arg(long = "type", default_value = "item")]
    pub entity_type: String,

    /// Results per page (1-50)
    #[arg(long, default_value = "7")]
    pub limit: u32,

    /// Offset to continue from
    #[arg(long = "continue")]
    pub continue_from: Option<u32>,

    /// Follow continuation for up to N pages
    #[arg(long, default_value = "1")]
    pub pages: usize,
}

pub async fn run(args: &SearchArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    let text = validation::validate_search(&args.text)?;
    let language = validation::validate_language(&args.language)?;
    let limit = validation::validate_limit(args.limit)?;
    let entity_type: EntityType = args.entity_type.parse().map_err(|_| {
        anyhow!(
            "invalid entity type '{}'. Expected item, property, lexeme, form or sense",
            args.entity_type
        )
    })?;

    let mut query = SearchEntitiesQuery::new(&text)
        .with_language(&language)
        .with_type(entity_type)
        .with_limit(limit);
    if args.strict {
        query = query.with_strict_language(true);
    }
    if let Some(offset) = args.continue_from {
        query = query.with_continue(offset);
    }

    let results = client.search_all(&query, args.pages.max(1)).await?;
    eprintln!("{} results for '{}'", results.len(), text);

    print_rows(&build_search_rows(&results), format)
}
