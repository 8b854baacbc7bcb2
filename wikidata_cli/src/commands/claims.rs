use anyhow::{anyhow, bail, Result};
use clap::Args;
use wikidata_lib::validation;
use wikidata_lib::{CachedClient, ClaimsQuery, Rank};

use crate::output::{build_claim_rows, print_rows, OutputFormat};

#[derive(Args)]
pub struct ClaimsArgs {
    /// Entity whose statements to list (e.g. Q42)
    #[arg(long)]
    pub entity: Option<String>,

    /// A single statement GUID (e.g. Q42$F078E5B3-...)
    #[arg(long, conflicts_with = "entity")]
    pub claim: Option<String>,

    /// Only statements for this property (e.g. P31)
    #[arg(long)]
    pub property: Option<String>,

    /// Only statements of this rank: preferred, normal, deprecated
    #[arg(long)]
    pub rank: Option<String>,
}

pub async fn run(args: &ClaimsArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    let mut query = ClaimsQuery::default();

    match (&args.entity, &args.claim) {
        (Some(entity), _) => query = query.with_entity(&validation::validate_entity_id(entity)?),
        (None, Some(claim)) => {
            query = query.with_claim(&validation::sanitize_text(claim, validation::MAX_SEARCH_LENGTH)?)
        }
        (None, None) => bail!("either --entity or --claim is required"),
    }

    if let Some(property) = &args.property {
        query = query.with_property(&validation::validate_property_id(property)?);
    }

    if let Some(rank) = &args.rank {
        let rank: Rank = rank
            .parse()
            .map_err(|_| anyhow!("invalid rank '{}'. Expected preferred, normal or deprecated", rank))?;
        query = query.with_rank(rank);
    }

    let resp = client.get_claims(&query).await?;
    print_rows(&build_claim_rows(&resp.claims), format)
}
