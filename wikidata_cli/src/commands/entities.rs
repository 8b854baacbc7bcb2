use anyhow::{bail, Result};
use clap::Args;
use wikidata_lib::validation;
use wikidata_lib::{CachedClient, EntitiesQuery, RedirectMode};

use crate::output::{build_claim_rows, build_entity_rows, print_rows, OutputFormat};

#[derive(Args)]
pub struct EntitiesArgs {
    /// Entity IDs, comma-separated (e.g. Q42,Q1)
    #[arg(long, conflicts_with = "titles")]
    pub ids: Option<String>,

    /// Site the titles belong to (e.g. enwiki)
    #[arg(long, default_value = "enwiki")]
    pub site: String,

    /// Page titles on --site, comma-separated
    #[arg(long)]
    pub titles: Option<String>,

    /// Languages for labels and descriptions, comma-separated. The first is displayed.
    #[arg(long, default_value = "en")]
    pub languages: String,

    /// Restrict returned parts: info, labels, descriptions, aliases, claims, sitelinks
    #[arg(long)]
    pub props: Option<String>,

    /// Apply language fallback for labels and descriptions
    #[arg(long)]
    pub fallback: bool,

    /// Return redirected IDs as-is instead of resolving them
    #[arg(long)]
    pub no_redirects: bool,

    /// List each entity's statements instead of a summary
    #[arg(long)]
    pub claims: bool,
}

pub async fn run(args: &EntitiesArgs, client: &CachedClient, format: &OutputFormat) -> Result<()> {
    let mut query = EntitiesQuery::default();

    match (&args.ids, &args.titles) {
        (Some(ids), _) => {
            query = query.with_ids(&validation::parse_id_list(ids)?);
        }
        (None, Some(titles)) => {
            let site = validation::validate_site(&args.site)?;
            let titles: Vec<String> = titles
                .split(',')
                .map(|t| validation::sanitize_text(t, validation::MAX_SEARCH_LENGTH))
                .collect::<Result<_, _>>()?;
            for title in &titles {
                query = query.with_site_title(&site, title);
            }
            query = query.with_normalize(titles.len() == 1);
        }
        (None, None) => bail!("either --ids or --titles is required"),
    }

    let languages: Vec<String> = args
        .languages
        .split(',')
        .map(validation::validate_language)
        .collect::<Result<_, _>>()?;
    query = query.with_languages(&languages);

    if let Some(props) = &args.props {
        let props: Vec<String> = props.split(',').map(|p| p.trim().to_string()).collect();
        query = query.with_props(&props);
    }
    if args.fallback {
        query = query.with_language_fallback(true);
    }
    if args.no_redirects {
        query = query.with_redirects(RedirectMode::No);
    }

    let resp = client.get_entities(&query).await?;

    let mut entities: Vec<_> = resp.entities.values().collect();
    entities.sort_by(|a, b| a.id.cmp(&b.id));

    if args.claims {
        for entity in entities {
            eprintln!("{} {}", entity.id, entity.label(&languages[0]));
            print_rows(&build_claim_rows(&entity.claims), format)?;
        }
        return Ok(());
    }

    print_rows(&build_entity_rows(&entities, &languages[0]), format)
}
