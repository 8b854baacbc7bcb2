use anyhow::Result;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use wikidata_lib::types::{Claim, Entity, SearchEntity, Snak, TaggedValue, ValueFields};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> OutputFormat {
        match s {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
pub struct EntityRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    entity_type: String,
    #[tabled(rename = "Label")]
    #[serde(rename = "Label")]
    label: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
    #[tabled(rename = "Claims")]
    #[serde(rename = "Claims")]
    claims: usize,
    #[tabled(rename = "Sitelinks")]
    #[serde(rename = "Sitelinks")]
    sitelinks: usize,
    #[tabled(rename = "Modified")]
    #[serde(rename = "Modified")]
    modified: String,
}

#[derive(Tabled, Serialize)]
pub struct ClaimRow {
    #[tabled(rename = "Property")]
    #[serde(rename = "Property")]
    property: String,
    #[tabled(rename = "Rank")]
    #[serde(rename = "Rank")]
    rank: String,
    #[tabled(rename = "Datatype")]
    #[serde(rename = "Datatype")]
    datatype: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
    #[tabled(rename = "Qualifiers")]
    #[serde(rename = "Qualifiers")]
    qualifiers: String,
    #[tabled(rename = "References")]
    #[serde(rename = "References")]
    references: usize,
}

#[derive(Tabled, Serialize)]
pub struct SearchRow {
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
    #[tabled(rename = "Label")]
    #[serde(rename = "Label")]
    label: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
    #[tabled(rename = "Match")]
    #[serde(rename = "Match")]
    matched: String,
}

#[derive(Tabled, Serialize)]
pub struct LookupRow {
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    id: String,
}

// -- Row builders --

pub fn build_entity_rows(entities: &[&Entity], language: &str) -> Vec<EntityRow> {
    entities
        .iter()
        .map(|e| EntityRow {
            id: e.id.clone(),
            entity_type: if e.is_missing() {
                "missing".to_string()
            } else {
                e.entity_type.clone()
            },
            label: e.label(language).to_string(),
            description: e.description(language).to_string(),
            claims: e.claims.values().map(Vec::len).sum(),
            sitelinks: e.sitelinks.len(),
            modified: e.modified.map(|m| m.to_rfc3339()).unwrap_or_default(),
        })
        .collect()
}

/// One row per statement, ordered by property ID then API order.
pub fn build_claim_rows<'a, I>(claims: I) -> Vec<ClaimRow>
where
    I: IntoIterator<Item = (&'a String, &'a Vec<Claim>)>,
{
    let mut by_property: Vec<(&String, &Vec<Claim>)> = claims.into_iter().collect();
    by_property.sort_by(|a, b| property_order(a.0).cmp(&property_order(b.0)));

    by_property
        .into_iter()
        .flat_map(|(property, claims)| {
            claims.iter().map(move |c| ClaimRow {
                property: property.clone(),
                rank: c.rank.clone(),
                datatype: c.main_snak.data_type.clone(),
                value: format_snak(&c.main_snak),
                qualifiers: c
                    .ordered_qualifiers()
                    .flat_map(|(p, snaks)| {
                        snaks
                            .iter()
                            .map(move |s| format!("{}={}", p, format_snak(s)))
                    })
                    .collect::<Vec<_>>()
                    .join("; "),
                references: c.references.len(),
            })
        })
        .collect()
}

pub fn build_search_rows(results: &[SearchEntity]) -> Vec<SearchRow> {
    results
        .iter()
        .map(|r| SearchRow {
            id: r.id.clone(),
            label: r.label.clone(),
            description: r.description.clone().unwrap_or_default(),
            matched: format!("{} ({})", r.search_match.text, r.search_match.match_type),
        })
        .collect()
}

pub fn build_lookup_rows(titles: &[String], ids: &std::collections::HashMap<String, String>) -> Vec<LookupRow> {
    titles
        .iter()
        .map(|t| LookupRow {
            title: t.clone(),
            id: ids.get(t).cloned().unwrap_or_default(),
        })
        .collect()
}

// Sorts P31 before P214 instead of lexically.
fn property_order(property: &str) -> (u64, &str) {
    let numeric = property
        .get(1..)
        .and_then(|n| n.parse::<u64>().ok())
        .unwrap_or(u64::MAX);
    (numeric, property)
}

/// Renders a snak for display: its value, or `<somevalue>` / `<novalue>`.
pub fn format_snak(snak: &Snak) -> String {
    match snak.value() {
        Some(value) => format_value(value),
        None => format!("<{}>", snak.snak_type),
    }
}

/// Renders a decoded value. Structured values show the most specific
/// member present.
pub fn format_value(value: &TaggedValue) -> String {
    match value {
        TaggedValue::String(s) => s.clone(),
        TaggedValue::Int(i) => i.to_string(),
        TaggedValue::Structured(fields) => format_fields(fields),
    }
}

fn format_fields(f: &ValueFields) -> String {
    if let Some(id) = &f.id {
        return id.clone();
    }
    if let Some(amount) = &f.amount {
        return match f.unit.as_deref() {
            None | Some("1") => amount.clone(),
            Some(unit) => format!("{} {}", amount, short_entity_uri(unit)),
        };
    }
    if let Some(time) = &f.time {
        return match f.precision {
            Some(p) => format!("{} (precision {})", time, p),
            None => time.clone(),
        };
    }
    if let (Some(lat), Some(lon)) = (f.latitude, f.longitude) {
        return format!("{}, {}", lat, lon);
    }
    if let Some(text) = &f.text {
        return match &f.language {
            Some(lang) => format!("{} ({})", text, lang),
            None => text.clone(),
        };
    }
    if let Some(numeric_id) = f.numeric_id {
        return numeric_id.to_string();
    }
    serde_json::to_string(f).unwrap_or_default()
}

// "http://www.wikidata.org/entity/Q11573" -> "Q11573"
fn short_entity_uri(uri: &str) -> &str {
    uri.rsplit('/').next().unwrap_or(uri)
}

// -- Rendering --

pub fn print_rows<T: Tabled + Serialize>(rows: &[T], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => print_json(&rows),
    }
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
