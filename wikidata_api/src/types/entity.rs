//! Entity records returned by `wbgetentities`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::claim::Claim;

/// Entity identifier such as `Q42` (item), `P31` (property) or `L7` (lexeme).
pub type EntityID = String;

/// Property identifier such as `P31`.
pub type PropertyID = String;

/// A Wikidata item, property or lexeme.
///
/// Which members are populated depends on the `props` requested; everything
/// the API leaves out falls back to its default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Entity {
    /// Entity identifier (e.g. "Q42").
    pub id: EntityID,

    #[serde(rename = "pageid", skip_serializing_if = "Option::is_none")]
    pub page_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ns: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(rename = "lastrevid", skip_serializing_if = "Option::is_none")]
    pub last_rev_id: Option<i64>,

    /// Time of the last edit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<DateTime<Utc>>,

    /// `item`, `property` or `lexeme`.
    #[serde(rename = "type")]
    pub entity_type: String,

    /// Property datatype (`wikibase-item`, `quantity`, ...). Only set on properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,

    /// Single label, present when the API is asked for one language only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Labels keyed by language code.
    pub labels: HashMap<String, Label>,

    /// Descriptions keyed by language code.
    pub descriptions: HashMap<String, Description>,

    /// Aliases keyed by language code.
    pub aliases: HashMap<String, Vec<Alias>>,

    /// Statements keyed by property ID.
    pub claims: HashMap<PropertyID, Vec<Claim>>,

    /// Site links keyed by site ID (e.g. "enwiki").
    pub sitelinks: HashMap<String, SiteLink>,

    /// Set (to an empty string) when the requested entity does not exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<String>,
}

impl Entity {
    /// Returns the label in the given language, or an empty string.
    pub fn label(&self, language_code: &str) -> &str {
        self.labels
            .get(language_code)
            .map(|l| l.value.as_str())
            .unwrap_or_default()
    }

    /// Returns the description in the given language, or an empty string.
    pub fn description(&self, language_code: &str) -> &str {
        self.descriptions
            .get(language_code)
            .map(|d| d.value.as_str())
            .unwrap_or_default()
    }

    /// Returns the aliases in the given language, or an empty slice.
    pub fn aliases_for(&self, language_code: &str) -> &[Alias] {
        self.aliases
            .get(language_code)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the statements for a property, or an empty slice.
    pub fn claims_for(&self, property: &str) -> &[Claim] {
        self.claims
            .get(property)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn sitelink(&self, site: &str) -> Option<&SiteLink> {
        self.sitelinks.get(site)
    }

    /// True when the API reported the requested ID as missing.
    pub fn is_missing(&self) -> bool {
        self.missing.is_some()
    }
}

/// A label in one language.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Label {
    pub language: String,
    pub value: String,
    /// Language the value was taken from when language fallback applied.
    #[serde(rename = "for-language", skip_serializing_if = "Option::is_none")]
    pub for_language: Option<String>,
}

/// A description in one language.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Description {
    pub language: String,
    pub value: String,
    #[serde(rename = "for-language", skip_serializing_if = "Option::is_none")]
    pub for_language: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Alias {
    pub language: String,
    pub value: String,
}

/// Link from an entity to a page on a Wikimedia site.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteLink {
    pub site: String,
    pub title: String,
    /// Badge item IDs (e.g. "Q17437796" for featured articles).
    pub badges: Vec<EntityID>,
    /// Page URL, only returned with `props=sitelinks/urls`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
