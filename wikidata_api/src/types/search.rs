//! Search results returned by `wbsearchentities`.

use serde::{Deserialize, Serialize};

use super::entity::EntityID;

/// One matched entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchEntity {
    pub repository: String,

    pub id: EntityID,

    #[serde(rename = "concepturi")]
    pub concept_uri: String,

    pub title: String,

    #[serde(rename = "pageid", skip_serializing_if = "Option::is_none")]
    pub page_id: Option<i64>,

    pub url: String,

    pub label: String,

    /// Absent for entities without a description in the search language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "match")]
    pub search_match: SearchMatch,

    /// Only set for properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,

    /// Aliases that matched the search term.
    pub aliases: Vec<String>,
}

/// Which term of the entity matched the search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchMatch {
    /// `label`, `alias`, `description` or `entityId`.
    #[serde(rename = "type")]
    pub match_type: String,

    pub language: String,

    pub text: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchInfo {
    pub search: String,
}
