//! Page properties returned by a Wikipedia `action=query&prop=pageprops` call,
//! used to map article titles to Wikidata items.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::entity::EntityID;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WikipediaQueryResponse {
    #[serde(rename = "batchcomplete", skip_serializing_if = "Option::is_none")]
    pub batch_complete: Option<String>,

    pub query: WikipediaQueryResult,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WikipediaQueryResult {
    /// Title normalizations applied by the wiki (e.g. lowercase first letter).
    pub normalized: Vec<TitleMapping>,

    pub redirects: Vec<TitleMapping>,

    /// Pages keyed by page ID. Missing pages get negative IDs.
    pub pages: HashMap<String, WikipediaPage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleMapping {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WikipediaPage {
    #[serde(rename = "pageid", skip_serializing_if = "Option::is_none")]
    pub page_id: Option<i64>,

    pub ns: i64,

    pub title: String,

    #[serde(rename = "pageprops")]
    pub page_props: PageProps,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wikibase_item: Option<EntityID>,
}

impl WikipediaQueryResponse {
    /// Maps each requested title to the Wikidata item of the page it resolved
    /// to, following normalizations and redirects. Titles without an item are
    /// left out.
    pub fn wikibase_items(&self, titles: &[String]) -> HashMap<String, EntityID> {
        let by_title: HashMap<&str, &EntityID> = self
            .query
            .pages
            .values()
            .filter_map(|p| p.page_props.wikibase_item.as_ref().map(|id| (p.title.as_str(), id)))
            .collect();

        let mut items = HashMap::new();
        for title in titles {
            let mut resolved = title.as_str();
            for mapping in self.query.normalized.iter().chain(self.query.redirects.iter()) {
                if mapping.from == resolved {
                    resolved = mapping.to.as_str();
                }
            }
            if let Some(id) = by_title.get(resolved) {
                items.insert(title.clone(), (*id).clone());
            }
        }
        items
    }
}
