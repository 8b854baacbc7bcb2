use url::Url;

use super::{
    common::{append_multi, QueryCommon, Rank},
    Query,
};

/// Query builder for `wbgetclaims`.
///
/// Either an entity (all its statements, optionally filtered by property and
/// rank) or a single statement GUID is selected.
#[derive(Clone, Debug)]
pub struct ClaimsQuery {
    pub common: QueryCommon,
    pub entity: Option<String>,
    pub claim: Option<String>,
    pub property: Option<String>,
    pub rank: Option<Rank>,
    pub props: Vec<String>,
}

impl Default for ClaimsQuery {
    fn default() -> Self {
        Self {
            common: QueryCommon::new("wbgetclaims"),
            entity: None,
            claim: None,
            property: None,
            rank: None,
            props: Vec::new(),
        }
    }
}

impl Query for ClaimsQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        if let Some(entity) = &self.entity {
            url.query_pairs_mut().append_pair("entity", entity);
        }
        if let Some(claim) = &self.claim {
            url.query_pairs_mut().append_pair("claim", claim);
        }
        if let Some(property) = &self.property {
            url.query_pairs_mut().append_pair("property", property);
        }
        if let Some(rank) = self.rank {
            url.query_pairs_mut()
                .append_pair("rank", rank.to_string().as_str());
        }
        append_multi(&mut url, "props", &self.props);
        url
    }
}

impl ClaimsQuery {
    pub fn with_entity(mut self, entity: &str) -> Self {
        self.entity = Some(entity.to_string());
        self
    }

    /// Selects a single statement by GUID (e.g. "Q42$F078E5B3-...").
    pub fn with_claim(mut self, claim: &str) -> Self {
        self.claim = Some(claim.to_string());
        self
    }

    pub fn with_property(mut self, property: &str) -> Self {
        self.property = Some(property.to_string());
        self
    }

    pub fn with_rank(mut self, rank: Rank) -> Self {
        self.rank = Some(rank);
        self
    }

    /// `references` is the only prop the API knows; an empty list drops them.
    pub fn with_prop(mut self, prop: &str) -> Self {
        self.props.push(prop.to_string());
        self
    }
}
