use url::Url;

use crate::types::SearchEntitiesResponse;

use super::{
    common::{append_multi, EntityType, QueryCommon},
    Query,
};

/// Query builder for `wbsearchentities`.
#[derive(Clone, Debug)]
pub struct SearchEntitiesQuery {
    pub common: QueryCommon,
    pub search: String,
    /// Language to search in. Required by the API; defaults to `en`.
    pub language: String,
    pub strict_language: bool,
    pub entity_type: Option<EntityType>,
    /// Results per page (API maximum is 50).
    pub limit: Option<u32>,
    /// Offset of the first result, taken from `search-continue`.
    pub continue_from: Option<u32>,
    pub props: Vec<String>,
}

impl Default for SearchEntitiesQuery {
    fn default() -> Self {
        Self {
            common: QueryCommon::new("wbsearchentities"),
            search: String::new(),
            language: "en".to_string(),
            strict_language: false,
            entity_type: None,
            limit: None,
            continue_from: None,
            props: Vec::new(),
        }
    }
}

impl Query for SearchEntitiesQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        url.query_pairs_mut()
            .append_pair("search", &self.search)
            .append_pair("language", &self.language);
        if self.strict_language {
            url.query_pairs_mut().append_pair("strictlanguage", "1");
        }
        if let Some(entity_type) = self.entity_type {
            url.query_pairs_mut()
                .append_pair("type", entity_type.to_string().as_str());
        }
        if let Some(limit) = self.limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        if let Some(continue_from) = self.continue_from {
            url.query_pairs_mut()
                .append_pair("continue", &continue_from.to_string());
        }
        append_multi(&mut url, "props", &self.props);
        url
    }
}

impl SearchEntitiesQuery {
    pub fn new(search: &str) -> Self {
        Self::default().with_search(search)
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_string();
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    pub fn with_strict_language(mut self, strict_language: bool) -> Self {
        self.strict_language = strict_language;
        self
    }

    pub fn with_type(mut self, entity_type: EntityType) -> Self {
        self.entity_type = Some(entity_type);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_continue(mut self, continue_from: u32) -> Self {
        self.continue_from = Some(continue_from);
        self
    }

    pub fn with_prop(mut self, prop: &str) -> Self {
        self.props.push(prop.to_string());
        self
    }

    /// Returns the query for the page after `resp`, or `None` when `resp` was
    /// the last page.
    pub fn next_page(&self, resp: &SearchEntitiesResponse) -> Option<SearchEntitiesQuery> {
        let offset = resp.search_continue?;
        Some(self.clone().with_continue(offset))
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{EntityType, Query, SearchEntitiesQuery};
    use crate::types::SearchEntitiesResponse;

    #[test]
    fn test_search_query() {
        let url = Url::parse("https://example.com/w/api.php").unwrap();

        insta::assert_snapshot!(SearchEntitiesQuery::new("douglas adams")
            .add_to_url(&url)
            .to_string(), @"https://example.com/w/api.php?action=wbsearchentities&format=json&search=douglas+adams&language=en");

        insta::assert_snapshot!(SearchEntitiesQuery::new("instance of")
            .with_language("de")
            .with_strict_language(true)
            .with_type(EntityType::Property)
            .with_limit(50)
            .with_continue(7)
            .with_prop("url")
            .add_to_url(&url)
            .to_string(), @"https://example.com/w/api.php?action=wbsearchentities&format=json&search=instance+of&language=de&strictlanguage=1&type=property&limit=50&continue=7&props=url");
    }

    #[test]
    fn next_page_uses_search_continue() {
        let query = SearchEntitiesQuery::new("berlin").with_limit(7);

        let resp = SearchEntitiesResponse {
            search_continue: Some(7),
            ..Default::default()
        };
        let next = query.next_page(&resp).unwrap();
        assert_eq!(next.continue_from, Some(7));
        assert_eq!(next.limit, Some(7));
        assert_eq!(next.search, "berlin");

        let last = SearchEntitiesResponse::default();
        assert!(next.next_page(&last).is_none());
    }
}
