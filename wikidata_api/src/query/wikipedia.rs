use url::Url;

use super::{
    common::{append_multi, QueryCommon},
    Query,
};

/// Query builder for a Wikipedia `action=query&prop=pageprops` lookup, which
/// returns the Wikidata item linked to each article.
#[derive(Clone, Debug)]
pub struct WikipediaQuery {
    pub common: QueryCommon,
    pub titles: Vec<String>,
    pub redirects: bool,
}

impl Default for WikipediaQuery {
    fn default() -> Self {
        Self {
            common: QueryCommon::new("query"),
            titles: Vec::new(),
            redirects: true,
        }
    }
}

impl Query for WikipediaQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        url.query_pairs_mut()
            .append_pair("prop", "pageprops")
            .append_pair("ppprop", "wikibase_item");
        append_multi(&mut url, "titles", &self.titles);
        if self.redirects {
            url.query_pairs_mut().append_pair("redirects", "1");
        }
        url
    }
}

impl WikipediaQuery {
    pub fn with_title(mut self, title: &str) -> Self {
        self.titles.push(title.to_string());
        self
    }
    pub fn with_titles(mut self, titles: &[String]) -> Self {
        self.titles.extend_from_slice(titles);
        self
    }

    pub fn with_redirects(mut self, redirects: bool) -> Self {
        self.redirects = redirects;
        self
    }
}
