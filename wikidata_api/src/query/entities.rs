use url::Url;

use crate::types::EntityID;

use super::{
    common::{append_multi, QueryCommon, RedirectMode},
    Query,
};

/// Query builder for `wbgetentities`.
///
/// Entities are selected either by `ids` or by `sites` + `titles`.
#[derive(Clone, Debug)]
pub struct EntitiesQuery {
    pub common: QueryCommon,
    pub ids: Vec<EntityID>,
    pub sites: Vec<String>,
    pub titles: Vec<String>,
    pub props: Vec<String>,
    pub languages: Vec<String>,
    pub site_filter: Vec<String>,
    pub language_fallback: bool,
    pub normalize: bool,
    pub redirects: Option<RedirectMode>,
}

impl Default for EntitiesQuery {
    fn default() -> Self {
        Self {
            common: QueryCommon::new("wbgetentities"),
            ids: Vec::new(),
            sites: Vec::new(),
            titles: Vec::new(),
            props: Vec::new(),
            languages: Vec::new(),
            site_filter: Vec::new(),
            language_fallback: false,
            normalize: false,
            redirects: None,
        }
    }
}

impl Query for EntitiesQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        append_multi(&mut url, "ids", &self.ids);
        append_multi(&mut url, "sites", &self.sites);
        append_multi(&mut url, "titles", &self.titles);
        append_multi(&mut url, "props", &self.props);
        append_multi(&mut url, "languages", &self.languages);
        append_multi(&mut url, "sitefilter", &self.site_filter);
        if self.language_fallback {
            url.query_pairs_mut().append_pair("languagefallback", "1");
        }
        if self.normalize {
            url.query_pairs_mut().append_pair("normalize", "1");
        }
        if let Some(redirects) = self.redirects {
            url.query_pairs_mut()
                .append_pair("redirects", &redirects.to_string());
        }
        url
    }
}

impl EntitiesQuery {
    pub fn with_id(mut self, id: &str) -> Self {
        self.ids.push(id.to_string());
        self
    }
    pub fn with_ids(mut self, ids: &[EntityID]) -> Self {
        self.ids.extend_from_slice(ids);
        self
    }

    /// Selects entities by page title on a site (e.g. "enwiki").
    pub fn with_site_title(mut self, site: &str, title: &str) -> Self {
        if !self.sites.iter().any(|s| s == site) {
            self.sites.push(site.to_string());
        }
        self.titles.push(title.to_string());
        self
    }
    pub fn with_titles(mut self, titles: &[String]) -> Self {
        self.titles.extend_from_slice(titles);
        self
    }
    pub fn with_site(mut self, site: &str) -> Self {
        self.sites.push(site.to_string());
        self
    }

    /// Limits the returned members (`info`, `labels`, `descriptions`,
    /// `aliases`, `claims`, `sitelinks`, `sitelinks/urls`, `datatype`).
    pub fn with_prop(mut self, prop: &str) -> Self {
        self.props.push(prop.to_string());
        self
    }
    pub fn with_props(mut self, props: &[String]) -> Self {
        self.props.extend_from_slice(props);
        self
    }

    pub fn with_language(mut self, language: &str) -> Self {
        self.languages.push(language.to_string());
        self
    }
    pub fn with_languages(mut self, languages: &[String]) -> Self {
        self.languages.extend_from_slice(languages);
        self
    }

    pub fn with_site_filter(mut self, site: &str) -> Self {
        self.site_filter.push(site.to_string());
        self
    }

    pub fn with_language_fallback(mut self, language_fallback: bool) -> Self {
        self.language_fallback = language_fallback;
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_redirects(mut self, redirects: RedirectMode) -> Self {
        self.redirects = Some(redirects);
        self
    }
}
