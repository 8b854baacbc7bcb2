//! HTTP client for the Wikidata API.

use std::collections::HashMap;
use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{ClaimsQuery, EntitiesQuery, Query, SearchEntitiesQuery, WikipediaQuery},
    types::{
        EntityID, ErrorEnvelope, GetClaimsResponse, GetEntitiesResponse, SearchEntitiesResponse,
        WikipediaQueryResponse,
    },
    user_agent::get_user_agent,
    Error,
};

const API_PATH: &str = "/w/api.php";

/// HTTP client for the Wikidata API.
///
/// Each request builds a fresh `reqwest::Client` with a 30-second timeout
/// and the configured User-Agent.
#[derive(Clone, Debug)]
pub struct Client {
    /// Base URL for the Wikibase API. Defaults to `https://www.wikidata.org`.
    base_api_url: String,
    /// Overrides `https://{lang}.wikipedia.org` for title lookups.
    wikipedia_base_url: Option<String>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production Wikidata API.
    pub fn new() -> Self {
        Self {
            base_api_url: "https://www.wikidata.org".to_string(),
            wikipedia_base_url: None,
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with
    /// wiremock; Wikipedia lookups go to the same server.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            wikipedia_base_url: Some(base_url.to_string()),
        }
    }

    /// Sends Wikipedia lookups to `base_url` instead of the language wiki.
    pub fn with_wikipedia_base_url(mut self, base_url: &str) -> Self {
        self.wikipedia_base_url = Some(base_url.to_string());
        self
    }

    fn get_url(base: &str, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", base, API_PATH).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(query.add_to_url(&url))
    }

    fn wikipedia_base(&self, language: &str) -> String {
        match &self.wikipedia_base_url {
            Some(base) => base.clone(),
            None => format!("https://{}.wikipedia.org", language),
        }
    }

    async fn get<T>(&self, url: Url) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        tracing::debug!("GET {}", url);
        let client = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        parse_body(&body)
    }

    /// Fetches entities by ID or by site title.
    pub async fn get_entities(&self, query: &EntitiesQuery) -> Result<GetEntitiesResponse, Error> {
        let url = Self::get_url(&self.base_api_url, query)?;
        self.get::<GetEntitiesResponse>(url).await
    }

    /// Fetches the statements of an entity, or a single statement by GUID.
    pub async fn get_claims(&self, query: &ClaimsQuery) -> Result<GetClaimsResponse, Error> {
        let url = Self::get_url(&self.base_api_url, query)?;
        self.get::<GetClaimsResponse>(url).await
    }

    /// Searches entities by label or alias.
    pub async fn search_entities(
        &self,
        query: &SearchEntitiesQuery,
    ) -> Result<SearchEntitiesResponse, Error> {
        let url = Self::get_url(&self.base_api_url, query)?;
        self.get::<SearchEntitiesResponse>(url).await
    }

    /// Fetches page properties for Wikipedia articles in the given language.
    pub async fn get_wikipedia_pages(
        &self,
        language: &str,
        query: &WikipediaQuery,
    ) -> Result<WikipediaQueryResponse, Error> {
        let url = Self::get_url(&self.wikipedia_base(language), query)?;
        self.get::<WikipediaQueryResponse>(url).await
    }

    /// Resolves Wikipedia article titles to Wikidata item IDs. Titles without
    /// a linked item are absent from the result.
    pub async fn wikidata_ids_from_wikipedia(
        &self,
        language: &str,
        titles: &[String],
    ) -> Result<HashMap<String, EntityID>, Error> {
        let query = WikipediaQuery::default().with_titles(titles);
        let resp = self.get_wikipedia_pages(language, &query).await?;
        Ok(resp.wikibase_items(titles))
    }
}

/// Decodes a 2xx body, surfacing the API's error envelope first.
fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    if let Ok(ErrorEnvelope { error: Some(err) }) = serde_json::from_str::<ErrorEnvelope>(body) {
        tracing::error!("API returned error {}: {}", err.code, err.info);
        return Err(Error::Api {
            code: err.code,
            info: err.info,
        });
    }

    serde_json::from_str::<T>(body).map_err(|e| {
        let snippet = truncate_body(body);
        tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
        Error::InvalidResponse(e.to_string())
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
