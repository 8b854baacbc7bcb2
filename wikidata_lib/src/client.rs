//! Caching and retrying wrapper around the API client.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wikidata_api::types::{
    EntityID, GetClaimsResponse, GetEntitiesResponse, SearchEntitiesResponse, SearchEntity,
};
use wikidata_api::{ClaimsQuery, Client, EntitiesQuery, SearchEntitiesQuery};

use crate::cache::MemoryCache;
use crate::error::WikidataError;

/// API client wrapper that adds in-memory caching, request spacing and
/// retries.
///
/// Cache hits bypass the network entirely. On cache misses, consecutive
/// HTTP requests are spaced by at least the configured minimum interval,
/// and transient failures (network errors, HTTP 429/5xx, `maxlag`) are
/// retried with exponential backoff.
pub struct CachedClient {
    inner: Client,
    cache: MemoryCache,
    retry: RetryConfig,
    min_interval: Duration,
    /// When the last HTTP request was sent.
    last_request: Mutex<Option<Instant>>,
}

/// Retry policy for transient failures.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Retries after the first attempt.
    pub max_retries: usize,
    pub base_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 1,
            base_delay_ms: 1000,
            max_delay_ms: 10000,
        }
    }
}

impl RetryConfig {
    /// Reads `WIKIDATA_RETRY_MAX`, `WIKIDATA_RETRY_BASE_MS` and
    /// `WIKIDATA_RETRY_MAX_MS`, falling back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_retries: env_parse("WIKIDATA_RETRY_MAX", defaults.max_retries),
            base_delay_ms: env_parse("WIKIDATA_RETRY_BASE_MS", defaults.base_delay_ms),
            max_delay_ms: env_parse("WIKIDATA_RETRY_MAX_MS", defaults.max_delay_ms),
        }
    }

    fn delay_for_attempt(&self, attempt: usize) -> Duration {
        let shift = (attempt.saturating_sub(1)).min(30) as u32;
        let exp = 1u64 << shift;
        let base = self
            .base_delay_ms
            .saturating_mul(exp)
            .min(self.max_delay_ms);
        let jitter = rand::thread_rng().gen_range(0.8..1.2);
        Duration::from_millis((base as f64 * jitter) as u64)
    }
}

impl CachedClient {
    /// Creates a cached client for the production API, configured from the
    /// environment.
    pub fn new(cache: MemoryCache) -> Self {
        Self::from_client(Client::new(), cache)
    }

    /// Creates a cached client with a custom base URL. Used for testing.
    pub fn with_base_url(base_url: &str, cache: MemoryCache) -> Self {
        Self::from_client(Client::with_base_url(base_url), cache)
    }

    fn from_client(inner: Client, cache: MemoryCache) -> Self {
        Self {
            inner,
            cache,
            retry: RetryConfig::from_env(),
            min_interval: Duration::from_millis(env_parse("WIKIDATA_MIN_INTERVAL_MS", 0)),
            last_request: Mutex::new(None),
        }
    }

    pub fn with_retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Sets the minimum time between two outgoing HTTP requests.
    pub fn with_min_interval(mut self, min_interval: Duration) -> Self {
        self.min_interval = min_interval;
        self
    }

    async fn space_requests(&self) {
        let sleep_dur = {
            let last = self.last_request.lock().unwrap_or_else(|e| e.into_inner());
            (*last)
                .and_then(|last_time| self.min_interval.checked_sub(last_time.elapsed()))
                .filter(|dur| !dur.is_zero())
        };
        if let Some(dur) = sleep_dur {
            tokio::time::sleep(dur).await;
        }
        *self.last_request.lock().unwrap_or_else(|e| e.into_inner()) = Some(Instant::now());
    }

    async fn with_retry<T, F, Fut>(&self, label: &str, mut f: F) -> Result<T, WikidataError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, wikidata_api::Error>>,
    {
        let mut attempt = 0usize;
        loop {
            self.space_requests().await;
            match f().await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    attempt += 1;
                    if attempt > self.retry.max_retries || !is_retryable(&err) {
                        return Err(err.into());
                    }
                    let delay = self.retry.delay_for_attempt(attempt);
                    tracing::warn!(
                        "{} request failed ({}), retry {}/{} in {:.1}s",
                        label,
                        err,
                        attempt,
                        self.retry.max_retries,
                        delay.as_secs_f64()
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    async fn cached<T, F, Fut>(
        &self,
        label: &str,
        cache_key: String,
        fetch: F,
    ) -> Result<T, WikidataError>
    where
        T: Serialize + DeserializeOwned,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, wikidata_api::Error>>,
    {
        if let Some(cached) = self.cache.get(&cache_key) {
            tracing::debug!("cache hit for {}", cache_key);
            return serde_json::from_str(&cached).map_err(|e| {
                self.cache.remove(&cache_key);
                WikidataError::Cache(format!("stale entry {}: {}", cache_key, e))
            });
        }

        let resp = self.with_retry(label, fetch).await?;
        if let Ok(json) = serde_json::to_string(&resp) {
            self.cache.set(cache_key, json);
        }
        Ok(resp)
    }

    /// Fetches entities, returning cached results when available.
    pub async fn get_entities(
        &self,
        query: &EntitiesQuery,
    ) -> Result<GetEntitiesResponse, WikidataError> {
        let cache_key = format!("entities:{:?}", query);
        self.cached("entities", cache_key, || self.inner.get_entities(query))
            .await
    }

    /// Fetches claims, returning cached results when available.
    pub async fn get_claims(&self, query: &ClaimsQuery) -> Result<GetClaimsResponse, WikidataError> {
        let cache_key = format!("claims:{:?}", query);
        self.cached("claims", cache_key, || self.inner.get_claims(query))
            .await
    }

    /// Searches entities, returning cached results when available.
    pub async fn search_entities(
        &self,
        query: &SearchEntitiesQuery,
    ) -> Result<SearchEntitiesResponse, WikidataError> {
        let cache_key = format!("search:{:?}", query);
        self.cached("search", cache_key, || self.inner.search_entities(query))
            .await
    }

    /// Follows `search-continue` for up to `max_pages` pages and returns the
    /// concatenated results.
    pub async fn search_all(
        &self,
        query: &SearchEntitiesQuery,
        max_pages: usize,
    ) -> Result<Vec<SearchEntity>, WikidataError> {
        let mut results = Vec::new();
        let mut next = Some(query.clone());
        let mut pages = 0;
        while let Some(page_query) = next {
            if pages >= max_pages {
                break;
            }
            let resp = self.search_entities(&page_query).await?;
            pages += 1;
            next = page_query.next_page(&resp);
            results.extend(resp.results);
        }
        Ok(results)
    }

    /// Resolves Wikipedia article titles to Wikidata IDs, returning cached
    /// results when available.
    pub async fn wikidata_ids_from_wikipedia(
        &self,
        language: &str,
        titles: &[String],
    ) -> Result<HashMap<String, EntityID>, WikidataError> {
        let cache_key = format!("wikipedia:{}:{:?}", language, titles);
        self.cached("wikipedia", cache_key, || {
            self.inner.wikidata_ids_from_wikipedia(language, titles)
        })
        .await
    }

    /// Removes all entries from the cache.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

fn is_retryable(err: &wikidata_api::Error) -> bool {
    match err {
        wikidata_api::Error::RequestFailed => true,
        wikidata_api::Error::HttpStatus { status, .. } => *status == 429 || *status >= 500,
        wikidata_api::Error::Api { code, .. } => code == "maxlag" || code == "ratelimited",
        wikidata_api::Error::InvalidResponse(_) => false,
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|val| val.parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_errors() {
        assert!(is_retryable(&wikidata_api::Error::RequestFailed));
        assert!(is_retryable(&wikidata_api::Error::HttpStatus {
            status: 429,
            body: String::new()
        }));
        assert!(is_retryable(&wikidata_api::Error::HttpStatus {
            status: 502,
            body: String::new()
        }));
        assert!(!is_retryable(&wikidata_api::Error::HttpStatus {
            status: 404,
            body: String::new()
        }));
        assert!(is_retryable(&wikidata_api::Error::Api {
            code: "maxlag".to_string(),
            info: String::new()
        }));
        assert!(!is_retryable(&wikidata_api::Error::Api {
            code: "no-such-entity".to_string(),
            info: String::new()
        }));
        assert!(!is_retryable(&wikidata_api::Error::InvalidResponse(
            "bad".to_string()
        )));
    }

    #[test]
    fn backoff_grows_and_is_capped() {
        let cfg = RetryConfig {
            max_retries: 5,
            base_delay_ms: 100,
            max_delay_ms: 1000,
        };
        let first = cfg.delay_for_attempt(1);
        assert!(first >= Duration::from_millis(80) && first <= Duration::from_millis(120));
        let third = cfg.delay_for_attempt(3);
        assert!(third >= Duration::from_millis(320) && third <= Duration::from_millis(480));
        let capped = cfg.delay_for_attempt(20);
        assert!(capped <= Duration::from_millis(1200));
    }

    #[tokio::test]
    async fn undecodable_cache_entry_is_evicted() {
        let client = CachedClient::with_base_url(
            "http://127.0.0.1:9",
            MemoryCache::new(Duration::from_secs(60)),
        );
        let query = ClaimsQuery::default().with_entity("Q42");
        let key = format!("claims:{:?}", query);
        client.cache.set(
            key.clone(),
            r#"{"claims":{"P1":[{"mainsnak":{"datavalue":{"type":"string","value":true}}}]}}"#
                .to_string(),
        );

        let err = client.get_claims(&query).await.unwrap_err();
        assert!(matches!(err, WikidataError::Cache(_)), "unexpected error: {}", err);
        assert!(client.cache.get(&key).is_none());
        assert!(client.cache.is_empty());
    }
}
