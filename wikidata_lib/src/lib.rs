//! Library layer for the Wikidata client: cached API client, retry policy,
//! and input validation.
//!
//! Wraps the `wikidata_api` crate with an in-memory TTL cache, request
//! spacing, retries on transient failures, and validation of user input.

pub mod cache;
pub mod client;
pub mod error;
pub mod validation;

pub use wikidata_api;
pub use wikidata_api::types;
pub use wikidata_api::{
    ClaimsQuery, EntitiesQuery, EntityType, Query, Rank, RedirectMode, SearchEntitiesQuery,
    WikipediaQuery,
};

pub use client::{CachedClient, RetryConfig};
pub use error::WikidataError;
