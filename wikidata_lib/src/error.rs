//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer: upstream API errors, cache entries
/// that no longer decode, and rejected user input.
#[derive(Debug)]
pub enum WikidataError {
    /// An error from the underlying API client.
    Api(wikidata_api::Error),
    /// A cache operation failed (e.g. a cached entry no longer decodes).
    Cache(String),
    /// User-provided input failed validation.
    InvalidInput(String),
}

impl fmt::Display for WikidataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Cache(msg) => write!(f, "Cache error: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for WikidataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<wikidata_api::Error> for WikidataError {
    fn from(e: wikidata_api::Error) -> Self {
        Self::Api(e)
    }
}
