use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::claim::Claim;
use super::entity::{Entity, EntityID, PropertyID};
use super::search::{SearchEntity, SearchInfo};

/// Response of `wbgetentities`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetEntitiesResponse {
    /// Entities keyed by ID (or by `-1`, `-2`, ... for unknown site titles).
    pub entities: HashMap<EntityID, Entity>,
    pub success: u32,
}

/// Response of `wbgetclaims`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetClaimsResponse {
    pub claims: HashMap<PropertyID, Vec<Claim>>,
}

/// Response of `wbsearchentities`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchEntitiesResponse {
    #[serde(rename = "searchinfo")]
    pub search_info: SearchInfo,

    #[serde(rename = "search")]
    pub results: Vec<SearchEntity>,

    /// Offset of the next page. Absent on the last page.
    #[serde(rename = "search-continue", skip_serializing_if = "Option::is_none")]
    pub search_continue: Option<u32>,

    pub success: u32,
}

/// Error envelope the API returns (with HTTP 200) for rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    #[serde(default)]
    pub info: String,
}

#[derive(Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: Option<ApiError>,
}
