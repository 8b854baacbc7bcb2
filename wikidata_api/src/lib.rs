//! Bindings for the Wikidata (Wikibase) web API: typed response records,
//! the polymorphic claim value decoder, query builders and an async client.

mod client;
mod errors;
mod query;
pub mod types;
mod user_agent;
pub use self::client::Client;
pub use self::errors::Error;
pub use self::query::{
    ClaimsQuery, EntitiesQuery, EntityType, Query, QueryCommon, Rank, RedirectMode,
    SearchEntitiesQuery, WikipediaQuery,
};
pub use self::user_agent::get_user_agent;
