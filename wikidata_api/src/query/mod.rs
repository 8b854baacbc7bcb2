mod common;
pub use self::common::{EntityType, Query, QueryCommon, Rank, RedirectMode};

mod entities;
pub use self::entities::EntitiesQuery;

mod claims;
pub use self::claims::ClaimsQuery;

mod search;
pub use self::search::SearchEntitiesQuery;

mod wikipedia;
pub use self::wikipedia::WikipediaQuery;
