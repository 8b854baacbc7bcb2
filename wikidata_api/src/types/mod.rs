mod meta;
pub use self::meta::{ApiError, GetClaimsResponse, GetEntitiesResponse, SearchEntitiesResponse};
pub(crate) use self::meta::ErrorEnvelope;

mod entity;
pub use self::entity::{Alias, Description, Entity, EntityID, Label, PropertyID, SiteLink};

mod claim;
pub use self::claim::{Claim, DataValue, Reference, Snak};

mod value;
pub use self::value::{DecodeError, TaggedValue, ValueFields, ValueKind};

mod search;
pub use self::search::{SearchEntity, SearchInfo, SearchMatch};

mod wikipedia;
pub use self::wikipedia::{
    PageProps, TitleMapping, WikipediaPage, WikipediaQueryResponse, WikipediaQueryResult,
};
