//! Shared query infrastructure: the [`Query`] trait and [`QueryCommon`] fields.

use std::str::FromStr;

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for the parameters every API action accepts.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the language used for messages and language-dependent output.
    fn with_uselang(mut self, uselang: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().uselang = Some(uselang.to_string());
        self
    }

    /// Asks the server to reject the request when replication lag exceeds
    /// this many seconds.
    fn with_maxlag(mut self, maxlag: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().maxlag = Some(maxlag);
        self
    }
}

/// Fields shared by all query types.
#[derive(Clone, Debug)]
pub struct QueryCommon {
    /// API action (`wbgetentities`, `wbgetclaims`, ...).
    pub action: &'static str,
    pub uselang: Option<String>,
    pub maxlag: Option<u32>,
}

impl QueryCommon {
    pub fn new(action: &'static str) -> QueryCommon {
        QueryCommon {
            action,
            uselang: None,
            maxlag: None,
        }
    }

    /// Appends `action`, `format=json` and the optional common parameters.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("action", self.action)
            .append_pair("format", "json");
        if let Some(uselang) = &self.uselang {
            url.query_pairs_mut().append_pair("uselang", uselang);
        };
        if let Some(maxlag) = self.maxlag {
            url.query_pairs_mut()
                .append_pair("maxlag", &maxlag.to_string());
        };
        url
    }
}

/// Appends `values` joined with `|`, the API's multi-value separator.
/// Nothing is appended for an empty list.
pub(crate) fn append_multi(url: &mut Url, key: &str, values: &[String]) {
    if !values.is_empty() {
        url.query_pairs_mut().append_pair(key, &values.join("|"));
    }
}

/// Entity kinds accepted by search and claim filters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntityType {
    #[default]
    Item,
    Property,
    Lexeme,
    Form,
    Sense,
}
impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                EntityType::Item => "item",
                EntityType::Property => "property",
                EntityType::Lexeme => "lexeme",
                EntityType::Form => "form",
                EntityType::Sense => "sense",
            }
        )?;
        Ok(())
    }
}
impl FromStr for EntityType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "item" => Ok(EntityType::Item),
            "property" => Ok(EntityType::Property),
            "lexeme" => Ok(EntityType::Lexeme),
            "form" => Ok(EntityType::Form),
            "sense" => Ok(EntityType::Sense),
            _ => Err(()),
        }
    }
}

/// Statement rank filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rank {
    Preferred,
    Normal,
    Deprecated,
}
impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Rank::Preferred => "preferred",
                Rank::Normal => "normal",
                Rank::Deprecated => "deprecated",
            }
        )?;
        Ok(())
    }
}
impl FromStr for Rank {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "preferred" => Ok(Rank::Preferred),
            "normal" => Ok(Rank::Normal),
            "deprecated" => Ok(Rank::Deprecated),
            _ => Err(()),
        }
    }
}

/// Whether `wbgetentities` resolves redirected IDs to their targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectMode {
    Yes,
    No,
}
impl std::fmt::Display for RedirectMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RedirectMode::Yes => "yes",
                RedirectMode::No => "no",
            }
        )?;
        Ok(())
    }
}
impl FromStr for RedirectMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(RedirectMode::Yes),
            "no" => Ok(RedirectMode::No),
            _ => Err(()),
        }
    }
}
