//! Polymorphic claim values.
//!
//! The `value` member of a datavalue changes shape with the declared data
//! type: a bare string for `string`/`external-id`/`url` claims, a bare
//! integer in a few legacy payloads, and an object for everything else
//! (entity references, quantities, times, coordinates, monolingual text).
//! [`TaggedValue::decode`] classifies the raw token and keeps the decoded
//! data behind an explicit variant.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

/// Errors produced while classifying a raw value token.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    /// The token is not valid UTF-8.
    #[error("value token is not valid UTF-8")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    /// The token is not a string, an integer or an object.
    #[error("unrecognized value shape: {token:?}")]
    UnrecognizedShape { token: String },
    /// The token is an object but a member has the wrong type.
    #[error("invalid value fields: {0}")]
    InvalidFields(#[source] serde_json::Error),
}

/// Discriminant of a [`TaggedValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Int,
    Structured,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ValueKind::String => "string",
                ValueKind::Int => "int",
                ValueKind::Structured => "structured",
            }
        )
    }
}

/// A decoded claim value.
#[derive(Debug, Clone, PartialEq)]
pub enum TaggedValue {
    /// The token was a quoted JSON string.
    String(String),
    /// The token was an unquoted base-10 integer.
    Int(i64),
    /// The token was an object.
    Structured(ValueFields),
}

/// Members of a structured value. Every member is optional; which ones are
/// present depends on the value type (`wikibase-entityid`, `quantity`,
/// `time`, `globecoordinate`, `monolingualtext`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValueFields {
    #[serde(rename = "entity-type", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(rename = "numeric-id", skip_serializing_if = "Option::is_none")]
    pub numeric_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Timestamp in the API's `+YYYY-MM-DDThh:mm:ssZ` notation. Kept as a
    /// string because years can exceed what date types represent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Date precision for times (0 = billion years .. 14 = second), degrees
    /// for coordinates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<i64>,
    /// Offset from UTC in minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<i64>,
    #[serde(rename = "calendarmodel", skip_serializing_if = "Option::is_none")]
    pub calendar_model: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub altitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub globe: Option<String>,

    /// Signed decimal string, e.g. `+1.5`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(rename = "lowerbound", skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<String>,
    #[serde(rename = "upperbound", skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<String>,
    /// Unit entity URI, or `"1"` for unitless quantities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl TaggedValue {
    /// Classifies one raw JSON token.
    ///
    /// Order matters: a quoted token is a string, then an integer literal is
    /// tried, then an object is parsed into [`ValueFields`]. Anything else is
    /// a [`DecodeError`].
    ///
    /// String literals are unescaped with a JSON parser. A token that starts
    /// and ends with a quote but is not a valid literal (e.g. `"a"b"`) keeps
    /// the text between the quotes verbatim, without unescaping.
    pub fn decode(raw: &[u8]) -> Result<TaggedValue, DecodeError> {
        let token = std::str::from_utf8(raw)?.trim();

        if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
            return Ok(match serde_json::from_str::<String>(token) {
                Ok(s) => TaggedValue::String(s),
                Err(e) => {
                    tracing::debug!("Keeping raw string value after unescape failure: {}", e);
                    TaggedValue::String(token[1..token.len() - 1].to_string())
                }
            });
        }

        if let Ok(i) = token.parse::<i64>() {
            return Ok(TaggedValue::Int(i));
        }

        if token.starts_with('{') {
            return serde_json::from_str::<ValueFields>(token)
                .map(TaggedValue::Structured)
                .map_err(DecodeError::InvalidFields);
        }

        Err(DecodeError::UnrecognizedShape {
            token: token.to_string(),
        })
    }

    /// Returns the variant discriminant.
    pub fn kind(&self) -> ValueKind {
        match self {
            TaggedValue::String(_) => ValueKind::String,
            TaggedValue::Int(_) => ValueKind::Int,
            TaggedValue::Structured(_) => ValueKind::Structured,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TaggedValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            TaggedValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_fields(&self) -> Option<&ValueFields> {
        match self {
            TaggedValue::Structured(fields) => Some(fields),
            _ => None,
        }
    }
}

/// Captures the token as raw JSON text, so it only deserializes from
/// `serde_json` text input (`from_str`, `from_slice`, `from_reader`).
impl<'de> Deserialize<'de> for TaggedValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = <Box<RawValue>>::deserialize(deserializer)?;
        TaggedValue::decode(raw.get().as_bytes()).map_err(de::Error::custom)
    }
}

impl Serialize for TaggedValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TaggedValue::String(s) => serializer.serialize_str(s),
            TaggedValue::Int(i) => serializer.serialize_i64(*i),
            TaggedValue::Structured(fields) => fields.serialize(serializer),
        }
    }
}
