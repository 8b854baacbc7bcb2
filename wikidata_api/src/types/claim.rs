//! Statements, snaks and references.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::entity::PropertyID;
use super::value::TaggedValue;

/// A statement about an entity: a main snak plus optional qualifiers and
/// references.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Claim {
    /// Statement GUID (e.g. "Q42$F078E5B3-F9A8-480E-B7AC-D97778CBBEF9").
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// `preferred`, `normal` or `deprecated`.
    pub rank: String,

    #[serde(rename = "type")]
    pub claim_type: String,

    #[serde(rename = "mainsnak")]
    pub main_snak: Snak,

    /// Qualifier snaks keyed by property ID. Map order is meaningless; use
    /// [`Claim::ordered_qualifiers`] or `qualifiers_order`.
    pub qualifiers: HashMap<PropertyID, Vec<Snak>>,

    #[serde(rename = "qualifiers-order")]
    pub qualifiers_order: Vec<PropertyID>,

    pub references: Vec<Reference>,
}

impl Claim {
    /// Iterates qualifiers in the order the API declared them.
    pub fn ordered_qualifiers(&self) -> impl Iterator<Item = (&str, &[Snak])> {
        ordered(&self.qualifiers, &self.qualifiers_order)
    }

    /// Returns the main snak's value, if it has one.
    pub fn value(&self) -> Option<&TaggedValue> {
        self.main_snak.value()
    }
}

/// A property-value pair. `somevalue` and `novalue` snaks carry no datavalue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snak {
    /// `value`, `somevalue` or `novalue`.
    #[serde(rename = "snaktype")]
    pub snak_type: String,

    pub property: PropertyID,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    /// Property datatype (`wikibase-item`, `quantity`, `time`, ...).
    #[serde(rename = "datatype")]
    pub data_type: String,

    #[serde(rename = "datavalue", skip_serializing_if = "Option::is_none")]
    pub data_value: Option<DataValue>,
}

impl Snak {
    pub fn value(&self) -> Option<&TaggedValue> {
        self.data_value.as_ref().map(|dv| &dv.value)
    }
}

/// A typed value: the declared value type plus the decoded value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataValue {
    /// `string`, `wikibase-entityid`, `quantity`, `time`,
    /// `globecoordinate` or `monolingualtext`.
    #[serde(rename = "type")]
    pub value_type: String,

    pub value: TaggedValue,
}

/// A source backing a statement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Reference {
    pub hash: String,

    pub snaks: HashMap<PropertyID, Vec<Snak>>,

    #[serde(rename = "snaks-order")]
    pub snaks_order: Vec<PropertyID>,
}

impl Reference {
    /// Iterates snaks in the order the API declared them.
    pub fn ordered_snaks(&self) -> impl Iterator<Item = (&str, &[Snak])> {
        ordered(&self.snaks, &self.snaks_order)
    }
}

// Keys listed in `order` without a mapping entry are skipped.
fn ordered<'a>(
    map: &'a HashMap<PropertyID, Vec<Snak>>,
    order: &'a [PropertyID],
) -> impl Iterator<Item = (&'a str, &'a [Snak])> {
    order
        .iter()
        .filter_map(move |key| map.get(key).map(|snaks| (key.as_str(), snaks.as_slice())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ValueKind;

    const CLAIM: &str = r#"{
        "mainsnak": {
            "snaktype": "value",
            "property": "P69",
            "hash": "abc",
            "datavalue": {
                "value": {"entity-type": "item", "numeric-id": 691283, "id": "Q691283"},
                "type": "wikibase-entityid"
            },
            "datatype": "wikibase-item"
        },
        "type": "statement",
        "qualifiers": {
            "P582": [{"snaktype": "value", "property": "P582", "datatype": "time",
                      "datavalue": {"value": {"time": "+1974-01-01T00:00:00Z", "timezone": 0, "before": 0, "after": 0, "precision": 9, "calendarmodel": "http://www.wikidata.org/entity/Q1985727"}, "type": "time"}}],
            "P580": [{"snaktype": "somevalue", "property": "P580", "datatype": "time"}],
            "P512": [{"snaktype": "value", "property": "P512", "datatype": "wikibase-item",
                      "datavalue": {"value": {"entity-type": "item", "numeric-id": 1765120, "id": "Q1765120"}, "type": "wikibase-entityid"}}]
        },
        "qualifiers-order": ["P580", "P582", "P512", "P999"],
        "id": "Q42$0E9C4724-C954-4698-84A7-5CE0D296A6F2",
        "rank": "normal",
        "references": [{
            "hash": "ref1",
            "snaks": {
                "P854": [{"snaktype": "value", "property": "P854", "datatype": "url",
                          "datavalue": {"value": "http://example.org", "type": "string"}}],
                "P248": [{"snaktype": "value", "property": "P248", "datatype": "wikibase-item",
                          "datavalue": {"value": {"entity-type": "item", "numeric-id": 5375741, "id": "Q5375741"}, "type": "wikibase-entityid"}}]
            },
            "snaks-order": ["P248", "P854"]
        }]
    }"#;

    #[test]
    fn claim_main_value() {
        let claim: Claim = serde_json::from_str(CLAIM).unwrap();
        let value = claim.value().unwrap();
        assert_eq!(value.kind(), ValueKind::Structured);
        assert_eq!(value.as_fields().unwrap().id.as_deref(), Some("Q691283"));
        assert_eq!(claim.rank, "normal");
    }

    #[test]
    fn qualifiers_follow_declared_order() {
        let claim: Claim = serde_json::from_str(CLAIM).unwrap();
        let keys: Vec<&str> = claim.ordered_qualifiers().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["P580", "P582", "P512"]);

        let (_, start) = claim.ordered_qualifiers().next().unwrap();
        assert_eq!(start[0].snak_type, "somevalue");
        assert!(start[0].value().is_none());
    }

    #[test]
    fn reference_snaks_follow_declared_order() {
        let claim: Claim = serde_json::from_str(CLAIM).unwrap();
        let reference = &claim.references[0];
        let keys: Vec<&str> = reference.ordered_snaks().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["P248", "P854"]);
        let (_, url) = reference.ordered_snaks().nth(1).unwrap();
        assert_eq!(url[0].value().unwrap().as_str(), Some("http://example.org"));
    }

    #[test]
    fn bad_value_aborts_claim() {
        let bad = CLAIM.replace(r#""numeric-id": 691283"#, r#""numeric-id": "x""#);
        assert!(serde_json::from_str::<Claim>(&bad).is_err());
    }

    #[test]
    fn claim_label_is_optional() {
        let claim: Claim = serde_json::from_str(CLAIM).unwrap();
        assert_eq!(claim.label, None);
        let json = serde_json::to_string(&claim).unwrap();
        assert!(!json.contains("\"label\""));

        let labelled: Claim =
            serde_json::from_str(r#"{"id": "Q42$1", "label": "instance of", "rank": "normal"}"#)
                .unwrap();
        assert_eq!(labelled.label.as_deref(), Some("instance of"));
        let json = serde_json::to_string(&labelled).unwrap();
        assert!(json.contains(r#""label":"instance of""#));
    }
}
