use wikidata_api::types::{
    GetClaimsResponse, GetEntitiesResponse, SearchEntitiesResponse, TaggedValue, ValueKind,
    WikipediaQueryResponse,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_entities_full() {
    let json = load_fixture("entities.json");
    let resp: GetEntitiesResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.success, 1);
    assert_eq!(resp.entities.len(), 2);

    let q42 = &resp.entities["Q42"];
    assert_eq!(q42.id, "Q42");
    assert_eq!(q42.entity_type, "item");
    assert_eq!(q42.page_id, Some(138));
    assert_eq!(q42.last_rev_id, Some(2163426212));
    assert_eq!(
        q42.modified.unwrap().to_rfc3339(),
        "2024-06-10T08:21:35+00:00"
    );
    assert_eq!(q42.label("en"), "Douglas Adams");
    assert_eq!(q42.label("xx"), "");
    assert_eq!(q42.description("en"), "English writer and humorist (1952-2001)");
    assert_eq!(q42.aliases_for("en").len(), 2);
    assert_eq!(q42.sitelink("dewiki").unwrap().badges, vec!["Q17437798"]);
    assert_eq!(
        q42.sitelink("enwiki").unwrap().url.as_deref(),
        Some("https://en.wikipedia.org/wiki/Douglas_Adams")
    );
    assert!(!q42.is_missing());
    assert!(resp.entities["Q0"].is_missing());
}

#[test]
fn deserialize_entity_value_shapes() {
    let json = load_fixture("entities.json");
    let resp: GetEntitiesResponse = serde_json::from_str(&json).unwrap();
    let q42 = &resp.entities["Q42"];

    let instance_of = q42.claims_for("P31")[0].value().unwrap();
    assert_eq!(instance_of.kind(), ValueKind::Structured);
    let fields = instance_of.as_fields().unwrap();
    assert_eq!(fields.entity_type.as_deref(), Some("item"));
    assert_eq!(fields.numeric_id, Some(5));
    assert_eq!(fields.id.as_deref(), Some("Q5"));
    assert_eq!(fields.amount, None);

    let birth = q42.claims_for("P569")[0].value().unwrap().as_fields().unwrap();
    assert_eq!(birth.time.as_deref(), Some("+1952-03-11T00:00:00Z"));
    assert_eq!(birth.before, Some(0));
    assert_eq!(birth.precision, Some(11.0));

    let height = q42.claims_for("P2048")[0].value().unwrap().as_fields().unwrap();
    assert_eq!(height.amount.as_deref(), Some("+1.96"));
    assert_eq!(height.lower_bound.as_deref(), Some("+1.95"));
    assert_eq!(height.upper_bound.as_deref(), Some("+1.97"));

    let name = q42.claims_for("P1477")[0].value().unwrap().as_fields().unwrap();
    assert_eq!(name.text.as_deref(), Some("Douglas Noël Adams"));
    assert_eq!(name.language.as_deref(), Some("en"));

    let viaf = q42.claims_for("P214")[0].value().unwrap();
    assert_eq!(viaf, &TaggedValue::String("113230702".to_string()));

    let coord = q42.claims_for("P625")[0].value().unwrap().as_fields().unwrap();
    assert_eq!(coord.latitude, Some(51.5));
    assert_eq!(coord.altitude, None);
    assert_eq!(coord.globe.as_deref(), Some("http://www.wikidata.org/entity/Q2"));
}

#[test]
fn deserialize_entity_qualifiers_and_references_in_order() {
    let json = load_fixture("entities.json");
    let resp: GetEntitiesResponse = serde_json::from_str(&json).unwrap();
    let q42 = &resp.entities["Q42"];

    let viaf = &q42.claims_for("P214")[0];
    assert_eq!(viaf.rank, "preferred");
    let order: Vec<&str> = viaf.ordered_qualifiers().map(|(p, _)| p).collect();
    assert_eq!(order, vec!["P4970", "P1810"]);
    let (_, novalue) = viaf.ordered_qualifiers().next().unwrap();
    assert_eq!(novalue[0].snak_type, "novalue");
    assert!(novalue[0].data_value.is_none());

    let birth = &q42.claims_for("P569")[0];
    let reference = &birth.references[0];
    let order: Vec<&str> = reference.ordered_snaks().map(|(p, _)| p).collect();
    assert_eq!(order, vec!["P248", "P813"]);
}

#[test]
fn deserialize_claims() {
    let json = load_fixture("claims.json");
    let resp: GetClaimsResponse = serde_json::from_str(&json).unwrap();
    let educated_at = &resp.claims["P69"];
    assert_eq!(educated_at.len(), 2);

    let first = &educated_at[0];
    assert_eq!(first.claim_type, "statement");
    assert_eq!(first.qualifiers_order, vec!["P580", "P582", "P512"]);
    let order: Vec<&str> = first.ordered_qualifiers().map(|(p, _)| p).collect();
    assert_eq!(order, first.qualifiers_order);

    let second = &educated_at[1];
    assert_eq!(second.main_snak.snak_type, "somevalue");
    assert!(second.value().is_none());
}

#[test]
fn deserialize_search() {
    let json = load_fixture("search.json");
    let resp: SearchEntitiesResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.search_info.search, "douglas adams");
    assert_eq!(resp.search_continue, Some(2));
    assert_eq!(resp.results.len(), 2);

    let top = &resp.results[0];
    assert_eq!(top.id, "Q42");
    assert_eq!(top.concept_uri, "http://www.wikidata.org/entity/Q42");
    assert_eq!(top.search_match.match_type, "label");
    assert_eq!(top.description.as_deref(), Some("English writer and humorist (1952-2001)"));

    let alias = &resp.results[1];
    assert_eq!(alias.description, None);
    assert_eq!(alias.aliases, vec!["Douglas Adams"]);
}

#[test]
fn deserialize_search_last_page() {
    let json = load_fixture("search_last.json");
    let resp: SearchEntitiesResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.search_continue, None);
    assert_eq!(resp.results.len(), 1);
}

#[test]
fn deserialize_wikipedia_pages() {
    let json = load_fixture("wikipedia.json");
    let resp: WikipediaQueryResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.query.pages.len(), 2);
    assert_eq!(
        resp.query.pages["8091"].page_props.wikibase_item.as_deref(),
        Some("Q42")
    );
    assert!(resp.query.pages["-1"].missing.is_some());
}

#[test]
fn cached_json_round_trips() {
    let json = load_fixture("entities.json");
    let resp: GetEntitiesResponse = serde_json::from_str(&json).unwrap();
    let cached = serde_json::to_string(&resp).unwrap();
    let back: GetEntitiesResponse = serde_json::from_str(&cached).unwrap();

    let before = resp.entities["Q42"].claims_for("P2048")[0].value().cloned();
    let after = back.entities["Q42"].claims_for("P2048")[0].value().cloned();
    assert_eq!(before, after);
    assert_eq!(back.entities["Q42"].modified, resp.entities["Q42"].modified);
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"{"entities": not valid json}"#;
    let result = serde_json::from_str::<GetEntitiesResponse>(bad_json);
    assert!(result.is_err());
}

#[test]
fn deserialize_bad_value_aborts_response() {
    let json = load_fixture("entities.json").replace(r#""numeric-id": 5,"#, r#""numeric-id": "five","#);
    let result = serde_json::from_str::<GetEntitiesResponse>(&json);
    assert!(result.is_err());
}
