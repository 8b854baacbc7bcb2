//! Validation of user input before it is turned into API parameters.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::WikidataError;

pub const MAX_SEARCH_LENGTH: usize = 250;
/// `wbgetentities` accepts at most 50 IDs or titles per request.
pub const MAX_IDS_PER_REQUEST: usize = 50;
pub const MAX_SEARCH_LIMIT: u32 = 50;

fn entity_id_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:[QPM][1-9][0-9]*|L[1-9][0-9]*(?:-[FS][1-9][0-9]*)?)$")
            .expect("entity id pattern is valid")
    })
}

fn language_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-z]{2,3}(?:-[a-z0-9]{1,8})*$").expect("language pattern is valid")
    })
}

fn site_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z_]{2,}$").expect("site pattern is valid"))
}

/// Strip ASCII control characters (except space), trim whitespace, and
/// enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, WikidataError> {
    if input.len() > max_len {
        return Err(WikidataError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(WikidataError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a search string: enforce length, strip control chars, trim.
pub fn validate_search(input: &str) -> Result<String, WikidataError> {
    sanitize_text(input, MAX_SEARCH_LENGTH)
}

/// Validate an entity ID (`Q42`, `P31`, `L7`, `L7-F1`, `M12`), uppercasing
/// the prefix letters.
pub fn validate_entity_id(input: &str) -> Result<String, WikidataError> {
    let id = input.trim().to_uppercase();
    if entity_id_re().is_match(&id) {
        Ok(id)
    } else {
        Err(WikidataError::InvalidInput(format!(
            "invalid entity ID '{}'. Expected e.g. Q42, P31, L7 or L7-F1",
            input
        )))
    }
}

/// Validate a property ID (`P31`).
pub fn validate_property_id(input: &str) -> Result<String, WikidataError> {
    let id = validate_entity_id(input)?;
    if id.starts_with('P') {
        Ok(id)
    } else {
        Err(WikidataError::InvalidInput(format!(
            "invalid property ID '{}'. Expected e.g. P31",
            input
        )))
    }
}

/// Validate a language code (`en`, `pt-br`, `zh-hant`), lowercasing it.
pub fn validate_language(input: &str) -> Result<String, WikidataError> {
    let lang = input.trim().to_lowercase();
    if language_re().is_match(&lang) {
        Ok(lang)
    } else {
        Err(WikidataError::InvalidInput(format!(
            "invalid language code '{}'. Expected e.g. en, de, pt-br",
            input
        )))
    }
}

/// Validate a site ID (`enwiki`, `dewikiquote`, `commonswiki`).
pub fn validate_site(input: &str) -> Result<String, WikidataError> {
    let site = input.trim().to_lowercase();
    if site_re().is_match(&site) {
        Ok(site)
    } else {
        Err(WikidataError::InvalidInput(format!(
            "invalid site ID '{}'. Expected e.g. enwiki",
            input
        )))
    }
}

/// Validate a search result limit (1-50).
pub fn validate_limit(limit: u32) -> Result<u32, WikidataError> {
    if (1..=MAX_SEARCH_LIMIT).contains(&limit) {
        Ok(limit)
    } else {
        Err(WikidataError::InvalidInput(format!(
            "limit must be between 1 and {}, got {}",
            MAX_SEARCH_LIMIT, limit
        )))
    }
}

/// Split a comma-separated ID list, validating each ID, dropping duplicates
/// while keeping their first position, and enforcing the per-request limit.
pub fn parse_id_list(input: &str) -> Result<Vec<String>, WikidataError> {
    let mut ids: Vec<String> = Vec::new();
    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let id = validate_entity_id(part)?;
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    if ids.is_empty() {
        return Err(WikidataError::InvalidInput(
            "no entity IDs given".to_string(),
        ));
    }
    if ids.len() > MAX_IDS_PER_REQUEST {
        return Err(WikidataError::InvalidInput(format!(
            "at most {} IDs per request, got {}",
            MAX_IDS_PER_REQUEST,
            ids.len()
        )));
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_ids() {
        assert_eq!(validate_entity_id("q42").unwrap(), "Q42");
        assert_eq!(validate_entity_id(" P31 ").unwrap(), "P31");
        assert_eq!(validate_entity_id("L7-F1").unwrap(), "L7-F1");
        assert_eq!(validate_entity_id("M12").unwrap(), "M12");
        assert!(validate_entity_id("Q").is_err());
        assert!(validate_entity_id("Q042").is_err());
        assert!(validate_entity_id("X42").is_err());
        assert!(validate_entity_id("Q42; drop").is_err());
    }

    #[test]
    fn property_ids() {
        assert_eq!(validate_property_id("p569").unwrap(), "P569");
        assert!(validate_property_id("Q5").is_err());
    }

    #[test]
    fn languages() {
        assert_eq!(validate_language("EN").unwrap(), "en");
        assert_eq!(validate_language("pt-br").unwrap(), "pt-br");
        assert_eq!(validate_language("zh-hant").unwrap(), "zh-hant");
        assert!(validate_language("e").is_err());
        assert!(validate_language("en_GB").is_err());
    }

    #[test]
    fn sites() {
        assert_eq!(validate_site("enwiki").unwrap(), "enwiki");
        assert_eq!(validate_site("be_x_oldwiki").unwrap(), "be_x_oldwiki");
        assert!(validate_site("en wiki").is_err());
    }

    #[test]
    fn limits() {
        assert_eq!(validate_limit(7).unwrap(), 7);
        assert!(validate_limit(0).is_err());
        assert!(validate_limit(51).is_err());
    }

    #[test]
    fn search_is_sanitized() {
        assert_eq!(validate_search("  douglas\tadams ").unwrap(), "douglasadams");
        assert!(validate_search("\n\t").is_err());
        assert!(validate_search(&"x".repeat(MAX_SEARCH_LENGTH + 1)).is_err());
    }

    #[test]
    fn id_lists() {
        assert_eq!(
            parse_id_list("Q42, q1,Q42,,P31").unwrap(),
            vec!["Q42", "Q1", "P31"]
        );
        assert!(parse_id_list(" , ").is_err());
        assert!(parse_id_list("Q42,bogus").is_err());
        let too_many = (1..=51).map(|i| format!("Q{}", i)).collect::<Vec<_>>().join(",");
        assert!(parse_id_list(&too_many).is_err());
    }
}
