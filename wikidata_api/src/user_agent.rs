//! User-Agent header sent with every request.
//!
//! Wikimedia asks API clients to identify themselves with a descriptive
//! agent and contact information; `WIKIDATA_USER_AGENT` replaces the default.

const DEFAULT_USER_AGENT: &str = concat!(
    "wikidata-client/",
    env!("CARGO_PKG_VERSION"),
    " (https://www.wikidata.org/wiki/Wikidata:Data_access)"
);

/// Returns the User-Agent for outgoing requests.
pub fn get_user_agent() -> String {
    match std::env::var("WIKIDATA_USER_AGENT") {
        Ok(agent) if !agent.trim().is_empty() => agent.trim().to_string(),
        _ => DEFAULT_USER_AGENT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_agent_names_the_client() {
        assert!(DEFAULT_USER_AGENT.starts_with("wikidata-client/"));
        assert!(!get_user_agent().is_empty());
    }
}
