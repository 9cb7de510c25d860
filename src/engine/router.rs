//! Intent routing — deterministic trigger-phrase dispatch.
//!
//! Intentionally a rule, not a model: a query goes to the recommendation
//! engine exactly when it contains one of the configured trigger phrases,
//! case-insensitively, and to Q&A lookup otherwise. Behavior is fully
//! predictable from the trigger list.

use std::fmt;

/// Which engine handles a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Recipe recommendation via the sparse matcher.
    Recommendation,
    /// Q&A lookup via the dense index.
    FactLookup,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Recommendation => "recommendation",
            Intent::FactLookup => "fact_lookup",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Routes queries by substring match against a fixed trigger list.
pub struct QueryRouter {
    triggers: Vec<String>,
}

impl QueryRouter {
    /// Build a router from trigger phrases.
    ///
    /// Phrases are lowercased once here so classification only lowercases the
    /// query. Blank phrases are discarded since an empty trigger would match
    /// every query.
    pub fn new(triggers: Vec<String>) -> Self {
        let triggers = triggers
            .into_iter()
            .map(|t| t.to_lowercase())
            .filter(|t| !t.trim().is_empty())
            .collect();
        Self { triggers }
    }

    /// Classify one query. Any trigger hit routes to recommendation;
    /// everything else is a fact lookup.
    pub fn classify(&self, text: &str) -> Intent {
        let text = text.to_lowercase();
        if self.triggers.iter().any(|t| text.contains(t.as_str())) {
            Intent::Recommendation
        } else {
            Intent::FactLookup
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> QueryRouter {
        QueryRouter::new(vec![
            "what can i make with".to_string(),
            "recommend a recipe".to_string(),
            "show me recipes".to_string(),
        ])
    }

    #[test]
    fn trigger_phrase_routes_to_recommendation() {
        assert_eq!(
            router().classify("what can i make with lychee?"),
            Intent::Recommendation
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            router().classify("Recommend A Recipe for fall"),
            Intent::Recommendation
        );
        assert_eq!(
            router().classify("SHOW ME RECIPES with chocolate"),
            Intent::Recommendation
        );
    }

    #[test]
    fn trigger_matches_anywhere_in_the_query() {
        assert_eq!(
            router().classify("hey there, could you show me recipes please"),
            Intent::Recommendation
        );
    }

    #[test]
    fn plain_questions_route_to_fact_lookup() {
        assert_eq!(
            router().classify("How do I proof yeast?"),
            Intent::FactLookup
        );
    }

    #[test]
    fn near_miss_phrasing_is_not_a_trigger() {
        assert_eq!(
            router().classify("what could i make with apples"),
            Intent::FactLookup
        );
    }

    #[test]
    fn empty_trigger_list_always_routes_to_fact_lookup() {
        let router = QueryRouter::new(vec![]);
        assert_eq!(
            router.classify("recommend a recipe"),
            Intent::FactLookup
        );
    }

    #[test]
    fn blank_triggers_are_discarded() {
        let router = QueryRouter::new(vec!["  ".to_string(), String::new()]);
        assert_eq!(router.classify("anything at all"), Intent::FactLookup);
    }
}
