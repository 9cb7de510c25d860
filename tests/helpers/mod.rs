#![allow(dead_code)]

use crumb::corpus::{QaEntry, RecipeEntry};
use crumb::embedding::hashed::HashedEncoder;
use crumb::engine::router::QueryRouter;
use crumb::engine::{ChatEngine, EngineOptions};

/// Trigger phrases matching the default router configuration.
pub fn default_triggers() -> Vec<String> {
    vec![
        "what can i make with".to_string(),
        "recommend a recipe".to_string(),
        "show me recipes".to_string(),
    ]
}

/// Build a Q&A entry with an explicit id, as the loader would.
pub fn qa(id: usize, question: &str, answer: &str) -> QaEntry {
    QaEntry {
        id,
        question: question.to_string(),
        answer: answer.to_string(),
    }
}

/// Build a recipe entry with an explicit id, as the loader would.
pub fn recipe(
    id: usize,
    name: &str,
    keywords: &[&str],
    season: &str,
    pantry: &[&str],
) -> RecipeEntry {
    RecipeEntry {
        id,
        name: name.to_string(),
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        season: season.to_string(),
        pantry: pantry.iter().map(|s| s.to_string()).collect(),
    }
}

/// Small fixed Q&A corpus. Questions share no tokens with the unrelated
/// queries the tests probe with.
pub fn test_qa() -> Vec<QaEntry> {
    vec![
        qa(
            0,
            "How do I proof yeast?",
            "Dissolve it in warm water with a pinch of sugar and wait for foam.",
        ),
        qa(
            1,
            "Why did my sourdough loaf turn out flat?",
            "Either the starter was sluggish or the dough overproofed.",
        ),
        qa(
            2,
            "How long should I knead bread dough?",
            "About ten minutes by hand, until it passes the windowpane test.",
        ),
    ]
}

/// Small fixed recipe corpus.
pub fn test_recipes() -> Vec<RecipeEntry> {
    vec![
        recipe(
            0,
            "Shortbread",
            &["butter", "shortbread", "crumbly"],
            "winter",
            &["flour", "sugar", "butter"],
        ),
        recipe(
            1,
            "Olive Oil Focaccia",
            &["olive", "focaccia", "bread"],
            "summer",
            &["flour", "yeast", "olive", "oil"],
        ),
        recipe(
            2,
            "Lemon Bars",
            &["lemon", "bars", "tangy"],
            "summer",
            &["flour", "sugar", "butter", "lemons"],
        ),
    ]
}

/// Engine over the fixture corpora, the hashed encoder, and default options.
pub fn test_engine() -> ChatEngine {
    ChatEngine::build(
        test_qa(),
        test_recipes(),
        Box::new(HashedEncoder::new()),
        QueryRouter::new(default_triggers()),
        EngineOptions::default(),
    )
    .unwrap()
}
