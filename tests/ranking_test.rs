mod helpers;

use helpers::{test_engine, test_recipes};
use crumb::engine::sparse::RecipeMatcher;
use crumb::engine::Reply;

#[test]
fn rebuilding_the_engine_reproduces_identical_replies() {
    let first = test_engine();
    let second = test_engine();

    let queries = [
        "How do I proof yeast?",
        "Why did my sourdough loaf turn out flat?",
        "what can i make with flour and sugar?",
        "show me recipes with lemons",
    ];

    for query in queries {
        match (first.respond(query).unwrap(), second.respond(query).unwrap()) {
            (Reply::Answer(a), Reply::Answer(b)) => {
                assert_eq!(a.id, b.id, "query: {query}");
                assert_eq!(a.score.to_bits(), b.score.to_bits(), "query: {query}");
            }
            (Reply::Recommendations(a), Reply::Recommendations(b)) => {
                assert_eq!(a.len(), b.len(), "query: {query}");
                for (x, y) in a.iter().zip(&b) {
                    assert_eq!(x.id, y.id, "query: {query}");
                    assert_eq!(x.score.to_bits(), y.score.to_bits(), "query: {query}");
                }
            }
            (a, b) => panic!("reply variants diverged for {query}: {a:?} vs {b:?}"),
        }
    }
}

#[test]
fn repeating_a_query_yields_identical_scores() {
    let engine = test_engine();
    let first = engine.answer("How do I proof yeast?").unwrap().unwrap();
    let second = engine.answer("How do I proof yeast?").unwrap().unwrap();
    assert_eq!(first.id, second.id);
    assert_eq!(first.score.to_bits(), second.score.to_bits());
}

#[test]
fn answer_scores_stay_within_cosine_bounds() {
    let engine = test_engine();
    let answer = engine.answer("How do I proof yeast?").unwrap().unwrap();
    assert!(answer.score <= 1.0001, "cosine must not exceed 1, got {}", answer.score);
    assert!(answer.score >= 0.5, "gated answers sit at or above the gate");
}

#[test]
fn recommendation_scores_descend_and_clear_the_floor() {
    let engine = test_engine();
    let recs = engine.recommend("flour sugar butter lemons", 3);
    assert!(!recs.is_empty());
    for rec in &recs {
        assert!(rec.score > 0.1);
        assert!(rec.score <= 1.0001);
    }
    for pair in recs.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn unknown_query_terms_never_grow_the_vocabulary() {
    let matcher = RecipeMatcher::fit(&test_recipes());
    let size = matcher.vocabulary_size();

    for _ in 0..10 {
        assert!(matcher.matches("xylophone zeppelin quark", 3, 0.1).is_empty());
    }
    assert_eq!(matcher.vocabulary_size(), size);

    // In-vocabulary queries still work after the out-of-vocabulary burst.
    let hits = matcher.matches("butter shortbread", 3, 0.1);
    assert!(!hits.is_empty());
    assert_eq!(hits[0].id, 0);
}

#[test]
fn refit_on_the_same_corpus_reproduces_the_same_space() {
    let first = RecipeMatcher::fit(&test_recipes());
    let second = RecipeMatcher::fit(&test_recipes());
    assert_eq!(first.vocabulary_size(), second.vocabulary_size());

    let a = first.matches("flour sugar", 3, 0.0);
    let b = second.matches("flour sugar", 3, 0.0);
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.id, y.id);
        assert_eq!(x.score.to_bits(), y.score.to_bits());
    }
}
