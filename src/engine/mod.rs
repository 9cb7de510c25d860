//! The query-matching core: dense Q&A index, sparse recipe matcher, and
//! intent router behind one immutable facade.
//!
//! [`ChatEngine::build`] runs the whole startup flow (encode every corpus
//! question, fit the TF-IDF matcher) and the result never changes afterwards.
//! Every query method borrows `&self`, so one engine instance can serve any
//! number of concurrent callers without locks.

pub mod dense;
pub mod router;
pub mod sparse;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::CrumbConfig;
use crate::corpus::{self, QaEntry, RecipeEntry};
use crate::embedding::{self, TextEncoder};
use dense::DenseIndex;
use router::{Intent, QueryRouter};
use sparse::RecipeMatcher;

// ── Public types ──────────────────────────────────────────────────────────────

/// A ranked match: the entry's id and its similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hit {
    pub id: usize,
    pub score: f32,
}

/// An answer from the Q&A engine.
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub id: usize,
    /// The corpus question the query matched against.
    pub question: String,
    pub answer: String,
    pub score: f32,
}

/// A recommended recipe.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub id: usize,
    pub name: String,
    pub score: f32,
}

/// Engine reply for one query.
///
/// No-match and empty-input conditions are values, not errors: the serving
/// loop never aborts because a query scored low.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Whitespace-only input, short-circuited before routing.
    EmptyQuery,
    /// Fact lookup that cleared the confidence gate.
    Answer(Answer),
    /// Recommendations above the similarity floor, best first. Never empty.
    Recommendations(Vec<Recommendation>),
    /// The routed engine found nothing above its threshold.
    NoMatch(Intent),
}

/// Engine tuning knobs. Mirrors the `[retrieval]` config section.
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Q&A candidates to consider per query.
    pub qa_top_k: usize,
    /// Confidence gate for Q&A answers (inclusive).
    pub qa_min_score: f32,
    /// Maximum recommendations per query.
    pub recipe_top_n: usize,
    /// Similarity floor for recommendations (exclusive).
    pub recipe_min_score: f32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            qa_top_k: 1,
            qa_min_score: 0.5,
            recipe_top_n: 3,
            recipe_min_score: 0.1,
        }
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// The dual-engine chat core. Built once at startup; read-only afterwards.
pub struct ChatEngine {
    qa: Vec<QaEntry>,
    recipes: Vec<RecipeEntry>,
    encoder: Box<dyn TextEncoder>,
    index: DenseIndex,
    matcher: RecipeMatcher,
    router: QueryRouter,
    options: EngineOptions,
}

impl ChatEngine {
    /// Build the engine from loaded corpora and an encoder.
    ///
    /// Encoding failure is fatal: the process must not start serving with a
    /// partial index.
    pub fn build(
        qa: Vec<QaEntry>,
        recipes: Vec<RecipeEntry>,
        encoder: Box<dyn TextEncoder>,
        router: QueryRouter,
        options: EngineOptions,
    ) -> Result<Self> {
        // Results carry entry ids, and lookup maps them back through vector
        // row order. Both only work if ids equal positions.
        anyhow::ensure!(
            qa.iter().enumerate().all(|(i, e)| e.id == i),
            "Q&A corpus ids must equal their position"
        );
        anyhow::ensure!(
            recipes.iter().enumerate().all(|(i, e)| e.id == i),
            "recipe corpus ids must equal their position"
        );

        let index =
            DenseIndex::build(encoder.as_ref(), &qa).context("failed to build dense Q&A index")?;
        let matcher = RecipeMatcher::fit(&recipes);

        info!(
            qa = qa.len(),
            recipes = recipes.len(),
            vocabulary = matcher.vocabulary_size(),
            "engine built"
        );

        Ok(Self {
            qa,
            recipes,
            encoder,
            index,
            matcher,
            router,
            options,
        })
    }

    /// Startup path: load corpora, create the encoder, build everything.
    pub fn from_config(config: &CrumbConfig) -> Result<Self> {
        let qa = corpus::load_qa(config.resolved_qa_path())?;
        let recipes = corpus::load_recipes(config.resolved_recipe_path())?;
        let encoder = embedding::create_encoder(&config.embedding)?;
        let router = QueryRouter::new(config.router.recommend_triggers.clone());
        let options = EngineOptions {
            qa_top_k: config.retrieval.qa_top_k,
            qa_min_score: config.retrieval.qa_min_score,
            recipe_top_n: config.retrieval.recipe_top_n,
            recipe_min_score: config.retrieval.recipe_min_score,
        };
        Self::build(qa, recipes, encoder, router, options)
    }

    /// Answer one query: short-circuit blank input, route, dispatch, gate.
    pub fn respond(&self, text: &str) -> Result<Reply> {
        if text.trim().is_empty() {
            return Ok(Reply::EmptyQuery);
        }

        let intent = self.router.classify(text);
        debug!(intent = %intent, "routed query");

        match intent {
            Intent::Recommendation => {
                let recs = self.recommend(text, self.options.recipe_top_n);
                if recs.is_empty() {
                    Ok(Reply::NoMatch(Intent::Recommendation))
                } else {
                    Ok(Reply::Recommendations(recs))
                }
            }
            Intent::FactLookup => match self.answer(text)? {
                Some(answer) => Ok(Reply::Answer(answer)),
                None => Ok(Reply::NoMatch(Intent::FactLookup)),
            },
        }
    }

    /// Dense path: the nearest corpus question at or above the confidence
    /// gate, or `None`.
    pub fn answer(&self, text: &str) -> Result<Option<Answer>> {
        let vector = self.encoder.encode(text)?;
        let hits = self
            .index
            .query(&vector, self.options.qa_top_k, self.options.qa_min_score);
        Ok(hits.first().map(|hit| {
            let entry = &self.qa[hit.id];
            Answer {
                id: entry.id,
                question: entry.question.clone(),
                answer: entry.answer.clone(),
                score: hit.score,
            }
        }))
    }

    /// Sparse path: up to `top_n` recipes above the similarity floor, best
    /// first. An empty result means nothing scored high enough.
    pub fn recommend(&self, text: &str, top_n: usize) -> Vec<Recommendation> {
        self.matcher
            .matches(text, top_n, self.options.recipe_min_score)
            .into_iter()
            .map(|hit| {
                let entry = &self.recipes[hit.id];
                Recommendation {
                    id: entry.id,
                    name: entry.name.clone(),
                    score: hit.score,
                }
            })
            .collect()
    }
}
