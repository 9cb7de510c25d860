//! Offline chat core for a baking blog — semantic Q&A plus recipe
//! recommendations, with no network calls at query time.
//!
//! Crumb answers free-text queries against two corpora fixed at startup,
//! picking the engine per query with a deterministic trigger-phrase router:
//!
//! | Engine | Corpus | Vectors | Gate |
//! |--------|--------|---------|------|
//! | **Dense Q&A** | question/answer pairs | all-MiniLM-L6-v2 (384 dims, unit length) | top score ≥ 0.5 |
//! | **Sparse recommender** | recipes (keywords, season, pantry) | TF-IDF over a frozen vocabulary | similarity > 0.1 |
//!
//! # Architecture
//!
//! - **Embeddings**: Local ONNX Runtime with all-MiniLM-L6-v2, or a
//!   deterministic feature-hashing encoder for model-free installs
//! - **Q&A search**: exact brute-force inner product over unit vectors
//! - **Recommendations**: cosine similarity in a TF-IDF space fitted once on
//!   the recipe corpus; out-of-vocabulary query terms are ignored
//! - **Routing**: case-insensitive substring triggers, configurable in TOML
//!
//! Everything is built once by [`engine::ChatEngine::build`] and immutable
//! afterwards; queries take `&self`, so concurrent reads need no locks.
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`corpus`] — Corpus entry types and strict JSON loaders
//! - [`embedding`] — Text-to-vector encoding pipeline
//! - [`engine`] — Dense index, sparse matcher, intent router, and the facade
//! - [`error`] — Typed fatal startup errors

pub mod config;
pub mod corpus;
pub mod embedding;
pub mod engine;
pub mod error;
