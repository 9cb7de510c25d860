//! Sparse recommendation engine — TF-IDF vectorizer and cosine matcher.
//!
//! Each recipe contributes one bag-of-words document (keywords, season,
//! pantry). Fitting freezes a vocabulary with smoothed IDF weights; queries
//! are transformed into the same space and ranked by cosine similarity.
//! Query terms outside the vocabulary contribute nothing and never trigger a
//! refit.

use std::collections::{BTreeMap, HashMap, HashSet};

use ndarray::{Array2, ArrayView1};

use super::Hit;
use crate::corpus::RecipeEntry;

/// TF-IDF weights over a vocabulary frozen at fit time.
///
/// Tokens are lowercased word-character runs at least two characters long.
/// IDF uses the smoothed form `ln((1 + docs) / (1 + df)) + 1` and vectors are
/// L2-normalized, so the dot product of two transforms is their cosine
/// similarity.
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Learn the vocabulary and IDF weights from the given documents.
    ///
    /// Dimension indices follow sorted term order, so refitting on the same
    /// documents reproduces the same space exactly.
    pub fn fit(documents: &[String]) -> Self {
        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
        for document in documents {
            let unique: HashSet<String> = tokenize(document).into_iter().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let docs = documents.len() as f32;
        let mut vocabulary = HashMap::with_capacity(doc_freq.len());
        let mut idf = Vec::with_capacity(doc_freq.len());
        for (index, (term, df)) in doc_freq.into_iter().enumerate() {
            idf.push(((1.0 + docs) / (1.0 + df as f32)).ln() + 1.0);
            vocabulary.insert(term, index);
        }

        Self { vocabulary, idf }
    }

    /// Map text into the frozen vocabulary space, L2-normalized.
    ///
    /// Unknown terms are dropped; text with no known terms yields the zero
    /// vector, which scores 0 against every document.
    pub fn transform(&self, text: &str) -> Vec<f32> {
        let mut counts: HashMap<usize, f32> = HashMap::new();
        for token in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut vector = vec![0.0f32; self.idf.len()];
        for (index, count) in counts {
            vector[index] = count * self.idf[index];
        }
        crate::embedding::l2_normalize(&mut vector);
        vector
    }

    /// Number of terms in the frozen vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }
}

/// Cosine-similarity matcher over the fitted recipe vectors.
///
/// Fit once at startup and immutable afterwards: matching borrows `&self`
/// only, so any number of threads can query concurrently.
pub struct RecipeMatcher {
    vectorizer: TfidfVectorizer,
    vectors: Array2<f32>,
}

impl RecipeMatcher {
    /// Fit the vectorizer on the recipe corpus and store one normalized
    /// vector per recipe. Row `i` holds the vector for recipe id `i`.
    pub fn fit(recipes: &[RecipeEntry]) -> Self {
        let documents: Vec<String> = recipes.iter().map(RecipeEntry::document).collect();
        let vectorizer = TfidfVectorizer::fit(&documents);

        let dims = vectorizer.vocabulary_size();
        let mut flat = Vec::with_capacity(recipes.len() * dims);
        for document in &documents {
            flat.extend(vectorizer.transform(document));
        }
        let vectors = Array2::from_shape_vec((recipes.len(), dims), flat)
            .expect("row count and vocabulary size are consistent by construction");

        Self { vectorizer, vectors }
    }

    /// Rank every recipe against the query text.
    ///
    /// Scores at or below `min_score` are dropped, so unrelated queries fall
    /// out entirely. The rest are sorted by descending score with ties broken
    /// by ascending id, then truncated to `top_n`.
    pub fn matches(&self, text: &str, top_n: usize, min_score: f32) -> Vec<Hit> {
        if top_n == 0 || self.vectors.nrows() == 0 {
            return Vec::new();
        }

        let query = self.vectorizer.transform(text);
        let scores = self.vectors.dot(&ArrayView1::from(&query[..]));

        let mut hits: Vec<Hit> = scores
            .iter()
            .enumerate()
            .map(|(id, &score)| Hit { id, score })
            .filter(|hit| hit.score > min_score)
            .collect();
        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.id.cmp(&b.id))
        });
        hits.truncate(top_n);
        hits
    }

    /// Number of terms in the fitted vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }
}

/// Lowercased word-character runs, two characters or longer.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}
