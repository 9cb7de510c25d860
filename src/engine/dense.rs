//! Dense Q&A index — inner-product nearest neighbor over unit vectors.
//!
//! Every corpus question is encoded once into an L2-normalized row of an
//! `(entries × EMBEDDING_DIM)` matrix, so cosine similarity against a unit
//! query vector is a single matrix-vector product. Brute force is exact and
//! plenty fast at corpus sizes measured in hundreds of entries.

use anyhow::Result;
use ndarray::{Array2, ArrayView1};

use super::Hit;
use crate::corpus::QaEntry;
use crate::embedding::{TextEncoder, EMBEDDING_DIM};

/// Immutable dense index over the Q&A corpus. Row `i` holds the vector for
/// entry id `i`.
pub struct DenseIndex {
    vectors: Array2<f32>,
}

impl DenseIndex {
    /// Encode every question and assemble the score matrix.
    ///
    /// Encoder failure here is fatal to startup: the index is built exactly
    /// once and never patched afterwards.
    pub fn build(encoder: &dyn TextEncoder, entries: &[QaEntry]) -> Result<Self> {
        let questions: Vec<&str> = entries.iter().map(|e| e.question.as_str()).collect();
        let encoded = encoder.encode_batch(&questions)?;
        anyhow::ensure!(
            encoded.len() == entries.len(),
            "encoder returned {} vectors for {} questions",
            encoded.len(),
            entries.len()
        );

        let mut flat = Vec::with_capacity(entries.len() * EMBEDDING_DIM);
        for vector in &encoded {
            anyhow::ensure!(
                vector.len() == EMBEDDING_DIM,
                "encoder produced {} dimensions, expected {EMBEDDING_DIM}",
                vector.len()
            );
            flat.extend_from_slice(vector);
        }
        let vectors = Array2::from_shape_vec((entries.len(), EMBEDDING_DIM), flat)?;

        Ok(Self { vectors })
    }

    /// Top-k entries by inner product, gated by `min_score`.
    ///
    /// Hits below the gate are dropped; an empty result is the no-match
    /// signal. Survivors are sorted by descending score with ties broken by
    /// ascending id, then truncated to `k`. The gate is inclusive: a score
    /// exactly at `min_score` is kept.
    pub fn query(&self, vector: &[f32], k: usize, min_score: f32) -> Vec<Hit> {
        if k == 0 || self.vectors.nrows() == 0 {
            return Vec::new();
        }
        debug_assert_eq!(vector.len(), EMBEDDING_DIM);

        let scores = self.vectors.dot(&ArrayView1::from(vector));

        let mut hits: Vec<Hit> = scores
            .iter()
            .enumerate()
            .map(|(id, &score)| Hit { id, score })
            .filter(|hit| hit.score >= min_score)
            .collect();
        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.id.cmp(&b.id))
        });
        hits.truncate(k);
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::hashed::HashedEncoder;

    /// Encoder with hand-picked unit vectors, for exact score control.
    struct SpikeEncoder;

    impl TextEncoder for SpikeEncoder {
        fn encode(&self, text: &str) -> Result<Vec<f32>> {
            let mut v = vec![0.0f32; EMBEDDING_DIM];
            match text {
                "alpha" => v[0] = 1.0,
                "beta" => v[1] = 1.0,
                "mixed" => {
                    v[0] = 0.6;
                    v[1] = 0.8;
                }
                _ => {}
            }
            Ok(v)
        }
    }

    fn qa(id: usize, question: &str) -> QaEntry {
        QaEntry {
            id,
            question: question.to_string(),
            answer: format!("answer to {question}"),
        }
    }

    #[test]
    fn query_ranks_by_inner_product() {
        let index = DenseIndex::build(&SpikeEncoder, &[qa(0, "alpha"), qa(1, "beta")]).unwrap();
        let query = SpikeEncoder.encode("mixed").unwrap();
        let hits = index.query(&query, 2, 0.0);
        assert_eq!(hits.len(), 2);
        // beta scores 0.8, alpha 0.6
        assert_eq!(hits[0].id, 1);
        assert_eq!(hits[1].id, 0);
        assert!((hits[0].score - 0.8).abs() < 1e-6);
        assert!((hits[1].score - 0.6).abs() < 1e-6);
    }

    #[test]
    fn gate_is_inclusive_at_the_boundary() {
        let index = DenseIndex::build(&SpikeEncoder, &[qa(0, "alpha"), qa(1, "beta")]).unwrap();
        let query = SpikeEncoder.encode("mixed").unwrap();

        let hits = index.query(&query, 2, 0.6);
        assert_eq!(hits.len(), 2, "a score exactly at the gate must survive");

        let hits = index.query(&query, 2, 0.61);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn below_gate_hits_vanish_entirely() {
        let index = DenseIndex::build(&SpikeEncoder, &[qa(0, "alpha")]).unwrap();
        let query = SpikeEncoder.encode("beta").unwrap();
        // alpha and beta are orthogonal: score 0 < 0.5
        assert!(index.query(&query, 1, 0.5).is_empty());
    }

    #[test]
    fn k_truncates_after_sorting() {
        let index = DenseIndex::build(&SpikeEncoder, &[qa(0, "alpha"), qa(1, "beta")]).unwrap();
        let query = SpikeEncoder.encode("mixed").unwrap();
        let hits = index.query(&query, 1, 0.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1, "the single survivor must be the best hit");
    }

    #[test]
    fn zero_k_returns_nothing() {
        let index = DenseIndex::build(&SpikeEncoder, &[qa(0, "alpha")]).unwrap();
        let query = SpikeEncoder.encode("alpha").unwrap();
        assert!(index.query(&query, 0, 0.0).is_empty());
    }

    #[test]
    fn equal_scores_order_by_ascending_id() {
        // Duplicate questions encode to identical rows, so the scores tie
        // exactly and the id decides.
        let encoder = HashedEncoder::new();
        let entries = vec![qa(0, "how do I proof yeast"), qa(1, "how do I proof yeast")];
        let index = DenseIndex::build(&encoder, &entries).unwrap();
        let query = encoder.encode("how do I proof yeast").unwrap();
        let hits = index.query(&query, 2, 0.5);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, 0);
        assert_eq!(hits[1].id, 1);
        assert_eq!(hits[0].score.to_bits(), hits[1].score.to_bits());
    }

    #[test]
    fn exact_question_scores_one() {
        let encoder = HashedEncoder::new();
        let entries = vec![qa(0, "How do I proof yeast?"), qa(1, "Why is my crust pale?")];
        let index = DenseIndex::build(&encoder, &entries).unwrap();
        let query = encoder.encode("How do I proof yeast?").unwrap();
        let hits = index.query(&query, 1, 0.5);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 0);
        assert!(hits[0].score > 0.99);
    }

    #[test]
    fn empty_index_returns_nothing() {
        let index = DenseIndex::build(&SpikeEncoder, &[]).unwrap();
        let query = SpikeEncoder.encode("alpha").unwrap();
        assert!(index.query(&query, 3, 0.0).is_empty());
    }
}
