//! Deterministic feature-hashing text encoder.
//!
//! Maps token unigrams and bigrams onto the fixed 384-dimension embedding
//! space using signed hashing, then L2-normalizes. No model files and no I/O:
//! the vector is a pure function of the input text, which makes this encoder
//! the one the test suite runs against. It is lexical rather than semantic:
//! paraphrases only score high when they share tokens.

use anyhow::Result;

use super::{l2_normalize, TextEncoder, EMBEDDING_DIM};

/// Feature-hashing encoder. Stateless; construction never fails.
#[derive(Debug, Default)]
pub struct HashedEncoder;

impl HashedEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl TextEncoder for HashedEncoder {
    fn encode(&self, text: &str) -> Result<Vec<f32>> {
        let tokens = tokenize(text);
        let mut vector = vec![0.0f32; EMBEDDING_DIM];

        for token in &tokens {
            add_feature(&mut vector, token, 1.0);
        }
        for pair in tokens.windows(2) {
            let bigram = format!("{} {}", pair[0], pair[1]);
            add_feature(&mut vector, &bigram, 0.5);
        }

        l2_normalize(&mut vector);
        Ok(vector)
    }
}

/// Spread one feature across two signed buckets. The second, half-weight
/// bucket softens hash collisions between unrelated features.
fn add_feature(vector: &mut [f32], feature: &str, weight: f32) {
    let dim = EMBEDDING_DIM as u64;
    let h1 = fnv1a(feature, 0);
    let h2 = fnv1a(feature, 1);
    vector[(h1 % dim) as usize] += weight * sign_of(h1 >> 32);
    vector[(h2 % dim) as usize] += weight * 0.5 * sign_of(h2 >> 32);
}

fn sign_of(bits: u64) -> f32 {
    if bits & 1 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// 64-bit FNV-1a over the feature bytes. The seed lets one feature address
/// several buckets independently. Defined here rather than borrowed from the
/// standard library so the hash is stable across Rust releases.
fn fnv1a(feature: &str, seed: u64) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET_BASIS ^ seed.wrapping_mul(PRIME);
    for byte in feature.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

/// Lowercased word-character runs, two characters or longer. Matches the token
/// rule of the sparse vectorizer so both engines see queries the same way.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}
