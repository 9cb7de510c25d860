//! Text-to-vector embedding pipeline.
//!
//! Provides the [`TextEncoder`] trait and two implementations: [`local`]
//! (all-MiniLM-L6-v2 via ONNX Runtime, 384 dimensions, L2-normalized) and
//! [`hashed`] (deterministic feature hashing into the same space, no model
//! files required). The encoder is created via [`create_encoder`] from
//! configuration and stays fixed for the lifetime of the process.

pub mod hashed;
pub mod local;

use anyhow::Result;

/// Number of dimensions in the embedding vectors (all-MiniLM-L6-v2).
pub const EMBEDDING_DIM: usize = 384;

/// Trait for encoding text into vectors.
///
/// Implementations produce L2-normalized vectors of exactly [`EMBEDDING_DIM`]
/// dimensions, so the inner product of two encodings is their cosine
/// similarity. Encoding the same text twice must produce the same vector;
/// nothing in the pipeline learns from queries.
pub trait TextEncoder: Send + Sync {
    /// Encode a single text string into a unit-length vector.
    fn encode(&self, text: &str) -> Result<Vec<f32>>;

    /// Encode a batch of text strings. Implementations may override for
    /// batched inference.
    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.encode(t)).collect()
    }

    /// Return the number of dimensions this encoder produces.
    fn dimensions(&self) -> usize {
        EMBEDDING_DIM
    }
}

/// Create a text encoder from config.
///
/// `"local"` is the ONNX Runtime + all-MiniLM-L6-v2 encoder and needs model
/// files on disk — run `crumb model download` first. `"hashed"` works with no
/// model files and is useful for tests and model-free installs.
pub fn create_encoder(config: &crate::config::EmbeddingConfig) -> Result<Box<dyn TextEncoder>> {
    match config.provider.as_str() {
        "local" => {
            let encoder = local::LocalEncoder::new(config)?;
            Ok(Box::new(encoder))
        }
        "hashed" => Ok(Box::new(hashed::HashedEncoder::new())),
        other => anyhow::bail!("unknown embedding provider: {other}. Supported: local, hashed"),
    }
}

/// L2-normalize a vector in place. A zero vector is left untouched.
pub(crate) fn l2_normalize(v: &mut [f32]) {
    let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in v.iter_mut() {
            *x /= norm;
        }
    }
}
