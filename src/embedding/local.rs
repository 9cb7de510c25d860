//! Local ONNX Runtime text encoder.
//!
//! Implements [`TextEncoder`] using the all-MiniLM-L6-v2 model via `ort`.
//! Handles tokenization, inference, attention-masked mean pooling, and L2
//! normalization. The model weights are frozen; the same text always encodes
//! to the same vector.

use std::sync::Mutex;

use anyhow::{Context, Result};
use ort::session::Session;
use ort::value::Tensor;
use tokenizers::Tokenizer;

use super::{l2_normalize, TextEncoder, EMBEDDING_DIM};
use crate::config::EmbeddingConfig;

/// Maximum sequence length for all-MiniLM-L6-v2 (trained at 256).
const MAX_SEQ_LEN: usize = 256;

/// ONNX-based encoder using all-MiniLM-L6-v2.
pub struct LocalEncoder {
    session: Mutex<Session>,
    tokenizer: Tokenizer,
}

// Safety: Tokenizer is Send+Sync. Session is behind a Mutex.
// The Mutex guarantees exclusive access during run().
unsafe impl Send for LocalEncoder {}
unsafe impl Sync for LocalEncoder {}

impl LocalEncoder {
    pub fn new(config: &EmbeddingConfig) -> Result<Self> {
        let cache_dir = crate::config::expand_tilde(&config.cache_dir);
        let model_path = cache_dir.join("model.onnx");
        let tokenizer_path = cache_dir.join("tokenizer.json");

        anyhow::ensure!(
            model_path.exists(),
            "ONNX model not found at {}. Run `crumb model download` first.",
            model_path.display()
        );
        anyhow::ensure!(
            tokenizer_path.exists(),
            "Tokenizer not found at {}. Run `crumb model download` first.",
            tokenizer_path.display()
        );

        let session = Session::builder()?
            .with_optimization_level(ort::session::builder::GraphOptimizationLevel::Level3)?
            .with_intra_threads(4)?
            .commit_from_file(&model_path)
            .context("failed to load ONNX model")?;

        tracing::info!(model = %model_path.display(), "ONNX model loaded");

        let mut tokenizer = Tokenizer::from_file(&tokenizer_path)
            .map_err(|e| anyhow::anyhow!("failed to load tokenizer: {e}"))?;

        tokenizer
            .with_truncation(Some(tokenizers::TruncationParams {
                max_length: MAX_SEQ_LEN,
                ..Default::default()
            }))
            .map_err(|e| anyhow::anyhow!("failed to set truncation: {e}"))?;

        tokenizer.with_padding(Some(tokenizers::PaddingParams {
            strategy: tokenizers::PaddingStrategy::BatchLongest,
            ..Default::default()
        }));

        tracing::info!(tokenizer = %tokenizer_path.display(), "tokenizer loaded");

        Ok(Self {
            session: Mutex::new(session),
            tokenizer,
        })
    }
}

impl TextEncoder for LocalEncoder {
    fn encode(&self, text: &str) -> Result<Vec<f32>> {
        let results = self.encode_batch(&[text])?;
        Ok(results.into_iter().next().expect("batch had one input"))
    }

    fn encode_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        // 1. Tokenize with batch-longest padding
        let encodings = self
            .tokenizer
            .encode_batch(texts.to_vec(), true)
            .map_err(|e| anyhow::anyhow!("tokenization failed: {e}"))?;

        let batch_size = encodings.len();
        let seq_len = encodings[0].get_ids().len();

        // 2. Assemble flat i64 input tensors
        let mut input_ids = Vec::with_capacity(batch_size * seq_len);
        let mut attention_mask = Vec::with_capacity(batch_size * seq_len);
        for encoding in &encodings {
            input_ids.extend(encoding.get_ids().iter().map(|&id| id as i64));
            attention_mask.extend(encoding.get_attention_mask().iter().map(|&m| m as i64));
        }

        let shape = vec![batch_size as i64, seq_len as i64];
        let input_ids_tensor = Tensor::from_array((shape.clone(), input_ids.into_boxed_slice()))?;
        let attention_tensor =
            Tensor::from_array((shape.clone(), attention_mask.clone().into_boxed_slice()))?;
        // token_type_ids: all zeros (single sentence, no segment B)
        let token_type_ids = vec![0i64; batch_size * seq_len];
        let token_type_tensor = Tensor::from_array((shape, token_type_ids.into_boxed_slice()))?;

        // 3. Run inference under the session lock
        let mut session = self
            .session
            .lock()
            .map_err(|e| anyhow::anyhow!("session lock poisoned: {e}"))?;

        let outputs = session.run(ort::inputs! {
            "input_ids" => input_ids_tensor,
            "attention_mask" => attention_tensor,
            "token_type_ids" => token_type_tensor,
        })?;

        // 4. Extract token embeddings — shape [batch, seq_len, 384].
        // The output name varies by ONNX export. Try common names, fall back to index 0.
        let token_emb_value = outputs
            .get("token_embeddings")
            .or_else(|| outputs.get("last_hidden_state"))
            .unwrap_or_else(|| &outputs[0]);

        let (out_shape, data) = token_emb_value
            .try_extract_tensor::<f32>()
            .context("failed to extract token_embeddings tensor")?;

        let dims: &[i64] = &out_shape;
        anyhow::ensure!(
            dims.len() == 3 && dims[2] == EMBEDDING_DIM as i64,
            "unexpected token_embeddings shape: {dims:?}, expected [batch, seq, {EMBEDDING_DIM}]"
        );
        let actual_seq_len = dims[1] as usize;

        // 5. Mean-pool each sequence and normalize to unit length
        let mut results = Vec::with_capacity(batch_size);
        for b in 0..batch_size {
            let masks = &attention_mask[b * seq_len..(b + 1) * seq_len];
            let mut pooled = mean_pool(data, b, actual_seq_len, masks);
            l2_normalize(&mut pooled);
            results.push(pooled);
        }

        Ok(results)
    }
}

/// Average the token embeddings of one sequence, weighted by attention mask.
fn mean_pool(data: &[f32], batch_index: usize, seq_len: usize, masks: &[i64]) -> Vec<f32> {
    let mut sum = vec![0.0f32; EMBEDDING_DIM];
    let mut count = 0.0f32;

    for (s, &mask) in masks.iter().take(seq_len).enumerate() {
        if mask > 0 {
            let offset = (batch_index * seq_len + s) * EMBEDDING_DIM;
            for (d, value) in sum.iter_mut().enumerate() {
                *value += data[offset + d];
            }
            count += 1.0;
        }
    }

    if count > 0.0 {
        for value in sum.iter_mut() {
            *value /= count;
        }
    }
    sum
}
