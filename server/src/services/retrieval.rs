//! Retrieval — FAQ index with embedding-based top-K context lookup.
//!
//! DESIGN
//! ======
//! FAQ entries load from a YAML file at startup and are embedded once
//! through the embeddings API (`question + " " + answer` per entry).
//! Queries embed on demand and rank entries by cosine similarity; the
//! top-K answers become the contexts handed to answer generation.

use std::path::Path;

use serde::Deserialize;

use crate::llm::embeddings::EmbedText;
use crate::llm::types::LlmError;

/// Contexts returned per query unless the caller overrides.
pub const DEFAULT_TOP_K: usize = 3;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("FAQ file read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("FAQ parse failed: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("embedding failed: {0}")]
    Embedding(#[from] LlmError),

    #[error("embedding count mismatch: expected {expected}, got {got}")]
    EmbeddingCount { expected: usize, got: usize },
}

/// One FAQ entry from the data file.
#[derive(Debug, Clone, Deserialize)]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
}

// =============================================================================
// LOADING
// =============================================================================

/// Load FAQ entries from a YAML file.
///
/// # Errors
///
/// Returns an error when the file cannot be read or parsed.
pub fn load_faq(path: &Path) -> Result<Vec<FaqEntry>, RetrievalError> {
    let raw = std::fs::read_to_string(path)?;
    parse_faq(&raw)
}

/// Parse FAQ entries from YAML text.
///
/// # Errors
///
/// Returns an error when the text is not a YAML list of entries.
pub fn parse_faq(raw: &str) -> Result<Vec<FaqEntry>, RetrievalError> {
    Ok(serde_yaml::from_str(raw)?)
}

// =============================================================================
// INDEX
// =============================================================================

/// In-memory FAQ index: entries plus their precomputed embeddings.
#[derive(Debug)]
pub struct FaqIndex {
    entries: Vec<FaqEntry>,
    embeddings: Vec<Vec<f32>>,
}

impl FaqIndex {
    /// Embed all entries in one batched call and build the index.
    ///
    /// # Errors
    ///
    /// Returns an error when embedding fails or the provider returns a
    /// different number of vectors than entries.
    pub async fn build(embedder: &dyn EmbedText, entries: Vec<FaqEntry>) -> Result<Self, RetrievalError> {
        let texts: Vec<String> = entries
            .iter()
            .map(|e| format!("{} {}", e.question, e.answer))
            .collect();
        let embeddings = embedder.embed(&texts).await?;
        if embeddings.len() != entries.len() {
            return Err(RetrievalError::EmbeddingCount { expected: entries.len(), got: embeddings.len() });
        }
        Ok(Self { entries, embeddings })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top-K FAQ answers for the query, most similar first.
    ///
    /// Blank queries return no contexts without an embeddings call.
    ///
    /// # Errors
    ///
    /// Returns an error when the query embedding fails.
    pub async fn retrieve(
        &self,
        embedder: &dyn EmbedText,
        query: &str,
        top_k: usize,
    ) -> Result<Vec<String>, RetrievalError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        let mut vectors = embedder.embed(&[query.to_owned()]).await?;
        let Some(query_vector) = vectors.pop() else {
            return Err(RetrievalError::EmbeddingCount { expected: 1, got: 0 });
        };
        Ok(self.rank(&query_vector, top_k))
    }

    fn rank(&self, query: &[f32], top_k: usize) -> Vec<String> {
        let mut scored: Vec<(f32, &FaqEntry)> = self
            .embeddings
            .iter()
            .zip(&self.entries)
            .map(|(vector, entry)| (cosine_similarity(query, vector), entry))
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .take(top_k)
            .map(|(_, entry)| entry.answer.clone())
            .collect()
    }
}

// =============================================================================
// SIMILARITY
// =============================================================================

/// Cosine similarity of two vectors; 0.0 when either has zero norm or
/// the lengths differ.
pub(crate) fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

#[cfg(test)]
#[path = "retrieval_test.rs"]
mod tests;
