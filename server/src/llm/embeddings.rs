//! OpenAI-compatible embeddings client for retrieval.
//!
//! One batched `POST /v1/embeddings` call embeds the whole FAQ at
//! startup; queries embed one at a time. The `EmbedText` trait keeps the
//! retrieval index mockable in tests.

use std::time::Duration;

use serde_json::Value;

use super::config::{EmbeddingsConfig, LlmTimeouts};
use super::types::LlmError;

// =============================================================================
// TRAIT
// =============================================================================

/// Async embedding of text batches. One output vector per input text,
/// in input order.
#[async_trait::async_trait]
pub trait EmbedText: Send + Sync {
    /// # Errors
    ///
    /// Returns an [`LlmError`] if the request fails or the response is
    /// malformed.
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, LlmError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct EmbeddingsClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl EmbeddingsClient {
    /// Build an embeddings client from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, LlmError> {
        let config = EmbeddingsConfig::from_env()?;
        Self::from_config(config)
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: EmbeddingsConfig) -> Result<Self, LlmError> {
        let http = client_with_timeouts(config.timeouts)?;
        Ok(Self { http, api_key: config.api_key, base_url: config.base_url, model: config.model })
    }

    /// Return the configured embeddings model name.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

fn client_with_timeouts(timeouts: LlmTimeouts) -> Result<reqwest::Client, LlmError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .build()
        .map_err(|e| LlmError::HttpClientBuild(e.to_string()))
}

#[async_trait::async_trait]
impl EmbedText for EmbeddingsClient {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, LlmError> {
        let url = format!("{}/embeddings", self.base_url);
        let body = serde_json::json!({ "model": self.model, "input": texts });

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(LlmError::ApiResponse { status, body: text });
        }

        parse_embeddings_response(&text)
    }
}

// =============================================================================
// RESPONSE PARSING
// =============================================================================

/// Extract embedding vectors from a `/v1/embeddings` response, restored
/// to input order via the per-item `index` field.
pub(crate) fn parse_embeddings_response(json_text: &str) -> Result<Vec<Vec<f32>>, LlmError> {
    let root: Value = serde_json::from_str(json_text).map_err(|e| LlmError::ApiParse(e.to_string()))?;
    let Some(data) = root.get("data").and_then(Value::as_array) else {
        return Err(LlmError::ApiParse("embeddings: missing data array".to_string()));
    };

    let mut indexed: Vec<(usize, Vec<f32>)> = Vec::with_capacity(data.len());
    for (position, item) in data.iter().enumerate() {
        let index = item
            .get("index")
            .and_then(Value::as_u64)
            .map_or(position, |i| usize::try_from(i).unwrap_or(position));
        let Some(values) = item.get("embedding").and_then(Value::as_array) else {
            return Err(LlmError::ApiParse(format!("embeddings: item {position} missing embedding")));
        };
        let mut vector = Vec::with_capacity(values.len());
        for value in values {
            let Some(number) = value.as_f64() else {
                return Err(LlmError::ApiParse(format!("embeddings: item {position} has non-numeric value")));
            };
            #[allow(clippy::cast_possible_truncation)]
            vector.push(number as f32);
        }
        indexed.push((index, vector));
    }

    indexed.sort_by_key(|(index, _)| *index);
    Ok(indexed.into_iter().map(|(_, vector)| vector).collect())
}

#[cfg(test)]
#[path = "embeddings_test.rs"]
mod tests;
