//! Wire types for the Q&A API.
//!
//! The JSON shapes mirror the server responses: `/api/ask` returns the
//! echoed question, the retrieved contexts, and the generated answer;
//! `/api/summarize` returns the summary text.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Response body of `POST /api/ask`.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct AskResponse {
    pub question: String,
    #[serde(default)]
    pub contexts: Vec<String>,
    pub answer: String,
}

/// Response body of `POST /api/summarize`.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
}
