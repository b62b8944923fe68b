//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the optional AI collaborators (LLM chat, embeddings, FAQ
//! index) and the in-memory history log. History lives only for the
//! process lifetime; there is no persistence layer.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::llm::embeddings::EmbedText;
use crate::llm::types::LlmChat;
use crate::services::retrieval::FaqIndex;

// =============================================================================
// QA EXCHANGE
// =============================================================================

/// One answered question, as logged to history and returned by
/// `GET /api/history`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QaExchange {
    pub question: String,
    pub answer: String,
}

// =============================================================================
// APP STATE
// =============================================================================

/// Cloneable handle to all shared server state.
///
/// The AI collaborators are `None` when their configuration is missing;
/// the Q&A routes degrade to 503 in that case instead of failing startup.
#[derive(Clone)]
pub struct AppState {
    pub llm: Option<Arc<dyn LlmChat>>,
    pub embedder: Option<Arc<dyn EmbedText>>,
    pub faq: Option<Arc<FaqIndex>>,
    /// Append-only log of successful exchanges, oldest first.
    pub history: Arc<RwLock<Vec<QaExchange>>>,
}

impl AppState {
    #[must_use]
    pub fn new(
        llm: Option<Arc<dyn LlmChat>>,
        embedder: Option<Arc<dyn EmbedText>>,
        faq: Option<Arc<FaqIndex>>,
    ) -> Self {
        Self { llm, embedder, faq, history: Arc::new(RwLock::new(Vec::new())) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
