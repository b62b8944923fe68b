mod llm;
mod routes;
mod services;
mod state;

use std::path::PathBuf;
use std::sync::Arc;

use crate::llm::embeddings::{EmbedText, EmbeddingsClient};
use crate::llm::types::LlmChat;
use crate::services::retrieval::{self, FaqIndex, RetrievalError};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "8000".into())
        .parse()
        .expect("invalid PORT");

    // LLM client (non-fatal: ask/summarize answer 503 when absent).
    let llm: Option<Arc<dyn LlmChat>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured — ask/summarize disabled");
            None
        }
    };

    // Embeddings client + FAQ index (non-fatal: ask answers 503 when absent).
    let embedder: Option<Arc<dyn EmbedText>> = match EmbeddingsClient::from_env() {
        Ok(client) => Some(Arc::new(client)),
        Err(e) => {
            tracing::warn!(error = %e, "embeddings client not configured — retrieval disabled");
            None
        }
    };

    let faq = match &embedder {
        Some(embedder) => match build_faq_index(embedder.as_ref()).await {
            Ok(index) => {
                tracing::info!(entries = index.len(), "FAQ index ready");
                Some(Arc::new(index))
            }
            Err(e) => {
                tracing::warn!(error = %e, "FAQ index unavailable — retrieval disabled");
                None
            }
        },
        None => None,
    };

    let state = state::AppState::new(llm, embedder, faq);

    let app = routes::app(state).expect("router assembly failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "askdesk listening");
    axum::serve(listener, app).await.expect("server failed");
}

/// Resolve the FAQ data file path.
fn faq_path() -> PathBuf {
    std::env::var("FAQ_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("faq.yaml"))
}

/// Load FAQ entries and embed them once at startup.
async fn build_faq_index(embedder: &dyn EmbedText) -> Result<FaqIndex, RetrievalError> {
    let entries = retrieval::load_faq(&faq_path())?;
    FaqIndex::build(embedder, entries).await
}
