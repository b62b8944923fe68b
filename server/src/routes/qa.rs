//! Q&A routes — ask, summarize, and history.
//!
//! DESIGN
//! ======
//! Handlers validate the request, delegate to the retrieval and answer
//! services, and translate service errors into HTTP statuses. Only a
//! successful ask is appended to the in-memory history log.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::llm::types::LlmError;
use crate::services::retrieval::{self, RetrievalError};
use crate::services::answer;
use crate::state::{AppState, QaExchange};

#[derive(Deserialize)]
pub struct AskBody {
    #[serde(default)]
    pub question: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub question: String,
    pub contexts: Vec<String>,
    pub answer: String,
}

#[derive(Deserialize)]
pub struct SummarizeBody {
    #[serde(default)]
    pub answer: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// `POST /api/ask` — retrieve contexts, generate an answer, log history.
///
/// 400 when the question is missing or blank, 404 when retrieval finds
/// no context, 503 when the AI collaborators are not configured.
pub async fn ask(State(state): State<AppState>, Json(body): Json<AskBody>) -> Result<Json<AskResponse>, StatusCode> {
    let question = body.question.unwrap_or_default().trim().to_owned();
    if question.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let (Some(llm), Some(embedder), Some(faq)) = (&state.llm, &state.embedder, &state.faq) else {
        warn!("ask rejected: AI collaborators not configured");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    let contexts = faq
        .retrieve(embedder.as_ref(), &question, retrieval::DEFAULT_TOP_K)
        .await
        .map_err(retrieval_error_to_status)?;
    debug!(count = contexts.len(), "retrieved contexts");
    if contexts.is_empty() {
        return Err(StatusCode::NOT_FOUND);
    }

    let answer_text = answer::generate_answer(llm.as_ref(), &question, &contexts)
        .await
        .map_err(llm_error_to_status)?;

    state
        .history
        .write()
        .await
        .push(QaExchange { question: question.clone(), answer: answer_text.clone() });
    info!(question_len = question.len(), "answered question");

    Ok(Json(AskResponse { question, contexts, answer: answer_text }))
}

/// `POST /api/summarize` — summarize a previously returned answer.
///
/// 400 when the answer is missing or blank; history is never touched.
pub async fn summarize(
    State(state): State<AppState>,
    Json(body): Json<SummarizeBody>,
) -> Result<Json<SummarizeResponse>, StatusCode> {
    let answer_text = body.answer.unwrap_or_default().trim().to_owned();
    if answer_text.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let Some(llm) = &state.llm else {
        warn!("summarize rejected: LLM not configured");
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    };

    let summary = answer::summarize_answer(llm.as_ref(), &answer_text)
        .await
        .map_err(llm_error_to_status)?;

    Ok(Json(SummarizeResponse { summary }))
}

/// `GET /api/history` — past question/answer pairs, oldest first.
pub async fn history(State(state): State<AppState>) -> Json<Vec<QaExchange>> {
    Json(state.history.read().await.clone())
}

pub(crate) fn llm_error_to_status(err: LlmError) -> StatusCode {
    warn!(error = %err, "LLM call failed");
    match err {
        LlmError::ApiRequest(_) | LlmError::ApiResponse { .. } | LlmError::ApiParse(_) => StatusCode::BAD_GATEWAY,
        LlmError::ConfigParse(_) | LlmError::MissingApiKey { .. } | LlmError::HttpClientBuild(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub(crate) fn retrieval_error_to_status(err: RetrievalError) -> StatusCode {
    match err {
        RetrievalError::Embedding(inner) => llm_error_to_status(inner),
        RetrievalError::Io(_) | RetrievalError::Parse(_) | RetrievalError::EmbeddingCount { .. } => {
            warn!(error = %err, "retrieval failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

#[cfg(test)]
#[path = "qa_test.rs"]
mod tests;
