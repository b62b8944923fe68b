//! Answer generation — QA and summarizer prompts over the LLM client.
//!
//! DESIGN
//! ======
//! Two single-turn personas: the answer generator grounds itself in the
//! retrieved contexts, and the summarizer condenses a previously returned
//! answer. Both go through the `LlmChat` trait so tests can substitute a
//! mock provider.

use std::fmt::Write;

use crate::llm::types::{LlmChat, LlmError, Message};

const ANSWER_MAX_TOKENS: u32 = 256;
const SUMMARY_MAX_TOKENS: u32 = 128;

const ANSWER_SYSTEM_PROMPT: &str = "You are an AI assistant. Use the provided contexts to answer concisely. \
     If the context does not contain the answer, respond with 'I don't know.'";

const SUMMARY_SYSTEM_PROMPT: &str = "You summarize AI-generated answers.";

/// Generate an answer to `question` grounded in `contexts`.
///
/// # Errors
///
/// Returns an [`LlmError`] when the provider call fails.
pub async fn generate_answer(llm: &dyn LlmChat, question: &str, contexts: &[String]) -> Result<String, LlmError> {
    let messages = [Message::user(build_answer_prompt(question, contexts))];
    let response = llm.chat(ANSWER_MAX_TOKENS, ANSWER_SYSTEM_PROMPT, &messages).await?;
    Ok(response.text.trim().to_owned())
}

/// Produce a concise summary of a previously generated answer.
///
/// # Errors
///
/// Returns an [`LlmError`] when the provider call fails.
pub async fn summarize_answer(llm: &dyn LlmChat, answer: &str) -> Result<String, LlmError> {
    let messages = [Message::user(build_summary_prompt(answer))];
    let response = llm.chat(SUMMARY_MAX_TOKENS, SUMMARY_SYSTEM_PROMPT, &messages).await?;
    Ok(response.text.trim().to_owned())
}

/// User message for the answer generator: bulleted contexts, then the
/// question.
pub(crate) fn build_answer_prompt(question: &str, contexts: &[String]) -> String {
    let mut prompt = String::from("Contexts:\n");
    let bullets: Vec<String> = contexts.iter().map(|c| format!("- {c}")).collect();
    prompt.push_str(&bullets.join("\n"));
    let _ = write!(prompt, "\n\nQuestion: {question}\nAnswer:");
    prompt
}

/// User message for the summarizer persona.
pub(crate) fn build_summary_prompt(answer: &str) -> String {
    format!(
        "You are a summarization agent. Please provide a concise summary of the following answer:\n\n{answer}"
    )
}

#[cfg(test)]
#[path = "answer_test.rs"]
mod tests;
