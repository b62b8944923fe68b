use super::*;
use crate::llm::types::ChatResponse;
use crate::state::test_helpers::MockLlm;
use std::sync::Mutex;

// =========================================================================
// CapturingLlm
// =========================================================================

/// Records the arguments of the last `chat` call and echoes a fixed reply.
struct CapturingLlm {
    reply: String,
    last_call: Mutex<Option<(u32, String, Vec<Message>)>>,
}

impl CapturingLlm {
    fn new(reply: &str) -> Self {
        Self { reply: reply.to_owned(), last_call: Mutex::new(None) }
    }

    fn last_call(&self) -> (u32, String, Vec<Message>) {
        self.last_call.lock().unwrap().clone().expect("no chat call recorded")
    }
}

#[async_trait::async_trait]
impl LlmChat for CapturingLlm {
    async fn chat(&self, max_tokens: u32, system: &str, messages: &[Message]) -> Result<ChatResponse, LlmError> {
        *self.last_call.lock().unwrap() = Some((max_tokens, system.to_owned(), messages.to_vec()));
        Ok(ChatResponse {
            text: self.reply.clone(),
            model: "mock".into(),
            stop_reason: "end_turn".into(),
            input_tokens: 0,
            output_tokens: 0,
        })
    }
}

// =========================================================================
// Prompt construction
// =========================================================================

#[test]
fn answer_prompt_bullets_contexts_then_question() {
    let contexts = vec!["Open 9 to 5.".to_owned(), "In Springfield.".to_owned()];
    let prompt = build_answer_prompt("When are you open?", &contexts);
    assert_eq!(
        prompt,
        "Contexts:\n- Open 9 to 5.\n- In Springfield.\n\nQuestion: When are you open?\nAnswer:"
    );
}

#[test]
fn answer_prompt_with_single_context() {
    let prompt = build_answer_prompt("q", &["only".to_owned()]);
    assert_eq!(prompt, "Contexts:\n- only\n\nQuestion: q\nAnswer:");
}

#[test]
fn summary_prompt_embeds_the_answer() {
    let prompt = build_summary_prompt("The office opens at 9am.");
    assert!(prompt.starts_with("You are a summarization agent."));
    assert!(prompt.ends_with("The office opens at 9am."));
}

// =========================================================================
// generate_answer
// =========================================================================

#[tokio::test]
async fn generate_answer_uses_qa_persona_and_budget() {
    let llm = CapturingLlm::new("4");
    let answer = generate_answer(&llm, "What is 2+2?", &["arithmetic".to_owned()])
        .await
        .unwrap();
    assert_eq!(answer, "4");

    let (max_tokens, system, messages) = llm.last_call();
    assert_eq!(max_tokens, 256);
    assert!(system.contains("I don't know."));
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].role, "user");
    assert!(messages[0].content.contains("Question: What is 2+2?"));
}

#[tokio::test]
async fn generate_answer_trims_whitespace() {
    let llm = MockLlm::answering("  4\n");
    let answer = generate_answer(&llm, "q", &["c".to_owned()]).await.unwrap();
    assert_eq!(answer, "4");
}

#[tokio::test]
async fn generate_answer_propagates_provider_failure() {
    let llm = MockLlm::new(vec![Err(LlmError::ApiResponse { status: 500, body: "boom".into() })]);
    let err = generate_answer(&llm, "q", &[]).await.unwrap_err();
    assert!(matches!(err, LlmError::ApiResponse { status: 500, .. }));
}

// =========================================================================
// summarize_answer
// =========================================================================

#[tokio::test]
async fn summarize_uses_summarizer_persona_and_budget() {
    let llm = CapturingLlm::new("Four");
    let summary = summarize_answer(&llm, "4").await.unwrap();
    assert_eq!(summary, "Four");

    let (max_tokens, system, messages) = llm.last_call();
    assert_eq!(max_tokens, 128);
    assert_eq!(system, "You summarize AI-generated answers.");
    assert!(messages[0].content.contains("concise summary"));
}

#[tokio::test]
async fn summarize_trims_whitespace() {
    let llm = MockLlm::answering("\nFour ");
    let summary = summarize_answer(&llm, "4").await.unwrap();
    assert_eq!(summary, "Four");
}
