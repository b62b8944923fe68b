use super::*;

#[tokio::test]
async fn new_state_starts_with_empty_history() {
    let state = AppState::new(None, None, None);
    assert!(state.history.read().await.is_empty());
}

#[test]
fn new_state_without_ai_collaborators() {
    let state = AppState::new(None, None, None);
    assert!(state.llm.is_none());
    assert!(state.embedder.is_none());
    assert!(state.faq.is_none());
}

#[tokio::test]
async fn history_is_shared_across_clones() {
    let state = AppState::new(None, None, None);
    let clone = state.clone();
    clone
        .history
        .write()
        .await
        .push(QaExchange { question: "q".into(), answer: "a".into() });
    assert_eq!(state.history.read().await.len(), 1);
}

#[test]
fn qa_exchange_serializes_with_full_field_names() {
    let exchange = QaExchange { question: "q".into(), answer: "a".into() };
    let json = serde_json::to_value(&exchange).unwrap();
    assert_eq!(json, serde_json::json!({ "question": "q", "answer": "a" }));
}
