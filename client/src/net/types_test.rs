use super::*;

#[test]
fn ask_response_parses_full_body() {
    let json = r#"{
        "question": "What is 2+2?",
        "contexts": ["arithmetic basics", "number facts"],
        "answer": "4"
    }"#;
    let resp: AskResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.question, "What is 2+2?");
    assert_eq!(resp.contexts.len(), 2);
    assert_eq!(resp.answer, "4");
}

#[test]
fn ask_response_defaults_missing_contexts() {
    let json = r#"{ "question": "q", "answer": "a" }"#;
    let resp: AskResponse = serde_json::from_str(json).unwrap();
    assert!(resp.contexts.is_empty());
}

#[test]
fn summarize_response_parses_summary() {
    let json = r#"{ "summary": "Four" }"#;
    let resp: SummarizeResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.summary, "Four");
}
