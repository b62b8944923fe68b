use super::*;

#[test]
fn user_message_has_user_role() {
    let msg = Message::user("hello");
    assert_eq!(msg.role, "user");
    assert_eq!(msg.content, "hello");
}

#[test]
fn message_serializes_flat() {
    let msg = Message::user("hi");
    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json, serde_json::json!({ "role": "user", "content": "hi" }));
}

#[test]
fn error_displays_status() {
    let err = LlmError::ApiResponse { status: 500, body: "boom".into() };
    assert_eq!(err.to_string(), "API response error: status 500");
}

#[test]
fn error_displays_missing_key_var() {
    let err = LlmError::MissingApiKey { var: "OPENAI_API_KEY".into() };
    assert!(err.to_string().contains("OPENAI_API_KEY"));
}
