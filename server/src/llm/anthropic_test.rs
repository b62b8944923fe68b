use super::*;

fn make_response(content: serde_json::Value) -> String {
    serde_json::json!({
        "id": "msg_123",
        "type": "message",
        "role": "assistant",
        "content": content,
        "model": "claude-sonnet-4-5-20250929",
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 100, "output_tokens": 50 }
    })
    .to_string()
}

#[test]
fn parse_text_response() {
    let json = make_response(serde_json::json!([
        { "type": "text", "text": "Hello world" }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.text, "Hello world");
    assert_eq!(resp.model, "claude-sonnet-4-5-20250929");
    assert_eq!(resp.stop_reason, "end_turn");
    assert_eq!(resp.input_tokens, 100);
    assert_eq!(resp.output_tokens, 50);
}

#[test]
fn parse_concatenates_text_blocks() {
    let json = make_response(serde_json::json!([
        { "type": "text", "text": "I don't " },
        { "type": "text", "text": "know." }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.text, "I don't know.");
}

#[test]
fn parse_skips_unknown_content() {
    let json = make_response(serde_json::json!([
        { "type": "text", "text": "hi" },
        { "type": "some_future_type", "data": {} }
    ]));
    let resp = parse_response(&json).unwrap();
    assert_eq!(resp.text, "hi");
}

#[test]
fn parse_empty_content_yields_empty_text() {
    let json = make_response(serde_json::json!([]));
    let resp = parse_response(&json).unwrap();
    assert!(resp.text.is_empty());
}

#[test]
fn parse_invalid_json_is_error() {
    let err = parse_response("not json").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

#[test]
fn parse_missing_usage_is_error() {
    let json = serde_json::json!({
        "content": [],
        "model": "m",
        "stop_reason": "end_turn"
    })
    .to_string();
    assert!(parse_response(&json).is_err());
}
