use super::*;

#[test]
fn parse_single_embedding() {
    let json = serde_json::json!({
        "data": [
            { "index": 0, "embedding": [0.1, 0.2, 0.3] }
        ],
        "model": "text-embedding-ada-002"
    })
    .to_string();
    let vectors = parse_embeddings_response(&json).unwrap();
    assert_eq!(vectors.len(), 1);
    assert_eq!(vectors[0].len(), 3);
    assert!((vectors[0][1] - 0.2).abs() < 1e-6);
}

#[test]
fn parse_restores_input_order_from_index() {
    let json = serde_json::json!({
        "data": [
            { "index": 1, "embedding": [1.0] },
            { "index": 0, "embedding": [0.0] }
        ]
    })
    .to_string();
    let vectors = parse_embeddings_response(&json).unwrap();
    assert!((vectors[0][0] - 0.0).abs() < 1e-6);
    assert!((vectors[1][0] - 1.0).abs() < 1e-6);
}

#[test]
fn parse_missing_data_is_error() {
    let err = parse_embeddings_response(r#"{ "model": "x" }"#).unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

#[test]
fn parse_missing_embedding_field_is_error() {
    let json = serde_json::json!({ "data": [ { "index": 0 } ] }).to_string();
    assert!(parse_embeddings_response(&json).is_err());
}

#[test]
fn parse_non_numeric_value_is_error() {
    let json = serde_json::json!({ "data": [ { "index": 0, "embedding": ["a"] } ] }).to_string();
    assert!(parse_embeddings_response(&json).is_err());
}

#[test]
fn parse_empty_data_yields_no_vectors() {
    let json = serde_json::json!({ "data": [] }).to_string();
    assert!(parse_embeddings_response(&json).unwrap().is_empty());
}
