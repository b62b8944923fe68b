use super::*;

#[test]
fn provider_defaults_to_openai() {
    assert_eq!(parse_provider(None).unwrap(), LlmProviderKind::OpenAi);
}

#[test]
fn provider_parses_known_values() {
    assert_eq!(parse_provider(Some("anthropic")).unwrap(), LlmProviderKind::Anthropic);
    assert_eq!(parse_provider(Some("openai")).unwrap(), LlmProviderKind::OpenAi);
}

#[test]
fn provider_rejects_unknown_value() {
    let err = parse_provider(Some("bedrock")).unwrap_err();
    assert!(matches!(err, LlmError::ConfigParse(_)));
    assert!(err.to_string().contains("bedrock"));
}

#[test]
fn default_models_per_provider() {
    assert_eq!(default_model(LlmProviderKind::OpenAi), "gpt-4o");
    assert!(default_model(LlmProviderKind::Anthropic).starts_with("claude-"));
}

#[test]
fn base_url_strips_trailing_slash() {
    assert_eq!(base_url_from(Some("https://proxy.local/v1/")), "https://proxy.local/v1");
    assert_eq!(base_url_from(None), DEFAULT_OPENAI_BASE_URL);
}

#[test]
fn timeouts_default_values() {
    let timeouts = LlmTimeouts::default();
    assert_eq!(timeouts.request_secs, 120);
    assert_eq!(timeouts.connect_secs, 10);
}

#[test]
fn default_embeddings_model_matches_backend() {
    assert_eq!(DEFAULT_EMBEDDINGS_MODEL, "text-embedding-ada-002");
}
