use super::*;
use crate::prompt::DASHBOARD_ASSISTANT_PROMPT;
use crate::types::ChatRole;

fn history_of(len: usize) -> Vec<ChatMessage> {
    (0..len)
        .map(|n| {
            if n % 2 == 0 {
                ChatMessage::user(format!("question {n}"))
            } else {
                ChatMessage::assistant(format!("answer {n}"))
            }
        })
        .collect()
}

// =============================================================
// Config
// =============================================================

#[test]
fn from_key_rejects_absent_or_blank_credentials() {
    assert!(CompletionConfig::from_key(None).is_none());
    assert!(CompletionConfig::from_key(Some("")).is_none());
    assert!(CompletionConfig::from_key(Some("   ")).is_none());
}

#[test]
fn from_key_builds_config_with_fixed_constants() {
    let config = CompletionConfig::from_key(Some("gsk_test")).expect("config");
    assert_eq!(config.api_key, "gsk_test");
    assert_eq!(config.model, COMPLETION_MODEL);
    assert_eq!(config.max_tokens, COMPLETION_MAX_TOKENS);
    assert_eq!(config.endpoint(), "https://api.groq.com/openai/v1/chat/completions");
}

#[test]
fn require_config_fails_without_credential() {
    assert!(matches!(require_config(None), Err(AssistantError::NotConfigured)));
}

#[test]
fn require_config_passes_through_configured_credential() {
    let config = CompletionConfig::new("gsk_test");
    let resolved = require_config(Some(&config)).expect("config");
    assert_eq!(resolved.api_key, "gsk_test");
}

// =============================================================
// Message assembly
// =============================================================

#[test]
fn assemble_places_single_system_message_first() {
    for prior_turns in [0, 2, 8] {
        let messages = assemble_messages(DASHBOARD_ASSISTANT_PROMPT, "Total Transformers: 12", &history_of(prior_turns));
        assert_eq!(messages.len(), prior_turns + 1);
        assert_eq!(messages[0].role, ChatRole::System);
        assert_eq!(
            messages[0].content,
            format!("{DASHBOARD_ASSISTANT_PROMPT}\n\nTotal Transformers: 12")
        );
        assert_eq!(messages.iter().filter(|m| m.role == ChatRole::System).count(), 1);
    }
}

#[test]
fn assemble_preserves_history_order() {
    let history = history_of(4);
    let messages = assemble_messages("prompt", "context", &history);
    assert_eq!(messages[1..], history[..]);
}

#[test]
fn build_request_uses_config_constants_and_disables_streaming() {
    let config = CompletionConfig::new("gsk_test");
    let request = build_request(&config, "prompt", "context", &[]);
    assert_eq!(request.model, config.model);
    assert_eq!(request.temperature, config.temperature);
    assert_eq!(request.max_tokens, config.max_tokens);
    assert!(!request.stream);
}

// =============================================================
// Response classification
// =============================================================

#[test]
fn parse_returns_first_choice_text_verbatim() {
    let body = serde_json::json!({
        "choices": [
            { "message": { "role": "assistant", "content": "  Two anomalies found.  " } },
            { "message": { "role": "assistant", "content": "ignored" } }
        ]
    })
    .to_string();
    assert_eq!(parse_completion(200, &body).expect("text"), "  Two anomalies found.  ");
}

#[test]
fn parse_classifies_empty_choices_as_empty_response() {
    let body = serde_json::json!({ "choices": [] }).to_string();
    assert!(matches!(parse_completion(200, &body), Err(AssistantError::EmptyResponse)));
}

#[test]
fn parse_classifies_blank_content_as_empty_response() {
    let body = serde_json::json!({ "choices": [{ "message": { "content": "" } }] }).to_string();
    assert!(matches!(parse_completion(200, &body), Err(AssistantError::EmptyResponse)));
}

#[test]
fn parse_carries_service_message_on_http_error() {
    let body = serde_json::json!({ "error": { "message": "invalid api key", "code": "invalid_api_key" } }).to_string();
    match parse_completion(401, &body) {
        Err(AssistantError::Transport { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "invalid api key");
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[test]
fn parse_falls_back_to_raw_body_on_http_error() {
    match parse_completion(502, "bad gateway") {
        Err(AssistantError::Transport { status, message }) => {
            assert_eq!(status, 502);
            assert_eq!(message, "bad gateway");
        }
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[test]
fn parse_classifies_unparseable_success_body_as_transport() {
    assert!(matches!(
        parse_completion(200, "<!DOCTYPE html>"),
        Err(AssistantError::Transport { status: 200, .. })
    ));
}
