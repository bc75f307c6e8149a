use super::*;

#[test]
fn chat_roles_serialize_lowercase() {
    assert_eq!(serde_json::to_value(ChatRole::System).expect("role"), "system");
    assert_eq!(serde_json::to_value(ChatRole::User).expect("role"), "user");
    assert_eq!(serde_json::to_value(ChatRole::Assistant).expect("role"), "assistant");
}

#[test]
fn message_constructors_tag_roles() {
    assert_eq!(ChatMessage::system("s").role, ChatRole::System);
    assert_eq!(ChatMessage::user("u").role, ChatRole::User);
    assert_eq!(ChatMessage::assistant("a").role, ChatRole::Assistant);
}

#[test]
fn completion_request_serializes_full_wire_body() {
    let request = CompletionRequest {
        model: "llama-3.3-70b-versatile".to_owned(),
        messages: vec![ChatMessage::system("hello")],
        temperature: 0.7,
        max_tokens: 1024,
        stream: false,
    };
    let value = serde_json::to_value(&request).expect("request");
    assert_eq!(value["model"], "llama-3.3-70b-versatile");
    assert_eq!(value["messages"][0]["role"], "system");
    assert_eq!(value["messages"][0]["content"], "hello");
    assert_eq!(value["max_tokens"], 1024);
    assert_eq!(value["stream"], false);
}

#[test]
fn response_envelope_ignores_unknown_fields() {
    let body = serde_json::json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "created": 1,
        "model": "llama-3.3-70b-versatile",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": "All clear." },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 3 }
    })
    .to_string();
    let envelope: CompletionResponse = serde_json::from_str(&body).expect("envelope");
    assert_eq!(envelope.choices.len(), 1);
    assert_eq!(envelope.choices[0].message.content, "All clear.");
}

#[test]
fn response_envelope_defaults_missing_choices() {
    let envelope: CompletionResponse = serde_json::from_str("{}").expect("envelope");
    assert!(envelope.choices.is_empty());
}

#[test]
fn transport_error_display_carries_status() {
    let err = AssistantError::Transport { status: 429, message: "rate limited".to_owned() };
    assert_eq!(err.to_string(), "completion request failed (status 429): rate limited");
}
