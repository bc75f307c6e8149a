//! Completion request assembly and response classification.
//!
//! DESIGN
//! ======
//! Request construction is a pure function of its inputs; the single HTTP
//! round trip lives in the UI crate's transport layer. The credential is
//! injected at construction rather than read from ambient state, so
//! surfaces are testable with fakes and the feature can be suppressed when
//! no key is present.

#[cfg(test)]
#[path = "completion_test.rs"]
mod completion_test;

use crate::prompt::compose_system;
use crate::types::{AssistantError, ChatMessage, CompletionRequest, CompletionResponse};

pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const COMPLETION_MODEL: &str = "llama-3.3-70b-versatile";
pub const COMPLETION_TEMPERATURE: f32 = 0.7;
pub const COMPLETION_MAX_TOKENS: u32 = 1024;

/// Connection settings for the completion endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl CompletionConfig {
    /// Config with the fixed model, temperature, and token-limit constants.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: GROQ_BASE_URL.to_owned(),
            model: COMPLETION_MODEL.to_owned(),
            temperature: COMPLETION_TEMPERATURE,
            max_tokens: COMPLETION_MAX_TOKENS,
        }
    }

    /// Build a config from an optionally-present credential. Returns `None`
    /// on an absent or blank key so callers can hide chat features instead
    /// of crashing.
    #[must_use]
    pub fn from_key(api_key: Option<&str>) -> Option<Self> {
        match api_key {
            Some(key) if !key.trim().is_empty() => Some(Self::new(key.trim())),
            _ => None,
        }
    }

    /// Full URL of the chat-completions endpoint.
    #[must_use]
    pub fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Resolve the configured credential, failing before any network attempt.
///
/// # Errors
///
/// Returns [`AssistantError::NotConfigured`] when no config is present.
pub fn require_config(config: Option<&CompletionConfig>) -> Result<&CompletionConfig, AssistantError> {
    config.ok_or(AssistantError::NotConfigured)
}

/// Assemble the ordered outbound message list: exactly one system message
/// (surface prompt + blank line + context block) followed by the supplied
/// history in its original order.
#[must_use]
pub fn assemble_messages(system_prompt: &str, context_block: &str, history: &[ChatMessage]) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(ChatMessage::system(compose_system(system_prompt, context_block)));
    messages.extend(history.iter().cloned());
    messages
}

/// Build the full wire request body.
#[must_use]
pub fn build_request(
    config: &CompletionConfig,
    system_prompt: &str,
    context_block: &str,
    history: &[ChatMessage],
) -> CompletionRequest {
    CompletionRequest {
        model: config.model.clone(),
        messages: assemble_messages(system_prompt, context_block, history),
        temperature: config.temperature,
        max_tokens: config.max_tokens,
        stream: false,
    }
}

/// Classify an HTTP response into generated text or a failure.
///
/// # Errors
///
/// Returns [`AssistantError::Transport`] on a non-success status or an
/// unparseable body, and [`AssistantError::EmptyResponse`] when the envelope
/// carries no usable choice.
pub fn parse_completion(status: u16, body: &str) -> Result<String, AssistantError> {
    if status != 200 {
        return Err(AssistantError::Transport { status, message: service_error_message(body) });
    }
    let envelope: CompletionResponse = serde_json::from_str(body)
        .map_err(|e| AssistantError::Transport { status, message: format!("unparseable response body: {e}") })?;
    let text = envelope
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .unwrap_or_default();
    if text.is_empty() {
        return Err(AssistantError::EmptyResponse);
    }
    Ok(text)
}

/// Best-effort extraction of the service-provided `error.message` field.
fn service_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|root| {
            root.get("error")?
                .get("message")?
                .as_str()
                .map(str::to_owned)
        })
        .unwrap_or_else(|| body.trim().to_owned())
}
