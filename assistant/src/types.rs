//! Chat-completion wire types and the assistant error taxonomy.
//!
//! DESIGN
//! ======
//! The request/response DTOs mirror the OpenAI-compatible
//! `/chat/completions` schema used by the hosted endpoint. Only the fields
//! this client consumes are modeled; unknown response fields are ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by the chat-completion client.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    /// No API credential is configured. Detected before any network attempt;
    /// callers hide the dependent feature instead of crashing.
    #[error("assistant credential not configured")]
    NotConfigured,

    /// Network failure, non-success HTTP status, or an unparseable response
    /// body. `status` is 0 when the request never produced an HTTP response
    /// (connection failure or timeout).
    #[error("completion request failed (status {status}): {message}")]
    Transport { status: u16, message: String },

    /// Well-formed response envelope with no usable completion choice.
    #[error("completion response contained no choices")]
    EmptyResponse,
}

// =============================================================================
// MESSAGES
// =============================================================================

/// Author of a chat turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// A single role-tagged turn. Ordering is significant — a message list is
/// the literal turn sequence sent to the completion endpoint, rebuilt per
/// request and never mutated in place.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: ChatRole::System, content: content.into() }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: ChatRole::User, content: content.into() }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: ChatRole::Assistant, content: content.into() }
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Request body for `POST /chat/completions`. Model, temperature, and token
/// limit are configuration constants, not computed per request; `stream` is
/// always `false` — the contract is request/response, not incremental.
#[derive(Clone, Debug, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub stream: bool,
}

/// Response envelope. Only the first choice is consumed.
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

/// One generated choice in the response envelope.
#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub message: ChoiceMessage,
}

/// The generated message inside a choice.
#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: String,
}
