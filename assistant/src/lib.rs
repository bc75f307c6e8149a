//! # assistant
//!
//! Conversation-context and chat-completion core for the thermoview
//! dashboard. This crate owns the request shape sent to the hosted
//! chat-completion endpoint: context blocks rendered from structured
//! inspection data, the ordered message list, response classification,
//! and the rolling conversation-history window.
//!
//! It is deliberately transport-free — the `client` crate performs the
//! actual HTTP call — so everything here is pure and tests run natively.

pub mod completion;
pub mod context;
pub mod history;
pub mod prompt;
pub mod types;

pub use completion::{CompletionConfig, assemble_messages, build_request, parse_completion, require_config};
pub use context::{DashboardContext, InspectionContext};
pub use history::{HISTORY_LIMIT, record_exchange};
pub use types::{AssistantError, ChatMessage, ChatRole};
