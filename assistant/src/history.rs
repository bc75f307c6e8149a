//! Rolling conversation-history window.
//!
//! The history is owned by the calling UI surface and excludes the system
//! prompt. It is mutated only after a completed exchange: append the user
//! turn, append the assistant reply, evict the oldest entries beyond the
//! cap. Single writer, single in-flight request — no locking needed.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::types::ChatMessage;

/// Maximum retained history entries — 10 user/assistant exchanges.
pub const HISTORY_LIMIT: usize = 20;

/// Record a successful exchange and truncate FIFO to the most recent
/// [`HISTORY_LIMIT`] entries.
pub fn record_exchange(history: &mut Vec<ChatMessage>, prompt: &str, reply: &str) {
    history.push(ChatMessage::user(prompt));
    history.push(ChatMessage::assistant(reply));
    if history.len() > HISTORY_LIMIT {
        let excess = history.len() - HISTORY_LIMIT;
        history.drain(..excess);
    }
}
