//! State for the floating chat widget.
//!
//! DESIGN
//! ======
//! Display entries and the outbound rolling history are tracked separately:
//! error/apology entries render locally but never re-enter the prompt, and
//! the history window only ever grows from completed exchanges. `sending`
//! enforces the single-flight rule — at most one completion request per
//! session is outstanding, so the history has a single sequenced writer.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use assistant::ChatMessage;

/// Display role of a rendered chat entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryRole {
    User,
    Assistant,
    Error,
}

/// A single rendered chat entry.
#[derive(Clone, Debug)]
pub struct ChatEntry {
    pub id: String,
    pub role: EntryRole,
    pub content: String,
}

/// State for one chat session. Discarded when the widget unmounts or the
/// session resets.
#[derive(Clone, Debug, Default)]
pub struct ChatWidgetState {
    pub open: bool,
    pub sending: bool,
    pub entries: Vec<ChatEntry>,
    /// Rolling window sent with each request; mutated only after a
    /// successful completion.
    pub history: Vec<ChatMessage>,
}

impl ChatWidgetState {
    /// Append a display entry.
    pub fn push_entry(&mut self, role: EntryRole, content: impl Into<String>) {
        self.entries
            .push(ChatEntry { id: uuid::Uuid::new_v4().to_string(), role, content: content.into() });
    }

    /// Record a successful exchange: show the reply and fold the completed
    /// turn pair into the rolling history window.
    pub fn complete_exchange(&mut self, prompt: &str, reply: &str) {
        self.push_entry(EntryRole::Assistant, reply);
        assistant::record_exchange(&mut self.history, prompt, reply);
        self.sending = false;
    }

    /// Record a failed exchange: show the notice, leave the history
    /// untouched so the failed turn is never replayed.
    pub fn fail_exchange(&mut self, notice: &str) {
        self.push_entry(EntryRole::Error, notice);
        self.sending = false;
    }

    /// Id of the newest assistant entry, if any — the one a reveal targets.
    #[must_use]
    pub fn latest_assistant_id(&self) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.role == EntryRole::Assistant)
            .map(|entry| entry.id.as_str())
    }
}
