use super::*;
use assistant::{ChatRole, HISTORY_LIMIT};

#[test]
fn default_state_is_closed_and_empty() {
    let state = ChatWidgetState::default();
    assert!(!state.open);
    assert!(!state.sending);
    assert!(state.entries.is_empty());
    assert!(state.history.is_empty());
}

#[test]
fn complete_exchange_updates_display_and_history() {
    let mut state = ChatWidgetState::default();
    state.push_entry(EntryRole::User, "is TX-4 healthy?");
    state.sending = true;

    state.complete_exchange("is TX-4 healthy?", "Yes, no anomalies detected.");

    assert!(!state.sending);
    assert_eq!(state.entries.len(), 2);
    assert_eq!(state.entries[1].role, EntryRole::Assistant);
    assert_eq!(state.history.len(), 2);
    assert_eq!(state.history[0].role, ChatRole::User);
    assert_eq!(state.history[1].role, ChatRole::Assistant);
}

#[test]
fn fail_exchange_leaves_history_untouched() {
    let mut state = ChatWidgetState::default();
    state.push_entry(EntryRole::User, "hello");
    state.sending = true;

    state.fail_exchange("Sorry, something went wrong.");

    assert!(!state.sending);
    assert_eq!(state.entries.last().map(|e| e.role), Some(EntryRole::Error));
    assert!(state.history.is_empty());
}

#[test]
fn history_window_stays_capped_across_many_exchanges() {
    let mut state = ChatWidgetState::default();
    for n in 1..=15 {
        state.complete_exchange(&format!("prompt {n}"), &format!("reply {n}"));
    }
    assert_eq!(state.history.len(), HISTORY_LIMIT);
    assert_eq!(state.history[0].content, "prompt 6");
    // Display entries are unaffected by the prompt window.
    assert_eq!(state.entries.len(), 15);
}

#[test]
fn latest_assistant_id_skips_trailing_errors() {
    let mut state = ChatWidgetState::default();
    state.push_entry(EntryRole::Assistant, "first");
    state.push_entry(EntryRole::Assistant, "second");
    state.push_entry(EntryRole::Error, "notice");
    let second_id = state.entries[1].id.clone();
    assert_eq!(state.latest_assistant_id(), Some(second_id.as_str()));
}
