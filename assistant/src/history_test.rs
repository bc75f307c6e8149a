use super::*;
use crate::types::ChatRole;

#[test]
fn record_exchange_appends_user_then_assistant() {
    let mut history = Vec::new();
    record_exchange(&mut history, "is TX-4 healthy?", "Yes, no anomalies detected.");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].role, ChatRole::User);
    assert_eq!(history[0].content, "is TX-4 healthy?");
    assert_eq!(history[1].role, ChatRole::Assistant);
    assert_eq!(history[1].content, "Yes, no anomalies detected.");
}

#[test]
fn history_at_cap_is_not_evicted() {
    let mut history = Vec::new();
    for n in 1..=10 {
        record_exchange(&mut history, &format!("prompt {n}"), &format!("reply {n}"));
    }
    assert_eq!(history.len(), HISTORY_LIMIT);
    assert_eq!(history[0].content, "prompt 1");
}

#[test]
fn window_keeps_most_recent_entries_in_order() {
    let mut history = Vec::new();
    for n in 1..=15 {
        record_exchange(&mut history, &format!("prompt {n}"), &format!("reply {n}"));
    }
    // 15 exchanges produce 30 entries; only the last 20 survive.
    assert_eq!(history.len(), HISTORY_LIMIT);
    assert_eq!(history[0].content, "prompt 6");
    assert_eq!(history[1].content, "reply 6");
    assert_eq!(history[18].content, "prompt 15");
    assert_eq!(history[19].content, "reply 15");
    assert!(!history.iter().any(|m| m.content == "reply 5"));
}
