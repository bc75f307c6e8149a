use super::*;
use assistant::ChatRole;

#[test]
fn outbound_turns_appends_user_turn_after_history() {
    let history = vec![ChatMessage::user("earlier question"), ChatMessage::assistant("earlier answer")];
    let turns = outbound_turns(&history, "new question");
    assert_eq!(turns.len(), 3);
    assert_eq!(turns[..2], history[..]);
    assert_eq!(turns[2].role, ChatRole::User);
    assert_eq!(turns[2].content, "new question");
}

#[test]
fn outbound_turns_from_empty_history_is_single_user_turn() {
    let turns = outbound_turns(&[], "hello");
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0].role, ChatRole::User);
}

#[test]
fn markdown_rendering_drops_raw_html() {
    let rendered = render_markdown_html("**bold** <script>alert(1)</script>");
    assert!(rendered.contains("<strong>bold</strong>"));
    assert!(!rendered.contains("<script>"));
}

#[test]
fn markdown_rendering_keeps_lists() {
    let rendered = render_markdown_html("- one\n- two");
    assert!(rendered.contains("<ul>"));
    assert!(rendered.contains("<li>one</li>"));
}
