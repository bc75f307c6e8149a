use super::*;

#[test]
fn idle_reveal_exposes_nothing() {
    let mut reveal = TypingReveal::idle();
    assert_eq!(reveal.phase(), RevealPhase::Idle);
    assert_eq!(reveal.visible(), "");
    assert!(!reveal.advance());
    assert!(reveal.is_settled());
}

#[test]
fn advance_exposes_one_character_per_tick_in_order() {
    let mut reveal = TypingReveal::start("hot");
    assert_eq!(reveal.visible(), "");
    assert!(reveal.advance());
    assert_eq!(reveal.visible(), "h");
    assert!(reveal.advance());
    assert_eq!(reveal.visible(), "ho");
    assert!(!reveal.advance());
    assert_eq!(reveal.visible(), "hot");
    assert_eq!(reveal.phase(), RevealPhase::Done);
}

#[test]
fn advance_past_end_is_a_no_op() {
    let mut reveal = TypingReveal::start("ok");
    while reveal.advance() {}
    assert!(!reveal.advance());
    assert_eq!(reveal.visible(), "ok");
}

#[test]
fn multibyte_text_reveals_on_char_boundaries() {
    let mut reveal = TypingReveal::start("45°C ✓");
    for _ in 0..3 {
        reveal.advance();
    }
    assert_eq!(reveal.visible(), "45°");
}

#[test]
fn restart_abandons_progress_and_resets_position() {
    let mut reveal = TypingReveal::start("first reply");
    for _ in 0..5 {
        reveal.advance();
    }
    reveal = TypingReveal::start("second");
    assert_eq!(reveal.visible(), "");
    assert_eq!(reveal.phase(), RevealPhase::Revealing);
    reveal.advance();
    assert_eq!(reveal.visible(), "s");
}
