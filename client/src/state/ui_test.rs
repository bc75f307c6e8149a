use super::*;

#[test]
fn ui_state_defaults_to_light_theme() {
    assert!(!UiState::default().dark_mode);
}
