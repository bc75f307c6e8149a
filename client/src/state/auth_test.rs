use super::*;

#[test]
fn default_state_is_unauthenticated() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn loaded_user_is_authenticated() {
    let state = AuthState {
        user: Some(User { id: "u1".to_owned(), name: "Asha".to_owned(), email: "asha@example.com".to_owned() }),
        loading: false,
    };
    assert!(state.is_authenticated());
}

#[test]
fn loading_session_is_not_yet_authenticated() {
    let state = AuthState {
        user: Some(User { id: "u1".to_owned(), name: "Asha".to_owned(), email: "asha@example.com".to_owned() }),
        loading: true,
    };
    assert!(!state.is_authenticated());
}
