use super::*;

#[test]
fn auth_state_defaults_to_logged_out() {
    let s = AuthState::default();
    assert!(s.user.is_none());
    assert!(!s.loading);
}
