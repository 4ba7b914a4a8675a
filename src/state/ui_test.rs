use super::*;

#[test]
fn ui_state_default_has_no_notice() {
    let state = UiState::default();
    assert!(state.notice.is_none());
}

#[test]
fn set_notice_replaces_previous() {
    let mut state = UiState::default();
    state.set_notice("first");
    state.set_notice("second");
    assert_eq!(state.notice.as_deref(), Some("second"));
}

#[test]
fn dismiss_notice_clears_banner() {
    let mut state = UiState::default();
    state.set_notice("warning");
    state.dismiss_notice();
    assert!(state.notice.is_none());
}

#[test]
fn dismiss_without_notice_is_harmless() {
    let mut state = UiState::default();
    state.dismiss_notice();
    assert_eq!(state, UiState::default());
}
