use super::*;
use crate::state::session::MemorySession;

fn payload(token: &str) -> AuthPayload {
    serde_json::from_value(serde_json::json!({ "access_token": token, "username": "alice" })).unwrap()
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_state_with_token_is_authenticated() {
    let state = AuthState { user: Some(payload("t1")) };
    assert_eq!(state.access_token(), Some("t1"));
    assert!(state.is_authenticated());
}

#[test]
fn empty_token_is_not_authenticated() {
    let state = AuthState { user: Some(payload("")) };
    assert!(!state.is_authenticated());
}

// =============================================================
// Restore
// =============================================================

#[test]
fn restore_reads_stored_payload() {
    let store = MemorySession::default();
    let raw = serde_json::to_string(&payload("t1")).unwrap();
    store.store(SESSION_KEY, &raw).unwrap();

    let state = AuthState::restore(&store);
    assert_eq!(state.user, Some(payload("t1")));
}

#[test]
fn restore_without_entry_is_logged_out() {
    let state = AuthState::restore(&MemorySession::default());
    assert!(!state.is_authenticated());
}

#[test]
fn restore_ignores_corrupt_entry() {
    let store = MemorySession::default();
    store.store(SESSION_KEY, "{not json").unwrap();
    assert!(AuthState::restore(&store).user.is_none());
}

// =============================================================
// AuthHandle
// =============================================================

#[test]
fn refcell_handle_sets_and_clears() {
    let handle = RefCell::new(AuthState::default());
    handle.set_user(payload("t2"));
    assert_eq!(handle.snapshot().access_token(), Some("t2"));
    handle.clear();
    assert!(!handle.snapshot().is_authenticated());
}
