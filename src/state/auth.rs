//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the form page to redirect away once logged in, and written only
//! by the submitter after the session store accepted the payload. Writers
//! receive the state through an explicit `AuthHandle`, never a global.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;

use leptos::prelude::*;

use super::session::{SESSION_KEY, SessionStore};
use crate::net::types::AuthPayload;

/// Authentication state tracking the current user's auth payload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<AuthPayload>,
}

impl AuthState {
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.access_token.as_str()).filter(|t| !t.is_empty())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Rebuild state from the persisted `"user"` entry, if any.
    ///
    /// Corrupt entries are ignored and leave the user logged out.
    pub fn restore<S: SessionStore + ?Sized>(store: &S) -> Self {
        let user = store.load(SESSION_KEY).and_then(|raw| match serde_json::from_str::<AuthPayload>(&raw) {
            Ok(payload) => Some(payload),
            Err(e) => {
                log::warn!("ignoring unreadable session entry: {e}");
                None
            }
        });
        Self { user }
    }
}

/// Read/write access to the shared auth state.
pub trait AuthHandle {
    fn snapshot(&self) -> AuthState;
    fn set_user(&self, payload: AuthPayload);
    fn clear(&self);
}

impl AuthHandle for RwSignal<AuthState> {
    fn snapshot(&self) -> AuthState {
        self.get_untracked()
    }

    fn set_user(&self, payload: AuthPayload) {
        self.update(|state| state.user = Some(payload));
    }

    fn clear(&self) {
        self.update(|state| state.user = None);
    }
}

impl AuthHandle for RefCell<AuthState> {
    fn snapshot(&self) -> AuthState {
        self.borrow().clone()
    }

    fn set_user(&self, payload: AuthPayload) {
        self.borrow_mut().user = Some(payload);
    }

    fn clear(&self) {
        self.borrow_mut().user = None;
    }
}
