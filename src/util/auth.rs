//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sign-in and sign-up pages must leave as soon as a token is present,
//! whether it arrived from a submission or was restored from storage.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Where authenticated users are sent from the auth pages.
pub const AUTHENTICATED_HOME: &str = "/";

#[must_use]
pub fn should_redirect_auth(state: &AuthState) -> bool {
    state.is_authenticated()
}

/// Redirect to `/` whenever auth state holds an access token.
pub fn install_auth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_auth) {
            navigate(AUTHENTICATED_HOME, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
