//! Root application component with routing and context providers.
//!
//! The app is rendered entirely in the browser; `index.html` is the static
//! page the bundle mounts into.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::config::AuthConfig;
use crate::net::types::AuthMode;
use crate::pages::{auth_form::UserAuthForm, home::HomePage};
use crate::state::{auth::AuthState, session::BrowserSession, toast::ToastState};

/// Root application component.
///
/// Provides the auth, toast and config contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Pick up a session persisted by an earlier visit.
    let auth = RwSignal::new(AuthState::restore(&BrowserSession));
    let toasts = RwSignal::new(ToastState::default());

    provide_context(auth);
    provide_context(toasts);
    provide_context(AuthConfig::from_build_env());

    view! {
        <Title text="Sign in"/>

        <Router>
            <Toaster/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("signin") view=|| view! { <UserAuthForm mode=AuthMode::SignIn/> }/>
                <Route path=StaticSegment("signup") view=|| view! { <UserAuthForm mode=AuthMode::SignUp/> }/>
            </Routes>
        </Router>
    }
}
