//! Landing page the auth form redirects to after login.

use leptos::prelude::*;

use crate::net::types::AuthPayload;
use crate::state::auth::AuthState;
#[cfg(feature = "csr")]
use crate::{net::submit::sign_out, state::session::BrowserSession};

/// Best display name from the server payload.
#[must_use]
pub fn display_name(payload: &AuthPayload) -> &str {
    payload
        .field("fullname")
        .or_else(|| payload.field("username"))
        .unwrap_or("there")
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let greeting = move || {
        auth.with(|state| state.user.as_ref().filter(|_| state.is_authenticated()).map(|u| display_name(u).to_owned()))
    };

    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        sign_out(&BrowserSession, &auth);
    };

    view! {
        <section class="home-page">
            {move || match greeting() {
                Some(name) => {
                    view! {
                        <h1>"Hi, " {name}</h1>
                        <button class="btn-light" on:click=on_sign_out>
                            "Sign out"
                        </button>
                    }
                        .into_any()
                }
                None => {
                    view! {
                        <h1>"Welcome"</h1>
                        <a href="/signin" class="btn-dark">"Sign in"</a>
                        <a href="/signup" class="btn-light">"Sign up"</a>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
