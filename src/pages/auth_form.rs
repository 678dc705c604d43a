//! Sign-in / sign-up page with email + password and Google auth.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::input_box::InputBox;
use crate::config::AuthConfig;
use crate::net::api::HttpAuthApi;
use crate::net::types::{AuthMode, CredentialInput};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::auth::install_auth_redirect;
#[cfg(feature = "csr")]
use crate::{
    net::{provider::GooglePopup, submit::CredentialSubmitter},
    state::{session::BrowserSession, toast::Notifier},
};

const LOGO_SRC: &str = "/imgs/logo-dark.png";
const GOOGLE_ICON_SRC: &str = "/imgs/google.png";

#[must_use]
pub fn headline(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::SignIn => "Wujudkan Proyek Data Masa Depan",
        AuthMode::SignUp => "Gabung di Projek Sains Data",
    }
}

#[must_use]
pub fn tagline(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::SignIn => "Bergabung bersama kami untuk membuat lebih banyak inovasi yang berkelanjutan.",
        AuthMode::SignUp => "Mulai perjalanan proyek sains data mu di mana pun.",
    }
}

/// Prompt, link text and target for switching to the other form.
#[must_use]
pub fn switch_link(mode: AuthMode) -> (&'static str, &'static str, &'static str) {
    match mode {
        AuthMode::SignIn => ("Belum memiliki Akun?", "Gabung disini", "/signup"),
        AuthMode::SignUp => ("Sudah memiliki Akun?", "Masuk disini.", "/signin"),
    }
}

/// Snapshot the form fields for one submission attempt.
///
/// The full-name field only exists on the sign-up form.
#[must_use]
pub fn collect_input(mode: AuthMode, fullname: String, email: String, password: String) -> CredentialInput {
    CredentialInput { fullname: (mode == AuthMode::SignUp).then_some(fullname), email, password }
}

/// Auth form for `mode`. Redirects to `/` once a token is present.
#[component]
pub fn UserAuthForm(mode: AuthMode) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let api = HttpAuthApi::new(expect_context::<AuthConfig>());

    install_auth_redirect(auth, use_navigate());

    let fullname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let input = collect_input(mode, fullname.get_untracked(), email.get_untracked(), password.get_untracked());

            #[cfg(feature = "csr")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    let store = BrowserSession;
                    let submitter = CredentialSubmitter::new(&api, &store, &auth);
                    if let Err(e) = submitter.submit_form(mode, input).await {
                        toasts.error(&e.user_message());
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&api, input, auth, toasts);
            }
        }
    };

    let on_google = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let store = BrowserSession;
                let submitter = CredentialSubmitter::new(&api, &store, &auth);
                if let Err(e) = submitter.submit_provider(&GooglePopup).await {
                    toasts.error(&e.user_message());
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, auth, toasts);
        }
    };

    let (switch_prompt, switch_text, switch_href) = switch_link(mode);

    view! {
        <section class="auth-page">
            <div class="auth-page__intro">
                <img src=LOGO_SRC class="auth-page__logo" alt="Logo"/>
                <h1 class="auth-page__headline">{headline(mode)}</h1>
                <p class="auth-page__tagline">{tagline(mode)}</p>
            </div>
            <form class="auth-form" on:submit=on_submit>
                {(mode == AuthMode::SignUp)
                    .then(|| {
                        view! {
                            <InputBox
                                name="fullname"
                                input_type="text"
                                placeholder="Full Name"
                                icon="fi-rr-user"
                                value=fullname
                            />
                        }
                    })}
                <InputBox name="email" input_type="email" placeholder="Email" icon="fi-rr-envelope" value=email/>
                <InputBox name="password" input_type="password" placeholder="Password" icon="fi-rr-key" value=password/>

                <button class="btn-dark center auth-form__submit" type="submit">
                    {mode.label()}
                </button>

                <div class="auth-form__divider">
                    <hr/>
                    <p>"or"</p>
                    <hr/>
                </div>

                <button class="btn-dark auth-form__google" type="button" on:click=on_google>
                    <img src=GOOGLE_ICON_SRC class="auth-form__google-icon" alt="Google Icon"/>
                    "Lanjutkan dengan Google"
                </button>

                <p class="auth-form__switch">
                    {switch_prompt}
                    <a href=switch_href class="auth-form__switch-link">
                        {switch_text}
                    </a>
                </p>
            </form>
        </section>
    }
}
