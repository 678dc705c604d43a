//! # authform
//!
//! Leptos + WASM sign-in / sign-up form for the web client.
//!
//! This crate contains the form page, credential validation, the submitter
//! that talks to the auth server, and the client-side session state that
//! the rest of the UI reads to decide whether a user is logged in.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and mounts `App` into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
