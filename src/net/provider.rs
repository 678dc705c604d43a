//! External identity provider bridge.
//!
//! The page loads the Google auth SDK and exposes a global
//! `authWithGoogle()` that opens the popup and resolves to a user object
//! carrying `accessToken`. Only the token crosses into Rust.

#![allow(clippy::unused_async)]

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    #[error("provider popup failed: {0}")]
    Popup(String),
    #[error("provider returned no access token")]
    MissingToken,
}

/// Async source of a third-party access token.
#[async_trait(?Send)]
pub trait IdentityProvider {
    async fn access_token(&self) -> Result<String, ProviderError>;
}

/// Google popup flow driven by the page's `authWithGoogle` function.
#[derive(Debug, Clone, Copy, Default)]
pub struct GooglePopup;

#[cfg(feature = "csr")]
mod ffi {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(catch, js_name = authWithGoogle)]
        pub async fn auth_with_google() -> Result<JsValue, JsValue>;
    }
}

#[async_trait(?Send)]
impl IdentityProvider for GooglePopup {
    async fn access_token(&self) -> Result<String, ProviderError> {
        #[cfg(feature = "csr")]
        {
            let user = ffi::auth_with_google()
                .await
                .map_err(|e| ProviderError::Popup(format!("{e:?}")))?;
            let token = js_sys::Reflect::get(&user, &wasm_bindgen::JsValue::from_str("accessToken"))
                .map_err(|e| ProviderError::Popup(format!("{e:?}")))?;
            token
                .as_string()
                .filter(|t| !t.is_empty())
                .ok_or(ProviderError::MissingToken)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ProviderError::Popup("not available outside the browser".to_owned()))
        }
    }
}
