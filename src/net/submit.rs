//! Credential submission flow.
//!
//! DESIGN
//! ======
//! Validation gates the request; a successful response is written to the
//! session store first and only then published to the shared auth state,
//! so a failed store write never leaves the UI logged in without a
//! persisted session. Every outcome is returned to the caller, which decides
//! how to surface it (the form page turns errors into toasts).

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use super::api::{AuthApi, RequestError};
use super::provider::{IdentityProvider, ProviderError};
use super::types::{AuthMode, AuthPayload, AuthRequest, CredentialInput};
use crate::state::auth::AuthHandle;
use crate::state::session::{SESSION_KEY, SessionError, SessionStore};
use crate::util::validate::{ValidationError, validate_credentials};

pub const PROVIDER_FAILURE_MESSAGE: &str = "Trouble logging in through Google.";
pub const UNEXPECTED_RESPONSE_MESSAGE: &str = "Unexpected response from the server. Please try again.";
pub const SESSION_FAILURE_MESSAGE: &str = "Could not save your session. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl AuthError {
    /// Text for the toast shown to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Request(RequestError::Server { message, .. }) => message.clone(),
            // Decode detail is serde's text; it only goes to the log.
            Self::Request(RequestError::Decode(_)) => UNEXPECTED_RESPONSE_MESSAGE.to_owned(),
            Self::Request(e) => e.to_string(),
            Self::Provider(_) => PROVIDER_FAILURE_MESSAGE.to_owned(),
            Self::Session(_) => SESSION_FAILURE_MESSAGE.to_owned(),
        }
    }
}

/// Borrowed collaborators for one submission.
pub struct CredentialSubmitter<'a, A: ?Sized, S: ?Sized, H: ?Sized> {
    api: &'a A,
    store: &'a S,
    auth: &'a H,
}

impl<'a, A, S, H> CredentialSubmitter<'a, A, S, H>
where
    A: AuthApi + ?Sized,
    S: SessionStore + ?Sized,
    H: AuthHandle + ?Sized,
{
    pub fn new(api: &'a A, store: &'a S, auth: &'a H) -> Self {
        Self { api, store, auth }
    }

    /// Validate the form fields for `mode` and submit them.
    ///
    /// # Errors
    ///
    /// `Validation` if a field breaks its rule (nothing is sent), otherwise
    /// any request or session failure.
    pub async fn submit_form(&self, mode: AuthMode, input: CredentialInput) -> Result<AuthPayload, AuthError> {
        validate_credentials(mode, &input)?;
        self.submit(AuthRequest::credentials(mode, input)).await
    }

    /// Fetch a token from `provider` and exchange it at `/google-auth`.
    ///
    /// # Errors
    ///
    /// `Provider` if the popup flow fails (nothing is sent), otherwise any
    /// request or session failure.
    pub async fn submit_provider<P: IdentityProvider + ?Sized>(&self, provider: &P) -> Result<AuthPayload, AuthError> {
        let token = provider.access_token().await.map_err(|e| {
            log::error!("provider sign-in failed: {e}");
            AuthError::Provider(e)
        })?;
        self.submit(AuthRequest::provider(token)).await
    }

    async fn submit(&self, request: AuthRequest) -> Result<AuthPayload, AuthError> {
        let payload = self.api.post(&request).await.inspect_err(|e| {
            log::warn!("auth request to {} failed: {e}", request.route.path());
        })?;
        let raw = serde_json::to_string(&payload).map_err(|e| SessionError::Serialize(e.to_string()))?;
        self.store.store(SESSION_KEY, &raw)?;
        self.auth.set_user(payload.clone());
        log::info!("authenticated via {}", request.route.path());
        Ok(payload)
    }
}

/// Forget the persisted session and log the user out.
pub fn sign_out<S, H>(store: &S, auth: &H)
where
    S: SessionStore + ?Sized,
    H: AuthHandle + ?Sized,
{
    store.remove(SESSION_KEY);
    auth.clear();
}
