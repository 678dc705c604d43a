//! Wire types shared by the form, the submitter and the session store.
//!
//! DESIGN
//! ======
//! The server's success payload is treated as opaque: only `access_token`
//! is typed, everything else is carried through untouched so the stored
//! session entry matches what the server sent.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Which form is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    #[must_use]
    pub fn route(self) -> AuthRoute {
        match self {
            Self::SignIn => AuthRoute::SignIn,
            Self::SignUp => AuthRoute::SignUp,
        }
    }

    /// Mode name as the form page knows it.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::SignIn => "sign-in",
            Self::SignUp => "sign-up",
        }
    }

    /// Submit button text: the slug with its hyphen replaced by a space.
    #[must_use]
    pub fn label(self) -> String {
        self.slug().replace('-', " ")
    }
}

/// Server endpoints the form can post to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRoute {
    SignIn,
    SignUp,
    GoogleAuth,
}

impl AuthRoute {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::SignIn => "/signin",
            Self::SignUp => "/signup",
            Self::GoogleAuth => "/google-auth",
        }
    }
}

/// Raw form field values for one submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialInput {
    pub fullname: Option<String>,
    pub email: String,
    pub password: String,
}

/// JSON body posted to an auth route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AuthBody {
    Credentials {
        #[serde(skip_serializing_if = "Option::is_none")]
        fullname: Option<String>,
        email: String,
        password: String,
    },
    Provider {
        access_token: String,
    },
}

/// A route plus the body to send to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthRequest {
    pub route: AuthRoute,
    pub body: AuthBody,
}

impl AuthRequest {
    /// Request for the form in `mode`. Sign-in never carries a full name.
    #[must_use]
    pub fn credentials(mode: AuthMode, input: CredentialInput) -> Self {
        let fullname = match mode {
            AuthMode::SignIn => None,
            AuthMode::SignUp => input.fullname,
        };
        Self {
            route: mode.route(),
            body: AuthBody::Credentials { fullname, email: input.email, password: input.password },
        }
    }

    #[must_use]
    pub fn provider(access_token: String) -> Self {
        Self { route: AuthRoute::GoogleAuth, body: AuthBody::Provider { access_token } }
    }
}

/// Successful auth response. Unknown fields are preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub access_token: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AuthPayload {
    /// Look up a string field the server sent alongside the token.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(serde_json::Value::as_str)
    }
}

/// Failure body: `{"error": "..."}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
