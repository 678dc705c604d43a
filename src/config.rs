//! Auth server configuration.
//!
//! The WASM bundle has no process environment, so `SERVER_DOMAIN` is baked
//! in at compile time; without it requests go to the page's own origin.

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid server domain '{0}': expected an http(s) URL")]
    InvalidDomain(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub server_domain: String,
}

impl AuthConfig {
    /// Build a config for an explicit base URL.
    ///
    /// An empty domain means same-origin requests (`/signin`, ...).
    ///
    /// # Errors
    ///
    /// Returns an error if the domain is non-empty and not an http(s) URL.
    pub fn new(server_domain: &str) -> Result<Self, ConfigError> {
        let server_domain = normalize_domain(server_domain);
        if !server_domain.is_empty() && !server_domain.starts_with("http://") && !server_domain.starts_with("https://")
        {
            return Err(ConfigError::InvalidDomain(server_domain));
        }
        Ok(Self { server_domain })
    }

    /// Build config from the value captured when the crate was compiled.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("SERVER_DOMAIN").unwrap_or_default()).unwrap_or_else(|e| {
            log::warn!("{e}; falling back to same-origin auth requests");
            Self { server_domain: String::new() }
        })
    }

    /// Absolute URL for an auth route path such as `/signin`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.server_domain)
    }
}

fn normalize_domain(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
