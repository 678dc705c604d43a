//! Client-side credential validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs before any network call. Rules are checked in a fixed order and the
//! first failure wins, so the user only ever sees one message per attempt.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::net::types::{AuthMode, CredentialInput};

pub const MIN_FULLNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_PASSWORD_LEN: usize = 20;

// ASCII word characters, optional single `.`/`-` separators, and one or more
// 2-3 character trailing segments.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i-u)^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$").expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Fullname must be at least 3 letters long")]
    FullnameTooShort,
    #[error("Enter Email")]
    EmailMissing,
    #[error("Email is invalid")]
    EmailInvalid,
    #[error("Password should be 6 to 20 characters long with a numeric, 1 lowercase and 1 uppercase letters")]
    PasswordInvalid,
}

/// Validate a submission attempt for `mode`.
///
/// # Errors
///
/// Returns the first rule the input violates.
pub fn validate_credentials(mode: AuthMode, input: &CredentialInput) -> Result<(), ValidationError> {
    if mode == AuthMode::SignUp {
        if let Some(name) = input.fullname.as_deref().filter(|n| !n.is_empty()) {
            if utf16_len(name) < MIN_FULLNAME_LEN {
                return Err(ValidationError::FullnameTooShort);
            }
        }
    }
    if input.email.is_empty() {
        return Err(ValidationError::EmailMissing);
    }
    if !is_valid_email(&input.email) {
        return Err(ValidationError::EmailInvalid);
    }
    if !is_valid_password(&input.password) {
        return Err(ValidationError::PasswordInvalid);
    }
    Ok(())
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// 6 to 20 characters with at least one ASCII digit, lowercase and
/// uppercase letter. Line terminators never count as characters.
///
/// Lengths are UTF-16 code units, so a character outside the BMP counts twice.
#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    if password.chars().any(is_line_terminator) {
        return false;
    }
    let len = utf16_len(password);
    (MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len)
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
}

/// Length as the browser reports it for a string value.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
