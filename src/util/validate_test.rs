use super::*;

fn input(fullname: Option<&str>, email: &str, password: &str) -> CredentialInput {
    CredentialInput {
        fullname: fullname.map(str::to_owned),
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

// =============================================================
// Email
// =============================================================

#[test]
fn email_accepts_short_tld() {
    assert!(is_valid_email("a@b.co"));
}

#[test]
fn email_rejects_missing_tld() {
    assert!(!is_valid_email("a@b"));
}

#[test]
fn email_accepts_separators_and_subdomains() {
    assert!(is_valid_email("first.last@mail.example.com"));
    assert!(is_valid_email("first-last_1@my-host.org"));
    assert!(is_valid_email("USER@EXAMPLE.COM"));
}

#[test]
fn email_rejects_malformed_addresses() {
    assert!(!is_valid_email("a..b@example.com"));
    assert!(!is_valid_email(".a@example.com"));
    assert!(!is_valid_email("a@example.comma"));
    assert!(!is_valid_email("a b@example.com"));
    assert!(!is_valid_email("a@@example.com"));
    assert!(!is_valid_email("ünï@example.com"));
}

// =============================================================
// Password
// =============================================================

#[test]
fn password_accepts_minimal_valid_value() {
    assert!(is_valid_password("Abc123"));
}

#[test]
fn password_rejects_missing_uppercase() {
    assert!(!is_valid_password("abc123"));
}

#[test]
fn password_rejects_missing_lowercase() {
    assert!(!is_valid_password("ABCDEFG1"));
}

#[test]
fn password_rejects_missing_digit() {
    assert!(!is_valid_password("Abcdefg"));
}

#[test]
fn password_rejects_too_short() {
    assert!(!is_valid_password("Ab1"));
}

#[test]
fn password_length_bounds_are_inclusive() {
    assert!(is_valid_password("Abcdefghijklmnopqr12"));
    assert!(!is_valid_password("Abcdefghijklmnopqrs12"));
}

#[test]
fn password_length_counts_utf16_units() {
    // Each emoji is two UTF-16 units: 3 + 2 + 2 = 7.
    assert!(is_valid_password("Ab1\u{1F600}\u{1F600}"));
    // 3 + 2 = 5 units is still too short.
    assert!(!is_valid_password("Ab1\u{1F600}"));
    // 10 emoji plus "Ab1" is 23 units, over the limit despite 13 chars.
    let long = format!("Ab1{}", "\u{1F600}".repeat(10));
    assert!(!is_valid_password(&long));
}

#[test]
fn password_rejects_line_terminators() {
    assert!(!is_valid_password("Abc123\n"));
}

// =============================================================
// Ordered validation
// =============================================================

#[test]
fn valid_sign_up_passes() {
    let value = input(Some("Alice"), "alice@example.com", "Secret123");
    assert_eq!(validate_credentials(AuthMode::SignUp, &value), Ok(()));
}

#[test]
fn short_fullname_rejected_on_sign_up() {
    let value = input(Some("Al"), "alice@example.com", "Secret123");
    assert_eq!(validate_credentials(AuthMode::SignUp, &value), Err(ValidationError::FullnameTooShort));
}

#[test]
fn empty_fullname_is_treated_as_absent() {
    let value = input(Some(""), "alice@example.com", "Secret123");
    assert_eq!(validate_credentials(AuthMode::SignUp, &value), Ok(()));
}

#[test]
fn fullname_length_counts_utf16_units() {
    // One emoji plus one letter is 3 units.
    let value = input(Some("\u{1F600}a"), "alice@example.com", "Secret123");
    assert_eq!(validate_credentials(AuthMode::SignUp, &value), Ok(()));

    let value = input(Some("\u{1F600}"), "alice@example.com", "Secret123");
    assert_eq!(validate_credentials(AuthMode::SignUp, &value), Err(ValidationError::FullnameTooShort));
}

#[test]
fn fullname_ignored_on_sign_in() {
    let value = input(Some("Al"), "alice@example.com", "Secret123");
    assert_eq!(validate_credentials(AuthMode::SignIn, &value), Ok(()));
}

#[test]
fn first_failure_wins() {
    let value = input(Some("Al"), "", "weak");
    assert_eq!(validate_credentials(AuthMode::SignUp, &value), Err(ValidationError::FullnameTooShort));

    let value = input(None, "", "weak");
    assert_eq!(validate_credentials(AuthMode::SignIn, &value), Err(ValidationError::EmailMissing));

    let value = input(None, "not-an-email", "weak");
    assert_eq!(validate_credentials(AuthMode::SignIn, &value), Err(ValidationError::EmailInvalid));

    let value = input(None, "a@b.co", "weak");
    assert_eq!(validate_credentials(AuthMode::SignIn, &value), Err(ValidationError::PasswordInvalid));
}

#[test]
fn messages_match_toast_text() {
    assert_eq!(ValidationError::FullnameTooShort.to_string(), "Fullname must be at least 3 letters long");
    assert_eq!(ValidationError::EmailMissing.to_string(), "Enter Email");
    assert_eq!(ValidationError::EmailInvalid.to_string(), "Email is invalid");
    assert_eq!(
        ValidationError::PasswordInvalid.to_string(),
        "Password should be 6 to 20 characters long with a numeric, 1 lowercase and 1 uppercase letters"
    );
}
