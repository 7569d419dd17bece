//! Local credential validation ahead of Credential Store calls.
//!
//! The first failing rule short-circuits with a structured error value;
//! nothing here talks to the network, so a rejected form never costs a
//! round trip. Remote errors are a separate concern (`net::api`).

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Minimum password length accepted at sign-in.
pub const SIGN_IN_MIN_PASSWORD: usize = 6;
/// Minimum password length accepted at sign-up.
pub const SIGN_UP_MIN_PASSWORD: usize = 8;

/// Local validation failure, returned as a value, never thrown.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CredentialError {
    #[error("email and password are required")]
    MissingFields,
    #[error("invalid email address")]
    InvalidEmail,
    #[error("password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("password must mix uppercase, lowercase, and digits")]
    PasswordTooWeak,
}

/// Character classes present in a password.
///
/// `special` is reported for the strength hint but is not required.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PasswordClasses {
    pub upper: bool,
    pub lower: bool,
    pub digit: bool,
    pub special: bool,
}

impl PasswordClasses {
    /// The classes sign-up requires.
    #[must_use]
    pub fn satisfies_signup(self) -> bool {
        self.upper && self.lower && self.digit
    }
}

#[must_use]
pub fn classify_password(password: &str) -> PasswordClasses {
    let mut classes = PasswordClasses::default();
    for c in password.chars() {
        if c.is_ascii_uppercase() {
            classes.upper = true;
        } else if c.is_ascii_lowercase() {
            classes.lower = true;
        } else if c.is_ascii_digit() {
            classes.digit = true;
        } else {
            classes.special = true;
        }
    }
    classes
}

/// Shape check for `local@domain.tld`.
///
/// Deliberately coarse: the Credential Store is the authority on
/// deliverability, this only catches obvious typos before a round trip.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let parts = email.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return false;
    }
    let domain = parts[1];
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

/// Sign-in gate: both fields present, password not trivially short.
pub fn validate_sign_in(email: &str, password: &str) -> Result<(), CredentialError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(CredentialError::MissingFields);
    }
    if password.len() < SIGN_IN_MIN_PASSWORD {
        return Err(CredentialError::PasswordTooShort(SIGN_IN_MIN_PASSWORD));
    }
    Ok(())
}

/// Sign-up gate: ordered rule chain, first failure wins.
pub fn validate_sign_up(email: &str, password: &str) -> Result<(), CredentialError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(CredentialError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(CredentialError::InvalidEmail);
    }
    if password.len() < SIGN_UP_MIN_PASSWORD {
        return Err(CredentialError::PasswordTooShort(SIGN_UP_MIN_PASSWORD));
    }
    if !classify_password(password).satisfies_signup() {
        return Err(CredentialError::PasswordTooWeak);
    }
    Ok(())
}
