use super::*;

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn accepts_standard_addresses() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("staff.user@mirath-heritage.mr"));
}

#[test]
fn rejects_missing_parts() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("bad-email"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("user@"));
    assert!(!is_valid_email("a@b@c.com"));
}

#[test]
fn rejects_domains_without_tld() {
    assert!(!is_valid_email("user@localhost"));
    assert!(!is_valid_email("user@domain."));
    assert!(!is_valid_email("user@.com"));
}

#[test]
fn rejects_whitespace() {
    assert!(!is_valid_email("user @example.com"));
    assert!(!is_valid_email("user@exa mple.com"));
}

// =============================================================
// classify_password
// =============================================================

#[test]
fn classify_reports_each_class() {
    let classes = classify_password("Passw0rd!");
    assert!(classes.upper);
    assert!(classes.lower);
    assert!(classes.digit);
    assert!(classes.special);
}

#[test]
fn special_characters_are_reported_but_not_required() {
    let classes = classify_password("Passw0rd");
    assert!(!classes.special);
    assert!(classes.satisfies_signup());
}

#[test]
fn missing_classes_fail_signup_requirement() {
    assert!(!classify_password("password1").satisfies_signup());
    assert!(!classify_password("PASSWORD1").satisfies_signup());
    assert!(!classify_password("Password").satisfies_signup());
}

// =============================================================
// validate_sign_in
// =============================================================

#[test]
fn sign_in_requires_both_fields() {
    assert_eq!(validate_sign_in("", "secret1"), Err(CredentialError::MissingFields));
    assert_eq!(validate_sign_in("a@b.com", ""), Err(CredentialError::MissingFields));
    assert_eq!(validate_sign_in("   ", "secret1"), Err(CredentialError::MissingFields));
}

#[test]
fn sign_in_rejects_short_passwords() {
    assert_eq!(
        validate_sign_in("a@b.com", "12345"),
        Err(CredentialError::PasswordTooShort(SIGN_IN_MIN_PASSWORD))
    );
}

#[test]
fn sign_in_passes_minimal_credentials() {
    // Sign-in is intentionally laxer than sign-up: existing accounts may
    // predate the composition rules.
    assert_eq!(validate_sign_in("a@b.com", "123456"), Ok(()));
    assert_eq!(validate_sign_in("not-an-email", "123456"), Ok(()));
}

// =============================================================
// validate_sign_up
// =============================================================

#[test]
fn sign_up_accepts_compliant_credentials() {
    assert_eq!(validate_sign_up("a@b.com", "Passw0rd"), Ok(()));
}

#[test]
fn sign_up_rejects_bad_email_before_password_rules() {
    // "short" would also fail the length rule; the email rule fires first.
    assert_eq!(validate_sign_up("bad-email", "short"), Err(CredentialError::InvalidEmail));
    assert_eq!(validate_sign_up("bad-email", "Passw0rd"), Err(CredentialError::InvalidEmail));
}

#[test]
fn sign_up_rejects_short_passwords() {
    assert_eq!(
        validate_sign_up("a@b.com", "short"),
        Err(CredentialError::PasswordTooShort(SIGN_UP_MIN_PASSWORD))
    );
    assert_eq!(
        validate_sign_up("a@b.com", "Pw0rd"),
        Err(CredentialError::PasswordTooShort(SIGN_UP_MIN_PASSWORD))
    );
}

#[test]
fn sign_up_rejects_weak_composition() {
    assert_eq!(validate_sign_up("a@b.com", "password1"), Err(CredentialError::PasswordTooWeak));
    assert_eq!(validate_sign_up("a@b.com", "PASSWORD1"), Err(CredentialError::PasswordTooWeak));
    assert_eq!(validate_sign_up("a@b.com", "Passwords"), Err(CredentialError::PasswordTooWeak));
}

#[test]
fn sign_up_missing_fields_fire_before_everything() {
    assert_eq!(validate_sign_up("", ""), Err(CredentialError::MissingFields));
    assert_eq!(validate_sign_up("bad-email", ""), Err(CredentialError::MissingFields));
}
