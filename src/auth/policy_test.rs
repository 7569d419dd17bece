use uuid::Uuid;

use crate::net::types::{Profile, Session, User};
use crate::state::auth::AuthState;

use super::*;

fn profile(role: &str, is_admin: bool, permissions: &[&str]) -> Profile {
    Profile {
        role: role.to_owned(),
        is_admin,
        permissions: permissions.iter().map(|p| (*p).to_owned()).collect(),
        full_name: "Vatma Mint Salem".to_owned(),
        username: "vatma".to_owned(),
        avatar_url: None,
    }
}

fn user(confirmed: bool) -> User {
    User {
        id: Uuid::nil(),
        email: "staff@example.com".to_owned(),
        email_confirmed_at: confirmed.then(|| "2026-08-01T10:00:00Z".to_owned()),
    }
}

fn session_expiring_at(expires_at: i64) -> Session {
    Session {
        access_token: "tok".to_owned(),
        token_type: "bearer".to_owned(),
        expires_at,
        refresh_token: "ref".to_owned(),
    }
}

fn state(user: Option<User>, profile: Option<Profile>, session: Option<Session>) -> AuthState {
    AuthState {
        user,
        profile,
        session,
        loading: false,
    }
}

// =============================================================
// is_admin
// =============================================================

#[test]
fn admin_by_role() {
    let auth = state(None, Some(profile("admin", false, &[])), None);
    assert!(is_admin(&auth));
}

#[test]
fn admin_by_flag() {
    let auth = state(None, Some(profile("editor", true, &[])), None);
    assert!(is_admin(&auth));
}

#[test]
fn non_admin_profile() {
    let auth = state(None, Some(profile("editor", false, &[])), None);
    assert!(!is_admin(&auth));
}

#[test]
fn absent_profile_fails_closed() {
    let auth = state(None, None, None);
    assert!(!is_admin(&auth));
}

// =============================================================
// has_permission
// =============================================================

#[test]
fn admin_holds_every_permission() {
    let auth = state(None, Some(profile("admin", false, &[])), None);
    assert!(has_permission(&auth, "publish"));
    assert!(has_permission(&auth, "anything.at.all"));
}

#[test]
fn member_permission_is_honored() {
    let auth = state(None, Some(profile("editor", false, &["publish", "content.edit"])), None);
    assert!(has_permission(&auth, "publish"));
    assert!(has_permission(&auth, "content.edit"));
}

#[test]
fn missing_permission_is_denied() {
    let auth = state(None, Some(profile("editor", false, &["publish"])), None);
    assert!(!has_permission(&auth, "content.delete"));
}

#[test]
fn no_profile_has_no_permissions() {
    let auth = state(None, None, None);
    assert!(!has_permission(&auth, "publish"));
}

// =============================================================
// can_access_admin
// =============================================================

#[test]
fn confirmed_admin_may_enter() {
    let auth = state(Some(user(true)), Some(profile("admin", false, &[])), None);
    assert!(can_access_admin(&auth));
}

#[test]
fn unconfirmed_admin_may_not_enter() {
    let auth = state(Some(user(false)), Some(profile("admin", false, &[])), None);
    assert!(!can_access_admin(&auth));
}

#[test]
fn confirmed_non_admin_may_not_enter() {
    let auth = state(Some(user(true)), Some(profile("editor", false, &["publish"])), None);
    assert!(!can_access_admin(&auth));
}

// =============================================================
// Session validity
// =============================================================

#[test]
fn no_session_is_invalid() {
    let auth = state(None, None, None);
    assert!(!is_session_valid_at(&auth, 0.0));
}

#[test]
fn past_expiry_is_invalid() {
    // expires_at ten seconds in the past.
    let auth = state(None, None, Some(session_expiring_at(1_000)));
    assert!(!is_session_valid_at(&auth, 1_010_000.0));
}

#[test]
fn future_expiry_is_valid() {
    let auth = state(None, None, Some(session_expiring_at(2_000)));
    assert!(is_session_valid_at(&auth, 1_000_000.0));
}

#[test]
fn expiry_boundary_is_invalid() {
    // now == expires_at exactly: no longer valid.
    let auth = state(None, None, Some(session_expiring_at(1_000)));
    assert!(!is_session_valid_at(&auth, 1_000_000.0));
}

// =============================================================
// Expiring soon
// =============================================================

#[test]
fn expiring_soon_requires_a_session() {
    let auth = state(None, None, None);
    assert!(!is_session_expiring_soon_at(&auth, 0.0));
}

#[test]
fn already_expired_is_not_expiring_soon() {
    let auth = state(None, None, Some(session_expiring_at(1_000)));
    assert!(!is_session_expiring_soon_at(&auth, 1_000_000.0));
    assert!(!is_session_expiring_soon_at(&auth, 2_000_000.0));
}

#[test]
fn inside_warning_window() {
    let auth = state(None, None, Some(session_expiring_at(1_000)));
    // 299 999 ms remaining — inside the 5-minute window.
    assert!(is_session_expiring_soon_at(&auth, 1_000_000.0 - EXPIRY_WARNING_WINDOW_MS + 1.0));
    // 1 ms remaining.
    assert!(is_session_expiring_soon_at(&auth, 999_999.0));
}

#[test]
fn outside_warning_window() {
    let auth = state(None, None, Some(session_expiring_at(1_000)));
    // Exactly 5 minutes remaining — not yet inside the window.
    assert!(!is_session_expiring_soon_at(&auth, 1_000_000.0 - EXPIRY_WARNING_WINDOW_MS));
    // An hour remaining.
    assert!(!is_session_expiring_soon_at(&auth, 1_000_000.0 - 3_600_000.0));
}

#[test]
fn expiring_soon_implies_valid() {
    let auth = state(None, None, Some(session_expiring_at(1_000)));
    let now = 999_000.0;
    assert!(is_session_expiring_soon_at(&auth, now));
    assert!(is_session_valid_at(&auth, now));
}
