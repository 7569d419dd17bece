//! Pure authorization and session-validity derivations.
//!
//! DESIGN
//! ======
//! Every function here is a synchronous, side-effect-free read of an
//! `AuthState` snapshot. Verdicts are never cached; callers re-evaluate
//! against the latest snapshot each time. Time-dependent checks take
//! `now_ms` explicitly so tests control the clock; the `*_now` wrappers
//! supply the ambient clock for UI callers.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use crate::state::auth::AuthState;
use crate::util::time;

/// Role string that grants full administrative access.
pub const ADMIN_ROLE: &str = "admin";

/// Warning window before expiry, in milliseconds (5 minutes).
pub const EXPIRY_WARNING_WINDOW_MS: f64 = 300_000.0;

/// Whether the profile carries administrative rights.
///
/// Fails closed: an absent profile is never an admin.
#[must_use]
pub fn is_admin(auth: &AuthState) -> bool {
    auth.profile
        .as_ref()
        .is_some_and(|p| p.role == ADMIN_ROLE || p.is_admin)
}

/// Whether the profile holds a specific permission.
///
/// Admins hold every permission implicitly, regardless of the set.
#[must_use]
pub fn has_permission(auth: &AuthState, permission: &str) -> bool {
    if is_admin(auth) {
        return true;
    }
    auth.profile
        .as_ref()
        .is_some_and(|p| p.permissions.iter().any(|held| held == permission))
}

/// Whether the admin area may be entered: admin rights AND a confirmed
/// email address. An unconfirmed admin is not yet authorized.
#[must_use]
pub fn can_access_admin(auth: &AuthState) -> bool {
    let confirmed = auth
        .user
        .as_ref()
        .is_some_and(|u| u.email_confirmed_at.is_some());
    is_admin(auth) && confirmed
}

/// Session validity at a given instant.
///
/// Session timestamps are epoch seconds; the comparison happens in
/// milliseconds.
#[must_use]
pub fn is_session_valid_at(auth: &AuthState, now_ms: f64) -> bool {
    auth.session
        .as_ref()
        .is_some_and(|s| (s.expires_at as f64) * 1000.0 > now_ms)
}

/// Whether a valid session has less than the warning window remaining.
///
/// A UI notice trigger only, never an enforcement point: an expired
/// session is not "expiring soon".
#[must_use]
pub fn is_session_expiring_soon_at(auth: &AuthState, now_ms: f64) -> bool {
    let Some(session) = auth.session.as_ref() else {
        return false;
    };
    let expires_ms = (session.expires_at as f64) * 1000.0;
    expires_ms > now_ms && expires_ms - now_ms < EXPIRY_WARNING_WINDOW_MS
}

/// [`is_session_valid_at`] against the ambient clock.
#[must_use]
pub fn is_session_valid(auth: &AuthState) -> bool {
    is_session_valid_at(auth, time::now_ms())
}

/// [`is_session_expiring_soon_at`] against the ambient clock.
#[must_use]
pub fn is_session_expiring_soon(auth: &AuthState) -> bool {
    is_session_expiring_soon_at(auth, time::now_ms())
}
