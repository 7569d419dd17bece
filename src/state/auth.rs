#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{Profile, Session, User};

/// Authentication state: the process-wide session snapshot.
///
/// Mirrors the Credential Store's session, user, and profile records
/// read-only. There is a single writer (sign-in/sign-out actions and the
/// bootstrap effect); everything else reads snapshots through the signal.
/// The three records are always committed and torn down together.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub profile: Option<Profile>,
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        // Loading until the bootstrap effect settles, so guards hold their
        // verdict instead of bouncing an already-signed-in user to login.
        Self {
            user: None,
            profile: None,
            session: None,
            loading: true,
        }
    }
}

impl AuthState {
    /// Commit a successful sign-in or bootstrap in one update.
    pub fn establish(&mut self, session: Session, user: User, profile: Option<Profile>) {
        self.session = Some(session);
        self.user = Some(user);
        self.profile = profile;
        self.loading = false;
    }

    /// Tear down all auth records atomically on sign-out or detected expiry.
    pub fn clear(&mut self) {
        self.session = None;
        self.user = None;
        self.profile = None;
        self.loading = false;
    }

    /// Bearer token of the current session, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.session.as_ref().map(|s| s.access_token.clone())
    }
}
