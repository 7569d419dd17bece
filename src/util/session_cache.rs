//! Cached copy of the last successful authentication response.
//!
//! The Credential Store owns the session of record; this cache only lets a
//! page reload resume without a fresh sign-in. Expiry is re-checked against
//! the clock on every load, so a stale cache is never trusted.

use crate::net::types::AuthResponse;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "mirath_session";

/// Load the cached authentication response, if any.
///
/// Returns `None` on missing, unreadable, or undecodable entries; a broken
/// cache entry is treated the same as no cache at all.
#[must_use]
pub fn load() -> Option<AuthResponse> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        let raw = storage.get_item(STORAGE_KEY).ok()??;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist the authentication response after a successful sign-in.
pub fn store(auth: &AuthResponse) {
    #[cfg(feature = "hydrate")]
    {
        if let Ok(raw) = serde_json::to_string(auth) {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(STORAGE_KEY, &raw);
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Drop the cached session on sign-out or detected expiry.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
