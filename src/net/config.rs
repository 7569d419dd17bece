//! Compile-time endpoint configuration.
//!
//! The browser bundle has no process environment, so deployment values are
//! baked in at build time; `option_env!` lets CI override the local-dev
//! defaults without code changes.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL of the hosted backend (auth + row REST interface).
#[must_use]
pub fn backend_url() -> &'static str {
    option_env!("MIRATH_BACKEND_URL").unwrap_or("http://localhost:54321")
}

/// Public API key sent with every backend request.
#[must_use]
pub fn anon_key() -> &'static str {
    option_env!("MIRATH_ANON_KEY").unwrap_or("local-anon-key")
}

/// Auth endpoint root (`/token`, `/signup`, `/logout` live under it).
#[must_use]
pub fn auth_base() -> String {
    format!("{}/auth/v1", backend_url())
}

/// Row REST endpoint root (one resource per table under it).
#[must_use]
pub fn rest_base() -> String {
    format!("{}/rest/v1", backend_url())
}

/// CDN pull-zone host serving images and podcast audio.
#[must_use]
pub fn cdn_host() -> &'static str {
    option_env!("MIRATH_CDN_HOST").unwrap_or("mirath-media.b-cdn.net")
}

/// Stream library id for the CDN's hosted video player.
#[must_use]
pub fn stream_library() -> &'static str {
    option_env!("MIRATH_STREAM_LIBRARY").unwrap_or("214031")
}
