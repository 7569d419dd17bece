//! REST client for the Credential Store and content tables.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/empty/`Unavailable` since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Sign-in/sign-up run local validation first and reject without a network
//! round trip; remote failures pass the backend's message through
//! unchanged. Content reads degrade to empty lists with a logged warning
//! so a backend hiccup never crashes a public page.

#![allow(clippy::unused_async)]

use uuid::Uuid;

use crate::auth::validate::{self, CredentialError};
use crate::net::types::{
    Article, AuthResponse, ContentStatus, NewsItem, Podcast, Profile, Program, SignUpData,
    SocialPost, VideoItem,
};
#[cfg(feature = "hydrate")]
use crate::net::{config, query};

/// Failure of a backend call, local or remote.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Rejected locally before any network call.
    #[error(transparent)]
    Credentials(#[from] CredentialError),
    /// The backend answered with an error; its message is preserved.
    #[error("{message}")]
    Backend { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

// =============================================================================
// INTERNALS (browser only)
// =============================================================================

#[cfg(feature = "hydrate")]
async fn backend_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    // Auth errors come back as `error_description` or `msg`; row endpoints
    // use `message`. Fall back to the bare status.
    let message = resp
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| {
            ["error_description", "msg", "message"]
                .into_iter()
                .find_map(|key| body.get(key).and_then(|v| v.as_str()).map(str::to_owned))
        })
        .unwrap_or_else(|| format!("request failed with status {status}"));
    ApiError::Backend { status, message }
}

#[cfg(feature = "hydrate")]
async fn get_rows<T: serde::de::DeserializeOwned>(
    table: &str,
    params: &[String],
    token: Option<&str>,
) -> Result<Vec<T>, ApiError> {
    let url = query::table_url(&config::rest_base(), table, params);
    let mut req = gloo_net::http::Request::get(&url).header("apikey", config::anon_key());
    if let Some(token) = token {
        req = req.header("Authorization", &format!("Bearer {token}"));
    }
    let resp = req.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(backend_error(resp).await);
    }
    resp.json::<Vec<T>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn rows_or_empty<T: serde::de::DeserializeOwned>(
    table: &str,
    params: &[String],
    token: Option<&str>,
) -> Vec<T> {
    match get_rows(table, params, token).await {
        Ok(rows) => rows,
        Err(e) => {
            log::warn!("{table} fetch failed: {e}");
            Vec::new()
        }
    }
}

#[cfg(feature = "hydrate")]
fn published_params(order_column: &str, limit: Option<u32>) -> Vec<String> {
    let mut params = vec![query::select_all(), query::published(), query::order_desc(order_column)];
    if let Some(n) = limit {
        params.push(query::limit(n));
    }
    params
}

// =============================================================================
// AUTH
// =============================================================================

/// Sign in against the Credential Store.
///
/// Local validation rejects malformed credentials without a round trip;
/// otherwise the backend's verdict is returned unchanged.
///
/// # Errors
///
/// [`ApiError::Credentials`] on local rejection, otherwise the remote
/// failure.
pub async fn sign_in(email: &str, password: &str) -> Result<AuthResponse, ApiError> {
    validate::validate_sign_in(email, password)?;
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/token?grant_type=password", config::auth_base());
        let body = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&url)
            .header("apikey", config::anon_key())
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(backend_error(resp).await);
        }
        resp.json::<AuthResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create an account, passing the extra profile fields through unchanged.
///
/// # Errors
///
/// [`ApiError::Credentials`] on local rejection, otherwise the remote
/// failure.
pub async fn sign_up(email: &str, password: &str, data: &SignUpData) -> Result<AuthResponse, ApiError> {
    validate::validate_sign_up(email, password)?;
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/signup", config::auth_base());
        let body = serde_json::json!({ "email": email, "password": password, "data": data });
        let resp = gloo_net::http::Request::post(&url)
            .header("apikey", config::anon_key())
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(backend_error(resp).await);
        }
        resp.json::<AuthResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = data;
        Err(ApiError::Unavailable)
    }
}

/// Revoke the session server-side. Best effort: local teardown must never
/// hinge on this call succeeding.
pub async fn sign_out(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{}/logout", config::auth_base());
        let result = gloo_net::http::Request::post(&url)
            .header("apikey", config::anon_key())
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await;
        if let Err(e) = result {
            log::warn!("sign-out request failed: {e}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Fetch the role/permission profile for a user.
/// Returns `None` when the row is missing or the request fails.
pub async fn fetch_profile(user_id: Uuid, token: &str) -> Option<Profile> {
    #[cfg(feature = "hydrate")]
    {
        let params = [query::select_all(), query::eq("id", &user_id.to_string())];
        get_rows::<Profile>("profiles", &params, Some(token))
            .await
            .ok()?
            .into_iter()
            .next()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, token);
        None
    }
}

// =============================================================================
// PUBLIC CONTENT
// =============================================================================

/// Latest published news, newest first.
pub async fn fetch_published_news(limit: Option<u32>) -> Vec<NewsItem> {
    #[cfg(feature = "hydrate")]
    {
        rows_or_empty("news", &published_params("published_at", limit), None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = limit;
        Vec::new()
    }
}

/// A single published news item.
pub async fn fetch_news_item(id: Uuid) -> Option<NewsItem> {
    #[cfg(feature = "hydrate")]
    {
        let params = [query::select_all(), query::eq("id", &id.to_string()), query::published()];
        get_rows::<NewsItem>("news", &params, None).await.ok()?.into_iter().next()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

/// Latest published articles, newest first.
pub async fn fetch_published_articles(limit: Option<u32>) -> Vec<Article> {
    #[cfg(feature = "hydrate")]
    {
        rows_or_empty("articles", &published_params("published_at", limit), None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = limit;
        Vec::new()
    }
}

/// A single published article.
pub async fn fetch_article(id: Uuid) -> Option<Article> {
    #[cfg(feature = "hydrate")]
    {
        let params = [query::select_all(), query::eq("id", &id.to_string()), query::published()];
        get_rows::<Article>("articles", &params, None).await.ok()?.into_iter().next()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

/// Published podcast episodes, newest first.
pub async fn fetch_published_podcasts() -> Vec<Podcast> {
    #[cfg(feature = "hydrate")]
    {
        rows_or_empty("podcasts", &published_params("published_at", None), None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Published broadcast programs.
pub async fn fetch_published_programs() -> Vec<Program> {
    #[cfg(feature = "hydrate")]
    {
        let params = [query::select_all(), query::published()];
        rows_or_empty("programs", &params, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Published video library entries, newest first.
pub async fn fetch_published_videos() -> Vec<VideoItem> {
    #[cfg(feature = "hydrate")]
    {
        rows_or_empty("videos", &published_params("published_at", None), None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Latest curated social posts for the home strip.
pub async fn fetch_social_posts(limit: Option<u32>) -> Vec<SocialPost> {
    #[cfg(feature = "hydrate")]
    {
        let mut params = vec![query::select_all(), query::order_desc("posted_at")];
        if let Some(n) = limit {
            params.push(query::limit(n));
        }
        rows_or_empty("social_posts", &params, None).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = limit;
        Vec::new()
    }
}

// =============================================================================
// ADMIN
// =============================================================================

/// All news rows regardless of status, for the admin table.
pub async fn fetch_admin_news(token: &str) -> Vec<NewsItem> {
    #[cfg(feature = "hydrate")]
    {
        let params = [query::select_all(), query::order_desc("published_at")];
        rows_or_empty("news", &params, Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Vec::new()
    }
}

/// All article rows regardless of status.
pub async fn fetch_admin_articles(token: &str) -> Vec<Article> {
    #[cfg(feature = "hydrate")]
    {
        let params = [query::select_all(), query::order_desc("published_at")];
        rows_or_empty("articles", &params, Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Vec::new()
    }
}

/// All podcast rows regardless of status.
pub async fn fetch_admin_podcasts(token: &str) -> Vec<Podcast> {
    #[cfg(feature = "hydrate")]
    {
        let params = [query::select_all(), query::order_desc("published_at")];
        rows_or_empty("podcasts", &params, Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Vec::new()
    }
}

/// All program rows regardless of status.
pub async fn fetch_admin_programs(token: &str) -> Vec<Program> {
    #[cfg(feature = "hydrate")]
    {
        let params = [query::select_all()];
        rows_or_empty("programs", &params, Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Vec::new()
    }
}

/// All video rows regardless of status.
pub async fn fetch_admin_videos(token: &str) -> Vec<VideoItem> {
    #[cfg(feature = "hydrate")]
    {
        let params = [query::select_all(), query::order_desc("published_at")];
        rows_or_empty("videos", &params, Some(token)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Vec::new()
    }
}

/// Insert a content row.
///
/// # Errors
///
/// Remote failure, with the backend's message preserved.
pub async fn insert_row(table: &str, row: &serde_json::Value, token: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = query::table_url(&config::rest_base(), table, &[]);
        let resp = gloo_net::http::Request::post(&url)
            .header("apikey", config::anon_key())
            .header("Authorization", &format!("Bearer {token}"))
            .header("Prefer", "return=minimal")
            .json(row)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(backend_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (table, row, token);
        Err(ApiError::Unavailable)
    }
}

/// Update a content row by id.
///
/// # Errors
///
/// Remote failure, with the backend's message preserved.
pub async fn update_row(
    table: &str,
    id: Uuid,
    row: &serde_json::Value,
    token: &str,
) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let params = [query::eq("id", &id.to_string())];
        let url = query::table_url(&config::rest_base(), table, &params);
        let resp = gloo_net::http::Request::patch(&url)
            .header("apikey", config::anon_key())
            .header("Authorization", &format!("Bearer {token}"))
            .header("Prefer", "return=minimal")
            .json(row)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(backend_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (table, id, row, token);
        Err(ApiError::Unavailable)
    }
}

/// Set the status of every selected row in one request.
///
/// An empty selection is a no-op rather than an `in.()` filter that would
/// match nothing and still cost a round trip.
///
/// # Errors
///
/// Remote failure, with the backend's message preserved.
pub async fn bulk_set_status(
    table: &str,
    ids: &[Uuid],
    status: ContentStatus,
    token: &str,
) -> Result<(), ApiError> {
    if ids.is_empty() {
        return Ok(());
    }
    #[cfg(feature = "hydrate")]
    {
        let params = [query::id_in(ids)];
        let url = query::table_url(&config::rest_base(), table, &params);
        let body = serde_json::json!({ "status": status });
        let resp = gloo_net::http::Request::patch(&url)
            .header("apikey", config::anon_key())
            .header("Authorization", &format!("Bearer {token}"))
            .header("Prefer", "return=minimal")
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(backend_error(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (table, status, token);
        Err(ApiError::Unavailable)
    }
}
