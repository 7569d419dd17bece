//! Wire types mirrored from the Credential Store and content tables.
//!
//! All of these are owned by the backend; this module only names the fields
//! the UI reads. Auth types are mirrored read-only into `state::auth` and
//! torn down together on sign-out.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// AUTH
// =============================================================================

/// Time-bounded proof of authentication issued by the Credential Store.
///
/// `expires_at` is epoch seconds; validity comparisons happen in
/// milliseconds (see `auth::policy`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: i64,
    pub refresh_token: String,
}

/// Account record from the Credential Store.
///
/// Existence implies "authenticated", never "authorized"; authorization is
/// derived from the [`Profile`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub email_confirmed_at: Option<String>,
}

/// Application-level role/permission record, one per authenticated user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub role: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub permissions: Vec<String>,
    pub full_name: String,
    pub username: String,
    pub avatar_url: Option<String>,
}

/// Successful sign-in/sign-up payload: token fields at the top level with
/// the user record nested, exactly as the auth endpoint returns them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub session: Session,
    pub user: User,
}

/// Extra account fields passed through to sign-up unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpData {
    pub full_name: String,
    pub username: String,
}

// =============================================================================
// CONTENT ROWS
// =============================================================================

/// Publication state of a content row.
///
/// Public pages only ever query `published`; admin tables see all three.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl ContentStatus {
    /// Wire form, matching the serde representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

/// Short news item shown on the home page and news feed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: Uuid,
    pub title_ar: String,
    pub title_fr: String,
    pub body_ar: String,
    pub body_fr: String,
    pub cover_path: Option<String>,
    pub status: ContentStatus,
    pub published_at: Option<String>,
}

/// Long-form article with an author byline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,
    pub title_ar: String,
    pub title_fr: String,
    pub body_ar: String,
    pub body_fr: String,
    pub author: String,
    pub cover_path: Option<String>,
    pub status: ContentStatus,
    pub published_at: Option<String>,
}

/// Podcast episode; audio lives on the CDN pull zone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Podcast {
    pub id: Uuid,
    pub title_ar: String,
    pub title_fr: String,
    pub description_ar: String,
    pub description_fr: String,
    pub audio_path: String,
    pub duration_secs: u32,
    pub status: ContentStatus,
    pub published_at: Option<String>,
}

/// Recurring broadcast program with a free-form schedule string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: Uuid,
    pub name_ar: String,
    pub name_fr: String,
    pub description_ar: String,
    pub description_fr: String,
    pub schedule: String,
    pub cover_path: Option<String>,
    pub status: ContentStatus,
}

/// Video library entry; `video_id` is the CDN stream GUID.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VideoItem {
    pub id: Uuid,
    pub title_ar: String,
    pub title_fr: String,
    pub video_id: String,
    pub duration_secs: u32,
    pub status: ContentStatus,
    pub published_at: Option<String>,
}

/// Embedded social network post surfaced on the home page strip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialPost {
    pub id: Uuid,
    pub network: String,
    pub url: String,
    pub excerpt: String,
    pub posted_at: Option<String>,
}
