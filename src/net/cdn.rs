//! CDN URL construction for images, podcast audio, and hosted video.
//!
//! Images and audio are plain objects on the pull zone; videos use the CDN's
//! hosted player addressed by library id + stream GUID. No request is made
//! here; browsers resolve the URLs directly.

#[cfg(test)]
#[path = "cdn_test.rs"]
mod cdn_test;

use crate::net::config;

const STREAM_EMBED_HOST: &str = "iframe.mediadelivery.net";

/// Pull-zone URL for a stored image.
#[must_use]
pub fn image_url(path: &str) -> String {
    format!("https://{}/{}", config::cdn_host(), path.trim_start_matches('/'))
}

/// Pull-zone URL with an on-the-fly resize parameter.
#[must_use]
pub fn image_url_sized(path: &str, width: u32) -> String {
    format!("{}?width={width}", image_url(path))
}

/// Pull-zone URL for podcast audio.
#[must_use]
pub fn audio_url(path: &str) -> String {
    format!("https://{}/{}", config::cdn_host(), path.trim_start_matches('/'))
}

/// Hosted-player embed URL for a stream GUID.
#[must_use]
pub fn video_embed_url(video_id: &str) -> String {
    format!("https://{STREAM_EMBED_HOST}/embed/{}/{video_id}", config::stream_library())
}

/// Poster frame for a stream GUID, served from the pull zone.
#[must_use]
pub fn video_thumbnail_url(video_id: &str) -> String {
    format!("https://{}/{video_id}/thumbnail.jpg", config::cdn_host())
}
