use super::*;

// =============================================================
// Image URLs
// =============================================================

#[test]
fn image_url_joins_host_and_path() {
    let url = image_url("news/festival.jpg");
    assert_eq!(url, format!("https://{}/news/festival.jpg", config::cdn_host()));
}

#[test]
fn image_url_normalizes_leading_slash() {
    assert_eq!(image_url("/news/festival.jpg"), image_url("news/festival.jpg"));
}

#[test]
fn image_url_sized_appends_width_param() {
    let url = image_url_sized("news/festival.jpg", 480);
    assert!(url.ends_with("/news/festival.jpg?width=480"));
}

// =============================================================
// Audio URLs
// =============================================================

#[test]
fn audio_url_uses_pull_zone() {
    let url = audio_url("podcasts/ep-12.mp3");
    assert_eq!(url, format!("https://{}/podcasts/ep-12.mp3", config::cdn_host()));
}

// =============================================================
// Video URLs
// =============================================================

#[test]
fn video_embed_url_uses_stream_library() {
    let url = video_embed_url("ab12cd34");
    assert_eq!(
        url,
        format!("https://iframe.mediadelivery.net/embed/{}/ab12cd34", config::stream_library())
    );
}

#[test]
fn video_thumbnail_lives_on_pull_zone() {
    let url = video_thumbnail_url("ab12cd34");
    assert_eq!(url, format!("https://{}/ab12cd34/thumbnail.jpg", config::cdn_host()));
}
