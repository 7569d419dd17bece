//! Inline audio player for podcast episodes.

use leptos::prelude::*;

use crate::net::cdn;
use crate::util::time;

/// Native audio element streaming from the CDN pull zone.
#[component]
pub fn AudioPlayer(audio_path: String, duration_secs: u32) -> impl IntoView {
    view! {
        <div class="audio-player">
            <audio controls=true preload="none" src=cdn::audio_url(&audio_path)></audio>
            <span class="audio-player__duration">{time::duration_label(duration_secs)}</span>
        </div>
    }
}
