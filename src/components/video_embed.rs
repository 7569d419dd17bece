//! Hosted-player iframe for video library entries.

use leptos::prelude::*;

use crate::net::cdn;

/// CDN stream player embed.
#[component]
pub fn VideoEmbed(video_id: String, #[prop(into)] title: Signal<String>) -> impl IntoView {
    let frame = view! {
        <iframe
            class="video-embed__frame"
            src=cdn::video_embed_url(&video_id)
            title=move || title.get()
            allow="accelerometer; gyroscope; autoplay; encrypted-media; picture-in-picture"
            allowfullscreen=true
        ></iframe>
    }
    .add_any_attr(leptos::attr::loading("lazy"));

    view! { <div class="video-embed">{frame}</div> }
}
