//! Video library grid.
//!
//! Entries render as CDN poster frames and only swap in the hosted-player
//! iframe once clicked, so a long library never loads dozens of players.

use leptos::prelude::*;

use crate::components::video_embed::VideoEmbed;
use crate::net::cdn;
use crate::state::locale::Lang;
use crate::util::time;

/// Video library page.
#[component]
pub fn VideosPage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Lang>>();
    let videos = LocalResource::new(|| crate::net::api::fetch_published_videos());

    view! {
        <div class="list-page">
            <h1>{move || lang.get().pick("الفيديوهات", "Vidéothèque")}</h1>
            <Suspense fallback=move || view! { <p class="loading">"..."</p> }>
                {move || {
                    videos
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p class="list-page__empty">
                                        {move || lang.get().pick("لا فيديوهات بعد.", "Pas encore de vidéos.")}
                                    </p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="video-grid">
                                        {list
                                            .into_iter()
                                            .map(|video| {
                                                view! {
                                                    <VideoEntry
                                                        video_id=video.video_id
                                                        title_ar=video.title_ar
                                                        title_fr=video.title_fr
                                                        duration_secs=video.duration_secs
                                                    />
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

/// One grid entry: poster frame until clicked, then the player.
#[component]
fn VideoEntry(
    video_id: String,
    title_ar: String,
    title_fr: String,
    duration_secs: u32,
) -> impl IntoView {
    let lang = expect_context::<RwSignal<Lang>>();
    let playing = RwSignal::new(false);

    let title = Signal::derive(move || lang.get().pick(&title_ar, &title_fr).to_owned());
    let poster = cdn::video_thumbnail_url(&video_id);

    view! {
        <section class="video-grid__entry">
            <Show
                when=move || playing.get()
                fallback={
                    let poster = poster.clone();
                    move || {
                        view! {
                            <button
                                class="video-grid__poster"
                                on:click=move |_| playing.set(true)
                            >
                                <img src=poster.clone() loading="lazy" alt=title/>
                                <span class="video-grid__play">"\u{25b6}"</span>
                            </button>
                        }
                    }
                }
            >
                <VideoEmbed video_id=video_id.clone() title=title/>
            </Show>
            <h2>{title}</h2>
            <span class="video-grid__duration">{time::duration_label(duration_secs)}</span>
        </section>
    }
}
