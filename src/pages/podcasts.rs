//! Podcast episode list with inline players.

use leptos::prelude::*;

use crate::components::audio_player::AudioPlayer;
use crate::state::locale::Lang;

/// Podcasts page.
#[component]
pub fn PodcastsPage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Lang>>();
    let episodes = LocalResource::new(|| crate::net::api::fetch_published_podcasts());

    view! {
        <div class="list-page">
            <h1>{move || lang.get().pick("البودكاست", "Podcasts")}</h1>
            <Suspense fallback=move || view! { <p class="loading">"..."</p> }>
                {move || {
                    episodes
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p class="list-page__empty">
                                        {move || lang.get().pick("لا حلقات بعد.", "Pas encore d'épisodes.")}
                                    </p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="podcast-list">
                                        {list
                                            .into_iter()
                                            .map(|episode| {
                                                let title = Signal::derive({
                                                    let title_ar = episode.title_ar.clone();
                                                    let title_fr = episode.title_fr.clone();
                                                    move || lang.get().pick(&title_ar, &title_fr).to_owned()
                                                });
                                                let description = Signal::derive({
                                                    let ar = episode.description_ar.clone();
                                                    let fr = episode.description_fr.clone();
                                                    move || lang.get().pick(&ar, &fr).to_owned()
                                                });
                                                view! {
                                                    <section class="podcast-list__episode">
                                                        <h2>{title}</h2>
                                                        <p>{description}</p>
                                                        <AudioPlayer
                                                            audio_path=episode.audio_path
                                                            duration_secs=episode.duration_secs
                                                        />
                                                    </section>
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
