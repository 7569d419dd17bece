//! Article archive listing every published piece.

use leptos::prelude::*;

use crate::components::content_card::ContentCard;
use crate::state::locale::Lang;

/// Article list page.
#[component]
pub fn ArticlesPage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Lang>>();
    let items = LocalResource::new(|| crate::net::api::fetch_published_articles(None));

    view! {
        <div class="list-page">
            <h1>{move || lang.get().pick("المقالات", "Articles")}</h1>
            <Suspense fallback=move || view! { <p class="loading">"..."</p> }>
                {move || {
                    items
                        .get()
                        .map(|list| {
                            if list.is_empty() {
                                view! {
                                    <p class="list-page__empty">
                                        {move || lang.get().pick("لا مقالات بعد.", "Pas encore d'articles.")}
                                    </p>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="list-page__grid">
                                        {list
                                            .into_iter()
                                            .map(|item| {
                                                view! {
                                                    <ContentCard
                                                        href=format!("/articles/{}", item.id)
                                                        title_ar=item.title_ar
                                                        title_fr=item.title_fr
                                                        cover_path=item.cover_path
                                                        date=item.published_at
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
