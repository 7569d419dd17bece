//! Single article page with author byline.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use uuid::Uuid;

use crate::net::cdn;
use crate::state::locale::Lang;
use crate::util::time;

const DETAIL_IMAGE_WIDTH: u32 = 960;

/// Article detail page — reads the article id from the route parameter.
#[component]
pub fn ArticlePage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Lang>>();
    let params = use_params_map();

    let article = LocalResource::new(move || {
        let raw = params.read().get("id");
        async move {
            match raw.and_then(|s| Uuid::parse_str(&s).ok()) {
                Some(id) => crate::net::api::fetch_article(id).await,
                None => None,
            }
        }
    });

    view! {
        <article class="detail-page">
            <Suspense fallback=move || view! { <p class="loading">"..."</p> }>
                {move || {
                    article
                        .get()
                        .map(|found| match found {
                            Some(item) => {
                                let title = lang.get().pick(&item.title_ar, &item.title_fr).to_owned();
                                let body = lang.get().pick(&item.body_ar, &item.body_fr).to_owned();
                                view! {
                                    <div>
                                        {item
                                            .cover_path
                                            .map(|path| {
                                                view! {
                                                    <img
                                                        class="detail-page__cover"
                                                        src=cdn::image_url_sized(&path, DETAIL_IMAGE_WIDTH)
                                                    />
                                                }
                                            })}
                                        <h1>{title}</h1>
                                        <p class="detail-page__byline">
                                            {item.author}
                                            {item
                                                .published_at
                                                .map(|at| format!(" — {}", time::date_label(&at)))}
                                        </p>
                                        <div class="detail-page__body">{body}</div>
                                    </div>
                                }
                                    .into_any()
                            }
                            None => {
                                view! {
                                    <p class="detail-page__missing">
                                        {move || lang.get().pick("المقال غير موجود.", "Article introuvable.")}
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </article>
    }
}
