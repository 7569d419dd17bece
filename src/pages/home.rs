//! Home page: latest news, featured articles, and the social feed strip.

use leptos::prelude::*;

use crate::components::content_card::ContentCard;
use crate::state::locale::Lang;

const HOME_NEWS_COUNT: u32 = 6;
const HOME_ARTICLE_COUNT: u32 = 3;
const HOME_SOCIAL_COUNT: u32 = 6;

/// Landing page composing the three content strips.
#[component]
pub fn HomePage() -> impl IntoView {
    let lang = expect_context::<RwSignal<Lang>>();

    let news = LocalResource::new(|| crate::net::api::fetch_published_news(Some(HOME_NEWS_COUNT)));
    let articles =
        LocalResource::new(|| crate::net::api::fetch_published_articles(Some(HOME_ARTICLE_COUNT)));
    let social = LocalResource::new(|| crate::net::api::fetch_social_posts(Some(HOME_SOCIAL_COUNT)));

    view! {
        <div class="home-page">
            <section class="home-page__section">
                <h2>{move || lang.get().pick("آخر الأخبار", "Dernières actualités")}</h2>
                <Suspense fallback=move || view! { <p class="loading">"..."</p> }>
                    {move || {
                        news.get()
                            .map(|list| {
                                view! {
                                    <div class="home-page__grid">
                                        {list
                                            .into_iter()
                                            .map(|item| {
                                                view! {
                                                    <ContentCard
                                                        href=format!("/news/{}", item.id)
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
                            })
                    }}
                </Suspense>
            </section>

            <section class="home-page__section">
                <h2>{move || lang.get().pick("مقالات مختارة", "Articles choisis")}</h2>
                <Suspense fallback=move || view! { <p class="loading">"..."</p> }>
                    {move || {
                        articles
                            .get()
                            .map(|list| {
                                view! {
                                    <div class="home-page__grid">
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
                            })
                    }}
                </Suspense>
            </section>

            <section class="home-page__section">
                <h2>{move || lang.get().pick("من منصاتنا", "Sur nos réseaux")}</h2>
                <Suspense fallback=move || view! { <p class="loading">"..."</p> }>
                    {move || {
                        social
                            .get()
                            .map(|list| {
                                view! {
                                    <div class="home-page__social">
                                        {list
                                            .into_iter()
                                            .map(|post| {
                                                view! {
                                                    <a
                                                        class="home-page__social-card"
                                                        href=post.url
                                                        target="_blank"
                                                        rel="noopener"
                                                    >
                                                        <span class="home-page__social-network">
                                                            {post.network}
                                                        </span>
                                                        <p>{post.excerpt}</p>
                                                    </a>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
