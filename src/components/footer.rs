//! Site footer.

use leptos::prelude::*;

use crate::state::locale::Lang;

/// Footer with the platform byline and section links.
#[component]
pub fn Footer() -> impl IntoView {
    let lang = expect_context::<RwSignal<Lang>>();

    view! {
        <footer class="footer">
            <p class="footer__byline">
                {move || {
                    lang.get()
                        .pick(
                            "ميراث — منصة التراث الحساني",
                            "Mirath — plateforme du patrimoine hassani",
                        )
                }}
            </p>
            <nav class="footer__links">
                <a href="/news">{move || lang.get().pick("الأخبار", "Actualités")}</a>
                <a href="/articles">{move || lang.get().pick("المقالات", "Articles")}</a>
                <a href="/videos">{move || lang.get().pick("الفيديوهات", "Vidéos")}</a>
            </nav>
        </footer>
    }
}
