//! Card for news and article list entries.

use leptos::prelude::*;

use crate::net::cdn;
use crate::state::locale::Lang;
use crate::util::time;

/// Card width requested from the CDN resizer.
const CARD_IMAGE_WIDTH: u32 = 480;

/// A clickable card with a cover image, bilingual title, and date.
#[component]
pub fn ContentCard(
    href: String,
    title_ar: String,
    title_fr: String,
    cover_path: Option<String>,
    date: Option<String>,
) -> impl IntoView {
    let lang = expect_context::<RwSignal<Lang>>();
    let title = move || lang.get().pick(&title_ar, &title_fr).to_owned();
    let date_label = date.as_deref().map(time::date_label);

    view! {
        <a class="content-card" href=href>
            {cover_path
                .map(|path| {
                    view! {
                        <img
                            class="content-card__cover"
                            src=cdn::image_url_sized(&path, CARD_IMAGE_WIDTH)
                            loading="lazy"
                        />
                    }
                })}
            <span class="content-card__title">{title}</span>
            {date_label.map(|d| view! { <span class="content-card__date">{d}</span> })}
        </a>
    }
}
