//! Contributor studio: permission-gated drafting without admin rights.
//!
//! Gated on the `content.edit` permission rather than the admin role, so
//! trusted contributors can submit news drafts that the admin team reviews
//! and publishes from the dashboard.

use leptos::prelude::*;

use crate::auth::guard::RouteGuard;
use crate::state::admin::{AdminTab, ContentDraft};
use crate::state::auth::AuthState;
use crate::state::locale::Lang;

/// Permission required to open the studio.
pub const STUDIO_PERMISSION: &str = "content.edit";

/// `/studio` — requires `content.edit`, not the admin role.
#[component]
pub fn StudioPage() -> impl IntoView {
    view! {
        <RouteGuard require_admin=false required_permission=STUDIO_PERMISSION.to_owned()>
            <StudioForm/>
        </RouteGuard>
    }
}

/// Draft submission form: news drafts only, saved with `draft` status.
#[component]
fn StudioForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let lang = expect_context::<RwSignal<Lang>>();

    let draft = RwSignal::new(ContentDraft::default());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let saved = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let current = draft.get_untracked();
            if busy.get_untracked() || current.is_blank() {
                return;
            }
            let Some(token) = auth.get_untracked().token() else {
                return;
            };
            error.set(None);
            saved.set(false);
            busy.set(true);
            leptos::task::spawn_local(async move {
                let payload = current.to_row(AdminTab::News);
                match crate::net::api::insert_row(AdminTab::News.table(), &payload, &token).await {
                    Ok(()) => {
                        draft.set(ContentDraft::default());
                        saved.set(true);
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = auth;
        }
    });

    view! {
        <div class="studio-page">
            <h1>{move || lang.get().pick("استوديو المساهمين", "Studio des contributeurs")}</h1>
            <p class="studio-page__hint">
                {move || {
                    lang.get()
                        .pick(
                            "تحفظ المساهمات كمسودات ويراجعها فريق الإدارة قبل النشر.",
                            "Les contributions sont enregistrées comme brouillons et relues avant publication.",
                        )
                }}
            </p>

            <Show when=move || saved.get()>
                <div class="studio-page__saved">
                    {move || lang.get().pick("تم حفظ المسودة.", "Brouillon enregistré.")}
                </div>
            </Show>

            <label class="studio-page__label">
                {move || lang.get().pick("العنوان بالعربية", "Titre en arabe")}
                <input
                    class="studio-page__input"
                    type="text"
                    dir="rtl"
                    prop:value=move || draft.read().title_ar.clone()
                    on:input=move |ev| draft.update(|d| d.title_ar = event_target_value(&ev))
                />
            </label>
            <label class="studio-page__label">
                {move || lang.get().pick("العنوان بالفرنسية", "Titre en français")}
                <input
                    class="studio-page__input"
                    type="text"
                    dir="ltr"
                    prop:value=move || draft.read().title_fr.clone()
                    on:input=move |ev| draft.update(|d| d.title_fr = event_target_value(&ev))
                />
            </label>
            <label class="studio-page__label">
                {move || lang.get().pick("النص بالعربية", "Texte en arabe")}
                <textarea
                    class="studio-page__input studio-page__input--area"
                    dir="rtl"
                    prop:value=move || draft.read().body_ar.clone()
                    on:input=move |ev| draft.update(|d| d.body_ar = event_target_value(&ev))
                ></textarea>
            </label>
            <label class="studio-page__label">
                {move || lang.get().pick("النص بالفرنسية", "Texte en français")}
                <textarea
                    class="studio-page__input studio-page__input--area"
                    dir="ltr"
                    prop:value=move || draft.read().body_fr.clone()
                    on:input=move |ev| draft.update(|d| d.body_fr = event_target_value(&ev))
                ></textarea>
            </label>

            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="studio-page__error">{message}</div> })
            }}

            <button
                class="btn btn--primary"
                disabled=move || busy.get()
                on:click=move |_| submit.run(())
            >
                {move || lang.get().pick("حفظ المسودة", "Enregistrer le brouillon")}
            </button>
        </div>
    }
}
