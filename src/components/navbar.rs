//! Site navigation bar: section links, language/theme toggles, auth box.

use leptos::prelude::*;

use crate::auth::{guard, policy};
use crate::state::auth::AuthState;
use crate::state::locale::Lang;
use crate::state::ui::UiState;
use crate::util::{dark_mode, locale_store};

/// Top navigation bar shown on every page.
///
/// Shows the section links, the language and dark-mode toggles, and either
/// a sign-in link or the signed-in staff box with an admin shortcut when
/// the profile may enter the admin area.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let lang = expect_context::<RwSignal<Lang>>();

    let on_toggle_lang = move |_| {
        let next = locale_store::toggle(lang.get_untracked());
        lang.set(next);
    };

    let on_toggle_dark = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    let on_toggle_nav = move |_| ui.update(|u| u.nav_open = !u.nav_open);

    let on_sign_out = move |_| {
        guard::force_sign_out(auth);
        #[cfg(feature = "hydrate")]
        {
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href("/");
            }
        }
    };

    let display_name = move || {
        let state = auth.get();
        state
            .profile
            .as_ref()
            .map(|p| p.full_name.clone())
            .or_else(|| state.user.as_ref().map(|u| u.email.clone()))
            .unwrap_or_default()
    };

    let show_admin_link = move || policy::can_access_admin(&auth.get());
    let signed_in = move || auth.get().user.is_some();
    let nav_class = move || {
        if ui.get().nav_open {
            "navbar__links navbar__links--open"
        } else {
            "navbar__links"
        }
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">
                {move || lang.get().pick("ميراث", "Mirath")}
            </a>
            <button class="navbar__menu-toggle" on:click=on_toggle_nav>
                "\u{2630}"
            </button>
            <nav class=nav_class>
                <a href="/news">{move || lang.get().pick("الأخبار", "Actualités")}</a>
                <a href="/articles">{move || lang.get().pick("المقالات", "Articles")}</a>
                <a href="/podcasts">{move || lang.get().pick("البودكاست", "Podcasts")}</a>
                <a href="/programs">{move || lang.get().pick("البرامج", "Programmes")}</a>
                <a href="/videos">{move || lang.get().pick("الفيديوهات", "Vidéos")}</a>
            </nav>
            <span class="navbar__spacer"></span>
            <button class="navbar__toggle" on:click=on_toggle_lang title="العربية / Français">
                {move || lang.get().pick("FR", "ع")}
            </button>
            <button class="navbar__toggle" on:click=on_toggle_dark>
                {move || if ui.get().dark_mode { "\u{2600}" } else { "\u{263e}" }}
            </button>
            <Show
                when=signed_in
                fallback=move || {
                    view! {
                        <a class="navbar__signin" href="/login">
                            {move || lang.get().pick("دخول الفريق", "Espace staff")}
                        </a>
                    }
                }
            >
                <span class="navbar__user">{display_name}</span>
                <Show when=show_admin_link>
                    <a class="navbar__admin" href="/admin">
                        {move || lang.get().pick("الإدارة", "Administration")}
                    </a>
                </Show>
                <button class="btn navbar__signout" on:click=on_sign_out>
                    {move || lang.get().pick("خروج", "Déconnexion")}
                </button>
            </Show>
        </header>
    }
}
