//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, navbar::Navbar, session_notice::SessionNotice};
use crate::pages::admin::dashboard::AdminPage;
use crate::pages::admin::studio::StudioPage;
use crate::pages::{
    article::ArticlePage, articles::ArticlesPage, home::HomePage, login::LoginPage, news::NewsPage,
    news_item::NewsItemPage, podcasts::PodcastsPage, programs::ProgramsPage, videos::VideosPage,
};
use crate::state::{admin::AdminState, auth::AuthState, locale::Lang, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ar" dir="rtl">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let admin = RwSignal::new(AdminState::default());
    let lang = RwSignal::new(Lang::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(admin);
    provide_context(lang);

    // Client-side boot: stored preferences first, then the cached session.
    Effect::new(move || {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);

        let preferred = crate::util::locale_store::read_preference();
        crate::util::locale_store::apply(preferred);
        lang.set(preferred);

        bootstrap_auth(auth);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/mirath-ui.css"/>
        <Title text="Mirath"/>

        <Router>
            <Navbar/>
            <SessionNotice/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("news") view=NewsPage/>
                    <Route path=(StaticSegment("news"), ParamSegment("id")) view=NewsItemPage/>
                    <Route path=StaticSegment("articles") view=ArticlesPage/>
                    <Route path=(StaticSegment("articles"), ParamSegment("id")) view=ArticlePage/>
                    <Route path=StaticSegment("podcasts") view=PodcastsPage/>
                    <Route path=StaticSegment("programs") view=ProgramsPage/>
                    <Route path=StaticSegment("videos") view=VideosPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                    <Route path=StaticSegment("studio") view=StudioPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

/// Resume from the cached session.
///
/// An expired cache entry is discarded without a network call; otherwise
/// the profile is fetched and all three auth records commit in one update.
/// `loading` clears exactly once, whichever way bootstrap settles.
fn bootstrap_auth(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::auth::policy;
        use crate::state::auth::AuthState;
        use crate::util::session_cache;

        leptos::task::spawn_local(async move {
            let Some(stored) = session_cache::load() else {
                auth.update(|a| a.loading = false);
                return;
            };

            let probe = AuthState {
                session: Some(stored.session.clone()),
                user: None,
                profile: None,
                loading: false,
            };
            if !policy::is_session_valid(&probe) {
                session_cache::clear();
                auth.update(|a| a.loading = false);
                return;
            }

            let profile =
                crate::net::api::fetch_profile(stored.user.id, &stored.session.access_token).await;
            auth.update(|a| a.establish(stored.session, stored.user, profile));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}
