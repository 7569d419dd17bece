//! Banner warning signed-in staff that their session is about to expire.
//!
//! Expiry is discovered lazily: nothing here enforces anything, the banner
//! only re-reads the auth snapshot on a slow tick so the warning appears
//! without a navigation. Token refresh is the Credential Store's concern.

use leptos::prelude::*;

use crate::auth::policy;
use crate::state::auth::AuthState;
use crate::state::locale::Lang;

/// Re-check cadence, in milliseconds.
#[cfg(feature = "hydrate")]
const POLL_INTERVAL_MS: u32 = 30_000;

/// Session-expiry warning banner.
#[component]
pub fn SessionNotice() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let lang = expect_context::<RwSignal<Lang>>();
    let tick = RwSignal::new(0u32);

    // Client-only tick loop; effects never run during SSR.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::TimeoutFuture::new(POLL_INTERVAL_MS).await;
                    tick.update(|t| *t = t.wrapping_add(1));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = tick;
        }
    });

    let expiring = move || {
        tick.track();
        policy::is_session_expiring_soon(&auth.get())
    };

    view! {
        <Show when=expiring>
            <div class="session-notice">
                {move || {
                    lang.get()
                        .pick(
                            "جلستك على وشك الانتهاء. احفظ عملك ثم سجل الدخول مجددا.",
                            "Votre session expire bientôt. Enregistrez votre travail puis reconnectez-vous.",
                        )
                }}
            </div>
        </Show>
    }
}
