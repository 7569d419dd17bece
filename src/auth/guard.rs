//! Route gating for protected pages.
//!
//! DESIGN
//! ======
//! Gating is an ordered list of guarded states evaluated top to bottom on
//! every render; the first match wins and there is no memoized transition
//! log. The decision itself is a pure function (`evaluate`) so the whole
//! matrix is unit-testable; the component only maps decisions to views and
//! performs the two redirect side effects.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::auth::policy;
use crate::state::auth::AuthState;
use crate::state::locale::Lang;
use crate::util::{session_cache, time};

/// Outcome of one guard evaluation, in precedence order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth bootstrap has not settled; hold the verdict.
    Loading,
    /// No user — send to the login page, preserving the origin.
    RedirectToLogin,
    /// User present but the session is no longer valid — forced sign-out,
    /// then login with an expired notice.
    RedirectExpired,
    /// Admin route, non-admin profile.
    AdminDenied,
    /// Permission route, permission not held.
    PermissionDenied,
    /// Admin route, admin profile, email not yet confirmed.
    EmailUnconfirmed,
    /// Render the protected content.
    Allow,
}

/// Evaluate the guard states in order against a snapshot.
///
/// Admin gating is split into its two conjuncts so each terminal view is
/// reachable: non-admins stop at [`GuardDecision::AdminDenied`], unconfirmed
/// admins at [`GuardDecision::EmailUnconfirmed`]. An `Allow` on an admin
/// route therefore implies `policy::can_access_admin` exactly.
#[must_use]
pub fn evaluate(
    auth: &AuthState,
    require_admin: bool,
    required_permission: Option<&str>,
    now_ms: f64,
) -> GuardDecision {
    if auth.loading {
        return GuardDecision::Loading;
    }
    if auth.user.is_none() {
        return GuardDecision::RedirectToLogin;
    }
    if !policy::is_session_valid_at(auth, now_ms) {
        return GuardDecision::RedirectExpired;
    }
    if require_admin && !policy::is_admin(auth) {
        return GuardDecision::AdminDenied;
    }
    if let Some(permission) = required_permission {
        if !policy::has_permission(auth, permission) {
            return GuardDecision::PermissionDenied;
        }
    }
    if require_admin && !policy::can_access_admin(auth) {
        return GuardDecision::EmailUnconfirmed;
    }
    GuardDecision::Allow
}

/// Tear down the session everywhere at once: state, cache, and (best
/// effort) the Credential Store's record.
pub fn force_sign_out(auth: RwSignal<AuthState>) {
    let token = auth.get_untracked().token();
    auth.update(AuthState::clear);
    session_cache::clear();
    #[cfg(feature = "hydrate")]
    {
        if let Some(token) = token {
            leptos::task::spawn_local(async move {
                crate::net::api::sign_out(&token).await;
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

fn history_back() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.back();
            }
        }
    }
}

/// Wrapper deciding whether to render protected content.
///
/// Defaults gate on admin access; pass `require_admin=false` together with
/// `required_permission` for contributor routes.
#[component]
pub fn RouteGuard(
    children: ChildrenFn,
    #[prop(default = true)] require_admin: bool,
    #[prop(optional, into)] required_permission: Option<String>,
    #[prop(default = String::from("/login"), into)] fallback_path: String,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let location = use_location();

    let permission = StoredValue::new(required_permission);
    let fallback = StoredValue::new(fallback_path);
    // One-shot: the forced sign-out mutates auth state, which would rerun
    // this effect and clobber the expired redirect with a plain login one.
    let redirected = StoredValue::new(false);

    // Redirect side effects run outside rendering so the view closure stays
    // a pure snapshot read.
    Effect::new(move || {
        let decision = permission.with_value(|p| {
            evaluate(&auth.get(), require_admin, p.as_deref(), time::now_ms())
        });
        match decision {
            GuardDecision::RedirectToLogin => {
                if redirected.get_value() {
                    return;
                }
                redirected.set_value(true);
                let from = location.pathname.get_untracked();
                let target = format!("{}?from={from}", fallback.get_value());
                navigate(&target, NavigateOptions::default());
            }
            GuardDecision::RedirectExpired => {
                if redirected.get_value() {
                    return;
                }
                redirected.set_value(true);
                force_sign_out(auth);
                let target = format!("{}?expired=true", fallback.get_value());
                navigate(&target, NavigateOptions::default());
            }
            _ => {}
        }
    });

    view! {
        {move || {
            let decision = permission.with_value(|p| {
                evaluate(&auth.get(), require_admin, p.as_deref(), time::now_ms())
            });
            match decision {
                GuardDecision::Loading
                | GuardDecision::RedirectToLogin
                | GuardDecision::RedirectExpired => view! { <GuardLoading/> }.into_any(),
                GuardDecision::AdminDenied => view! { <AccessDenied/> }.into_any(),
                GuardDecision::PermissionDenied => view! { <PermissionDenied/> }.into_any(),
                GuardDecision::EmailUnconfirmed => view! { <ConfirmEmailRequired/> }.into_any(),
                GuardDecision::Allow => children().into_any(),
            }
        }}
    }
}

/// Spinner shown while bootstrap settles or a redirect is in flight.
#[component]
fn GuardLoading() -> impl IntoView {
    let lang = expect_context::<RwSignal<Lang>>();
    view! {
        <div class="guard-view guard-view--loading">
            <p>{move || lang.get().pick("جار التحميل...", "Chargement...")}</p>
        </div>
    }
}

/// Admin route, non-admin profile: go back or sign out.
#[component]
fn AccessDenied() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let lang = expect_context::<RwSignal<Lang>>();

    let on_back = move |_| history_back();
    let on_sign_out = move |_| sign_out_to_login(auth);

    view! {
        <div class="guard-view guard-view--denied">
            <h2>{move || lang.get().pick("الوصول مرفوض", "Accès refusé")}</h2>
            <p>
                {move || {
                    lang.get()
                        .pick(
                            "هذه الصفحة مخصصة لفريق الإدارة فقط.",
                            "Cette page est réservée à l'équipe d'administration.",
                        )
                }}
            </p>
            <div class="guard-view__actions">
                <button class="btn" on:click=on_back>
                    {move || lang.get().pick("رجوع", "Retour")}
                </button>
                <button class="btn btn--primary" on:click=on_sign_out>
                    {move || lang.get().pick("تسجيل الخروج", "Se déconnecter")}
                </button>
            </div>
        </div>
    }
}

/// Permission route, permission not held: go back only.
#[component]
fn PermissionDenied() -> impl IntoView {
    let lang = expect_context::<RwSignal<Lang>>();
    let on_back = move |_| history_back();

    view! {
        <div class="guard-view guard-view--denied">
            <h2>{move || lang.get().pick("صلاحية غير كافية", "Permission insuffisante")}</h2>
            <p>
                {move || {
                    lang.get()
                        .pick(
                            "حسابك لا يملك الصلاحية المطلوبة لهذه الصفحة.",
                            "Votre compte ne possède pas la permission requise pour cette page.",
                        )
                }}
            </p>
            <div class="guard-view__actions">
                <button class="btn" on:click=on_back>
                    {move || lang.get().pick("رجوع", "Retour")}
                </button>
            </div>
        </div>
    }
}

/// Admin profile with an unconfirmed email: sign out to retry later.
#[component]
fn ConfirmEmailRequired() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let lang = expect_context::<RwSignal<Lang>>();
    let on_sign_out = move |_| sign_out_to_login(auth);

    view! {
        <div class="guard-view guard-view--confirm">
            <h2>{move || lang.get().pick("تأكيد البريد مطلوب", "Confirmation d'e-mail requise")}</h2>
            <p>
                {move || {
                    lang.get()
                        .pick(
                            "أكد عنوان بريدك الإلكتروني من الرسالة المرسلة إليك ثم أعد تسجيل الدخول.",
                            "Confirmez votre adresse e-mail via le message reçu, puis reconnectez-vous.",
                        )
                }}
            </p>
            <div class="guard-view__actions">
                <button class="btn btn--primary" on:click=on_sign_out>
                    {move || lang.get().pick("تسجيل الخروج", "Se déconnecter")}
                </button>
            </div>
        </div>
    }
}

fn sign_out_to_login(auth: RwSignal<AuthState>) {
    force_sign_out(auth);
    #[cfg(feature = "hydrate")]
    {
        // Hard navigation for a clean state after sign-out.
        if let Some(w) = web_sys::window() {
            let _ = w.location().set_href("/login");
        }
    }
}
