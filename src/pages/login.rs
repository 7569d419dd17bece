//! Staff login page: sign-in and sign-up forms.
//!
//! Reads `?expired=true` (session-expired notice from the route guard) and
//! `?from=` (post-login return path) from the query string. Local
//! validation runs inside the `net::api` wrappers; this page only renders
//! the returned error values.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;
use leptos_router::hooks::use_query_map;

use crate::auth::validate;
use crate::net::types::SignUpData;
use crate::state::auth::AuthState;
use crate::state::locale::Lang;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FormMode {
    SignIn,
    SignUp,
}

/// Login page for content-entry staff.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let lang = expect_context::<RwSignal<Lang>>();
    let query = use_query_map();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let mode = RwSignal::new(FormMode::SignIn);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let expired = move || query.read().get("expired").is_some();

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let return_path = query
                .read_untracked()
                .get("from")
                .filter(|p| p.starts_with('/'))
                .unwrap_or_else(|| "/".to_owned());
            busy.set(true);
            leptos::task::spawn_local(async move {
                let email_value = email.get_untracked();
                let password_value = password.get_untracked();
                let result = match mode.get_untracked() {
                    FormMode::SignIn => crate::net::api::sign_in(&email_value, &password_value).await,
                    FormMode::SignUp => {
                        let data = SignUpData {
                            full_name: full_name.get_untracked().trim().to_owned(),
                            username: username.get_untracked().trim().to_owned(),
                        };
                        crate::net::api::sign_up(&email_value, &password_value, &data).await
                    }
                };
                match result {
                    Ok(response) => {
                        crate::util::session_cache::store(&response);
                        let profile = crate::net::api::fetch_profile(
                            response.user.id,
                            &response.session.access_token,
                        )
                        .await;
                        auth.update(|a| a.establish(response.session, response.user, profile));
                        navigate(&return_path, NavigateOptions::default());
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

    let strength = move || validate::classify_password(&password.get());

    view! {
        <div class="login-page">
            <h1>{move || lang.get().pick("ميراث", "Mirath")}</h1>
            <p class="login-page__tagline">
                {move || lang.get().pick("فضاء فريق التحرير", "Espace de l'équipe éditoriale")}
            </p>

            <Show when=expired>
                <div class="login-page__notice login-page__notice--expired">
                    {move || {
                        lang.get()
                            .pick(
                                "انتهت صلاحية جلستك. سجل الدخول مجددا.",
                                "Votre session a expiré. Veuillez vous reconnecter.",
                            )
                    }}
                </div>
            </Show>

            <div class="login-page__mode">
                <button
                    class=move || {
                        if mode.get() == FormMode::SignIn { "btn btn--primary" } else { "btn" }
                    }
                    on:click=move |_| mode.set(FormMode::SignIn)
                >
                    {move || lang.get().pick("تسجيل الدخول", "Connexion")}
                </button>
                <button
                    class=move || {
                        if mode.get() == FormMode::SignUp { "btn btn--primary" } else { "btn" }
                    }
                    on:click=move |_| mode.set(FormMode::SignUp)
                >
                    {move || lang.get().pick("حساب جديد", "Nouveau compte")}
                </button>
            </div>

            <Show when=move || mode.get() == FormMode::SignUp>
                <label class="login-page__label">
                    {move || lang.get().pick("الاسم الكامل", "Nom complet")}
                    <input
                        class="login-page__input"
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-page__label">
                    {move || lang.get().pick("اسم المستخدم", "Nom d'utilisateur")}
                    <input
                        class="login-page__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
            </Show>

            <label class="login-page__label">
                {move || lang.get().pick("البريد الإلكتروني", "E-mail")}
                <input
                    class="login-page__input"
                    type="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="login-page__label">
                {move || lang.get().pick("كلمة السر", "Mot de passe")}
                <input
                    class="login-page__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>

            <Show when=move || mode.get() == FormMode::SignUp>
                <ul class="login-page__strength">
                    <li class=move || strength_class(strength().upper)>"A-Z"</li>
                    <li class=move || strength_class(strength().lower)>"a-z"</li>
                    <li class=move || strength_class(strength().digit)>"0-9"</li>
                    <li class=move || strength_class(strength().special)>
                        {move || lang.get().pick("رموز (اختياري)", "Symboles (facultatif)")}
                    </li>
                </ul>
            </Show>

            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="login-page__error">{message}</div> })
            }}

            <button
                class="btn btn--primary login-page__submit"
                disabled=move || busy.get()
                on:click=move |_| submit.run(())
            >
                {move || {
                    if busy.get() {
                        lang.get().pick("...", "...")
                    } else if mode.get() == FormMode::SignIn {
                        lang.get().pick("دخول", "Se connecter")
                    } else {
                        lang.get().pick("إنشاء الحساب", "Créer le compte")
                    }
                }}
            </button>
        </div>
    }
}

fn strength_class(met: bool) -> &'static str {
    if met {
        "login-page__strength-item login-page__strength-item--met"
    } else {
        "login-page__strength-item"
    }
}
