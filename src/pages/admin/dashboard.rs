//! Admin dashboard: tabbed content tables with bulk status actions and a
//! dialog editor for the text-based content types.

use leptos::prelude::*;

use crate::auth::guard::RouteGuard;
use crate::net::types::ContentStatus;
use crate::state::admin::{AdminRow, AdminState, AdminTab, ContentDraft};
use crate::state::auth::AuthState;
use crate::state::locale::Lang;
use crate::util::time;

const TABS: [AdminTab; 5] = [
    AdminTab::News,
    AdminTab::Articles,
    AdminTab::Podcasts,
    AdminTab::Programs,
    AdminTab::Videos,
];

/// `/admin` — requires a confirmed admin profile.
#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <RouteGuard>
            <AdminDashboard/>
        </RouteGuard>
    }
}

async fn load_rows(tab: AdminTab, token: String) -> Vec<AdminRow> {
    match tab {
        AdminTab::News => crate::net::api::fetch_admin_news(&token)
            .await
            .iter()
            .map(AdminRow::from)
            .collect(),
        AdminTab::Articles => crate::net::api::fetch_admin_articles(&token)
            .await
            .iter()
            .map(AdminRow::from)
            .collect(),
        AdminTab::Podcasts => crate::net::api::fetch_admin_podcasts(&token)
            .await
            .iter()
            .map(AdminRow::from)
            .collect(),
        AdminTab::Programs => crate::net::api::fetch_admin_programs(&token)
            .await
            .iter()
            .map(AdminRow::from)
            .collect(),
        AdminTab::Videos => crate::net::api::fetch_admin_videos(&token)
            .await
            .iter()
            .map(AdminRow::from)
            .collect(),
    }
}

/// Dashboard body: tab bar, bulk actions, table, and editor dialog.
#[component]
fn AdminDashboard() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let admin = expect_context::<RwSignal<AdminState>>();
    let lang = expect_context::<RwSignal<Lang>>();
    let action_error = RwSignal::new(None::<String>);

    // Memoized so selection changes do not refetch the table.
    let tab = Memo::new(move |_| admin.read().tab);
    let rows = LocalResource::new(move || {
        let tab = tab.get();
        let token = auth.read().token().unwrap_or_default();
        load_rows(tab, token)
    });

    let apply_status = Callback::new(move |status: ContentStatus| {
        #[cfg(feature = "hydrate")]
        {
            let snapshot = admin.get_untracked();
            if snapshot.pending || snapshot.selected.is_empty() {
                return;
            }
            let Some(token) = auth.get_untracked().token() else {
                return;
            };
            let ids = snapshot.selected.clone();
            let table = snapshot.tab.table();
            action_error.set(None);
            admin.update(|a| a.pending = true);
            leptos::task::spawn_local(async move {
                match crate::net::api::bulk_set_status(table, &ids, status, &token).await {
                    Ok(()) => {
                        admin.update(|a| {
                            a.selected.clear();
                            a.pending = false;
                        });
                        rows.refetch();
                    }
                    Err(e) => {
                        action_error.set(Some(e.to_string()));
                        admin.update(|a| a.pending = false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = status;
        }
    });

    let on_new = move |_| {
        admin.update(|a| {
            a.draft = ContentDraft::default();
            a.editor_open = true;
        });
    };

    let editable = move || admin.read().tab.editable();

    view! {
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>{move || lang.get().pick("لوحة التحرير", "Tableau de rédaction")}</h1>
                <Show when=editable>
                    <button class="btn btn--primary" on:click=on_new>
                        {move || lang.get().pick("+ جديد", "+ Nouveau")}
                    </button>
                </Show>
            </header>

            <nav class="admin-page__tabs">
                {TABS
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <button
                                class=move || {
                                    if admin.read().tab == entry {
                                        "admin-page__tab admin-page__tab--active"
                                    } else {
                                        "admin-page__tab"
                                    }
                                }
                                on:click=move |_| admin.update(|a| a.switch_tab(entry))
                            >
                                {move || entry.label(lang.get())}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <BulkBar apply_status=apply_status/>

            {move || {
                action_error
                    .get()
                    .map(|message| view! { <div class="admin-page__error">{message}</div> })
            }}

            <Suspense fallback=move || view! { <p class="loading">"..."</p> }>
                {move || {
                    rows.get()
                        .map(|list| view! { <RowsTable rows=list editable=editable()/> })
                }}
            </Suspense>

            <Show when=move || admin.read().editor_open>
                <EditorDialog rows=rows/>
            </Show>
        </div>
    }
}

/// Selected-row count plus the three bulk status actions.
#[component]
fn BulkBar(apply_status: Callback<ContentStatus>) -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let lang = expect_context::<RwSignal<Lang>>();

    let count = move || admin.read().selected.len();
    let disabled = move || admin.read().pending || admin.read().selected.is_empty();

    view! {
        <div class="admin-page__bulk">
            <span class="admin-page__bulk-count">
                {move || {
                    let n = count();
                    lang.get().pick(&format!("{n} محدد"), &format!("{n} sélectionné(s)")).to_owned()
                }}
            </span>
            <button
                class="btn"
                disabled=disabled
                on:click=move |_| apply_status.run(ContentStatus::Published)
            >
                {move || lang.get().pick("نشر", "Publier")}
            </button>
            <button
                class="btn"
                disabled=disabled
                on:click=move |_| apply_status.run(ContentStatus::Draft)
            >
                {move || lang.get().pick("مسودة", "Brouillon")}
            </button>
            <button
                class="btn"
                disabled=disabled
                on:click=move |_| apply_status.run(ContentStatus::Archived)
            >
                {move || lang.get().pick("أرشفة", "Archiver")}
            </button>
        </div>
    }
}

/// Uniform table over the current tab's rows.
#[component]
fn RowsTable(rows: Vec<AdminRow>, editable: bool) -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminState>>();
    let lang = expect_context::<RwSignal<Lang>>();

    view! {
        <table class="admin-table">
            <thead>
                <tr>
                    <th></th>
                    <th>{move || lang.get().pick("العنوان", "Titre")}</th>
                    <th>{move || lang.get().pick("الحالة", "Statut")}</th>
                    <th>{move || lang.get().pick("التاريخ", "Date")}</th>
                    {editable.then(|| view! { <th></th> })}
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        let row_id = row.id;
                        let title_ar = row.title_ar.clone();
                        let title_fr = row.title_fr.clone();
                        let date = row.date.as_deref().map(time::date_label).unwrap_or_default();
                        let edit_row = row.clone();
                        view! {
                            <tr class="admin-table__row">
                                <td>
                                    <input
                                        type="checkbox"
                                        prop:checked=move || admin.read().is_selected(row_id)
                                        on:change=move |_| admin.update(|a| a.toggle_selected(row_id))
                                    />
                                </td>
                                <td class="admin-table__title">
                                    {move || lang.get().pick(&title_ar, &title_fr).to_owned()}
                                </td>
                                <td>
                                    <StatusBadge status=row.status/>
                                </td>
                                <td class="admin-table__date">{date}</td>
                                {editable
                                    .then(|| {
                                        view! {
                                            <td>
                                                <button
                                                    class="btn admin-table__edit"
                                                    on:click=move |_| {
                                                        let draft = ContentDraft::from_row(&edit_row);
                                                        admin
                                                            .update(|a| {
                                                                a.draft = draft;
                                                                a.editor_open = true;
                                                            });
                                                    }
                                                >
                                                    {move || lang.get().pick("تعديل", "Modifier")}
                                                </button>
                                            </td>
                                        }
                                    })}
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

/// Colored status chip.
#[component]
fn StatusBadge(status: ContentStatus) -> impl IntoView {
    let lang = expect_context::<RwSignal<Lang>>();
    let class = format!("status-badge status-badge--{}", status.as_str());
    let label = move || match status {
        ContentStatus::Draft => lang.get().pick("مسودة", "Brouillon"),
        ContentStatus::Published => lang.get().pick("منشور", "Publié"),
        ContentStatus::Archived => lang.get().pick("مؤرشف", "Archivé"),
    };

    view! { <span class=class>{label}</span> }
}

/// Modal editor for creating or updating a text row on the current tab.
#[component]
fn EditorDialog(rows: LocalResource<Vec<AdminRow>>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let admin = expect_context::<RwSignal<AdminState>>();
    let lang = expect_context::<RwSignal<Lang>>();
    let save_error = RwSignal::new(None::<String>);

    let on_cancel = Callback::new(move |()| {
        admin.update(|a| {
            a.editor_open = false;
            a.draft = ContentDraft::default();
        });
    });

    let submit = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let snapshot = admin.get_untracked();
            if snapshot.pending || snapshot.draft.is_blank() {
                return;
            }
            let Some(token) = auth.get_untracked().token() else {
                return;
            };
            let tab = snapshot.tab;
            let draft = snapshot.draft.clone();
            save_error.set(None);
            admin.update(|a| a.pending = true);
            leptos::task::spawn_local(async move {
                let payload = draft.to_row(tab);
                let result = match draft.id {
                    Some(id) => {
                        crate::net::api::update_row(tab.table(), id, &payload, &token).await
                    }
                    None => crate::net::api::insert_row(tab.table(), &payload, &token).await,
                };
                match result {
                    Ok(()) => {
                        admin.update(|a| {
                            a.pending = false;
                            a.editor_open = false;
                            a.draft = ContentDraft::default();
                        });
                        rows.refetch();
                    }
                    Err(e) => {
                        save_error.set(Some(e.to_string()));
                        admin.update(|a| a.pending = false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, rows);
        }
    });

    let is_article = move || admin.read().tab == AdminTab::Articles;
    let editing = move || admin.read().draft.id.is_some();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--editor" on:click=move |ev| ev.stop_propagation()>
                <h2>
                    {move || {
                        if editing() {
                            lang.get().pick("تعديل المحتوى", "Modifier le contenu")
                        } else {
                            lang.get().pick("محتوى جديد", "Nouveau contenu")
                        }
                    }}
                </h2>

                <label class="dialog__label">
                    {move || lang.get().pick("العنوان بالعربية", "Titre en arabe")}
                    <input
                        class="dialog__input"
                        type="text"
                        dir="rtl"
                        prop:value=move || admin.read().draft.title_ar.clone()
                        on:input=move |ev| {
                            admin.update(|a| a.draft.title_ar = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    {move || lang.get().pick("العنوان بالفرنسية", "Titre en français")}
                    <input
                        class="dialog__input"
                        type="text"
                        dir="ltr"
                        prop:value=move || admin.read().draft.title_fr.clone()
                        on:input=move |ev| {
                            admin.update(|a| a.draft.title_fr = event_target_value(&ev));
                        }
                    />
                </label>
                <label class="dialog__label">
                    {move || lang.get().pick("النص بالعربية", "Texte en arabe")}
                    <textarea
                        class="dialog__input dialog__input--area"
                        dir="rtl"
                        prop:value=move || admin.read().draft.body_ar.clone()
                        on:input=move |ev| {
                            admin.update(|a| a.draft.body_ar = event_target_value(&ev));
                        }
                    ></textarea>
                </label>
                <label class="dialog__label">
                    {move || lang.get().pick("النص بالفرنسية", "Texte en français")}
                    <textarea
                        class="dialog__input dialog__input--area"
                        dir="ltr"
                        prop:value=move || admin.read().draft.body_fr.clone()
                        on:input=move |ev| {
                            admin.update(|a| a.draft.body_fr = event_target_value(&ev));
                        }
                    ></textarea>
                </label>
                <Show when=is_article>
                    <label class="dialog__label">
                        {move || lang.get().pick("الكاتب", "Auteur")}
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || admin.read().draft.author.clone()
                            on:input=move |ev| {
                                admin.update(|a| a.draft.author = event_target_value(&ev));
                            }
                        />
                    </label>
                </Show>
                <label class="dialog__label">
                    {move || lang.get().pick("مسار صورة الغلاف", "Chemin de l'image de couverture")}
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="news/cover.jpg"
                        prop:value=move || admin.read().draft.cover_path.clone()
                        on:input=move |ev| {
                            admin.update(|a| a.draft.cover_path = event_target_value(&ev));
                        }
                    />
                </label>

                {move || {
                    save_error
                        .get()
                        .map(|message| view! { <div class="dialog__error">{message}</div> })
                }}

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        {move || lang.get().pick("إلغاء", "Annuler")}
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || admin.read().pending
                        on:click=move |_| submit.run(())
                    >
                        {move || lang.get().pick("حفظ", "Enregistrer")}
                    </button>
                </div>
            </div>
        </div>
    }
}
