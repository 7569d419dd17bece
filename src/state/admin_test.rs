use uuid::Uuid;

use crate::net::types::{ContentStatus, NewsItem, Program};
use crate::state::locale::Lang;

use super::*;

fn id(n: u8) -> Uuid {
    Uuid::from_bytes([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, n])
}

fn news_row() -> NewsItem {
    NewsItem {
        id: id(7),
        title_ar: "خبر".to_owned(),
        title_fr: "Nouvelle".to_owned(),
        body_ar: "نص".to_owned(),
        body_fr: "texte".to_owned(),
        cover_path: Some("news/cover.jpg".to_owned()),
        status: ContentStatus::Published,
        published_at: Some("2026-08-01T09:00:00Z".to_owned()),
    }
}

// =============================================================
// AdminTab
// =============================================================

#[test]
fn default_tab_is_news() {
    assert_eq!(AdminTab::default(), AdminTab::News);
}

#[test]
fn tabs_name_their_tables() {
    assert_eq!(AdminTab::News.table(), "news");
    assert_eq!(AdminTab::Articles.table(), "articles");
    assert_eq!(AdminTab::Podcasts.table(), "podcasts");
    assert_eq!(AdminTab::Programs.table(), "programs");
    assert_eq!(AdminTab::Videos.table(), "videos");
}

#[test]
fn labels_follow_language() {
    assert_eq!(AdminTab::News.label(Lang::Ar), "الأخبار");
    assert_eq!(AdminTab::News.label(Lang::Fr), "Actualités");
}

#[test]
fn only_text_types_are_editable() {
    assert!(AdminTab::News.editable());
    assert!(AdminTab::Articles.editable());
    assert!(!AdminTab::Podcasts.editable());
    assert!(!AdminTab::Programs.editable());
    assert!(!AdminTab::Videos.editable());
}

// =============================================================
// ContentDraft
// =============================================================

#[test]
fn blank_draft_has_no_titles() {
    assert!(ContentDraft::default().is_blank());

    let draft = ContentDraft {
        title_ar: "  ".to_owned(),
        ..ContentDraft::default()
    };
    assert!(draft.is_blank());
}

#[test]
fn draft_with_one_title_is_not_blank() {
    let draft = ContentDraft {
        title_fr: "Ouverture du festival".to_owned(),
        ..ContentDraft::default()
    };
    assert!(!draft.is_blank());
}

#[test]
fn new_draft_row_starts_as_draft_status() {
    let draft = ContentDraft {
        title_ar: "عنوان".to_owned(),
        ..ContentDraft::default()
    };
    let row = draft.to_row(AdminTab::News);
    assert_eq!(row["status"], "draft");
    assert_eq!(row["title_ar"], "عنوان");
    assert_eq!(row["cover_path"], serde_json::Value::Null);
}

#[test]
fn editing_row_does_not_touch_status() {
    let draft = ContentDraft {
        id: Some(id(3)),
        title_ar: "عنوان".to_owned(),
        cover_path: "news/cover.jpg".to_owned(),
        ..ContentDraft::default()
    };
    let row = draft.to_row(AdminTab::News);
    assert!(row.get("status").is_none());
    assert_eq!(row["cover_path"], "news/cover.jpg");
}

#[test]
fn author_is_only_sent_for_articles() {
    let draft = ContentDraft {
        title_fr: "Titre".to_owned(),
        author: "M. O. Ahmed".to_owned(),
        ..ContentDraft::default()
    };
    assert!(draft.to_row(AdminTab::News).get("author").is_none());
    assert_eq!(draft.to_row(AdminTab::Articles)["author"], "M. O. Ahmed");
}

#[test]
fn from_row_prefills_editable_fields() {
    let row = AdminRow::from(&news_row());
    let draft = ContentDraft::from_row(&row);

    assert_eq!(draft.id, Some(id(7)));
    assert_eq!(draft.title_ar, "خبر");
    assert_eq!(draft.body_fr, "texte");
    assert_eq!(draft.cover_path, "news/cover.jpg");
    assert!(draft.author.is_empty());
}

// =============================================================
// Selection
// =============================================================

#[test]
fn toggle_selected_adds_then_removes() {
    let mut state = AdminState::default();
    state.toggle_selected(id(1));
    assert!(state.is_selected(id(1)));

    state.toggle_selected(id(1));
    assert!(!state.is_selected(id(1)));
}

#[test]
fn selection_holds_multiple_rows() {
    let mut state = AdminState::default();
    state.toggle_selected(id(1));
    state.toggle_selected(id(2));
    assert_eq!(state.selected.len(), 2);
}

#[test]
fn switch_tab_resets_selection_and_editor() {
    let mut state = AdminState::default();
    state.toggle_selected(id(1));
    state.editor_open = true;
    state.draft.title_ar = "عنوان".to_owned();

    state.switch_tab(AdminTab::Videos);

    assert_eq!(state.tab, AdminTab::Videos);
    assert!(state.selected.is_empty());
    assert!(!state.editor_open);
    assert!(state.draft.is_blank());
}

// =============================================================
// AdminRow conversions
// =============================================================

#[test]
fn news_item_maps_titles_text_and_date() {
    let admin_row = AdminRow::from(&news_row());
    assert_eq!(admin_row.id, id(7));
    assert_eq!(admin_row.title_ar, "خبر");
    assert_eq!(admin_row.status, ContentStatus::Published);
    assert!(admin_row.date.is_some());
    assert_eq!(admin_row.body_ar.as_deref(), Some("نص"));
    assert!(admin_row.author.is_none());
}

#[test]
fn program_maps_names_without_date_or_text() {
    let row = Program {
        id: id(8),
        name_ar: "برنامج".to_owned(),
        name_fr: "Programme".to_owned(),
        description_ar: String::new(),
        description_fr: String::new(),
        schedule: "Dimanche 20h".to_owned(),
        cover_path: None,
        status: ContentStatus::Draft,
    };

    let admin_row = AdminRow::from(&row);
    assert_eq!(admin_row.title_fr, "Programme");
    assert!(admin_row.date.is_none());
    assert!(admin_row.body_ar.is_none());
}
