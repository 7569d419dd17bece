#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use uuid::Uuid;

use crate::net::types::{Article, ContentStatus, NewsItem, Podcast, Program, VideoItem};
use crate::state::locale::Lang;

/// Content-type tabs in the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    News,
    Articles,
    Podcasts,
    Programs,
    Videos,
}

impl AdminTab {
    /// Backend table this tab manages.
    #[must_use]
    pub fn table(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Articles => "articles",
            Self::Podcasts => "podcasts",
            Self::Programs => "programs",
            Self::Videos => "videos",
        }
    }

    /// Tab label in the active language.
    #[must_use]
    pub fn label(self, lang: Lang) -> &'static str {
        match self {
            Self::News => lang.pick("الأخبار", "Actualités"),
            Self::Articles => lang.pick("المقالات", "Articles"),
            Self::Podcasts => lang.pick("البودكاست", "Podcasts"),
            Self::Programs => lang.pick("البرامج", "Programmes"),
            Self::Videos => lang.pick("الفيديوهات", "Vidéos"),
        }
    }

    /// Whether rows of this type are created/edited in the dialog editor.
    /// Media-backed types are uploaded CDN-side and only curated here.
    #[must_use]
    pub fn editable(self) -> bool {
        matches!(self, Self::News | Self::Articles)
    }
}

/// Draft under edit in the admin dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentDraft {
    /// `None` while creating, `Some` while editing an existing row.
    pub id: Option<Uuid>,
    pub title_ar: String,
    pub title_fr: String,
    pub body_ar: String,
    pub body_fr: String,
    pub author: String,
    pub cover_path: String,
}

impl ContentDraft {
    /// A draft with no title in either language cannot be submitted.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.title_ar.trim().is_empty() && self.title_fr.trim().is_empty()
    }

    /// Row payload for insert/update on the tab's table.
    ///
    /// New rows start as drafts; publication happens through the bulk
    /// status actions, never implicitly on save.
    #[must_use]
    pub fn to_row(&self, tab: AdminTab) -> serde_json::Value {
        let cover = if self.cover_path.trim().is_empty() {
            serde_json::Value::Null
        } else {
            self.cover_path.trim().into()
        };
        let mut row = serde_json::json!({
            "title_ar": self.title_ar.trim(),
            "title_fr": self.title_fr.trim(),
            "body_ar": self.body_ar,
            "body_fr": self.body_fr,
            "cover_path": cover,
        });
        if tab == AdminTab::Articles {
            row["author"] = self.author.trim().into();
        }
        if self.id.is_none() {
            row["status"] = ContentStatus::Draft.as_str().into();
        }
        row
    }

    /// Prefill the editor from an existing table row.
    #[must_use]
    pub fn from_row(row: &AdminRow) -> Self {
        Self {
            id: Some(row.id),
            title_ar: row.title_ar.clone(),
            title_fr: row.title_fr.clone(),
            body_ar: row.body_ar.clone().unwrap_or_default(),
            body_fr: row.body_fr.clone().unwrap_or_default(),
            author: row.author.clone().unwrap_or_default(),
            cover_path: row.cover_path.clone().unwrap_or_default(),
        }
    }
}

/// Admin dashboard state: active tab, table selection, and dialog editor.
#[derive(Clone, Debug, Default)]
pub struct AdminState {
    pub tab: AdminTab,
    pub selected: Vec<Uuid>,
    pub editor_open: bool,
    pub draft: ContentDraft,
    pub pending: bool,
}

impl AdminState {
    /// Toggle a row in or out of the bulk selection.
    pub fn toggle_selected(&mut self, id: Uuid) {
        if let Some(pos) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id);
        }
    }

    #[must_use]
    pub fn is_selected(&self, id: Uuid) -> bool {
        self.selected.contains(&id)
    }

    /// Switch tabs, dropping selection and any open editor.
    pub fn switch_tab(&mut self, tab: AdminTab) {
        self.tab = tab;
        self.selected.clear();
        self.editor_open = false;
        self.draft = ContentDraft::default();
    }
}

/// Uniform row view-model for the admin tables.
///
/// Every content type renders the same columns (bilingual title, status,
/// date); editable types additionally carry their text fields so the
/// editor can prefill without another fetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminRow {
    pub id: Uuid,
    pub title_ar: String,
    pub title_fr: String,
    pub status: ContentStatus,
    pub date: Option<String>,
    pub body_ar: Option<String>,
    pub body_fr: Option<String>,
    pub author: Option<String>,
    pub cover_path: Option<String>,
}

impl From<&NewsItem> for AdminRow {
    fn from(row: &NewsItem) -> Self {
        Self {
            id: row.id,
            title_ar: row.title_ar.clone(),
            title_fr: row.title_fr.clone(),
            status: row.status,
            date: row.published_at.clone(),
            body_ar: Some(row.body_ar.clone()),
            body_fr: Some(row.body_fr.clone()),
            author: None,
            cover_path: row.cover_path.clone(),
        }
    }
}

impl From<&Article> for AdminRow {
    fn from(row: &Article) -> Self {
        Self {
            id: row.id,
            title_ar: row.title_ar.clone(),
            title_fr: row.title_fr.clone(),
            status: row.status,
            date: row.published_at.clone(),
            body_ar: Some(row.body_ar.clone()),
            body_fr: Some(row.body_fr.clone()),
            author: Some(row.author.clone()),
            cover_path: row.cover_path.clone(),
        }
    }
}

impl From<&Podcast> for AdminRow {
    fn from(row: &Podcast) -> Self {
        Self {
            id: row.id,
            title_ar: row.title_ar.clone(),
            title_fr: row.title_fr.clone(),
            status: row.status,
            date: row.published_at.clone(),
            ..Self::default()
        }
    }
}

impl From<&Program> for AdminRow {
    fn from(row: &Program) -> Self {
        Self {
            id: row.id,
            title_ar: row.name_ar.clone(),
            title_fr: row.name_fr.clone(),
            status: row.status,
            ..Self::default()
        }
    }
}

impl From<&VideoItem> for AdminRow {
    fn from(row: &VideoItem) -> Self {
        Self {
            id: row.id,
            title_ar: row.title_ar.clone(),
            title_fr: row.title_fr.clone(),
            status: row.status,
            date: row.published_at.clone(),
            ..Self::default()
        }
    }
}
