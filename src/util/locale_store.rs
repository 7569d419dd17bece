//! Language preference persistence and document application.
//!
//! The platform publishes every piece of content in Arabic and French; the
//! active language drives both text selection and the document direction.
//! The choice is stored in `localStorage` and mirrored onto the `<html>`
//! element's `lang`/`dir` attributes so CSS can follow.

use crate::state::locale::Lang;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "mirath_lang";

/// Read the stored language preference, defaulting to Arabic.
#[must_use]
pub fn read_preference() -> Lang {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(val)) = storage.get_item(STORAGE_KEY) {
                    return Lang::from_code(&val);
                }
            }
        }
        Lang::default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Lang::default()
    }
}

/// Mirror the active language onto `<html lang dir>`.
pub fn apply(lang: Lang) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("lang", lang.code());
                let _ = el.set_attribute("dir", lang.dir());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = lang;
    }
}

/// Switch to the other language, apply it, and persist the choice.
pub fn toggle(current: Lang) -> Lang {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, next.code());
            }
        }
    }
    next
}
