use super::*;

// =============================================================
// Lang codes and direction
// =============================================================

#[test]
fn default_language_is_arabic() {
    assert_eq!(Lang::default(), Lang::Ar);
}

#[test]
fn codes_and_directions_pair_up() {
    assert_eq!(Lang::Ar.code(), "ar");
    assert_eq!(Lang::Ar.dir(), "rtl");
    assert_eq!(Lang::Fr.code(), "fr");
    assert_eq!(Lang::Fr.dir(), "ltr");
}

#[test]
fn from_code_round_trips_known_codes() {
    assert_eq!(Lang::from_code("ar"), Lang::Ar);
    assert_eq!(Lang::from_code("fr"), Lang::Fr);
}

#[test]
fn from_code_defaults_unknown_to_arabic() {
    assert_eq!(Lang::from_code(""), Lang::Ar);
    assert_eq!(Lang::from_code("en"), Lang::Ar);
}

// =============================================================
// Toggle and pick
// =============================================================

#[test]
fn toggled_swaps_languages() {
    assert_eq!(Lang::Ar.toggled(), Lang::Fr);
    assert_eq!(Lang::Fr.toggled(), Lang::Ar);
}

#[test]
fn pick_selects_matching_rendition() {
    assert_eq!(Lang::Ar.pick("سلام", "salut"), "سلام");
    assert_eq!(Lang::Fr.pick("سلام", "salut"), "salut");
}
