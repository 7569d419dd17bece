use super::*;

// =============================================================
// now_ms
// =============================================================

#[test]
fn now_ms_is_positive_and_monotonic_enough() {
    let a = now_ms();
    let b = now_ms();
    assert!(a > 0.0);
    assert!(b >= a);
}

// =============================================================
// date_label
// =============================================================

#[test]
fn date_label_strips_time_portion() {
    assert_eq!(date_label("2024-05-01T12:30:00+00:00"), "2024-05-01");
    assert_eq!(date_label("2026-01-15T00:00:00Z"), "2026-01-15");
}

#[test]
fn date_label_passes_through_bare_dates() {
    assert_eq!(date_label("2024-05-01"), "2024-05-01");
}

#[test]
fn date_label_empty_input() {
    assert_eq!(date_label(""), "");
}

// =============================================================
// duration_label
// =============================================================

#[test]
fn duration_label_under_an_hour() {
    assert_eq!(duration_label(0), "0:00");
    assert_eq!(duration_label(59), "0:59");
    assert_eq!(duration_label(61), "1:01");
    assert_eq!(duration_label(600), "10:00");
}

#[test]
fn duration_label_over_an_hour() {
    assert_eq!(duration_label(3600), "1:00:00");
    assert_eq!(duration_label(3661), "1:01:01");
    assert_eq!(duration_label(7325), "2:02:05");
}
