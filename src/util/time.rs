//! Wall-clock access and display formatting for timestamps.
//!
//! Session expiry comparisons are done in milliseconds against epoch-second
//! timestamps, so the clock is exposed as `f64` milliseconds.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Current wall-clock time in milliseconds since the Unix epoch.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};

        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0.0, |d| d.as_millis() as f64)
    }
}

/// Date portion of an ISO-8601 timestamp, for list rows and cards.
///
/// Row timestamps come back as `2024-05-01T12:30:00+00:00`; only the date is
/// shown in the UI.
#[must_use]
pub fn date_label(timestamp: &str) -> String {
    timestamp.split('T').next().unwrap_or_default().to_owned()
}

/// Render a duration in seconds as `M:SS` or `H:MM:SS`.
#[must_use]
pub fn duration_label(total_secs: u32) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}
