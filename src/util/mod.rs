//! Browser glue helpers: storage-backed preferences, session cache, clock.

pub mod dark_mode;
pub mod locale_store;
pub mod session_cache;
pub mod time;
