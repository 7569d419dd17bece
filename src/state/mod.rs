//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `locale`, `ui`, `admin`) so individual
//! components can depend on small focused models. Each model lives in an
//! `RwSignal` context provided from the app root; readers take an immutable
//! snapshot per evaluation and never mutate in place.

pub mod admin;
pub mod auth;
pub mod locale;
pub mod ui;
