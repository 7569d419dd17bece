//! Credential Store and content backend access.
//!
//! DESIGN
//! ======
//! The backend of record is an external hosted service: auth endpoints for
//! sign-in/sign-up/sign-out and PostgREST-style row endpoints for content.
//! Media lives on a third-party CDN addressed purely by URL construction.
//! Nothing in this module owns a wire format; it only speaks the
//! collaborators' existing contracts.

pub mod api;
pub mod cdn;
pub mod config;
pub mod query;
pub mod types;
