//! Session/permission gating: the policy core of the application.
//!
//! DESIGN
//! ======
//! `policy` derives authorization facts from the current auth snapshot,
//! `validate` rejects malformed credentials before any network call, and
//! `guard` turns both into the route-level gate. All verdicts are computed
//! fresh per evaluation; nothing here caches or performs I/O of its own.

pub mod guard;
pub mod policy;
pub mod validate;
