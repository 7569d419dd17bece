//! Authenticated admin area, gated by `auth::guard::RouteGuard`.

pub mod dashboard;
pub mod studio;
