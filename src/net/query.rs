//! Query-string builders for the backend's PostgREST-style row interface.
//!
//! Filters are plain `column=op.value` pairs joined with `&`. Keeping the
//! builders here, as pure string functions, keeps every request shape unit
//! testable without a network.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use uuid::Uuid;

/// `select=*` — fetch full rows.
#[must_use]
pub fn select_all() -> String {
    "select=*".to_owned()
}

/// Equality filter: `column=eq.value`.
#[must_use]
pub fn eq(column: &str, value: &str) -> String {
    format!("{column}=eq.{value}")
}

/// Published-rows filter used by every public page.
#[must_use]
pub fn published() -> String {
    eq("status", "published")
}

/// Membership filter for bulk operations: `id=in.(a,b,c)`.
#[must_use]
pub fn id_in(ids: &[Uuid]) -> String {
    let list = ids.iter().map(Uuid::to_string).collect::<Vec<_>>().join(",");
    format!("id=in.({list})")
}

/// Descending ordering: `order=column.desc`.
#[must_use]
pub fn order_desc(column: &str) -> String {
    format!("order={column}.desc")
}

/// Row-count cap: `limit=n`.
#[must_use]
pub fn limit(n: u32) -> String {
    format!("limit={n}")
}

/// Full request URL for a table with the given query parts.
#[must_use]
pub fn table_url(base: &str, table: &str, params: &[String]) -> String {
    if params.is_empty() {
        format!("{base}/{table}")
    } else {
        format!("{base}/{table}?{}", params.join("&"))
    }
}
