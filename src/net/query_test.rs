use super::*;

// =============================================================
// Filters
// =============================================================

#[test]
fn eq_builds_postgrest_filter() {
    assert_eq!(eq("status", "published"), "status=eq.published");
    assert_eq!(eq("id", "42"), "id=eq.42");
}

#[test]
fn published_targets_status_column() {
    assert_eq!(published(), "status=eq.published");
}

#[test]
fn id_in_joins_ids_with_commas() {
    let a = Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap();
    let b = Uuid::parse_str("00000000-0000-0000-0000-000000000002").unwrap();
    assert_eq!(
        id_in(&[a, b]),
        "id=in.(00000000-0000-0000-0000-000000000001,00000000-0000-0000-0000-000000000002)"
    );
}

#[test]
fn id_in_single_id_has_no_trailing_comma() {
    let a = Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap();
    assert_eq!(id_in(&[a]), "id=in.(00000000-0000-0000-0000-000000000001)");
}

// =============================================================
// Ordering and limits
// =============================================================

#[test]
fn order_desc_shape() {
    assert_eq!(order_desc("published_at"), "order=published_at.desc");
}

#[test]
fn limit_shape() {
    assert_eq!(limit(6), "limit=6");
}

// =============================================================
// table_url
// =============================================================

#[test]
fn table_url_without_params() {
    assert_eq!(table_url("https://api.example/rest/v1", "news", &[]), "https://api.example/rest/v1/news");
}

#[test]
fn table_url_joins_params_with_ampersands() {
    let url = table_url(
        "https://api.example/rest/v1",
        "news",
        &[select_all(), published(), order_desc("published_at"), limit(6)],
    );
    assert_eq!(
        url,
        "https://api.example/rest/v1/news?select=*&status=eq.published&order=published_at.desc&limit=6"
    );
}
