use super::*;

#[test]
fn auth_base_extends_backend_url() {
    let base = auth_base();
    assert!(base.starts_with(backend_url()));
    assert!(base.ends_with("/auth/v1"));
}

#[test]
fn rest_base_extends_backend_url() {
    let base = rest_base();
    assert!(base.starts_with(backend_url()));
    assert!(base.ends_with("/rest/v1"));
}

#[test]
fn hosts_are_nonempty() {
    assert!(!anon_key().is_empty());
    assert!(!cdn_host().is_empty());
    assert!(!stream_library().is_empty());
}
