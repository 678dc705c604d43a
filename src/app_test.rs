use super::*;

const INDEX_HTML: &str = include_str!("../index.html");

#[test]
fn index_page_builds_the_browser_bundle() {
    assert!(INDEX_HTML.contains(r#"rel="rust""#));
    assert!(INDEX_HTML.contains(r#"data-cargo-features="csr""#));
}

#[test]
fn index_body_is_empty_mount_point() {
    assert!(INDEX_HTML.contains("<body></body>"));
}

#[test]
fn app_starts_logged_out_without_stored_session() {
    assert!(!AuthState::restore(&BrowserSession).is_authenticated());
}
