use super::*;

#[test]
fn new_trims_whitespace_and_trailing_slash() {
    let cfg = AuthConfig::new("https://api.example.test/ ").unwrap();
    assert_eq!(cfg.server_domain, "https://api.example.test");
}

#[test]
fn new_rejects_non_http_domain() {
    assert_eq!(
        AuthConfig::new("ftp://example.test"),
        Err(ConfigError::InvalidDomain("ftp://example.test".into()))
    );
}

#[test]
fn empty_domain_means_same_origin() {
    let cfg = AuthConfig::new("").unwrap();
    assert_eq!(cfg.endpoint("/signin"), "/signin");
}

#[test]
fn endpoint_joins_domain_and_path() {
    let cfg = AuthConfig::new("http://localhost:3000/").unwrap();
    assert_eq!(cfg.endpoint("/google-auth"), "http://localhost:3000/google-auth");
}

#[test]
fn build_env_config_always_yields_route_urls() {
    let cfg = AuthConfig::from_build_env();
    assert!(cfg.endpoint("/signin").ends_with("/signin"));
}
