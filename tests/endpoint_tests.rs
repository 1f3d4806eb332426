//! 端点解析测试

use tlx::infrastructure::network::endpoint::DEFAULT_SIMPLE_ENDPOINT;
use tlx::{resolve_endpoint, ServiceVariant};

#[test]
fn test_simple_blank_uses_local_default() {
    for raw in ["", "   "] {
        let url = resolve_endpoint(raw, ServiceVariant::Simple).unwrap();
        assert_eq!(url.as_str(), DEFAULT_SIMPLE_ENDPOINT);
    }
}

#[test]
fn test_generic_blank_is_unconfigured() {
    assert!(resolve_endpoint("", ServiceVariant::Generic).is_none());
    assert!(resolve_endpoint("  \t", ServiceVariant::Generic).is_none());
}

#[test]
fn test_generic_bare_host_gets_translate_path() {
    let url = resolve_endpoint("https://api.example.com", ServiceVariant::Generic).unwrap();
    assert_eq!(url.as_str(), "https://api.example.com/translate");

    let url = resolve_endpoint("http://localhost:8080/", ServiceVariant::Generic).unwrap();
    assert_eq!(url.as_str(), "http://localhost:8080/translate");
}

#[test]
fn test_explicit_path_is_kept() {
    let url = resolve_endpoint("https://api.example.com/v2/translate", ServiceVariant::Generic)
        .unwrap();
    assert_eq!(url.path(), "/v2/translate");

    let url = resolve_endpoint("http://10.0.0.2:1188/translate", ServiceVariant::Simple).unwrap();
    assert_eq!(url.path(), "/translate");
}

#[test]
fn test_simple_bare_host_is_used_as_is() {
    let url = resolve_endpoint("http://10.0.0.2:1188", ServiceVariant::Simple).unwrap();
    assert_eq!(url.path(), "/");
}

#[test]
fn test_input_is_trimmed() {
    let url = resolve_endpoint("  https://api.example.com/x  ", ServiceVariant::Simple).unwrap();
    assert_eq!(url.as_str(), "https://api.example.com/x");
}

#[test]
fn test_unusable_endpoints_are_rejected() {
    for variant in [ServiceVariant::Simple, ServiceVariant::Generic] {
        for raw in ["not a url", "ftp://example.com/translate", "file:///tmp/x", "localhost:1188"] {
            assert!(
                resolve_endpoint(raw, variant).is_none(),
                "{} accepted for {}",
                raw,
                variant
            );
        }
    }
}
