//! 翻译客户端测试 (请求格式、响应解析、重试策略)

mod common;

use common::{closed_port_url, fast_network, MockServer, DROP};
use std::time::{Duration, Instant};
use tlx::{LanguageCode, ServiceVariant, TranslationClient, TranslationRequest, Translator};

const SIMPLE_OK: &str = r#"{"code":200,"id":1,"data":"Hallo Welt","source_lang":"EN","target_lang":"DE"}"#;
const GENERIC_OK: &str = r#"{"data":"Bonjour","source_lang":"EN","target_lang":"FR"}"#;

fn client(variant: ServiceVariant, initial_delay_ms: u64) -> TranslationClient {
    TranslationClient::new(variant, fast_network(initial_delay_ms), None)
}

#[tokio::test]
async fn test_simple_success_and_request_shape() {
    let server = MockServer::start(vec![(200, SIMPLE_OK)]).await;
    let client = client(ServiceVariant::Simple, 10);

    let result = client
        .translate_text(LanguageCode::De, "Hello world", &server.url("/translate"))
        .await;

    assert!(!result.is_failure());
    assert_eq!(result.target_lang_code(), "DE");
    assert_eq!(result.translations().len(), 1);
    assert_eq!(result.primary().text, "Hallo Welt");
    assert_eq!(result.primary().detected_source_language, "EN");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/translate");
    assert!(requests[0].head.starts_with("POST "));
    assert_eq!(
        requests[0].header("content-type").as_deref(),
        Some("application/json")
    );
    assert_eq!(
        requests[0].json(),
        serde_json::json!({"text": "Hello world", "source_lang": "auto", "target_lang": "DE"})
    );
}

#[tokio::test]
async fn test_generic_success_appends_translate_path() {
    let server = MockServer::start(vec![(200, GENERIC_OK)]).await;
    let client = client(ServiceVariant::Generic, 10);

    let result = client
        .translate_text(LanguageCode::Fr, "Hello", &server.url("/"))
        .await;

    assert_eq!(result.primary().text, "Bonjour");
    assert_eq!(result.target_lang_code(), "FR");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/translate");
    assert_eq!(
        requests[0].json(),
        serde_json::json!({"text": ["Hello"], "target_lang": "FR"})
    );
}

#[tokio::test]
async fn test_blank_languages_fall_back() {
    let server = MockServer::start(vec![(
        200,
        r#"{"code":200,"data":"Olá","source_lang":"  ","target_lang":""}"#,
    )])
    .await;
    let client = client(ServiceVariant::Simple, 10);

    let result = client
        .translate_text(LanguageCode::PtBr, "Hi", &server.url("/translate"))
        .await;

    assert!(!result.is_failure());
    assert_eq!(result.primary().text, "Olá");
    assert_eq!(result.primary().detected_source_language, "UNK");
    assert_eq!(result.target_lang_code(), "PT-BR");
}

#[tokio::test]
async fn test_rate_limit_retries_with_exponential_backoff() {
    let server = MockServer::start(vec![
        (429, "{}"),
        (429, "{}"),
        (429, "{}"),
        (200, SIMPLE_OK),
    ])
    .await;
    let client = client(ServiceVariant::Simple, 100);

    let result = client
        .translate_text(LanguageCode::De, "Hello world", &server.url("/translate"))
        .await;

    assert!(!result.is_failure());
    assert_eq!(result.primary().text, "Hallo Welt");
    assert_eq!(server.requests().len(), 4);

    let gaps = server.gaps();
    assert_eq!(gaps.len(), 3);
    for (retry, gap) in gaps.iter().enumerate() {
        let scheduled = Duration::from_millis(100 * 2u64.pow(retry as u32));
        assert!(
            *gap >= scheduled,
            "gap {} was {:?}, expected at least {:?}",
            retry,
            gap,
            scheduled
        );
    }
    assert!(gaps[0] < gaps[1] && gaps[1] < gaps[2], "gaps not increasing: {:?}", gaps);
}

#[tokio::test]
async fn test_rate_limit_exhausted() {
    let server = MockServer::start(vec![(429, "{}")]).await;
    let client = client(ServiceVariant::Generic, 5);

    let result = client
        .translate_text(LanguageCode::Ja, "Hello", &server.url("/translate"))
        .await;

    assert!(result.is_failure());
    assert_eq!(result.primary().text, "too many requests");
    assert_eq!(result.primary().detected_source_language, "UNK");
    assert_eq!(result.target_lang_code(), "JA");
    // one attempt plus three retries
    assert_eq!(server.requests().len(), 4);
}

#[tokio::test]
async fn test_forbidden_is_permanent_for_simple() {
    let server = MockServer::start(vec![(403, "{}"), (200, SIMPLE_OK)]).await;
    let client = client(ServiceVariant::Simple, 1000);

    let started = Instant::now();
    let result = client
        .translate_text(LanguageCode::De, "Hello", &server.url("/translate"))
        .await;

    assert!(result.is_failure());
    assert_eq!(result.primary().text, "invalid endpoint");
    assert_eq!(server.requests().len(), 1);
    // no backoff sleep happened
    assert!(started.elapsed() < Duration::from_millis(1000));
}

#[tokio::test]
async fn test_unauthorized_and_not_found_are_permanent_for_simple() {
    for status in [401u16, 404] {
        let server = MockServer::start(vec![(status, "{}")]).await;
        let client = client(ServiceVariant::Simple, 10);

        let result = client
            .translate_text(LanguageCode::De, "Hello", &server.url("/translate"))
            .await;

        assert_eq!(result.primary().text, "invalid endpoint");
        assert_eq!(server.requests().len(), 1);
    }
}

#[tokio::test]
async fn test_not_found_is_generic_error_for_generic_variant() {
    let server = MockServer::start(vec![(404, "{}")]).await;
    let client = client(ServiceVariant::Generic, 10);

    let result = client
        .translate_text(LanguageCode::De, "Hello", &server.url("/translate"))
        .await;

    assert_eq!(result.primary().text, "error during translation");
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn test_generic_message_is_surfaced() {
    let server = MockServer::start(vec![(200, r#"{"message":"target_lang is not supported"}"#)]).await;
    let client = client(ServiceVariant::Generic, 10);

    let result = client
        .translate_text(LanguageCode::Uk, "Hello", &server.url("/translate"))
        .await;

    assert!(result.is_failure());
    assert_eq!(result.primary().text, "target_lang is not supported");
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn test_unparseable_body_is_not_retried() {
    let server = MockServer::start(vec![(200, "<html>oops</html>"), (200, SIMPLE_OK)]).await;
    let client = client(ServiceVariant::Simple, 10);

    let result = client
        .translate_text(LanguageCode::De, "Hello", &server.url("/translate"))
        .await;

    assert_eq!(result.primary().text, "error during translation");
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn test_blank_data_is_an_error() {
    let server = MockServer::start(vec![(200, r#"{"code":200,"data":"   "}"#)]).await;
    let client = client(ServiceVariant::Simple, 10);

    let result = client
        .translate_text(LanguageCode::De, "Hello", &server.url("/translate"))
        .await;

    assert!(result.is_failure());
    assert_eq!(result.primary().text, "error during translation");
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start(vec![(500, "{}"), (200, SIMPLE_OK)]).await;
    let client = client(ServiceVariant::Simple, 10);

    let result = client
        .translate_text(LanguageCode::De, "Hello", &server.url("/translate"))
        .await;

    assert_eq!(result.primary().text, "error during translation");
    assert_eq!(server.requests().len(), 1);
}

#[tokio::test]
async fn test_invalid_endpoint_fails_closed() {
    let client = client(ServiceVariant::Generic, 10);

    for endpoint in ["", "   ", "not a url", "ftp://example.com/translate"] {
        let result = client.translate_text(LanguageCode::De, "Hello", endpoint).await;
        assert!(result.is_failure());
        assert_eq!(result.primary().text, "invalid endpoint");
        assert_eq!(result.primary().detected_source_language, "UNK");
        assert_eq!(result.target_lang_code(), "DE");
    }
}

#[tokio::test]
async fn test_transport_failure_retries_then_reports() {
    let client = client(ServiceVariant::Simple, 5);

    let result = client
        .translate_text(LanguageCode::De, "Hello", &closed_port_url())
        .await;

    assert!(result.is_failure());
    assert_eq!(result.translations().len(), 1);
    assert!(
        result.primary().text.starts_with("Error: "),
        "unexpected message: {}",
        result.primary().text
    );
}

#[tokio::test]
async fn test_dropped_connections_are_retried_until_success() {
    let server = MockServer::start(vec![(DROP, ""), (DROP, ""), (200, SIMPLE_OK)]).await;
    let client = client(ServiceVariant::Simple, 10);

    let result = client
        .translate_text(LanguageCode::De, "Hello world", &server.url("/translate"))
        .await;

    assert!(!result.is_failure(), "unexpected failure: {}", result.primary().text);
    assert_eq!(result.primary().text, "Hallo Welt");
    assert_eq!(server.requests().len(), 3);
}

#[tokio::test]
async fn test_dropped_connections_exhaust_retries_with_jittered_backoff() {
    let server = MockServer::start(vec![(DROP, "")]).await;
    let network = fast_network(100);
    let jitter_ratio = network.jitter_ratio;
    let client = TranslationClient::new(ServiceVariant::Simple, network, None);

    let result = client
        .translate_text(LanguageCode::De, "Hello", &server.url("/translate"))
        .await;

    assert!(result.is_failure());
    assert!(
        result.primary().text.starts_with("Error: "),
        "unexpected message: {}",
        result.primary().text
    );
    // one attempt plus three retries
    assert_eq!(server.requests().len(), 4);

    let gaps = server.gaps();
    assert_eq!(gaps.len(), 3);
    for (retry, gap) in gaps.iter().enumerate() {
        let base_ms = 100.0 * 2f64.powi(retry as i32);
        let floor = Duration::from_secs_f64((1.0 - jitter_ratio) * base_ms / 1000.0);
        assert!(
            *gap >= floor,
            "gap {} was {:?}, expected at least {:?}",
            retry,
            gap,
            floor
        );
    }
}

#[tokio::test]
async fn test_endpoint_change_switches_target() {
    let first = MockServer::start(vec![(200, SIMPLE_OK)]).await;
    let second = MockServer::start(vec![(200, SIMPLE_OK)]).await;
    let client = client(ServiceVariant::Simple, 10);

    client
        .translate_text(LanguageCode::De, "one", &first.url("/translate"))
        .await;
    client
        .translate_text(LanguageCode::De, "two", &second.url("/translate"))
        .await;
    client
        .translate_text(LanguageCode::De, "three", &second.url("/translate"))
        .await;

    assert_eq!(first.requests().len(), 1);
    assert_eq!(second.requests().len(), 2);
}

#[tokio::test]
async fn test_concurrent_calls_share_client() {
    let server = MockServer::start(vec![(200, SIMPLE_OK)]).await;
    let client = client(ServiceVariant::Simple, 10);
    let endpoint = server.url("/translate");

    let (a, b) = tokio::join!(
        client.translate_text(LanguageCode::De, "a", &endpoint),
        client.translate_text(LanguageCode::De, "b", &endpoint),
    );

    assert!(!a.is_failure());
    assert!(!b.is_failure());
    assert_eq!(server.requests().len(), 2);
}

#[tokio::test]
async fn test_translator_trait_uses_request_fields() {
    let server = MockServer::start(vec![(200, GENERIC_OK)]).await;
    let client = client(ServiceVariant::Generic, 10);
    let request = TranslationRequest::new("Hello", LanguageCode::Fr, server.url("/v2/translate"));

    let result = Translator::translate(&client, &request).await;

    assert_eq!(result.primary().text, "Bonjour");
    assert_eq!(server.requests()[0].path, "/v2/translate");
}
