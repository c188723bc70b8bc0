//! Gateway client tests against a mock collaborator.

use std::time::Duration;

use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vparse_client::{GatewayClient, GatewayConfig, ParseError, ParsePhase, ParseSession};
use vparse_models::ParserType;

fn client_for(server: &MockServer) -> GatewayClient {
    GatewayClient::new(GatewayConfig {
        base_url: server.uri(),
        timeout: Duration::from_secs(2),
    })
    .unwrap()
}

#[tokio::test]
async fn detect_returns_classification() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/detect-vip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "isVip": true
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.detect("https://iqiyi.com/v_123").await);
}

#[tokio::test]
async fn detect_fails_open_on_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/detect-vip"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(!client.detect("https://iqiyi.com/v_123").await);
}

#[tokio::test]
async fn detect_fails_open_when_unreachable() {
    // Nothing listening here
    let client = GatewayClient::new(GatewayConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout: Duration::from_millis(500),
    })
    .unwrap();

    assert!(!client.detect("https://iqiyi.com/v_123").await);
}

#[tokio::test]
async fn detect_fails_open_on_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/detect-vip"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(!client.detect("https://iqiyi.com/v_123").await);
}

#[tokio::test]
async fn parse_returns_result_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/parse-video"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "result": {
                "title": "Parsed video",
                "playUrl": "https://jx.example.com/?url=x",
                "downloadUrl": "https://jx.example.com/?url=x",
                "fileSize": "1.2GB",
                "quality": "1080P",
                "parserLine": "line1"
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let result = client
        .parse("https://iqiyi.com/v_123", ParserType::Vip, "line1")
        .await
        .unwrap();
    assert_eq!(result.parser_line, "line1");
    assert_eq!(result.play_url, "https://jx.example.com/?url=x");
}

#[tokio::test]
async fn parse_surfaces_collaborator_failure_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/parse-video"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "success": false,
            "message": "Parse failed, try another line"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .parse("https://iqiyi.com/v_123", ParserType::Vip, "line1")
        .await
        .unwrap_err();
    match err {
        ParseError::Rejected(message) => assert_eq!(message, "Parse failed, try another line"),
        other => panic!("expected Rejected, got {other:?}"),
    }
}

/// Failing line1, then retrying on line2, recovers the session.
#[tokio::test]
async fn parse_retry_on_second_line_recovers() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/parse-video"))
        .and(body_partial_json(serde_json::json!({"parserLine": "line1"})))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "success": false,
            "message": "Parse failed, try another line"
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/parse-video"))
        .and(body_partial_json(serde_json::json!({"parserLine": "line2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": true,
            "result": {
                "title": "Parsed video",
                "playUrl": "https://jx2.example.com/?url=x",
                "downloadUrl": "https://jx2.example.com/?url=x",
                "fileSize": "1.2GB",
                "quality": "1080P",
                "parserLine": "line2"
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut session = ParseSession::new();

    session.begin().unwrap();
    let err = client
        .parse("https://iqiyi.com/v_123", ParserType::Vip, "line1")
        .await
        .unwrap_err();
    session.fail(err.to_string());
    assert_eq!(session.phase(), ParsePhase::Failed);

    session.begin().unwrap();
    let result = client
        .parse("https://iqiyi.com/v_123", ParserType::Vip, "line2")
        .await
        .unwrap();
    session.complete(result);
    assert_eq!(session.phase(), ParsePhase::Success);
    assert_eq!(session.result().unwrap().parser_line, "line2");
}
