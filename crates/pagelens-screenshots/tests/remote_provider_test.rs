//! HTTP contract tests for the remote provider

use base64::Engine;
use mockito::Matcher;
use pagelens_core::ViewportSettings;
use pagelens_screenshots::{RemoteScreenshotProvider, ScreenshotError, ScreenshotProvider};
use serde_json::json;

fn provider_for(server: &mockito::ServerGuard) -> RemoteScreenshotProvider {
    RemoteScreenshotProvider::new(server.url(), None, ViewportSettings::default()).unwrap()
}

#[tokio::test]
async fn decodes_the_base64_image_from_a_successful_response() {
    let mut server = mockito::Server::new_async().await;
    let png = b"\x89PNG\r\n\x1a\nfake-image".to_vec();
    let body = json!({
        "success": true,
        "image": base64::engine::general_purpose::STANDARD.encode(&png),
    });

    let mock = server
        .mock("POST", "/")
        .match_body(Matcher::PartialJson(json!({
            "url": "https://example.com",
            "width": 1920,
            "height": 1080,
            "full_page": true,
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let provider = provider_for(&server);
    let bytes = provider
        .capture_screenshot("https://example.com")
        .await
        .unwrap();

    assert_eq!(bytes, png);
    mock.assert_async().await;
}

#[tokio::test]
async fn service_reported_failure_becomes_a_provider_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"success": false, "error": "render crashed"}).to_string())
        .create_async()
        .await;

    let provider = provider_for(&server);
    let result = provider.capture_screenshot("https://example.com").await;

    match result {
        Err(ScreenshotError::ProviderError(msg)) => assert_eq!(msg, "render crashed"),
        other => panic!("Expected ProviderError, got {other:?}"),
    }
}

#[tokio::test]
async fn http_error_status_becomes_a_request_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/")
        .with_status(503)
        .with_body("overloaded")
        .create_async()
        .await;

    let provider = provider_for(&server);
    let result = provider.capture_screenshot("https://example.com").await;

    match result {
        Err(ScreenshotError::HttpRequest(msg)) => assert!(msg.contains("503")),
        other => panic!("Expected HttpRequest error, got {other:?}"),
    }
}

#[tokio::test]
async fn bearer_key_is_sent_when_configured() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("authorization", "Bearer secret-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "success": true,
                "image": base64::engine::general_purpose::STANDARD.encode(b"png"),
            })
            .to_string(),
        )
        .create_async()
        .await;

    let provider = RemoteScreenshotProvider::new(
        server.url(),
        Some("secret-key".to_string()),
        ViewportSettings::default(),
    )
    .unwrap();
    provider
        .capture_screenshot("https://example.com")
        .await
        .unwrap();

    mock.assert_async().await;
}
