//! Integration tests for the capture runner and service

use super::*;
use async_trait::async_trait;
use pagelens_core::CaptureSettings;
use std::sync::{Arc, Mutex};

// Mock provider recording every capture attempt
struct TestProvider {
    call_log: Mutex<Vec<String>>,
    response: Vec<u8>,
    fail_on: Option<String>,
}

impl TestProvider {
    fn new(response: Vec<u8>) -> Self {
        Self {
            call_log: Mutex::new(Vec::new()),
            response,
            fail_on: None,
        }
    }

    fn failing_on(mut self, url: &str) -> Self {
        self.fail_on = Some(url.to_string());
        self
    }

    fn calls(&self) -> Vec<String> {
        self.call_log.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScreenshotProvider for TestProvider {
    async fn capture_screenshot(&self, url: &str) -> ScreenshotResult<Vec<u8>> {
        self.call_log.lock().unwrap().push(url.to_string());

        if self.fail_on.as_deref() == Some(url) {
            return Err(ScreenshotError::CaptureFailed("Test failure".to_string()));
        }

        Ok(self.response.clone())
    }

    fn provider_name(&self) -> &'static str {
        "test-provider"
    }

    async fn is_available(&self) -> bool {
        true
    }
}

fn runner_with(provider: Arc<TestProvider>, output_dir: &std::path::Path) -> CaptureRunner {
    let settings = CaptureSettings {
        output_dir: output_dir.to_path_buf(),
        ..CaptureSettings::default()
    };
    CaptureRunner::new(ScreenshotService::with_provider(settings, provider))
}

#[tokio::test]
async fn valid_url_is_captured_and_written() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(TestProvider::new(b"\x89PNG\r\n\x1a\n".to_vec()));
    let runner = runner_with(provider.clone(), dir.path());

    let outcomes = runner.run(&["https://example.com".to_string()]).await;

    assert_eq!(outcomes.len(), 1);
    let path = outcomes[0].result.as_ref().unwrap();
    assert_eq!(*path, dir.path().join("example.com.png"));
    assert_eq!(std::fs::read(path).unwrap(), b"\x89PNG\r\n\x1a\n");
    assert_eq!(provider.calls(), vec!["https://example.com"]);
}

#[tokio::test]
async fn invalid_url_never_reaches_the_provider() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(TestProvider::new(vec![1, 2, 3]));
    let runner = runner_with(provider.clone(), dir.path());

    let outcomes = runner.run(&["ftp://example.com".to_string()]).await;

    assert_eq!(outcomes.len(), 1);
    assert!(!outcomes[0].is_success());
    assert!(matches!(
        outcomes[0].result,
        Err(ScreenshotError::InvalidUrl(_))
    ));
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn one_failure_does_not_stop_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(TestProvider::new(vec![1]).failing_on("https://a.test"));
    let runner = runner_with(provider.clone(), dir.path());

    let urls = vec![
        "https://a.test".to_string(),
        "not-a-url".to_string(),
        "https://b.test".to_string(),
    ];
    let outcomes = runner.run(&urls).await;

    assert_eq!(outcomes.len(), 3);
    assert!(!outcomes[0].is_success());
    assert!(!outcomes[1].is_success());
    assert!(outcomes[2].is_success());

    // Outcomes keep input order and name the offending URL
    assert_eq!(outcomes[0].url, "https://a.test");
    assert_eq!(outcomes[1].url, "not-a-url");
    assert_eq!(outcomes[2].url, "https://b.test");

    // Exactly two capture attempts: the rejected entry never opened a session
    assert_eq!(provider.calls(), vec!["https://a.test", "https://b.test"]);
}

#[tokio::test]
async fn duplicate_urls_are_captured_independently_and_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(TestProvider::new(vec![7]));
    let runner = runner_with(provider.clone(), dir.path());

    let urls = vec![
        "https://example.com".to_string(),
        "https://example.com".to_string(),
    ];
    let outcomes = runner.run(&urls).await;

    assert_eq!(provider.calls().len(), 2);
    assert!(outcomes.iter().all(CaptureOutcome::is_success));

    // Both attempts land on the same path
    assert_eq!(
        outcomes[0].result.as_ref().unwrap(),
        outcomes[1].result.as_ref().unwrap()
    );
    assert!(dir.path().join("example.com.png").exists());
}

#[tokio::test]
async fn nested_url_paths_create_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(TestProvider::new(vec![1]));
    let runner = runner_with(provider, dir.path());

    let outcomes = runner
        .run(&["https://example.com/docs/intro".to_string()])
        .await;

    let path = outcomes[0].result.as_ref().unwrap();
    assert_eq!(*path, dir.path().join("example.com/docs/intro.png"));
    assert!(path.exists());
}

#[tokio::test]
async fn bounded_concurrency_preserves_input_order() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(TestProvider::new(vec![1]).failing_on("https://b.test"));
    let settings = CaptureSettings {
        output_dir: dir.path().to_path_buf(),
        ..CaptureSettings::default()
    };
    let runner = CaptureRunner::new(ScreenshotService::with_provider(settings, provider))
        .with_max_concurrency(4);

    let urls: Vec<String> = ["https://a.test", "https://b.test", "https://c.test"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let outcomes = runner.run(&urls).await;

    let reported: Vec<&str> = outcomes.iter().map(|o| o.url.as_str()).collect();
    assert_eq!(reported, vec!["https://a.test", "https://b.test", "https://c.test"]);
    assert!(outcomes[0].is_success());
    assert!(!outcomes[1].is_success());
    assert!(outcomes[2].is_success());
}

#[test]
fn error_display_names_the_cause() {
    let error = ScreenshotError::InvalidUrl("test".to_string());
    assert!(format!("{}", error).contains("Invalid URL"));

    let error = ScreenshotError::CaptureFailed("test".to_string());
    assert!(format!("{}", error).contains("Screenshot capture failed"));

    let error = ScreenshotError::ConfigError("test".to_string());
    assert!(format!("{}", error).contains("Configuration error"));
}
