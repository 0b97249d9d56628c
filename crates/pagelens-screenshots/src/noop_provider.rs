//! No-op Screenshot Provider
//!
//! A provider that does nothing - useful for environments where screenshots
//! cannot be taken (e.g., hosts without Chrome, CI/CD environments, etc.)

use async_trait::async_trait;
use tracing::debug;

use crate::error::{ScreenshotError, ScreenshotResult};
use crate::provider::ScreenshotProvider;

/// No-op screenshot provider
///
/// Enable via environment variable: `PAGELENS_SCREENSHOT_PROVIDER=noop`
pub struct NoopScreenshotProvider;

impl NoopScreenshotProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoopScreenshotProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScreenshotProvider for NoopScreenshotProvider {
    async fn capture_screenshot(&self, url: &str) -> ScreenshotResult<Vec<u8>> {
        debug!(
            "NoopScreenshotProvider: Skipping screenshot capture for {} (noop mode)",
            url
        );
        // Failing is more honest than returning empty data
        Err(ScreenshotError::CaptureFailed(
            "Screenshot provider is disabled (noop mode). Set PAGELENS_SCREENSHOT_PROVIDER to 'local' or 'remote' to enable.".to_string()
        ))
    }

    fn provider_name(&self) -> &'static str {
        "noop"
    }

    async fn is_available(&self) -> bool {
        true
    }
}
