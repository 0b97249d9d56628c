//! Local Screenshot Provider using Headless Chrome

use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptions};
use pagelens_core::{CaptureSettings, ViewportSettings};
use std::time::Duration;
use tracing::{debug, error, info};

use crate::error::{ScreenshotError, ScreenshotResult};
use crate::provider::ScreenshotProvider;

/// Local screenshot provider using headless Chrome
///
/// Every capture launches its own browser subprocess, which is torn down when
/// the per-capture handle drops. Sessions are never pooled or reused.
pub struct LocalScreenshotProvider {
    /// Timeout for page load in seconds
    timeout_seconds: u64,
    /// Viewport applied to every capture
    viewport: ViewportSettings,
}

impl LocalScreenshotProvider {
    /// Create a new local screenshot provider with default settings
    pub fn new() -> Self {
        Self {
            timeout_seconds: 30,
            viewport: ViewportSettings::default(),
        }
    }

    /// Create a new local screenshot provider from capture settings
    pub fn from_settings(settings: &CaptureSettings) -> Self {
        Self {
            timeout_seconds: settings.timeout_seconds,
            viewport: settings.viewport.clone(),
        }
    }
}

impl Default for LocalScreenshotProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScreenshotProvider for LocalScreenshotProvider {
    async fn capture_screenshot(&self, url: &str) -> ScreenshotResult<Vec<u8>> {
        debug!(
            "Capturing screenshot of {} using local headless Chrome",
            url
        );

        // headless_chrome is sync, so the whole session runs on a blocking thread
        let png = tokio::task::spawn_blocking({
            let timeout = self.timeout_seconds;
            let width = self.viewport.width;
            let height = self.viewport.height;
            let url = url.to_string();

            move || -> ScreenshotResult<Vec<u8>> {
                let options = LaunchOptions::default_builder()
                    .headless(true) // Must be headless for server environments
                    .sandbox(false) // Disable sandbox for Docker compatibility
                    .idle_browser_timeout(Duration::from_secs(timeout))
                    .window_size(Some((width, height)))
                    .build()
                    .map_err(|e| {
                        error!("Failed to build launch options: {}", e);
                        ScreenshotError::ChromeError(format!("Failed to build options: {}", e))
                    })?;

                // A fresh browser per URL; the subprocess dies when this drops
                let browser = Browser::new(options).map_err(|e| {
                    error!("Failed to launch Chrome browser: {}", e);
                    ScreenshotError::ChromeError(format!("Failed to launch browser: {}", e))
                })?;

                debug!("Browser launched successfully");

                let tab = browser.new_tab().map_err(|e| {
                    error!("Failed to create new tab: {}", e);
                    ScreenshotError::ChromeError(format!("Failed to create tab: {}", e))
                })?;

                // Bound navigation waits so a hung page cannot stall the run
                tab.set_default_timeout(Duration::from_secs(timeout));

                let png = tab
                    .navigate_to(&url)
                    .map_err(|e| {
                        error!("Failed to navigate to {}: {}", url, e);
                        ScreenshotError::ChromeError(format!("Failed to navigate: {}", e))
                    })?
                    .wait_until_navigated()
                    .map_err(|e| {
                        error!("Page navigation timeout for {}: {}", url, e);
                        ScreenshotError::ChromeError(format!("Navigation timeout: {}", e))
                    })?
                    .capture_screenshot(
                        headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption::Png,
                        None, // Quality (only for JPEG)
                        None, // Clip region
                        true, // Capture beyond viewport (full page)
                    )
                    .map_err(|e| {
                        error!("Failed to capture screenshot: {}", e);
                        ScreenshotError::ChromeError(format!("Screenshot capture failed: {}", e))
                    })?;

                info!(
                    "Successfully captured screenshot of {} ({} bytes)",
                    url,
                    png.len()
                );
                Ok(png)
            }
        })
        .await
        .map_err(|e| {
            error!("Screenshot task panicked: {}", e);
            ScreenshotError::CaptureFailed(format!("Task execution failed: {}", e))
        })??;

        Ok(png)
    }

    fn provider_name(&self) -> &'static str {
        "local-headless-chrome"
    }

    async fn is_available(&self) -> bool {
        // Try to launch browser to check if Chrome is available
        tokio::task::spawn_blocking(|| {
            let options = LaunchOptions::default_builder()
                .headless(true)
                .sandbox(false)
                .idle_browser_timeout(Duration::from_secs(5))
                .build();

            match options {
                Ok(opts) => Browser::new(opts).is_ok(),
                Err(_) => false,
            }
        })
        .await
        .unwrap_or(false)
    }
}
