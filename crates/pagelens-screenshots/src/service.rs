//! Screenshot Service
//!
//! Selects a provider, captures screenshots and persists them under the
//! configured output directory.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, error, info, warn};

use pagelens_core::CaptureSettings;

use crate::error::{ScreenshotError, ScreenshotResult};
use crate::local_provider::LocalScreenshotProvider;
use crate::noop_provider::NoopScreenshotProvider;
use crate::provider::ScreenshotProvider;
use crate::remote_provider::RemoteScreenshotProvider;
use crate::target::CaptureTarget;

/// Environment variable that overrides the configured provider
pub const PROVIDER_ENV_VAR: &str = "PAGELENS_SCREENSHOT_PROVIDER";

/// Screenshot service that manages the provider and storage
pub struct ScreenshotService {
    settings: CaptureSettings,
    provider: Arc<dyn ScreenshotProvider>,
}

impl ScreenshotService {
    /// Create a new screenshot service
    ///
    /// Provider selection priority:
    /// 1. Environment variable `PAGELENS_SCREENSHOT_PROVIDER` (values: "noop", "local", "remote")
    /// 2. `provider` in the capture settings
    /// 3. Default to "local" (headless Chrome)
    pub fn new(settings: CaptureSettings) -> ScreenshotResult<Self> {
        let requested = std::env::var(PROVIDER_ENV_VAR)
            .ok()
            .unwrap_or_else(|| settings.provider.clone());

        let provider: Arc<dyn ScreenshotProvider> = match requested.as_str() {
            "noop" | "disabled" | "none" => {
                info!("Using noop screenshot provider. Screenshots are disabled.");
                Arc::new(NoopScreenshotProvider::new())
            }
            "remote" => {
                if settings.remote_url.is_empty() {
                    return Err(ScreenshotError::ConfigError(
                        "Provider 'remote' selected but no remote service URL is configured"
                            .to_string(),
                    ));
                }
                info!(
                    "Using remote screenshot provider at {}",
                    settings.remote_url
                );
                Arc::new(
                    RemoteScreenshotProvider::new(
                        settings.remote_url.clone(),
                        None,
                        settings.viewport.clone(),
                    )
                    .map_err(|e| {
                        error!("Failed to create remote screenshot provider: {}", e);
                        e
                    })?,
                )
            }
            "local" | "" => {
                info!("Using local headless Chrome screenshot provider");
                Arc::new(LocalScreenshotProvider::from_settings(&settings))
            }
            unknown => {
                warn!(
                    "Unknown screenshot provider '{}', falling back to local headless Chrome",
                    unknown
                );
                Arc::new(LocalScreenshotProvider::from_settings(&settings))
            }
        };

        Ok(Self { settings, provider })
    }

    /// Create a new screenshot service with a custom provider (useful for testing)
    pub fn with_provider(settings: CaptureSettings, provider: Arc<dyn ScreenshotProvider>) -> Self {
        Self { settings, provider }
    }

    /// Capture a screenshot of the target and write it under the output directory
    ///
    /// A later capture of the same URL silently overwrites the earlier file.
    pub async fn capture_and_save(&self, target: &CaptureTarget) -> ScreenshotResult<PathBuf> {
        let file_path = target.output_path(&self.settings.output_dir);
        debug!(
            "Capturing screenshot of {} into {}",
            target.url(),
            file_path.display()
        );

        let image_data = self.provider.capture_screenshot(target.url()).await?;

        // The derived filename can contain path separators, so the parent
        // directory has to exist before the write
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                error!("Failed to create screenshot directory: {}", e);
                ScreenshotError::Io(e)
            })?;
        }

        fs::write(&file_path, &image_data).await.map_err(|e| {
            error!(
                "Failed to write screenshot to {}: {}",
                file_path.display(),
                e
            );
            ScreenshotError::Io(e)
        })?;

        info!(
            "Screenshot saved to {} ({} bytes)",
            file_path.display(),
            image_data.len()
        );

        Ok(file_path)
    }

    /// Capture a screenshot and return the image bytes (without saving)
    pub async fn capture(&self, url: &str) -> ScreenshotResult<Vec<u8>> {
        debug!("Capturing screenshot of {}", url);
        self.provider.capture_screenshot(url).await
    }

    /// Get the name of the current provider
    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }

    /// Check if the provider is available
    pub async fn is_provider_available(&self) -> bool {
        self.provider.is_available().await
    }

    pub fn settings(&self) -> &CaptureSettings {
        &self.settings
    }
}
