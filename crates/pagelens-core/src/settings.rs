use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Process-wide capture settings
/// All fields have sensible defaults for easy onboarding
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureSettings {
    /// Viewport applied to every capture in a run
    pub viewport: ViewportSettings,

    /// Directory screenshots are written to
    pub output_dir: PathBuf,

    /// Page load timeout in seconds
    pub timeout_seconds: u64,

    /// Provider name ("local", "remote" or "noop")
    pub provider: String,

    /// Base URL of the remote screenshot service (remote provider only)
    pub remote_url: String,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            viewport: ViewportSettings::default(),
            output_dir: PathBuf::from("screenshots"),
            timeout_seconds: 30,
            provider: "local".to_string(),
            remote_url: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    pub width: u32,
    pub height: u32,
    pub device_scale_factor: f64,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            device_scale_factor: 1.0,
        }
    }
}
