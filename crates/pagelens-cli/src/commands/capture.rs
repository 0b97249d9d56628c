use clap::Args;
use colored::Colorize;
use pagelens_core::{CaptureSettings, ViewportSettings};
use pagelens_screenshots::{CaptureRunner, ScreenshotService};
use std::path::PathBuf;
use tracing::{debug, info};

/// Capture full-page screenshots of one or more URLs
#[derive(Args)]
pub struct CaptureCommand {
    /// URLs to capture, processed in order
    #[arg(required = true)]
    pub urls: Vec<String>,

    /// Directory screenshots are written to
    #[arg(long, default_value = "screenshots", env = "PAGELENS_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Viewport width in pixels
    #[arg(long, default_value_t = 1920)]
    pub width: u32,

    /// Viewport height in pixels
    #[arg(long, default_value_t = 1080)]
    pub height: u32,

    /// Page load timeout in seconds
    #[arg(long, default_value_t = 30, env = "PAGELENS_TIMEOUT_SECONDS")]
    pub timeout: u64,

    /// Maximum captures in flight (1 = strictly sequential)
    #[arg(long, default_value_t = 1)]
    pub concurrency: usize,

    /// Remote screenshot service URL (selects the remote provider)
    #[arg(long, env = "PAGELENS_REMOTE_URL")]
    pub remote_url: Option<String>,
}

impl CaptureCommand {
    pub fn execute(self) -> anyhow::Result<()> {
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(self.run())
    }

    async fn run(self) -> anyhow::Result<()> {
        let settings = CaptureSettings {
            viewport: ViewportSettings {
                width: self.width,
                height: self.height,
                ..ViewportSettings::default()
            },
            output_dir: self.output_dir,
            timeout_seconds: self.timeout,
            provider: if self.remote_url.is_some() {
                "remote".to_string()
            } else {
                "local".to_string()
            },
            remote_url: self.remote_url.unwrap_or_default(),
        };

        let service = ScreenshotService::new(settings)?;
        info!(
            "Screenshot provider: {}, writing to {}",
            service.provider_name(),
            service.settings().output_dir.display()
        );

        let runner = CaptureRunner::new(service).with_max_concurrency(self.concurrency);
        let outcomes = runner.run(&self.urls).await;

        let mut failed = 0usize;
        for outcome in &outcomes {
            match &outcome.result {
                Ok(path) => {
                    debug!("Saved {}", path.display());
                    println!("{} {}", "✓".green().bold(), outcome.url);
                }
                Err(e) => {
                    // Cause stays in the logs; the report line only names the URL
                    debug!("Capture of {} failed: {}", outcome.url, e);
                    eprintln!("{} {}", "✗".red().bold(), outcome.url);
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            anyhow::bail!("{} of {} captures failed", failed, outcomes.len());
        }
        Ok(())
    }
}
