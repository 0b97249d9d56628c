//! Capture Runner
//!
//! Processes an ordered list of candidate URLs. Every URL gets exactly one
//! outcome, returned in input order; a failure on one URL never stops the
//! rest of the run. By default URLs are processed strictly one at a time; a
//! bounded number of captures can run in flight when configured.

use futures::stream::{self, StreamExt};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::ScreenshotResult;
use crate::service::ScreenshotService;
use crate::target::CaptureTarget;

/// Result of one capture attempt
#[derive(Debug)]
pub struct CaptureOutcome {
    pub url: String,
    pub result: ScreenshotResult<PathBuf>,
}

impl CaptureOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Runs captures for a list of URLs through a screenshot service
pub struct CaptureRunner {
    service: ScreenshotService,
    max_concurrency: usize,
}

impl CaptureRunner {
    pub fn new(service: ScreenshotService) -> Self {
        Self {
            service,
            max_concurrency: 1,
        }
    }

    /// Allow up to `max_concurrency` captures in flight (minimum 1)
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency.max(1);
        self
    }

    /// Capture every URL in order and return one outcome per input
    pub async fn run(&self, urls: &[String]) -> Vec<CaptureOutcome> {
        info!(
            "Capturing {} URL(s) with provider '{}'",
            urls.len(),
            self.service.provider_name()
        );

        if self.max_concurrency <= 1 {
            let mut outcomes = Vec::with_capacity(urls.len());
            for url in urls {
                outcomes.push(self.process(url).await);
            }
            outcomes
        } else {
            // buffered() keeps input order even when completion order differs
            stream::iter(urls)
                .map(|url| self.process(url))
                .buffered(self.max_concurrency)
                .collect::<Vec<_>>()
                .await
        }
    }

    async fn process(&self, url: &str) -> CaptureOutcome {
        let target = match CaptureTarget::new(url) {
            Ok(target) => target,
            Err(e) => {
                warn!("Rejected {}: {}", url, e);
                return CaptureOutcome {
                    url: url.to_string(),
                    result: Err(e),
                };
            }
        };

        let result = self.service.capture_and_save(&target).await;
        match &result {
            Ok(path) => debug!("Captured {} -> {}", url, path.display()),
            Err(e) => warn!("Capture of {} failed: {}", url, e),
        }

        CaptureOutcome {
            url: url.to_string(),
            result,
        }
    }
}
