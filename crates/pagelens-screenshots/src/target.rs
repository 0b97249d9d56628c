//! Capture targets
//!
//! A capture target is a URL that passed the accept check, plus the output
//! path its screenshot is written to. Acceptance is a substring match on the
//! secure scheme marker rather than full URL parsing, so strings that merely
//! contain `https://` are accepted and plain `http://` targets are rejected.

use std::path::{Path, PathBuf};

use crate::error::{ScreenshotError, ScreenshotResult};

/// Scheme marker a URL must contain to be accepted for capture
pub const SECURE_SCHEME: &str = "https://";

/// A URL accepted for capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTarget {
    url: String,
}

impl CaptureTarget {
    /// Accept a candidate URL, or reject it without opening a browser session
    pub fn new(url: impl Into<String>) -> ScreenshotResult<Self> {
        let url = url.into();
        if !url.contains(SECURE_SCHEME) {
            return Err(ScreenshotError::InvalidUrl(url));
        }
        Ok(Self { url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Output filename: the URL with the first scheme marker removed, plus `.png`
    pub fn output_filename(&self) -> String {
        format!("{}.png", self.url.replacen(SECURE_SCHEME, "", 1))
    }

    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.output_filename())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_https_urls() {
        let target = CaptureTarget::new("https://example.com").unwrap();
        assert_eq!(target.url(), "https://example.com");
    }

    #[test]
    fn accepts_any_string_containing_the_marker() {
        // The accept check is a substring match, not a parser
        assert!(CaptureTarget::new("prefix https://example.com").is_ok());
    }

    #[test]
    fn rejects_urls_without_the_marker() {
        for candidate in ["ftp://example.com", "http://example.com", "not-a-url", ""] {
            match CaptureTarget::new(candidate) {
                Err(ScreenshotError::InvalidUrl(url)) => assert_eq!(url, candidate),
                other => panic!("expected InvalidUrl for {candidate:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn output_filename_strips_first_marker_only() {
        let target = CaptureTarget::new("https://example.com").unwrap();
        assert_eq!(target.output_filename(), "example.com.png");

        let target = CaptureTarget::new("https://mirror.test/https://example.com").unwrap();
        assert_eq!(
            target.output_filename(),
            "mirror.test/https://example.com.png"
        );
    }

    #[test]
    fn output_path_joins_the_output_dir() {
        let target = CaptureTarget::new("https://example.com/docs").unwrap();
        assert_eq!(
            target.output_path(Path::new("screenshots")),
            PathBuf::from("screenshots/example.com/docs.png")
        );
    }
}
