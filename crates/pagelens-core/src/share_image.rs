//! Share-image URL builder
//!
//! Builds request URLs for the externally hosted Open Graph image service.
//! The service renders a parameterized HTML template and returns a PNG; this
//! module only implements its GET contract:
//!
//! `<service>/<encoded-title>.png?theme=<light|dark>&md=1&fontSize=<size>&images=<encoded-image-dir><variant>.svg`

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Logo variants the service can embed, picked pseudo-randomly per request
pub const LOGO_VARIANTS: &[&str] = &["logo-black", "logo-white", "logo-color"];

const DEFAULT_FONT_SIZE: &str = "100px";

/// Color theme of the rendered share image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Pick a theme pseudo-randomly
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown theme '{0}' (expected 'light' or 'dark')")]
pub struct UnknownTheme(String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Builds share-image request URLs for a given service endpoint
#[derive(Debug, Clone)]
pub struct ShareImageBuilder {
    service_url: String,
    image_dir: String,
    variants: Vec<String>,
    font_size: String,
}

impl ShareImageBuilder {
    pub fn new(service_url: impl Into<String>, image_dir: impl Into<String>) -> Self {
        Self {
            service_url: service_url.into(),
            image_dir: image_dir.into(),
            variants: LOGO_VARIANTS.iter().map(|v| v.to_string()).collect(),
            font_size: DEFAULT_FONT_SIZE.to_string(),
        }
    }

    /// Replace the logo variant pool (ignored when empty)
    pub fn with_variants(mut self, variants: Vec<String>) -> Self {
        if !variants.is_empty() {
            self.variants = variants;
        }
        self
    }

    pub fn with_font_size(mut self, font_size: impl Into<String>) -> Self {
        self.font_size = font_size.into();
        self
    }

    /// Build a request URL with an explicit theme and logo variant
    pub fn url_for(&self, title: &str, theme: Theme, variant: &str) -> String {
        format!(
            "{}/{}.png?theme={}&md=1&fontSize={}&images={}{}.svg",
            self.service_url.trim_end_matches('/'),
            urlencoding::encode(title),
            theme,
            self.font_size,
            urlencoding::encode(&self.image_dir),
            variant,
        )
    }

    /// Build a request URL with the given theme and a pseudo-randomly picked variant
    pub fn url_with_random_variant(&self, title: &str, theme: Theme) -> String {
        let mut rng = rand::thread_rng();
        let variant = self
            .variants
            .choose(&mut rng)
            .map(String::as_str)
            .unwrap_or(LOGO_VARIANTS[0]);
        self.url_for(title, theme, variant)
    }

    /// Build a request URL with theme and logo variant picked pseudo-randomly
    pub fn random_url(&self, title: &str) -> String {
        self.url_with_random_variant(title, Theme::random())
    }
}
