//! Core types shared across the pagelens crates
//!
//! Holds the capture settings consumed by the screenshot crates and the
//! share-image URL builder used to parameterize the external Open Graph
//! image service.

pub mod settings;
pub mod share_image;

pub use settings::{CaptureSettings, ViewportSettings};
pub use share_image::{ShareImageBuilder, Theme, UnknownTheme};
