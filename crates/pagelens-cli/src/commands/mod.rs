pub mod capture;
pub mod share_url;

pub use capture::CaptureCommand;
pub use share_url::ShareUrlCommand;
