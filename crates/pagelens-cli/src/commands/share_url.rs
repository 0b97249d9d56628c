use clap::Args;
use pagelens_core::{ShareImageBuilder, Theme};

/// Print a share-image request URL for the external Open Graph image service
#[derive(Args)]
pub struct ShareUrlCommand {
    /// Title rendered into the share image
    pub title: String,

    /// Share-image service base URL
    #[arg(
        long,
        default_value = "https://og.pagelens.dev",
        env = "PAGELENS_SHARE_SERVICE_URL"
    )]
    pub service_url: String,

    /// Base directory the logo variants are served from
    #[arg(
        long,
        default_value = "https://pagelens.dev/assets/",
        env = "PAGELENS_SHARE_IMAGE_DIR"
    )]
    pub image_dir: String,

    /// Pin the theme instead of choosing pseudo-randomly
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Pin the logo variant instead of choosing pseudo-randomly
    #[arg(long)]
    pub variant: Option<String>,
}

impl ShareUrlCommand {
    pub fn execute(self) -> anyhow::Result<()> {
        let builder = ShareImageBuilder::new(self.service_url, self.image_dir);

        let theme = self.theme.unwrap_or_else(Theme::random);
        let url = match self.variant {
            Some(variant) => builder.url_for(&self.title, theme, &variant),
            None => builder.url_with_random_variant(&self.title, theme),
        };

        println!("{url}");
        Ok(())
    }
}
