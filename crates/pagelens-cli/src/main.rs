//! Pagelens CLI - capture screenshots and build share-image URLs
//!
//! Single entrypoint wiring logging, settings and the capture runner.

mod commands;

use clap::{Parser, Subcommand};
use commands::{CaptureCommand, ShareUrlCommand};
use tracing_subscriber::{layer::SubscriberExt, Layer};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "PAGELENS_LOG_LEVEL", global = true)]
    log_level: String,

    /// Log format: compact, full
    #[arg(
        long,
        default_value = "compact",
        env = "PAGELENS_LOG_FORMAT",
        global = true
    )]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Capture screenshots of one or more URLs
    Capture(CaptureCommand),
    /// Print a share-image request URL for a title
    ShareUrl(ShareUrlCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = cli.log_level.clone();

    // If RUST_LOG is set, use it directly; otherwise use our default filter
    let filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .expect("Invalid RUST_LOG environment variable")
    } else {
        // Own crates at the requested level, noisy dependencies at warn
        tracing_subscriber::EnvFilter::new(format!(
            "pagelens_cli={level},\
             pagelens_core={level},\
             pagelens_screenshots={level},\
             headless_chrome=warn,\
             tungstenite=warn,\
             hyper=warn,\
             reqwest=warn,\
             rustls=warn",
            level = log_level
        ))
    };

    let fmt_layer = match cli.log_format.as_str() {
        "full" => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .boxed(),
        _ => tracing_subscriber::fmt::layer() // "compact" or any other value
            .compact()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .boxed(),
    };

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default subscriber");

    match cli.command {
        Commands::Capture(capture_cmd) => capture_cmd.execute(),
        Commands::ShareUrl(share_cmd) => share_cmd.execute(),
    }
}
