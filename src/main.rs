//! Postlens main entry point
//!
//! Command-line interface: run one extraction and print the result record
//! as JSON.

use anyhow::Context;
use clap::Parser;
use postlens::config::{load_config, Config};
use postlens::pipeline::Pipeline;
use postlens::platform::Platform;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Postlens: blog content extraction for SEO analysis
///
/// Fetches a blog or article page, extracts its title and body text through
/// platform-specific and generic fallback strategies, and prints the
/// normalized result record as JSON.
#[derive(Parser, Debug)]
#[command(name = "postlens")]
#[command(version = "1.0.0")]
#[command(about = "Blog content extraction for SEO analysis", long_about = None)]
struct Cli {
    /// URL of the page to extract
    #[arg(value_name = "URL")]
    url: String,

    /// Platform hint (naver, tistory, wordpress, medium, velog, github,
    /// website); detected from the URL host when omitted
    #[arg(short, long)]
    platform: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Skip rendered extraction, go straight to fallback mode
    #[arg(long)]
    no_render: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, or start from defaults when no file is given
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).with_context(|| format!("failed to load {}", path.display()))?
        }
        None => Config::default(),
    };

    if cli.no_render {
        config.render.enabled = false;
    }

    let url = Url::parse(&cli.url).with_context(|| format!("invalid URL: {}", cli.url))?;

    // An explicit hint wins; unknown hints fall back to host detection
    let platform = cli
        .platform
        .as_deref()
        .and_then(Platform::from_hint)
        .unwrap_or_else(|| Platform::detect(&url));

    let pipeline = Pipeline::new(config).context("failed to build HTTP client")?;
    let result = pipeline.run(url.as_str(), platform).await;

    // A failed extraction is still a well-formed record; only usage and
    // configuration problems exit non-zero
    let output = if cli.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", output);

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("postlens=warn"),
            1 => EnvFilter::new("postlens=info"),
            2 => EnvFilter::new("postlens=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
