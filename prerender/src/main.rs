//! # ara-prerender
//!
//! Renders the Project Ara landing page to a static HTML file.
//!
//! ## Usage
//!
//! ```bash
//! # Default config, writes dist/index.html
//! ara-prerender
//!
//! # Custom config and output
//! ara-prerender --config landing.json --out public/index.html
//!
//! # Print the effective config as JSON for the host page
//! ara-prerender --config landing.json --print-config
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "ara-prerender")]
#[command(about = "Render the Project Ara landing page to static HTML")]
#[command(version)]
struct Args {
    /// Output file
    #[arg(long, short, default_value = "dist/index.html")]
    out: PathBuf,

    /// JSON config file (same shape as the host page `landing-config` script)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn run(args: Args) -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("ara-prerender v{}", env!("CARGO_PKG_VERSION"));

    let config = ara_prerender::load_config(args.config.as_deref())?;
    debug!(?config, "effective config");

    if args.print_config {
        let json = serde_json::to_string_pretty(&config).context("failed to serialize config")?;
        println!("{json}");
        return Ok(());
    }

    let html = ara_prerender::render_page(&config);
    ara_prerender::write_page(&args.out, &html)
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ara-prerender] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
