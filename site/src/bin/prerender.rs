//! Static export of the portfolio page.
//!
//! Renders the page with the intro already finished, so visitors without
//! JavaScript (and crawlers) still see every section.
//!
//! ```bash
//! prerender --config content/site.toml --out dist/index.html
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use tracing::info;

use portfolio::SiteConfig;
use portfolio_site::render_document;

#[derive(Parser, Debug)]
#[command(name = "prerender")]
#[command(about = "Render the portfolio page to a static HTML file")]
#[command(version)]
struct Args {
    /// Site content file
    #[arg(long, default_value = "content/site.toml")]
    config: PathBuf,

    /// Output HTML file (parent directories are created)
    #[arg(long, default_value = "dist/index.html")]
    out: PathBuf,

    /// Copyright year in the footer (defaults to the current year)
    #[arg(long)]
    year: Option<i32>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn run(args: Args) -> Result<()> {
    let site = SiteConfig::load_from_path(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;

    let year = args.year.unwrap_or_else(|| chrono::Local::now().year());
    let html = render_document(&site, year);

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(&args.out, &html)
        .with_context(|| format!("writing {}", args.out.display()))?;

    info!(
        out = %args.out.display(),
        bytes = html.len(),
        "page rendered"
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    // stdout stays clean for shell pipelines
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[prerender] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
