//! CLI entry point for the dirgrab tool.

use anyhow::{Result, bail};
use clap::Parser;
use dirgrab_core::{Crawler, FailureMode, FolderExplorer, HttpClient, download_all};
use tracing::{debug, info, warn};

mod cli;

use cli::Args;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");
    info!("Dirgrab starting");

    if !args.output.is_dir() {
        bail!(
            "output directory does not exist: {}",
            args.output.display()
        );
    }

    if missing_trailing_slash(&args.base_url) {
        // Folder hrefs are appended to the base URL verbatim, so a base
        // without a trailing '/' glues the first segment onto the last
        // path component ("http://x/docs" + "sub/" = "http://x/docssub/").
        warn!(
            base_url = %args.base_url,
            "base URL does not end with '/'; discovered links will concatenate incorrectly"
        );
    }

    // One client for the whole run: listings and downloads share the pool.
    let client = HttpClient::new();
    let crawler = Crawler::new(FolderExplorer::new(client.clone()));

    let outcome = crawler.crawl(&args.base_url).await?;
    info!(
        folders = outcome.explored_folders.len(),
        files = outcome.files.len(),
        "crawl finished"
    );

    if outcome.files.is_empty() {
        info!("No downloadable files discovered");
        return Ok(());
    }

    let mode = if args.keep_going {
        FailureMode::BestEffort
    } else {
        FailureMode::Strict
    };

    let report = download_all(&client, &outcome.files, &args.output, mode).await?;

    info!(
        completed = report.completed(),
        failed = report.failed(),
        total = report.total(),
        "Download complete"
    );

    if report.failed() > 0 {
        for failure in &report.failures {
            warn!(href = %failure.href, error = %failure.error, "failed download");
        }
        bail!("{} of {} downloads failed", report.failed(), report.total());
    }

    Ok(())
}

/// True when the base URL will mis-concatenate with relative folder hrefs.
fn missing_trailing_slash(base_url: &str) -> bool {
    !base_url.ends_with('/')
}
