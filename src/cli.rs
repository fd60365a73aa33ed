//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Crawl a web directory listing and download the documents it serves.
///
/// Dirgrab walks an "Index of"-style page breadth-first, discovering
/// sub-folders and documents from the anchors in each listing, then
/// downloads every discovered file into the output directory.
#[derive(Parser, Debug)]
#[command(name = "dirgrab")]
#[command(author, version, about)]
pub struct Args {
    /// Base URL of the directory listing to crawl (should end with '/')
    pub base_url: String,

    /// Output directory for downloaded files (must already exist)
    #[arg(short = 'o', long, default_value = ".")]
    pub output: PathBuf,

    /// Continue downloading remaining files when one download fails
    #[arg(short = 'k', long)]
    pub keep_going: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}
