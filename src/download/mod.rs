//! HTTP download engine for streaming files to disk.
//!
//! This module provides functionality for downloading discovered files from
//! HTTP/HTTPS URLs with streaming support to handle large files efficiently.
//!
//! # Features
//!
//! - Streaming downloads (memory-efficient for large files)
//! - File names derived from the last path segment of the href
//! - Best-effort percent-encoding of request URLs
//! - Configurable timeouts (30s connect, 5min read by default)
//! - Structured error types with full context
//! - Sequential batch driver with strict and continue-on-error modes
//!
//! # Example
//!
//! ```no_run
//! use dirgrab_core::download::HttpClient;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new();
//! let file_path = client
//!     .download_to_file("https://example.com/docs/paper.pdf", Path::new("./downloads"))
//!     .await?;
//! println!("Downloaded: {}", file_path.display());
//! # Ok(())
//! # }
//! ```

mod batch;
mod client;
pub mod constants;
mod encode;
mod error;
mod filename;

pub use batch::{DownloadFailure, DownloadReport, FailureMode, download_all};
pub use client::HttpClient;
pub use encode::encode_url;
pub use error::DownloadError;
pub use filename::filename_from_href;
