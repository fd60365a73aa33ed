//! Dirgrab Core Library
//!
//! This library provides the core functionality for the dirgrab tool, which
//! walks an "Index of"-style HTTP directory listing breadth-first, classifies
//! every anchor it finds, and downloads each discovered document into a local
//! output directory.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`crawl`] - Link classification, folder exploration, and the BFS crawler
//! - [`download`] - HTTP download client with streaming support and batch driver

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod crawl;
pub mod download;

// Re-export commonly used types
pub use crawl::{CrawlError, CrawlOutcome, Crawler, FolderExplorer, Link, LinkType, classify};
pub use download::{
    DownloadError, DownloadFailure, DownloadReport, FailureMode, HttpClient, download_all,
    encode_url, filename_from_href,
};
