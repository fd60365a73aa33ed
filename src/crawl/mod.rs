//! Breadth-first crawling of HTTP directory listings.
//!
//! A directory listing ("Index of" page) is an HTML document whose anchors
//! point at sub-folders (`href` ending in `/`) and downloadable documents.
//! This module turns one base URL into the full set of reachable folders and
//! files:
//!
//! - [`classify`] decides folder vs. file vs. other for a single anchor
//! - [`FolderExplorer`] fetches one listing and groups its anchors
//! - [`Crawler`] drives the FIFO frontier until every folder is explored
//!
//! Absolute link construction is deliberately naive string concatenation of
//! the folder URL and the (percent-decoded) href, not RFC 3986 resolution.
//! Listings link to their children with bare relative names, so concatenation
//! is exact for them; upgrading to real resolution would change which links
//! are followed.

mod crawler;
mod error;
mod explorer;
mod link;

pub use crawler::{CrawlOutcome, Crawler};
pub use error::CrawlError;
pub use explorer::FolderExplorer;
pub use link::{FILE_SUFFIXES, Link, LinkType, classify};
