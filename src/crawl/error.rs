//! Error types for the crawl module.

use thiserror::Error;

/// Errors that can occur while exploring a directory-listing tree.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// Percent-decoding an anchor href produced invalid UTF-8.
    ///
    /// Scoped to a single anchor: the explorer logs and skips the anchor
    /// rather than failing the folder.
    #[error("cannot percent-decode href {href:?}: {source}")]
    Encoding {
        /// The raw href attribute that failed to decode.
        href: String,
        /// The underlying UTF-8 error.
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Network-level error fetching a folder listing (DNS, connection
    /// refused, TLS errors, etc.)
    #[error("network error fetching folder {url}: {source}")]
    Network {
        /// The folder URL that failed to fetch.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Folder fetch timed out before completion.
    #[error("timeout fetching folder {url}")]
    Timeout {
        /// The folder URL that timed out.
        url: String,
    },

    /// HTTP error response for a folder fetch (4xx, 5xx).
    #[error("HTTP {status} fetching folder {url}")]
    HttpStatus {
        /// The folder URL that returned an error status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },
}

impl CrawlError {
    /// Creates an encoding error for a single undecodable href.
    pub fn encoding(href: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        Self::Encoding {
            href: href.into(),
            source,
        }
    }

    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates a timeout error.
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }
}
