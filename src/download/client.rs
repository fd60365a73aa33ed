//! HTTP client wrapper for downloading files.
//!
//! This module provides the `HttpClient` struct which handles streaming
//! downloads with proper timeout configuration and error handling.

use std::path::{Path, PathBuf};
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::Client;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tracing::{debug, info, instrument};

use super::constants::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};
use super::encode::encode_url;
use super::error::DownloadError;
use super::filename::filename_from_href;

/// HTTP client for downloading files with streaming support.
///
/// This client is designed to be created once and reused for every fetch in
/// a run (folder listings and file downloads alike), taking advantage of
/// connection pooling.
///
/// # Example
///
/// ```no_run
/// use dirgrab_core::download::HttpClient;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = HttpClient::new();
/// let path = client.download_to_file("https://example.com/file.pdf", Path::new("./downloads")).await?;
/// println!("Downloaded to: {}", path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    /// Creates a new HTTP client with default timeouts.
    ///
    /// Default configuration:
    /// - Connect timeout: 30 seconds
    /// - Read timeout: 5 minutes (for large files)
    /// - Gzip decompression: enabled
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the static
    /// configuration. This should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self::new_with_timeouts(CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS)
    }

    /// Creates a new HTTP client with explicit timeout values.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client builder fails to build with the supplied
    /// timeout configuration.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new_with_timeouts(connect_timeout_secs: u64, read_timeout_secs: u64) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .timeout(Duration::from_secs(read_timeout_secs))
            .gzip(true)
            .build()
            .expect("failed to build HTTP client with static configuration");
        Self { client }
    }

    /// Downloads a file to the output directory, named after the last path
    /// segment of `file_href`.
    ///
    /// The request URL is the best-effort percent-encoded form of the href
    /// (discovered hrefs carry decoded segments). The destination file is
    /// created with truncate semantics, so an existing file of the same name
    /// is overwritten. The output directory must already exist.
    ///
    /// # Returns
    ///
    /// The path to the downloaded file.
    ///
    /// # Errors
    ///
    /// Returns `DownloadError` if:
    /// - The URL is invalid
    /// - The request fails (network error, timeout)
    /// - The server returns an error status (4xx, 5xx)
    /// - Writing to disk fails
    #[must_use = "download result contains the path to the downloaded file"]
    #[instrument(skip_all, fields(url = %file_href))]
    pub async fn download_to_file(
        &self,
        file_href: &str,
        output_dir: &Path,
    ) -> Result<PathBuf, DownloadError> {
        let file_name = filename_from_href(file_href);
        let request_url = encode_url(file_href);
        debug!(filename = %file_name, request_url = %request_url, "starting download");

        let response = self.client.get(&request_url).send().await.map_err(|e| {
            if e.is_timeout() {
                DownloadError::timeout(file_href)
            } else if e.is_builder() {
                DownloadError::invalid_url(file_href)
            } else {
                DownloadError::network(file_href, e)
            }
        })?;

        if !response.status().is_success() {
            return Err(DownloadError::http_status(
                file_href,
                response.status().as_u16(),
            ));
        }

        let file_path = output_dir.join(file_name);
        // create() truncates: re-downloading the same name overwrites it.
        let mut file = File::create(&file_path)
            .await
            .map_err(|e| DownloadError::io(file_path.clone(), e))?;

        let stream_result = stream_to_file(&mut file, response, file_href, &file_path).await;
        if stream_result.is_err() {
            // Don't leave incomplete data behind after a mid-stream failure.
            debug!(path = %file_path.display(), "cleaning up partial file after error");
            let _ = tokio::fs::remove_file(&file_path).await;
        }
        let bytes_written = stream_result?;

        info!(
            path = %file_path.display(),
            bytes = bytes_written,
            "download complete"
        );

        Ok(file_path)
    }

    /// Returns a reference to the underlying reqwest client.
    ///
    /// Used by the folder explorer so listings and downloads share one
    /// connection pool and timeout configuration.
    #[must_use]
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

/// Streams response body to file, returning bytes written.
///
/// This is extracted to enable cleanup on error in the caller.
async fn stream_to_file(
    file: &mut File,
    response: reqwest::Response,
    url: &str,
    file_path: &Path,
) -> Result<u64, DownloadError> {
    let mut writer = BufWriter::new(file);
    let mut stream = response.bytes_stream();
    let mut bytes_written: u64 = 0;

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|e| DownloadError::network(url, e))?;

        writer
            .write_all(&chunk)
            .await
            .map_err(|e| DownloadError::io(file_path.to_path_buf(), e))?;

        bytes_written += chunk.len() as u64;
    }

    // Ensure all data is flushed to disk
    writer
        .flush()
        .await
        .map_err(|e| DownloadError::io(file_path.to_path_buf(), e))?;

    Ok(bytes_written)
}
