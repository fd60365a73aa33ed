//! Sequential batch driver over a list of discovered file hrefs.
//!
//! Downloads run one at a time in discovery order; each transfer fully
//! completes (stream drained, file flushed and closed) before the next
//! starts.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::client::HttpClient;
use super::error::DownloadError;

/// How the batch reacts to a failing download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// The first failure aborts the batch; remaining files are not fetched.
    Strict,
    /// Failures are recorded per file and the batch continues.
    BestEffort,
}

/// One failed download in a best-effort batch.
#[derive(Debug)]
pub struct DownloadFailure {
    /// The href that failed to download.
    pub href: String,
    /// The error that stopped it.
    pub error: DownloadError,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct DownloadReport {
    /// Paths of successfully written files, in download order.
    pub completed: Vec<PathBuf>,
    /// Failures recorded in best-effort mode (always empty in strict mode,
    /// where the first failure propagates instead).
    pub failures: Vec<DownloadFailure>,
}

impl DownloadReport {
    /// Number of files downloaded successfully.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed.len()
    }

    /// Number of files that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Total number of files attempted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.completed.len() + self.failures.len()
    }
}

/// Downloads every href into `output_dir`, sequentially and in order.
///
/// # Errors
///
/// In [`FailureMode::Strict`], the first `DownloadError` aborts the batch
/// and is returned; files after the failing one are never requested. In
/// [`FailureMode::BestEffort`] the function only fails if it cannot make
/// progress at all (it currently always returns a report).
pub async fn download_all(
    client: &HttpClient,
    hrefs: &[String],
    output_dir: &Path,
    mode: FailureMode,
) -> Result<DownloadReport, DownloadError> {
    let mut report = DownloadReport::default();

    for href in hrefs {
        info!(href = %href, "downloading file");
        match client.download_to_file(href, output_dir).await {
            Ok(path) => report.completed.push(path),
            Err(error) => match mode {
                FailureMode::Strict => return Err(error),
                FailureMode::BestEffort => {
                    warn!(href = %href, %error, "download failed, continuing");
                    report.failures.push(DownloadFailure {
                        href: href.clone(),
                        error,
                    });
                }
            },
        }
    }

    info!(
        completed = report.completed(),
        failed = report.failed(),
        total = report.total(),
        "batch complete"
    );

    Ok(report)
}
