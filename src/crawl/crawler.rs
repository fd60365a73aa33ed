//! Breadth-first traversal of the folder tree.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, info, instrument};

use super::error::CrawlError;
use super::explorer::FolderExplorer;
use super::link::LinkType;

/// Final output of a crawl: every discovered file href and every explored
/// folder URL, both in discovery order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CrawlOutcome {
    /// Absolute hrefs of every discovered downloadable file.
    pub files: Vec<String>,
    /// Every folder URL that was fetched, in exploration (BFS) order.
    pub explored_folders: Vec<String>,
}

/// BFS driver over a directory-listing tree.
#[derive(Debug, Clone)]
pub struct Crawler {
    explorer: FolderExplorer,
}

impl Crawler {
    /// Creates a crawler that explores folders with the given explorer.
    #[must_use]
    pub fn new(explorer: FolderExplorer) -> Self {
        Self { explorer }
    }

    /// Explores every folder reachable from `base_url` and collects the
    /// discovered file hrefs.
    ///
    /// The frontier is FIFO, so folders are visited in breadth-first order:
    /// every folder at depth *d* is explored before any folder at depth
    /// *d + 1*. A folder URL is enqueued at most once, so a sub-folder that
    /// two listings both link to is fetched a single time.
    ///
    /// # Errors
    ///
    /// Any explorer failure aborts the whole crawl and is returned as-is;
    /// there is no skip-and-continue and no partial-result salvage.
    #[instrument(skip_all, fields(base_url = %base_url))]
    pub async fn crawl(&self, base_url: &str) -> Result<CrawlOutcome, CrawlError> {
        let mut frontier = VecDeque::from([base_url.to_string()]);
        let mut seen: HashSet<String> = HashSet::from([base_url.to_string()]);
        let mut explored_folders = Vec::new();
        let mut files = Vec::new();

        while let Some(url) = frontier.pop_front() {
            info!(folder = %url, "exploring folder");
            let mut links = self.explorer.explore(&url).await?;
            explored_folders.push(url);

            for link in links.remove(&LinkType::File).unwrap_or_default() {
                files.push(link.href);
            }
            for link in links.remove(&LinkType::Folder).unwrap_or_default() {
                if seen.insert(link.href.clone()) {
                    frontier.push_back(link.href);
                } else {
                    debug!(folder = %link.href, "already queued, skipping");
                }
            }
        }

        info!(
            folders = explored_folders.len(),
            files = files.len(),
            "crawl complete"
        );

        Ok(CrawlOutcome {
            files,
            explored_folders,
        })
    }
}
