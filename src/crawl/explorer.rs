//! Fetching and parsing of one directory-listing page.

use std::collections::HashMap;
use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::{debug, instrument, warn};

use super::error::CrawlError;
use super::link::{Link, LinkType, classify};
use crate::download::HttpClient;

#[allow(clippy::expect_used)]
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("static selector is valid"));

/// Fetches a folder listing and groups its anchors by [`LinkType`].
///
/// Holds a shared [`HttpClient`] so the crawl reuses one connection pool.
#[derive(Debug, Clone)]
pub struct FolderExplorer {
    client: HttpClient,
}

impl FolderExplorer {
    /// Creates an explorer backed by the given HTTP client.
    #[must_use]
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Fetches `folder_url`, extracts every anchor, and returns the links
    /// grouped by type. Anchor document order is preserved within each
    /// bucket; a type with no anchors is absent from the map.
    ///
    /// A missing `href` attribute is treated as the empty string. An anchor
    /// whose href cannot be percent-decoded is logged and skipped; the rest
    /// of the folder is still processed.
    ///
    /// # Errors
    ///
    /// Returns [`CrawlError::Network`], [`CrawlError::Timeout`], or
    /// [`CrawlError::HttpStatus`] when the folder fetch fails. These are
    /// fatal to the caller's crawl.
    #[instrument(skip_all, fields(url = %folder_url))]
    pub async fn explore(
        &self,
        folder_url: &str,
    ) -> Result<HashMap<LinkType, Vec<Link>>, CrawlError> {
        debug!("fetching folder listing");

        let response = self
            .client
            .inner()
            .get(folder_url)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CrawlError::timeout(folder_url)
                } else {
                    CrawlError::network(folder_url, e)
                }
            })?;

        if !response.status().is_success() {
            return Err(CrawlError::http_status(
                folder_url,
                response.status().as_u16(),
            ));
        }

        // text() decodes the body honoring the response charset.
        let body = response
            .text()
            .await
            .map_err(|e| CrawlError::network(folder_url, e))?;

        Ok(group_anchors(folder_url, &body))
    }
}

/// Parses the listing HTML and classifies every anchor against `folder_url`.
fn group_anchors(folder_url: &str, html: &str) -> HashMap<LinkType, Vec<Link>> {
    let document = Html::parse_document(html);
    let mut groups: HashMap<LinkType, Vec<Link>> = HashMap::new();

    for anchor in document.select(&ANCHOR_SELECTOR) {
        let raw_href = anchor.value().attr("href").unwrap_or("");
        match classify(folder_url, raw_href) {
            Ok(link) => {
                match link.link_type {
                    LinkType::Folder => debug!(href = %link.href, "found folder"),
                    LinkType::File => debug!(href = %link.href, "found file"),
                    LinkType::Other => {}
                }
                groups.entry(link.link_type).or_default().push(link);
            }
            Err(error) => {
                warn!(href = raw_href, %error, "skipping undecodable anchor");
            }
        }
    }

    groups
}
