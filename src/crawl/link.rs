//! Anchor classification for directory-listing pages.

use super::error::CrawlError;

/// File suffixes that mark an anchor as a downloadable document.
///
/// Matching is exact and case-sensitive.
pub const FILE_SUFFIXES: [&str; 3] = [".pdf", ".chm", ".txt"];

/// What a directory-listing anchor points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkType {
    /// A sub-folder of the listing (href ends in `/`).
    Folder,
    /// A downloadable document (href ends in one of [`FILE_SUFFIXES`]).
    File,
    /// Anything else (parent links, sort toggles, unrelated pages).
    Other,
}

/// One classified anchor. The href is absolute by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Classification of the anchor target.
    pub link_type: LinkType,
    /// Absolute URL: the folder URL concatenated with the decoded href.
    pub href: String,
}

/// Classifies a raw anchor href found in the listing at `base_url`.
///
/// The href is percent-decoded before classification, then classified:
///
/// 1. ends with `/` and does not start with `/` - [`LinkType::Folder`].
///    Root-relative hrefs are excluded so the crawl cannot escape the
///    scanned subtree (server listings use them for parent links).
/// 2. ends with `.pdf`, `.chm`, or `.txt` - [`LinkType::File`]
/// 3. anything else - [`LinkType::Other`]
///
/// The resulting absolute href is the naive concatenation
/// `base_url + decoded_href` for every category. See the module docs for why
/// this is not RFC 3986 resolution.
///
/// # Errors
///
/// Returns [`CrawlError::Encoding`] when percent-decoding the href yields
/// invalid UTF-8. The caller is expected to skip that single anchor.
pub fn classify(base_url: &str, raw_href: &str) -> Result<Link, CrawlError> {
    let href = urlencoding::decode(raw_href).map_err(|e| CrawlError::encoding(raw_href, e))?;

    let link_type = if href.ends_with('/') && !href.starts_with('/') {
        LinkType::Folder
    } else if FILE_SUFFIXES.iter().any(|suffix| href.ends_with(suffix)) {
        LinkType::File
    } else {
        LinkType::Other
    };

    Ok(Link {
        link_type,
        href: format!("{base_url}{href}"),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_trailing_slash_is_folder() {
        let link = classify("http://x/a/", "sub/").unwrap();
        assert_eq!(link.link_type, LinkType::Folder);
        assert_eq!(link.href, "http://x/a/sub/");
    }

    #[test]
    fn test_classify_root_relative_folder_excluded() {
        // Listings use root-relative hrefs for parent links; following them
        // would escape the scanned subtree.
        let link = classify("http://x/a/", "/b/").unwrap();
        assert_eq!(link.link_type, LinkType::Other);
        assert_eq!(link.href, "http://x/a//b/");
    }

    #[test]
    fn test_classify_file_suffixes() {
        for name in ["doc.pdf", "book.chm", "notes.txt"] {
            let link = classify("http://x/a/", name).unwrap();
            assert_eq!(link.link_type, LinkType::File, "suffix of {name}");
            assert_eq!(link.href, format!("http://x/a/{name}"));
        }
    }

    #[test]
    fn test_classify_suffix_match_is_case_sensitive() {
        let link = classify("http://x/a/", "DOC.PDF").unwrap();
        assert_eq!(link.link_type, LinkType::Other);
    }

    #[test]
    fn test_classify_other() {
        for href in ["page.html", "?C=M;O=A", "", "readme.md"] {
            let link = classify("http://x/a/", href).unwrap();
            assert_eq!(link.link_type, LinkType::Other, "href {href:?}");
        }
    }

    #[test]
    fn test_classify_decodes_href_before_concatenation() {
        let link = classify("http://x/a/", "sub%20dir/").unwrap();
        assert_eq!(link.link_type, LinkType::Folder);
        assert_eq!(link.href, "http://x/a/sub dir/");
    }

    #[test]
    fn test_classify_decoded_leading_slash_excluded() {
        // The leading-slash rule applies to the decoded form.
        let link = classify("http://x/a/", "%2Fescape/").unwrap();
        assert_eq!(link.link_type, LinkType::Other);
    }

    #[test]
    fn test_classify_does_not_resolve_dot_segments() {
        let link = classify("http://x/a/", "../b/").unwrap();
        assert_eq!(link.link_type, LinkType::Folder);
        assert_eq!(link.href, "http://x/a/../b/");
    }

    #[test]
    fn test_classify_invalid_utf8_escape_is_encoding_error() {
        let result = classify("http://x/a/", "file%FF.pdf");
        assert!(
            matches!(result, Err(CrawlError::Encoding { ref href, .. }) if href == "file%FF.pdf"),
            "Expected Encoding error, got: {result:?}"
        );
    }
}
