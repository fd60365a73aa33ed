//! File naming for downloaded documents.

/// Returns the local file name for a discovered href: the substring after the
/// last `/`, or the whole string when there is none.
///
/// No sanitization is applied; hrefs come from the crawler, which only
/// classifies listing anchors as files.
#[must_use]
pub fn filename_from_href(href: &str) -> &str {
    match href.rfind('/') {
        Some(index) => &href[index + 1..],
        None => href,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_from_nested_path() {
        assert_eq!(
            filename_from_href("http://x/a/b/report.pdf"),
            "report.pdf"
        );
    }

    #[test]
    fn test_filename_from_root_path() {
        assert_eq!(filename_from_href("http://x/report.pdf"), "report.pdf");
    }

    #[test]
    fn test_filename_without_slash_is_whole_string() {
        assert_eq!(filename_from_href("report.pdf"), "report.pdf");
    }

    #[test]
    fn test_filename_keeps_decoded_characters() {
        assert_eq!(filename_from_href("http://x/a b.pdf"), "a b.pdf");
    }
}
