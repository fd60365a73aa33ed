//! Best-effort percent-encoding of request URLs.

use url::Url;

/// Re-serializes `url` with its path and query percent-encoded as ASCII,
/// leaving scheme, host, and port untouched.
///
/// Discovered hrefs carry decoded path segments (spaces, non-ASCII names);
/// this turns them back into URLs an HTTP client will accept. Encoding is
/// best-effort: if the string does not parse as a URL it is returned
/// unchanged, never an error. Already-encoded input round-trips unchanged.
///
/// The `url` crate serializes per the WHATWG URL standard, which also
/// resolves dot segments (`http://x/a/../b.pdf` becomes `http://x/b.pdf`)
/// and drops default ports. Classification leaves `../` in hrefs
/// unresolved, so a `../`-linked file href is normalized here, at request
/// time only; the href recorded by the crawl keeps the concatenated form.
#[must_use]
pub fn encode_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed.to_string(),
        Err(_) => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_ascii_safe_url_unchanged() {
        assert_eq!(
            encode_url("http://x/a/b.pdf"),
            "http://x/a/b.pdf".to_string()
        );
    }

    #[test]
    fn test_encode_space_in_path() {
        assert_eq!(
            encode_url("http://x/a b.pdf"),
            "http://x/a%20b.pdf".to_string()
        );
    }

    #[test]
    fn test_encode_non_ascii_path() {
        assert_eq!(
            encode_url("http://x/caf\u{e9}.pdf"),
            "http://x/caf%C3%A9.pdf".to_string()
        );
    }

    #[test]
    fn test_encode_query_preserved_and_escaped() {
        assert_eq!(
            encode_url("http://x/a.pdf?name=a b"),
            "http://x/a.pdf?name=a%20b".to_string()
        );
    }

    #[test]
    fn test_encode_is_idempotent() {
        let once = encode_url("http://x/a b.pdf");
        assert_eq!(encode_url(&once), once);
    }

    #[test]
    fn test_encode_resolves_dot_segments() {
        assert_eq!(
            encode_url("http://x/a/../b.pdf"),
            "http://x/b.pdf".to_string()
        );
    }

    #[test]
    fn test_encode_drops_default_port() {
        assert_eq!(
            encode_url("http://x:80/a.pdf"),
            "http://x/a.pdf".to_string()
        );
    }

    #[test]
    fn test_encode_unparseable_input_unchanged() {
        assert_eq!(encode_url("not a url"), "not a url".to_string());
        assert_eq!(encode_url(""), String::new());
    }

    #[test]
    fn test_encode_leaves_host_and_port_intact() {
        assert_eq!(
            encode_url("http://example.com:8080/a b/c.txt"),
            "http://example.com:8080/a%20b/c.txt".to_string()
        );
    }
}
