//! Turning submitted text into a navigable URL.

use crate::store::RecordStore;

/// Resolve free text to an absolute URL.
///
/// - blank text resolves to nothing
/// - a known site name (any case) resolves to `https://<domain>`
/// - text already starting with `http://` or `https://` (any case) is kept
/// - anything else gets an `https://` prefix
pub fn resolve_url(text: &str, store: &RecordStore) -> Option<String> {
    let raw = text.trim();
    if raw.is_empty() {
        return None;
    }
    if let Some(record) = store.lookup(raw) {
        return Some(domain_url(&record.domain));
    }
    if has_http_scheme(raw) {
        return Some(raw.to_string());
    }
    Some(format!("https://{raw}"))
}

/// URL for a record's domain.
pub fn domain_url(domain: &str) -> String {
    format!("https://{domain}")
}

fn has_http_scheme(text: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        text.get(..scheme.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(scheme))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(text: &str) -> Option<String> {
        resolve_url(text, &RecordStore::fallback())
    }

    #[test]
    fn known_name_any_case() {
        assert_eq!(resolve("GitHub").as_deref(), Some("https://github.com"));
        assert_eq!(resolve("  youtube ").as_deref(), Some("https://youtube.com"));
        assert_eq!(resolve("Wikipedia").as_deref(), Some("https://wikipedia.org"));
    }

    #[test]
    fn blank_is_none() {
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("  "), None);
        assert_eq!(resolve("\t\n"), None);
    }

    #[test]
    fn explicit_scheme_is_kept() {
        assert_eq!(resolve("http://example.org").as_deref(), Some("http://example.org"));
        assert_eq!(resolve("HTTPS://Example.org/a").as_deref(), Some("HTTPS://Example.org/a"));
    }

    #[test]
    fn bare_text_gets_https() {
        assert_eq!(resolve("example.org").as_deref(), Some("https://example.org"));
        assert_eq!(resolve("ftp://x.org").as_deref(), Some("https://ftp://x.org"));
        assert_eq!(resolve("httpbin.org").as_deref(), Some("https://httpbin.org"));
    }

    #[test]
    fn scheme_check_is_char_boundary_safe() {
        assert_eq!(resolve("héllo").as_deref(), Some("https://héllo"));
    }

    #[test]
    fn prefix_of_known_name_is_not_a_match() {
        assert_eq!(resolve("git").as_deref(), Some("https://git"));
    }
}
