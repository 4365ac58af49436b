//! URL Utility Functions
//!
//! Domain derivation for records and resolution of image references found
//! on the page.

use url::Url;

/// Parse `s` as an absolute http(s) URL with a host.
#[must_use]
pub fn parse_absolute(s: &str) -> Option<Url> {
    let s = s.trim();
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return None;
    }
    Url::parse(s).ok().filter(|url| url.host().is_some())
}

/// Host of `url_str`, or an empty string if it is not an absolute URL.
#[must_use]
pub fn domain_of(url_str: &str) -> String {
    parse_absolute(url_str)
        .and_then(|url| url.host_str().map(str::to_string))
        .unwrap_or_default()
}

/// Resolve an image reference into an absolute URL.
///
/// Returns `None` for empty references and inline `data:`/`javascript:`
/// URIs. Relative references need a `base`; without one they are dropped.
#[must_use]
pub fn resolve(reference: &str, base: Option<&Url>) -> Option<String> {
    let reference = reference.trim();
    if reference.is_empty() {
        return None;
    }

    let lower = reference.to_ascii_lowercase();
    if lower.starts_with("data:") || lower.starts_with("javascript:") {
        return None;
    }

    if let Some(url) = parse_absolute(reference) {
        return Some(url.to_string());
    }

    // protocol-relative and path-relative references
    base.and_then(|b| b.join(reference).ok())
        .filter(|url| matches!(url.scheme(), "http" | "https"))
        .map(|url| url.to_string())
}
