//! Compiled regex patterns shared by extraction and analysis.
//!
//! All patterns are compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

/// Matches strings made only of digits (pagination links, counters).
pub static DIGITS_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+$").expect("DIGITS_ONLY regex")
});

// =============================================================================
// Tokenization Patterns
// =============================================================================

/// Matches a term of three or more Latin letters, accents included.
///
/// Digits break a term, so "bluetooth5" yields nothing and "usb-c" yields
/// "usb". Applied to lowercased text.
pub static TERM_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\p{Latin}{3,}\b").expect("TERM_TOKEN regex")
});

// =============================================================================
// Candidate Filters
// =============================================================================

/// Prefixes that mark a candidate as a bare link rather than product text.
pub const LINK_PREFIXES: &[&str] = &["http", "www", "mailto"];

/// Normalize whitespace: collapse runs and trim.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text.trim(), " ").into_owned()
}

/// True if the lowercased text starts like a URL or mail link.
#[must_use]
pub fn looks_like_link(text: &str) -> bool {
    let lower = text.to_lowercase();
    LINK_PREFIXES.iter().any(|p| lower.starts_with(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_normalize_collapses_newlines() {
        assert_eq!(normalize_whitespace("  Wireless\n   Mouse\tX200 "), "Wireless Mouse X200");
    }

    #[test]
    fn digits_only_matches_counters() {
        assert!(DIGITS_ONLY.is_match("42"));
        assert!(!DIGITS_ONLY.is_match("42 GB"));
    }

    #[test]
    fn term_token_keeps_accents() {
        let terms: Vec<&str> = TERM_TOKEN
            .find_iter("batería de litio, diseño ergonómico usb-c 4k")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(terms, vec!["batería", "litio", "diseño", "ergonómico", "usb"]);
    }

    #[test]
    fn links_are_detected() {
        assert!(looks_like_link("https://example.com/manual.pdf"));
        assert!(looks_like_link("WWW.example.com"));
        assert!(looks_like_link("mailto:help@example.com"));
        assert!(!looks_like_link("Hypoallergenic ear cushions"));
    }
}
