//! Selector Infrastructure
//!
//! Field extraction is driven by ranked tables of [`FieldRule`]s: a CSS query,
//! where to read the candidate text from, and a length window. Tables live in
//! [`fields`]; supporting a new storefront layout means adding a row there,
//! not writing new extraction code.

use dom_query::Selection;

use crate::dom::{self, Document};
use crate::patterns::normalize_whitespace;

pub mod fields;
pub mod utils;

/// A predicate over a candidate element.
///
/// Used to veto candidates a CSS query cannot express, such as containers
/// whose class marks them as cart or review furniture.
pub type Rule = fn(&Selection) -> bool;

/// Where a rule reads its candidate text from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSource {
    /// Whitespace-normalized text content of the element.
    Text,
    /// First non-empty attribute among the listed names.
    Attr(&'static [&'static str]),
}

/// One row of a fallback-selector chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// CSS selector evaluated against the whole document.
    pub query: &'static str,
    /// Candidate text must be strictly longer than this (in chars).
    pub min_len: usize,
    /// Candidate text must be strictly shorter than this (in chars).
    pub max_len: usize,
    pub source: TextSource,
}

impl FieldRule {
    /// Rule reading element text.
    #[must_use]
    pub const fn text(query: &'static str, min_len: usize, max_len: usize) -> Self {
        Self { query, min_len, max_len, source: TextSource::Text }
    }

    /// Rule reading the first non-empty attribute of `names`.
    #[must_use]
    pub const fn attr(
        query: &'static str,
        names: &'static [&'static str],
        min_len: usize,
        max_len: usize,
    ) -> Self {
        Self { query, min_len, max_len, source: TextSource::Attr(names) }
    }

    /// True if `text` falls inside the length window.
    #[must_use]
    pub fn accepts(&self, text: &str) -> bool {
        let len = text.chars().count();
        len > self.min_len && len < self.max_len
    }

    /// Reads candidate text from `sel`, returning it only if the window accepts it.
    #[must_use]
    pub fn read(&self, sel: &Selection) -> Option<String> {
        let text = match self.source {
            TextSource::Text => dom::clean_text(sel),
            TextSource::Attr(names) => names
                .iter()
                .filter_map(|name| dom::get_attribute(sel, name))
                .map(|value| normalize_whitespace(&value))
                .find(|value| !value.is_empty())?,
        };
        self.accepts(&text).then_some(text)
    }
}

/// Walks `chain` in rank order and returns the first accepted candidate.
///
/// This is the first-match-wins policy: once any candidate passes its
/// window, lower-ranked rules are never consulted.
#[must_use]
pub fn first_accepted(doc: &Document, chain: &[FieldRule]) -> Option<String> {
    chain.iter().find_map(|rule| {
        dom::select_each(doc, rule.query)
            .iter()
            .find_map(|sel| rule.read(sel))
    })
}

/// Collects every accepted candidate from every rule, in rank order then
/// document order. Elements for which `veto` returns true are skipped.
#[must_use]
pub fn all_accepted(doc: &Document, chain: &[FieldRule], veto: Rule) -> Vec<String> {
    let mut out = Vec::new();
    for rule in chain {
        for sel in dom::select_each(doc, rule.query) {
            if veto(&sel) {
                continue;
            }
            if let Some(text) = rule.read(&sel) {
                out.push(text);
            }
        }
    }
    out
}

/// A veto that never fires.
#[must_use]
pub fn keep_all(_sel: &Selection) -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAIN: &[FieldRule] = &[
        FieldRule::text("h1.name", 3, 20),
        FieldRule::text("h2", 3, 20),
        FieldRule::attr("meta[property='og:title']", &["content"], 3, 100),
    ];

    #[test]
    fn first_rule_wins_when_it_matches() {
        let doc = dom::parse(r#"<h2>Second choice</h2><h1 class="name">First choice</h1>"#);
        assert_eq!(first_accepted(&doc, CHAIN).as_deref(), Some("First choice"));
    }

    #[test]
    fn falls_through_when_window_rejects() {
        let doc = dom::parse(r#"<h1 class="name">An extremely long heading that overflows</h1><h2>Fallback</h2>"#);
        assert_eq!(first_accepted(&doc, CHAIN).as_deref(), Some("Fallback"));
    }

    #[test]
    fn attribute_source_is_read() {
        let doc = dom::parse(r#"<head><meta property="og:title" content="Open Graph Name"></head>"#);
        assert_eq!(first_accepted(&doc, CHAIN).as_deref(), Some("Open Graph Name"));
    }

    #[test]
    fn no_candidates_gives_none() {
        let doc = dom::parse("<p>nothing here</p>");
        assert!(first_accepted(&doc, CHAIN).is_none());
    }

    #[test]
    fn window_bounds_are_exclusive() {
        let rule = FieldRule::text("p", 3, 6);
        assert!(!rule.accepts("abc"));
        assert!(rule.accepts("abcd"));
        assert!(rule.accepts("abcde"));
        assert!(!rule.accepts("abcdef"));
    }

    #[test]
    fn window_counts_chars_not_bytes() {
        let rule = FieldRule::text("p", 0, 6);
        assert!(rule.accepts("ñññññ"));
    }

    #[test]
    fn all_accepted_respects_veto() {
        fn is_hidden(sel: &Selection) -> bool {
            utils::class(sel).contains("hidden")
        }
        let doc = dom::parse(r#"<h2>Alpha</h2><h2 class="hidden">Bravo</h2><h2>Charlie</h2>"#);
        let found = all_accepted(&doc, &CHAIN[1..2], is_hidden);
        assert_eq!(found, vec!["Alpha", "Charlie"]);
    }
}
