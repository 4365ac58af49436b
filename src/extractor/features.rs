//! Feature bullet extraction.

use std::collections::HashSet;

use crate::dom::Document;
use crate::patterns::{looks_like_link, DIGITS_ONLY};
use crate::record::MAX_FEATURES;
use crate::selector::{self, fields::FEATURE_RULES, utils};

/// Feature bullets in rank then document order.
///
/// Entries are unique by lowercase key (first spelling wins), never bare
/// numbers or links, and capped at [`MAX_FEATURES`]. Feature wrappers that
/// contain list items are skipped since their items are collected on their
/// own.
#[must_use]
pub fn extract_features(doc: &Document) -> Vec<String> {
    let candidates = selector::all_accepted(doc, FEATURE_RULES, utils::wraps_list_items);
    dedup_case_insensitive(candidates, MAX_FEATURES)
}

/// Filters out numeric and link-like entries, then keeps the first spelling
/// of each case-insensitive key, up to `cap` entries.
pub(crate) fn dedup_case_insensitive(candidates: Vec<String>, cap: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|text| !DIGITS_ONLY.is_match(text) && !looks_like_link(text))
        .filter(|text| seen.insert(text.to_lowercase()))
        .take(cap)
        .collect()
}
