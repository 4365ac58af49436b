//! Filter and facet label extraction.

use crate::dom::Document;
use crate::extractor::features::dedup_case_insensitive;
use crate::record::MAX_FILTERS;
use crate::selector::{self, fields::FILTER_RULES};

/// Facet labels from listing sidebars, selects and checkbox labels.
///
/// Labels are unique by lowercase key, never bare numbers or links, and
/// capped at [`MAX_FILTERS`]. Order is first-seen order, which callers
/// should treat as unspecified.
#[must_use]
pub fn extract_filters(doc: &Document) -> Vec<String> {
    let candidates = selector::all_accepted(doc, FILTER_RULES, selector::keep_all);
    dedup_case_insensitive(candidates, MAX_FILTERS)
}
