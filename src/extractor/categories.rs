//! Breadcrumb category extraction.

use std::collections::HashSet;

use crate::dom::Document;
use crate::selector::{self, fields::{CATEGORY_RULES, ROOT_CATEGORY_LABELS}};

/// Breadcrumb and category link labels, root labels ("Home", "Inicio")
/// removed, in first-seen order without repeats.
#[must_use]
pub fn extract_categories(doc: &Document) -> Vec<String> {
    let mut seen = HashSet::new();
    selector::all_accepted(doc, CATEGORY_RULES, selector::keep_all)
        .into_iter()
        .filter(|label| !is_root_label(label))
        .filter(|label| seen.insert(label.clone()))
        .collect()
}

fn is_root_label(label: &str) -> bool {
    let lower = label.to_lowercase();
    ROOT_CATEGORY_LABELS.contains(&lower.as_str())
}
