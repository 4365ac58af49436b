//! Utility functions for selector vetoes
//!
//! Attribute access that returns empty strings instead of options, plus the
//! container checks used to reject candidates a CSS query lets through.

use crate::dom;
use dom_query::Selection;

/// Class/id fragments marking shop furniture around a description.
pub const EXCLUDED_CONTAINER_HINTS: &[&str] = &[
    "nav", "menu", "header", "footer", "sidebar", "cart", "carrito", "checkout", "payment",
    "shipping", "delivery", "price", "precio", "review", "opinion", "rating", "valoracion",
    "breadcrumb",
];

/// Get element ID attribute (empty string if missing)
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> String {
    dom::id(sel).unwrap_or_default()
}

/// Get element class attribute (empty string if missing)
#[inline]
#[must_use]
pub fn class(sel: &Selection) -> String {
    dom::class_name(sel).unwrap_or_default()
}

/// Get any attribute (empty string if missing)
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> String {
    dom::get_attribute(sel, name).unwrap_or_default()
}

/// Get tag name (empty string if missing)
#[inline]
#[must_use]
pub fn tag(sel: &Selection) -> String {
    dom::tag_name(sel).unwrap_or_default()
}

/// Lowercased id and class joined, for substring checks over both.
#[must_use]
pub fn id_class_lower(sel: &Selection) -> String {
    format!("{} {}", id(sel), class(sel)).to_lowercase()
}

/// True if the element's own id or class marks it as cart, review, or
/// navigation furniture.
#[must_use]
pub fn is_excluded_container(sel: &Selection) -> bool {
    let id_class = id_class_lower(sel);
    EXCLUDED_CONTAINER_HINTS.iter().any(|hint| id_class.contains(hint))
}

/// True if the element wraps list items; those items are collected on
/// their own, so the wrapper would duplicate them.
#[must_use]
pub fn wraps_list_items(sel: &Selection) -> bool {
    sel.try_select("li").is_some_and(|items| items.exists())
}
