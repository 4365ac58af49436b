//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate so extractors read the same way
//! regardless of which field they are pulling out of the page.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril, the text type returned by dom_query accessors
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
///
/// The HTML5 parser repairs malformed markup instead of failing, so every
/// input yields a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute
#[inline]
#[must_use]
pub fn class_name(sel: &Selection) -> Option<String> {
    sel.attr("class").map(|s| s.to_string())
}

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text content with whitespace runs collapsed and ends trimmed.
///
/// This is the form every length window is measured against.
#[must_use]
pub fn clean_text(sel: &Selection) -> String {
    crate::patterns::normalize_whitespace(&text_content(sel))
}

// === Querying ===

/// Each element matched by a CSS selector, in document order.
///
/// Unparseable selectors yield nothing rather than panicking.
#[must_use]
pub fn select_each<'a>(doc: &'a Document, css: &str) -> Vec<Selection<'a>> {
    doc.try_select(css)
        .map(|matched| matched.iter().collect())
        .unwrap_or_default()
}

/// Each element matched by a CSS selector below `root`, in document order.
#[must_use]
pub fn select_within<'a>(root: &Selection<'a>, css: &str) -> Vec<Selection<'a>> {
    root.try_select(css)
        .map(|matched| matched.iter().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_collapses_whitespace() {
        let doc = parse("<h1>\n  Wireless   Mouse\n X200 </h1>");
        let h1 = doc.select("h1");
        assert_eq!(clean_text(&h1), "Wireless Mouse X200");
    }

    #[test]
    fn select_each_keeps_document_order() {
        let doc = parse("<ul><li>one</li><li>two</li><li>three</li></ul>");
        let items: Vec<String> = select_each(&doc, "li").iter().map(clean_text).collect();
        assert_eq!(items, vec!["one", "two", "three"]);
    }

    #[test]
    fn invalid_selector_yields_nothing() {
        let doc = parse("<p>text</p>");
        assert!(select_each(&doc, "p[[").is_empty());
    }

    #[test]
    fn attribute_helpers() {
        let doc = parse(r#"<div id="buy-box" class="price-block">x</div>"#);
        let div = doc.select("div");
        assert_eq!(id(&div).as_deref(), Some("buy-box"));
        assert_eq!(class_name(&div).as_deref(), Some("price-block"));
        assert_eq!(tag_name(&div).as_deref(), Some("div"));
        assert!(get_attribute(&div, "data-sku").is_none());
    }
}
