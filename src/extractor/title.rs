//! Title extraction.

use crate::dom::Document;
use crate::selector::{self, fields::TITLE_RULES};

/// First title candidate accepted by the title chain, or an empty string.
///
/// An empty result marks the whole record as failed.
#[must_use]
pub fn extract_title(doc: &Document) -> String {
    selector::first_accepted(doc, TITLE_RULES).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn product_heading_beats_document_title() {
        let doc = dom::parse(
            r#"<html><head><title>Tienda Online | Ratón</title></head>
            <body><h1 class="product-title">Wireless Mouse X200</h1></body></html>"#,
        );
        assert_eq!(extract_title(&doc), "Wireless Mouse X200");
    }

    #[test]
    fn falls_back_to_document_title() {
        let doc = dom::parse("<html><head><title>Teclado mecánico K7</title></head><body><p>x</p></body></html>");
        assert_eq!(extract_title(&doc), "Teclado mecánico K7");
    }

    #[test]
    fn short_headings_are_skipped() {
        let doc = dom::parse("<h1>Sale</h1><h1>Auriculares Pro 3</h1>");
        assert_eq!(extract_title(&doc), "Auriculares Pro 3");
    }

    #[test]
    fn open_graph_title_is_last_resort() {
        let doc = dom::parse(
            r#"<html><head><meta property="og:title" content="Cámara Deportiva 4K"></head><body></body></html>"#,
        );
        assert_eq!(extract_title(&doc), "Cámara Deportiva 4K");
    }

    #[test]
    fn no_candidates_gives_empty_title() {
        let doc = dom::parse("<div><p>Hi</p></div>");
        assert_eq!(extract_title(&doc), "");
    }
}
