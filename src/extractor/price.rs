//! Price extraction.

use crate::dom::{self, Document};
use crate::price::find_price;
use crate::selector::fields::PRICE_RULES;

/// Raw price text from the first price-like element whose text contains a
/// currency amount.
///
/// The currency patterns are tried in order against each candidate's text;
/// the first candidate with any match wins.
#[must_use]
pub fn extract_price(doc: &Document) -> Option<String> {
    PRICE_RULES.iter().find_map(|rule| {
        dom::select_each(doc, rule.query)
            .iter()
            .filter_map(|sel| rule.read(sel))
            .find_map(|text| find_price(&text))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_after_amount() {
        let doc = dom::parse(r#"<span class="product-price">Ahora 29,99 € IVA incluido</span>"#);
        assert_eq!(extract_price(&doc).as_deref(), Some("29,99 €"));
    }

    #[test]
    fn skips_candidates_without_amounts() {
        let doc = dom::parse(
            r#"<div class="price-label">Precio</div><div class="price-value">$ 49.90</div>"#,
        );
        assert_eq!(extract_price(&doc).as_deref(), Some("$ 49.90"));
    }

    #[test]
    fn iso_code_variant() {
        let doc = dom::parse(r#"<p id="price">Total: 120.00 EUR</p>"#);
        assert_eq!(extract_price(&doc).as_deref(), Some("120.00 EUR"));
    }

    #[test]
    fn no_price_is_absent() {
        let doc = dom::parse(r#"<div class="price">Consultar</div><p>199 €</p>"#);
        assert!(extract_price(&doc).is_none());
    }
}
