//! Description extraction.
//!
//! Every structural span the description chain accepts is a candidate, not
//! just the first. Spans inside shop furniture are vetoed by their container
//! class, and spans that read as cart or review text are dropped by the
//! noise classifier.

use crate::classifier::is_ecommerce_noise;
use crate::dom::Document;
use crate::lexicon::Lexicon;
use crate::selector::fields::{DESCRIPTION_RULES, META_DESCRIPTION_RULE};
use crate::selector::{self, utils};

/// Product-relevant description spans joined by a single space.
///
/// Nested matches never repeat text: a span already contained in an
/// accepted span is skipped, and a span that contains accepted spans
/// replaces them at the position of the first one.
#[must_use]
pub fn extract_description(doc: &Document, lexicon: &Lexicon, include_meta: bool) -> String {
    let mut spans = selector::all_accepted(doc, DESCRIPTION_RULES, utils::is_excluded_container);

    if include_meta {
        if let Some(meta) = selector::first_accepted(doc, std::slice::from_ref(&META_DESCRIPTION_RULE)) {
            spans.push(meta);
        }
    }

    let mut accepted: Vec<String> = Vec::new();
    for span in spans {
        if is_ecommerce_noise(&span, lexicon) {
            continue;
        }
        if accepted.iter().any(|kept| kept.contains(span.as_str())) {
            continue;
        }
        match accepted.iter().position(|kept| span.contains(kept.as_str())) {
            Some(first) => {
                accepted.retain(|kept| !span.contains(kept.as_str()));
                accepted.insert(first, span);
            }
            None => accepted.push(span),
        }
    }

    accepted.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    const PROSE: &str = "Ratón inalámbrico con sensor óptico de 1600 dpi, rueda metálica y diseño ergonómico ambidiestro.";

    #[test]
    fn accepts_product_prose() {
        let html = format!(r#"<div class="product-description">{PROSE}</div>"#);
        let doc = dom::parse(&html);
        assert_eq!(extract_description(&doc, &Lexicon::default(), false), PROSE);
    }

    #[test]
    fn cart_boilerplate_is_rejected() {
        let doc = dom::parse(
            r#"<div class="description">Añadir al carrito. Envío gratis. Opiniones de clientes satisfechos.</div>"#,
        );
        assert_eq!(extract_description(&doc, &Lexicon::default(), false), "");
    }

    #[test]
    fn excluded_containers_are_vetoed() {
        let html = format!(r#"<div class="shipping-details">{PROSE}</div>"#);
        let doc = dom::parse(&html);
        assert_eq!(extract_description(&doc, &Lexicon::default(), false), "");
    }

    #[test]
    fn nested_matches_are_not_repeated() {
        let html = format!(
            r#"<div class="product-description"><p class="summary">{PROSE}</p></div>"#
        );
        let doc = dom::parse(&html);
        assert_eq!(extract_description(&doc, &Lexicon::default(), false), PROSE);
    }

    #[test]
    fn outer_container_replaces_inner_span() {
        let html = format!(
            r#"<div class="product-info">
                <div class="product-description">{PROSE}</div>
                <p>Cuerpo de aluminio anodizado y cable trenzado extraíble.</p>
            </div>
            <div class="overview">Autonomía de seis meses por pila alcalina AA recargable.</div>"#
        );
        let doc = dom::parse(&html);
        let description = extract_description(&doc, &Lexicon::default(), false);
        assert_eq!(description.matches(PROSE).count(), 1, "repeated: {description}");
        assert!(description.starts_with(PROSE));
        assert!(description.contains("cable trenzado extraíble."));
        assert!(description.ends_with("Autonomía de seis meses por pila alcalina AA recargable."));
    }

    #[test]
    fn meta_description_is_appended_when_enabled() {
        let html = format!(
            r#"<html><head><meta name="description" content="Teclado mecánico compacto con interruptores lineales silenciosos"></head>
            <body><div class="overview">{PROSE}</div></body></html>"#
        );
        let doc = dom::parse(&html);
        let lexicon = Lexicon::default();
        assert_eq!(extract_description(&doc, &lexicon, false), PROSE);
        assert_eq!(
            extract_description(&doc, &lexicon, true),
            format!("{PROSE} Teclado mecánico compacto con interruptores lineales silenciosos")
        );
    }

    #[test]
    fn short_spans_are_ignored() {
        let doc = dom::parse(r#"<div class="summary">Muy bueno</div>"#);
        assert_eq!(extract_description(&doc, &Lexicon::default(), true), "");
    }
}
