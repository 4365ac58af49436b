//! Product image extraction.

use std::collections::HashSet;

use url::Url;

use crate::dom::Document;
use crate::record::MAX_IMAGES;
use crate::selector::{self, fields::IMAGE_RULES};
use crate::url_utils;

/// Absolute image URLs, unique, capped at [`MAX_IMAGES`].
///
/// Relative references are resolved against `base`; without a base they
/// are dropped. Inline `data:` images are never kept.
#[must_use]
pub fn extract_images(doc: &Document, base: Option<&Url>) -> Vec<String> {
    let mut seen = HashSet::new();
    selector::all_accepted(doc, IMAGE_RULES, selector::keep_all)
        .iter()
        .filter_map(|reference| url_utils::resolve(reference, base))
        .filter(|url| seen.insert(url.to_lowercase()))
        .take(MAX_IMAGES)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    #[test]
    fn resolves_and_dedups() {
        let doc = dom::parse(
            r#"<html><head><meta property="og:image" content="https://cdn.example/mouse.jpg"></head><body>
            <div class="product-gallery">
                <img src="https://cdn.example/mouse.jpg">
                <img data-src="/img/mouse-side.jpg">
                <img src="data:image/gif;base64,R0lGODlhAQABAAAAACw=">
            </div></body></html>"#,
        );
        let base = url_utils::parse_absolute("https://shop.example/p/mouse");
        assert_eq!(
            extract_images(&doc, base.as_ref()),
            vec!["https://cdn.example/mouse.jpg", "https://shop.example/img/mouse-side.jpg"]
        );
    }

    #[test]
    fn relative_without_base_is_dropped() {
        let doc = dom::parse(r#"<div class="product"><img src="/a.jpg"></div>"#);
        assert!(extract_images(&doc, None).is_empty());
    }

    #[test]
    fn caps_at_ten() {
        let imgs: String = (0..25).map(|i| format!(r#"<img src="https://cdn.example/{i}.jpg">"#)).collect();
        let doc = dom::parse(&format!(r#"<div class="gallery">{imgs}</div>"#));
        assert_eq!(extract_images(&doc, None).len(), MAX_IMAGES);
    }
}
