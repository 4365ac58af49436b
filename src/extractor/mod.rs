//! Field extraction.
//!
//! Each submodule pulls one field of a [`ProductRecord`] out of a parsed
//! document. None of them fail: a field with no accepted candidate is left
//! empty.
//!
//! # Module Structure
//!
//! - `title`: first-match title chain
//! - `description`: classifier-gated description spans
//! - `features`: deduplicated feature bullets
//! - `specs`: last-wins merge of tables and definition lists
//! - `price`: currency pattern scan over price-like elements
//! - `filters`: facet labels
//! - `categories`: breadcrumb labels
//! - `images`: resolved product image URLs

pub mod categories;
pub mod description;
pub mod features;
pub mod filters;
pub mod images;
pub mod price;
pub mod specs;
pub mod title;

use tracing::debug;

use crate::dom::Document;
use crate::lexicon::Lexicon;
use crate::options::Options;
use crate::record::ProductRecord;
use crate::url_utils;

pub use categories::extract_categories;
pub use description::extract_description;
pub use features::extract_features;
pub use filters::extract_filters;
pub use images::extract_images;
pub use price::extract_price;
pub use specs::extract_specifications;
pub use title::extract_title;

/// Runs every field extractor over `doc` and assembles the record.
#[must_use]
pub fn extract_record(doc: &Document, options: &Options, lexicon: &Lexicon) -> ProductRecord {
    let mut record = ProductRecord::empty(options.source_url(), options.timestamp());

    record.title = extract_title(doc);
    record.description = extract_description(doc, lexicon, options.include_meta_description);
    record.features = extract_features(doc);
    record.specifications = extract_specifications(doc);
    record.price = extract_price(doc);
    record.filters = extract_filters(doc);
    record.categories = extract_categories(doc);
    if options.include_images {
        let base = url_utils::parse_absolute(options.source_url());
        record.images = extract_images(doc, base.as_ref());
    }

    debug!(
        url = %record.source_url,
        title_found = record.is_successful(),
        description_chars = record.description.chars().count(),
        features = record.features.len(),
        specifications = record.specifications.len(),
        price = record.price.as_deref().unwrap_or("-"),
        filters = record.filters.len(),
        categories = record.categories.len(),
        images = record.images.len(),
        "extracted product record"
    );

    record
}
