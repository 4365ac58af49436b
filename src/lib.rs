//! # rs-product-gap
//!
//! Product page extraction and competitive gap analysis.
//!
//! This library turns raw e-commerce product pages into normalized
//! [`ProductRecord`]s, separates product language from shop boilerplate,
//! counts the terms that describe a product category, and diffs a reference
//! product against its competitors.
//!
//! ## Quick Start
//!
//! ```rust
//! use rs_product_gap::{extract, gap::compute_gaps};
//!
//! let ours = extract(r#"<h1 class="product-title">Wireless Mouse X200</h1>
//!     <ul class="features"><li>4K tracking sensor</li><li>USB-C charging</li></ul>
//!     <span class="price">199.99€</span>"#);
//! let theirs = extract(r#"<h1 class="product-title">Optical Mouse B1</h1>
//!     <ul class="features"><li>USB-C charging</li><li>Bluetooth 5.0 dual mode</li></ul>
//!     <span class="price">149.99€</span>"#);
//!
//! let report = compute_gaps(&ours, &[theirs]);
//! assert!(report.missing_features.contains("4k tracking sensor"));
//! assert!(report.unique_competitor_features.contains("bluetooth 5.0 dual mode"));
//! println!("{report}");
//! ```
//!
//! ## Features
//!
//! - **Field Extraction**: Ranked selector tables per field with length windows
//! - **Noise Classification**: Cart, shipping and review text kept out of descriptions
//! - **Term Analysis**: Weighted term, feature and filter frequencies
//! - **Gap Analysis**: Feature, specification, filter and price gaps
//! - **Pipeline**: Batch extraction over any [`pipeline::Fetcher`]

mod error;
mod options;
mod record;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Shared compiled regex patterns and text helpers.
pub mod patterns;

/// Stopword and e-commerce noise vocabulary.
pub mod lexicon;

/// Ranked selector tables and chain evaluation.
pub mod selector;

/// Per-field extraction.
pub mod extractor;

/// E-commerce noise and sentence relevance scoring.
pub mod classifier;

/// Currency pattern matching and amount parsing.
pub mod price;

/// Term, feature and filter frequencies.
pub mod terms;

/// Reference versus competitor gap analysis.
pub mod gap;

/// Fetch-and-extract orchestration.
pub mod pipeline;

/// Shopping aggregator listing analysis.
pub mod aggregator;

/// Consolidated report rows and corpus insights.
pub mod summary;

/// URL parsing and resolution.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use lexicon::{Language, Lexicon};
pub use options::{AnalysisOptions, Options};
pub use record::{ExportRow, ProductRecord, SpecTable, MAX_FEATURES, MAX_FILTERS, MAX_IMAGES};

/// Extracts a product record using default options and the default lexicon.
///
/// Never fails; an empty `title` marks a page that is not a usable product.
///
/// # Example
///
/// ```rust
/// use rs_product_gap::extract;
///
/// let record = extract(r#"<h1 class="product-title">Wireless Mouse X200</h1>"#);
/// assert_eq!(record.title, "Wireless Mouse X200");
/// assert!(record.is_successful());
/// ```
#[must_use]
pub fn extract(html: &str) -> ProductRecord {
    let options = Options::default();
    let lexicon = Lexicon::new(&options.languages);
    extract_with_options(html, &options, &lexicon)
}

/// Extracts a product record with custom options and a caller-owned lexicon.
///
/// Build the [`Lexicon`] once and reuse it across pages.
///
/// # Example
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use rs_product_gap::{extract_with_options, Lexicon, Options};
///
/// let lexicon = Lexicon::default();
/// let options = Options {
///     url: Some("https://shop.example/p/x200".to_string()),
///     extracted_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single(),
///     ..Options::default()
/// };
/// let html = r#"<h1 class="product-title">Wireless Mouse X200</h1>"#;
/// let first = extract_with_options(html, &options, &lexicon);
/// let second = extract_with_options(html, &options, &lexicon);
/// assert_eq!(first, second);
/// assert_eq!(first.domain, "shop.example");
/// ```
#[must_use]
pub fn extract_with_options(html: &str, options: &Options, lexicon: &Lexicon) -> ProductRecord {
    let doc = dom::parse(html);
    extractor::extract_record(&doc, options, lexicon)
}

/// Extracts a product record from raw bytes, honoring the declared charset.
///
/// The encoding is taken from `<meta charset>` or an `http-equiv`
/// content type and defaults to UTF-8. Undecodable bytes become U+FFFD.
///
/// # Example
///
/// ```rust
/// use rs_product_gap::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><h1>Rat\xF3n \xF3ptico</h1></body></html>";
/// assert_eq!(extract_bytes(html).title, "Ratón óptico");
/// ```
#[must_use]
pub fn extract_bytes(html: &[u8]) -> ProductRecord {
    extract(&encoding::decode_html(html))
}

/// [`extract_bytes`] with custom options and lexicon.
#[must_use]
pub fn extract_bytes_with_options(html: &[u8], options: &Options, lexicon: &Lexicon) -> ProductRecord {
    extract_with_options(&encoding::decode_html(html), options, lexicon)
}
