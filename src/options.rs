//! Configuration options for extraction and analysis.
//!
//! Plain structs with public fields and sensible defaults; override what you
//! need with struct-update syntax.

use chrono::{DateTime, Utc};

use crate::lexicon::Language;

/// Configuration options for product extraction.
///
/// # Example
///
/// ```rust
/// use rs_product_gap::Options;
///
/// let options = Options {
///     url: Some("https://shop.example/p/mouse-x200".to_string()),
///     include_images: false,
///     ..Options::default()
/// };
/// assert!(options.include_meta_description);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// URL of the page, used for the record's `source_url`, its domain and
    /// image resolution.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Fixed extraction timestamp. When `None` the current time is used, so
    /// set this for reproducible output.
    ///
    /// Default: `None`
    pub extracted_at: Option<DateTime<Utc>>,

    /// Languages whose stopwords build the default lexicon.
    ///
    /// Only consulted by entry points that build their own lexicon.
    ///
    /// Default: Spanish and English
    pub languages: Vec<Language>,

    /// Append the `<meta name="description">` content after the structural
    /// description spans.
    ///
    /// Default: `true`
    pub include_meta_description: bool,

    /// Collect product image URLs.
    ///
    /// Default: `true`
    pub include_images: bool,

    /// Separator used when flattening list fields for export.
    ///
    /// Default: `" | "`
    pub export_delimiter: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            extracted_at: None,
            languages: Language::ALL.to_vec(),
            include_meta_description: true,
            include_images: true,
            export_delimiter: " | ".to_string(),
        }
    }
}

impl Options {
    /// The configured URL, or an empty string.
    #[must_use]
    pub fn source_url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }

    /// The configured timestamp, falling back to now.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.extracted_at.unwrap_or_else(Utc::now)
    }
}

/// Configuration for frequency reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Number of entries kept per frequency table.
    ///
    /// Default: `20`
    pub top_n: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self { top_n: 20 }
    }
}
