//! Error types for rs-product-gap.
//!
//! Extraction and analysis never fail on parseable input; these errors are
//! raised only at the edges (fetching, file I/O, serialization) and by
//! the pipeline when a whole record has to be discarded.

/// Error type for pipeline and I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The external fetcher could not deliver a document.
    #[error("Fetch failed for {url}: {reason}")]
    Fetch {
        /// URL that was requested.
        url: String,
        /// Human-readable failure reason from the fetcher.
        reason: String,
    },

    /// Extraction produced no title, so the record is not a product.
    #[error("No product title found for {url}")]
    EmptyTitle {
        /// URL of the discarded record.
        url: String,
    },

    /// Reading a local page or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
