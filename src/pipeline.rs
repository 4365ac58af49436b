//! Extraction orchestration.
//!
//! [`ExtractionPipeline`] owns the configuration and the lexicon, asks a
//! [`Fetcher`] for each page, and turns what comes back into
//! [`ProductRecord`]s. Fetch failures and untitled pages are collected as
//! failures instead of aborting the batch.

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::gap::{compute_gaps, GapReport};
use crate::lexicon::Lexicon;
use crate::options::Options;
use crate::record::{ExportRow, ProductRecord};
use crate::{dom, extractor};

/// Source of raw page markup.
///
/// Implementations decide transport, retries and headers; the pipeline calls
/// `fetch` once per URL and never retries.
pub trait Fetcher {
    /// Returns the markup for `url`, or an error describing why it could
    /// not be obtained.
    fn fetch(&self, url: &str) -> Result<String>;
}

impl<F> Fetcher for F
where
    F: Fn(&str) -> Result<String>,
{
    fn fetch(&self, url: &str) -> Result<String> {
        self(url)
    }
}

/// A URL that produced no usable record.
#[derive(Debug)]
pub struct FailedUrl {
    pub url: String,
    pub error: Error,
}

/// Result of a batch run: the usable records and the URLs that failed.
#[derive(Debug, Default)]
pub struct PipelineOutcome {
    /// Records with a title, in input order.
    pub records: Vec<ProductRecord>,
    pub failures: Vec<FailedUrl>,
}

/// A reference product, its competitors and the gaps between them.
#[derive(Debug)]
pub struct Comparison {
    pub reference: ProductRecord,
    pub competitors: PipelineOutcome,
    pub report: GapReport,
}

/// Runs extraction over fetched documents with one shared lexicon.
#[derive(Debug, Clone)]
pub struct ExtractionPipeline {
    options: Options,
    lexicon: Lexicon,
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl ExtractionPipeline {
    /// Builds a pipeline whose lexicon covers `options.languages`.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let lexicon = Lexicon::new(&options.languages);
        Self { options, lexicon }
    }

    /// Builds a pipeline around an existing lexicon.
    #[must_use]
    pub fn with_lexicon(options: Options, lexicon: Lexicon) -> Self {
        Self { options, lexicon }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Extracts a record from markup already in hand.
    ///
    /// Never fails; check [`ProductRecord::is_successful`] on the result.
    #[must_use]
    pub fn extract_document(&self, html: &str, url: &str) -> ProductRecord {
        let options = Options {
            url: Some(url.to_string()),
            ..self.options.clone()
        };
        let doc = dom::parse(html);
        extractor::extract_record(&doc, &options, &self.lexicon)
    }

    /// Flattens `records` for tabular export, joining list fields with
    /// [`Options::export_delimiter`].
    #[must_use]
    pub fn export_rows(&self, records: &[ProductRecord]) -> Vec<ExportRow> {
        records
            .iter()
            .map(|record| record.to_export_row(&self.options.export_delimiter))
            .collect()
    }

    /// Fetches and extracts one URL.
    ///
    /// # Errors
    ///
    /// Returns the fetcher's error when the page cannot be obtained, and
    /// [`Error::EmptyTitle`] when the page yields no product title.
    pub fn extract_url<F>(&self, fetcher: &F, url: &str) -> Result<ProductRecord>
    where
        F: Fetcher + ?Sized,
    {
        let html = fetcher.fetch(url)?;
        debug!(url, bytes = html.len(), "fetched page");

        let record = self.extract_document(&html, url);
        if record.is_successful() {
            Ok(record)
        } else {
            Err(Error::EmptyTitle { url: url.to_string() })
        }
    }

    /// Fetches and extracts every URL in order.
    ///
    /// Failures are logged and collected; they never stop the batch.
    pub fn run<F, S>(&self, fetcher: &F, urls: &[S]) -> PipelineOutcome
    where
        F: Fetcher + ?Sized,
        S: AsRef<str>,
    {
        info!(urls = urls.len(), "starting extraction run");

        let mut outcome = PipelineOutcome::default();
        for url in urls {
            let url = url.as_ref();
            match self.extract_url(fetcher, url) {
                Ok(record) => outcome.records.push(record),
                Err(error) => {
                    warn!(url, error = %error, "discarding url");
                    outcome.failures.push(FailedUrl { url: url.to_string(), error });
                }
            }
        }

        info!(
            extracted = outcome.records.len(),
            failed = outcome.failures.len(),
            "extraction run finished"
        );
        outcome
    }

    /// Extracts a reference page and its competitors, then computes the gaps.
    ///
    /// # Errors
    ///
    /// Fails only when the reference itself cannot be extracted; competitor
    /// failures are reported in [`Comparison::competitors`].
    pub fn compare<F, S>(&self, fetcher: &F, reference_url: &str, competitor_urls: &[S]) -> Result<Comparison>
    where
        F: Fetcher + ?Sized,
        S: AsRef<str>,
    {
        let reference = self.extract_url(fetcher, reference_url)?;
        let competitors = self.run(fetcher, competitor_urls);
        let report = compute_gaps(&reference, &competitors.records);

        info!(
            reference = %reference.title,
            competitors = competitors.records.len(),
            missing_features = report.missing_features.len(),
            price_compared = report.price_comparison.is_some(),
            "computed gap report"
        );

        Ok(Comparison { reference, competitors, report })
    }
}
