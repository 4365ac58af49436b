//! Shopping aggregator result analysis.
//!
//! Listings scraped from a price-comparison search arrive as flat
//! [`ShoppingResult`]s. Fetching and parsing the search page happens
//! elsewhere; this module only summarizes what was found, reusing the term
//! tokenizer and the price parser.

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::price::parse_amount;
use crate::terms::{tokenize, FrequencyTable};

/// Prices at or above this are treated as parse noise.
pub const MAX_PLAUSIBLE_PRICE: f64 = 50_000.0;

/// One listing from a shopping aggregator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingResult {
    pub title: String,
    pub price: String,
    pub source: String,
    pub link: String,
}

/// Spread of the parseable prices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
    /// Rounded to cents.
    pub mean: f64,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShoppingSummary {
    pub total_results: usize,
    /// Listings per merchant, blank merchants skipped.
    pub sources: FrequencyTable,
    pub price_range: Option<PriceRange>,
    /// Terms across listing titles.
    pub terms: FrequencyTable,
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Summarizes aggregator listings.
#[must_use]
pub fn analyze_shopping_results(results: &[ShoppingResult], lexicon: &Lexicon) -> ShoppingSummary {
    let mut summary = ShoppingSummary {
        total_results: results.len(),
        ..ShoppingSummary::default()
    };

    let mut prices = Vec::new();
    for result in results {
        let source = result.source.trim();
        if !source.is_empty() {
            summary.sources.add(source);
        }
        if let Some(price) = parse_amount(&result.price).filter(|p| *p < MAX_PLAUSIBLE_PRICE) {
            prices.push(price);
        }
        summary.terms.extend(tokenize(&result.title, lexicon));
    }

    if !prices.is_empty() {
        let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = round_cents(prices.iter().sum::<f64>() / prices.len() as f64);
        summary.price_range = Some(PriceRange { min, max, mean, count: prices.len() });
    }

    summary
}

/// Overlap between the terms of scraped product pages and aggregator
/// listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermSetComparison {
    /// In both top-`n` lists, in the scraped ranking order.
    pub common: Vec<String>,
    /// In the scraped top `n / 2` but not the aggregator top `n`.
    pub unique_to_scraped: Vec<String>,
    /// In the aggregator top `n / 2` but not the scraped top `n`.
    pub unique_to_shopping: Vec<String>,
}

fn only_in(short: Vec<&str>, other: &[&str]) -> Vec<String> {
    short
        .into_iter()
        .filter(|t| !other.contains(t))
        .map(str::to_string)
        .collect()
}

/// Compares the leading terms of two frequency tables.
#[must_use]
pub fn compare_term_sets(scraped: &FrequencyTable, shopping: &FrequencyTable, n: usize) -> TermSetComparison {
    let head = (n / 2).max(1);
    let scraped_top = scraped.top_terms(n);
    let shopping_top = shopping.top_terms(n);

    TermSetComparison {
        common: scraped_top
            .iter()
            .filter(|t| shopping_top.contains(*t))
            .map(|t| (*t).to_string())
            .collect(),
        unique_to_scraped: only_in(scraped.top_terms(head), &shopping_top),
        unique_to_shopping: only_in(shopping.top_terms(head), &scraped_top),
    }
}
