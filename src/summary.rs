//! Consolidated frequency report and corpus insights.
//!
//! Besides raw counts, the leading entries of each frequency table are
//! sorted into keyword buckets ("technology", "material", "brand", ...) so
//! a report can say what kind of vocabulary dominates a category.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::record::ProductRecord;
use crate::terms::{count_feature_words, count_filters, count_terms, FrequencyTable};

/// Which frequency table a report row comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Term,
    Filter,
    Feature,
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReportKind::Term => "term",
            ReportKind::Filter => "filter",
            ReportKind::Feature => "feature",
        })
    }
}

/// One `(kind, item, frequency)` row of the consolidated report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub kind: ReportKind,
    pub item: String,
    pub frequency: usize,
}

/// Top `top_n` terms, filters and feature words, in that order, each block
/// by descending frequency.
#[must_use]
pub fn build_report(records: &[ProductRecord], lexicon: &Lexicon, top_n: usize) -> Vec<ReportRow> {
    let blocks = [
        (ReportKind::Term, count_terms(records, lexicon)),
        (ReportKind::Filter, count_filters(records)),
        (ReportKind::Feature, count_feature_words(records, lexicon)),
    ];

    blocks
        .iter()
        .flat_map(|(kind, table)| {
            table.most_common(top_n).into_iter().map(|(item, frequency)| ReportRow {
                kind: *kind,
                item: item.to_string(),
                frequency,
            })
        })
        .collect()
}

/// A named keyword group.
///
/// An item belongs to the bucket when its lowercased text contains any
/// keyword. Single-letter keywords (clothing sizes) must match a whole
/// word instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordBucket {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

impl KeywordBucket {
    /// True if `item` falls in this bucket.
    #[must_use]
    pub fn matches(&self, item: &str) -> bool {
        let lower = item.to_lowercase();
        self.keywords.iter().any(|keyword| {
            if keyword.chars().count() == 1 {
                lower.split_whitespace().any(|word| word == *keyword)
            } else {
                lower.contains(keyword)
            }
        })
    }
}

/// Buckets for general product terms.
pub const TERM_BUCKETS: &[KeywordBucket] = &[
    KeywordBucket {
        name: "technology",
        keywords: &["digital", "smart", "tech", "pro", "hd", "4k", "wifi", "bluetooth", "usb", "led"],
    },
    KeywordBucket {
        name: "material",
        keywords: &["acero", "metal", "plastico", "madera", "cristal", "ceramic", "silicon"],
    },
    KeywordBucket {
        name: "size",
        keywords: &["grande", "pequeño", "mini", "xl", "slim", "compact"],
    },
];

/// Buckets for filter labels.
pub const FILTER_BUCKETS: &[KeywordBucket] = &[
    KeywordBucket {
        name: "price",
        keywords: &["precio", "price", "cost", "euro", "dollar", "barato", "caro"],
    },
    KeywordBucket {
        name: "brand",
        keywords: &["marca", "brand", "fabricante", "sony", "samsung", "apple", "lg"],
    },
    KeywordBucket {
        name: "color",
        keywords: &["color", "colour", "negro", "blanco", "rojo", "azul", "verde"],
    },
    KeywordBucket {
        name: "size",
        keywords: &["tamaño", "size", "talla", "grande", "pequeño", "xl", "l", "m", "s"],
    },
    KeywordBucket {
        name: "features",
        keywords: &["wifi", "bluetooth", "smart", "digital", "hd", "4k", "led"],
    },
];

/// Buckets for feature words.
pub const FEATURE_BUCKETS: &[KeywordBucket] = &[
    KeywordBucket {
        name: "technology",
        keywords: &["digital", "smart", "inteligente", "automático", "wireless", "bluetooth", "wifi", "usb"],
    },
    KeywordBucket {
        name: "design",
        keywords: &["elegante", "moderno", "compacto", "ligero", "resistente", "duradero", "premium"],
    },
    KeywordBucket {
        name: "functionality",
        keywords: &["fácil", "práctico", "versátil", "multifuncional", "eficiente", "rápido", "potente"],
    },
    KeywordBucket {
        name: "comfort",
        keywords: &["cómodo", "ergonómico", "suave", "ajustable", "flexible", "antideslizante"],
    },
];

/// Entries of one bucket, in table ranking order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketMatch {
    pub bucket: String,
    pub items: Vec<String>,
}

/// Sorts the top `top_n` entries of `table` into `buckets`.
///
/// An entry may land in several buckets. Empty buckets are left out; the
/// rest keep the order of `buckets`.
#[must_use]
pub fn categorize(table: &FrequencyTable, top_n: usize, buckets: &[KeywordBucket]) -> Vec<BucketMatch> {
    let top = table.top_terms(top_n);
    buckets
        .iter()
        .filter_map(|bucket| {
            let items: Vec<String> = top
                .iter()
                .filter(|item| bucket.matches(item))
                .map(|item| (*item).to_string())
                .collect();
            (!items.is_empty()).then(|| BucketMatch { bucket: bucket.name.to_string(), items })
        })
        .collect()
}

/// Headline numbers over a set of extracted products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    /// Records with a title.
    pub product_count: usize,
    /// Share of products showing a price, 0 to 100.
    pub price_transparency: f64,
    pub average_features: f64,
    pub top_term: Option<(String, usize)>,
    pub top_feature_word: Option<(String, usize)>,
    pub top_filter: Option<(String, usize)>,
    /// [`TERM_BUCKETS`] over the top terms.
    pub term_categories: Vec<BucketMatch>,
    /// [`FILTER_BUCKETS`] over the top filters.
    pub filter_categories: Vec<BucketMatch>,
    /// [`FEATURE_BUCKETS`] over the top feature words.
    pub feature_categories: Vec<BucketMatch>,
}

/// Computes [`Insights`]; records without a title are left out.
///
/// `top_n` bounds how many entries of each table are bucketed.
#[must_use]
pub fn summarize(records: &[ProductRecord], lexicon: &Lexicon, top_n: usize) -> Insights {
    let products: Vec<&ProductRecord> = records.iter().filter(|r| r.is_successful()).collect();
    let product_count = products.len();

    let (price_transparency, average_features) = if product_count == 0 {
        (0.0, 0.0)
    } else {
        let priced = products.iter().filter(|r| r.price.is_some()).count();
        let features: usize = products.iter().map(|r| r.features.len()).sum();
        (
            priced as f64 / product_count as f64 * 100.0,
            features as f64 / product_count as f64,
        )
    };

    let terms = count_terms(records, lexicon);
    let feature_words = count_feature_words(records, lexicon);
    let filters = count_filters(records);

    Insights {
        product_count,
        price_transparency,
        average_features,
        top_term: leader(&terms),
        top_feature_word: leader(&feature_words),
        top_filter: leader(&filters),
        term_categories: categorize(&terms, top_n, TERM_BUCKETS),
        filter_categories: categorize(&filters, top_n, FILTER_BUCKETS),
        feature_categories: categorize(&feature_words, top_n, FEATURE_BUCKETS),
    }
}

fn leader(table: &FrequencyTable) -> Option<(String, usize)> {
    table
        .most_common(1)
        .first()
        .map(|(term, count)| ((*term).to_string(), *count))
}
