//! Product records produced by extraction.
//!
//! A [`ProductRecord`] is built once per page and treated as immutable
//! afterwards; analysis code only ever borrows it.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Maximum number of feature bullets kept per record.
pub const MAX_FEATURES: usize = 50;

/// Maximum number of filter labels kept per record.
pub const MAX_FILTERS: usize = 100;

/// Maximum number of image URLs kept per record.
pub const MAX_IMAGES: usize = 10;

/// Specification table with unique keys and last-writer-wins updates.
///
/// Iteration follows first-insertion order of each key. Re-inserting an
/// existing key replaces its value in place, so a later table on the page
/// overrides an earlier one without reordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecTable {
    entries: Vec<(String, String)>,
}

impl SpecTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites `key`. Returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        self.entries.push((key, value));
        None
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SpecTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = SpecTable::new();
        for (k, v) in iter {
            table.insert(k, v);
        }
        table
    }
}

impl Serialize for SpecTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SpecTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SpecVisitor;

        impl<'de> Visitor<'de> for SpecVisitor {
            type Value = SpecTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of specification names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<SpecTable, A::Error> {
                let mut table = SpecTable::new();
                while let Some((k, v)) = access.next_entry::<String, String>()? {
                    table.insert(k, v);
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(SpecVisitor)
    }
}

/// Structured product data extracted from one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// URL the page was fetched from (may be empty for ad-hoc markup).
    pub source_url: String,

    /// Host of `source_url`, empty when the URL has no authority.
    pub domain: String,

    /// Product name. Empty means extraction failed for this page.
    pub title: String,

    /// Product-relevant description spans joined by a space.
    pub description: String,

    /// Feature bullets in page order, case-insensitively unique.
    pub features: Vec<String>,

    /// Specification key/value pairs merged across every table on the page.
    pub specifications: SpecTable,

    /// Raw matched price text, always containing a digit.
    pub price: Option<String>,

    /// Filter/facet labels, case-insensitively unique.
    pub filters: Vec<String>,

    /// Breadcrumb categories, root labels removed.
    pub categories: Vec<String>,

    /// Absolute image URLs, unique.
    pub images: Vec<String>,

    pub extracted_at: DateTime<Utc>,
}

impl ProductRecord {
    /// Empty record for `source_url`, stamped with `extracted_at`.
    #[must_use]
    pub fn empty(source_url: impl Into<String>, extracted_at: DateTime<Utc>) -> Self {
        let source_url = source_url.into();
        let domain = crate::url_utils::domain_of(&source_url);
        Self {
            source_url,
            domain,
            title: String::new(),
            description: String::new(),
            features: Vec::new(),
            specifications: SpecTable::new(),
            price: None,
            filters: Vec::new(),
            categories: Vec::new(),
            images: Vec::new(),
            extracted_at,
        }
    }

    /// True when a title was found, i.e. the page is usable as a product.
    #[must_use]
    pub fn is_successful(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Flattens the record into one export row.
    ///
    /// List fields are joined with `delimiter`; specifications become a
    /// JSON object string.
    #[must_use]
    pub fn to_export_row(&self, delimiter: &str) -> ExportRow {
        let specifications = serde_json::to_string(&self.specifications).unwrap_or_default();
        ExportRow {
            source_url: self.source_url.clone(),
            domain: self.domain.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            features: self.features.join(delimiter),
            specifications,
            price: self.price.clone().unwrap_or_default(),
            filters: self.filters.join(delimiter),
            categories: self.categories.join(delimiter),
            images: self.images.join(delimiter),
            extracted_at: self.extracted_at.to_rfc3339(),
        }
    }
}

/// One flat row per product, for CSV or spreadsheet export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub source_url: String,
    pub domain: String,
    pub title: String,
    pub description: String,
    pub features: String,
    pub specifications: String,
    pub price: String,
    pub filters: String,
    pub categories: String,
    pub images: String,
    pub extracted_at: String,
}
