//! Term and feature frequency analysis.
//!
//! Frequencies are kept in a [`FrequencyTable`], which remembers the order
//! terms were first seen so that equal counts rank deterministically.
//!
//! [`count_terms`] builds a weighted corpus per record:
//!
//! - title, specification keys and values once
//! - features twice
//! - description only through sentences that pass
//!   [`is_relevant_sentence`](crate::classifier::is_relevant_sentence)
//!
//! Records without a title are failed extractions and are skipped by every
//! counter here.

use std::collections::HashMap;

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use crate::classifier::is_relevant_sentence;
use crate::lexicon::Lexicon;
use crate::patterns::TERM_TOKEN;
use crate::record::ProductRecord;

/// Site and transaction words that say nothing about a product.
pub const IRRELEVANT_TERMS: &[&str] = &[
    "página", "sitio", "web", "usuario", "cliente", "cuenta", "compra", "pedido", "pago",
    "envío", "precio", "oferta", "opinión", "valoración", "comentario", "estrella", "page",
    "site", "user", "account", "order", "payment", "price", "offer", "opinion", "comment",
    "star",
];

/// Term counts with first-seen ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `term`.
    pub fn add(&mut self, term: &str) {
        self.add_count(term, 1);
    }

    /// Adds `count` occurrences of `term`.
    pub fn add_count(&mut self, term: &str, count: usize) {
        if let Some(&slot) = self.index.get(term) {
            self.entries[slot].1 += count;
        } else {
            self.index.insert(term.to_string(), self.entries.len());
            self.entries.push((term.to_string(), count));
        }
    }

    /// Count for `term`, zero if never seen.
    #[must_use]
    pub fn get(&self, term: &str) -> usize {
        self.index.get(term).map_or(0, |&slot| self.entries[slot].1)
    }

    /// Number of distinct terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Terms and counts in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(t, n)| (t.as_str(), *n))
    }

    /// The `n` most frequent terms by descending count.
    ///
    /// Ties keep first-seen order.
    #[must_use]
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self.iter().collect();
        // stable, so ties stay in first-seen order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// Just the terms of [`most_common`](Self::most_common).
    #[must_use]
    pub fn top_terms(&self, n: usize) -> Vec<&str> {
        self.most_common(n).into_iter().map(|(t, _)| t).collect()
    }
}

impl<S: AsRef<str>> Extend<S> for FrequencyTable {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for term in iter {
            self.add(term.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = FrequencyTable::new();
        table.extend(iter);
        table
    }
}

/// Serialized as `[term, count]` pairs by descending count.
impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let ranked = self.most_common(self.len());
        let mut seq = serializer.serialize_seq(Some(ranked.len()))?;
        for pair in &ranked {
            seq.serialize_element(pair)?;
        }
        seq.end()
    }
}

/// Lowercased terms of three or more letters from `text`.
///
/// Lexicon entries and [`IRRELEVANT_TERMS`] are dropped.
#[must_use]
pub fn tokenize(text: &str, lexicon: &Lexicon) -> Vec<String> {
    terms_where(text, |term| !lexicon.contains(term) && !IRRELEVANT_TERMS.contains(&term))
}

/// Like [`tokenize`] but only lexicon entries are dropped; site and
/// transaction words survive.
#[must_use]
pub fn tokenize_words(text: &str, lexicon: &Lexicon) -> Vec<String> {
    terms_where(text, |term| !lexicon.contains(term))
}

fn terms_where(text: &str, keep: impl Fn(&str) -> bool) -> Vec<String> {
    let lower = text.to_lowercase();
    TERM_TOKEN
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|term| keep(term))
        .map(str::to_string)
        .collect()
}

/// Weighted term frequencies across `records`.
#[must_use]
pub fn count_terms(records: &[ProductRecord], lexicon: &Lexicon) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for record in records.iter().filter(|r| r.is_successful()) {
        table.extend(tokenize(&record.title, lexicon));

        let features = record.features.join(" ");
        let feature_terms = tokenize(&features, lexicon);
        table.extend(&feature_terms);
        table.extend(&feature_terms);

        for key in record.specifications.keys() {
            table.extend(tokenize(key, lexicon));
        }
        for value in record.specifications.values() {
            table.extend(tokenize(value, lexicon));
        }

        for sentence in record.description.split('.').filter(|s| is_relevant_sentence(s)) {
            table.extend(tokenize(sentence, lexicon));
        }
    }
    table
}

/// Term frequencies over feature bullets only, unweighted.
///
/// Uses [`tokenize_words`], so only lexicon entries are left out.
#[must_use]
pub fn count_feature_words(records: &[ProductRecord], lexicon: &Lexicon) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for record in records.iter().filter(|r| r.is_successful()) {
        for feature in &record.features {
            table.extend(tokenize_words(feature, lexicon));
        }
    }
    table
}

/// Frequencies of exact filter labels across `records`.
#[must_use]
pub fn count_filters(records: &[ProductRecord]) -> FrequencyTable {
    records
        .iter()
        .filter(|r| r.is_successful())
        .flat_map(|r| r.filters.iter())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(title: &str) -> ProductRecord {
        let mut record = ProductRecord::empty("https://shop.example/p", Utc::now());
        record.title = title.to_string();
        record
    }

    #[test]
    fn table_ties_keep_first_seen_order() {
        let table: FrequencyTable = ["beta", "alpha", "gamma", "alpha", "beta", "delta"]
            .into_iter()
            .collect();
        assert_eq!(table.most_common(3), vec![("beta", 2), ("alpha", 2), ("gamma", 1)]);
        assert_eq!(table.get("delta"), 1);
        assert_eq!(table.get("omega"), 0);
        assert_eq!(table.total(), 6);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn table_serializes_ranked_pairs() {
        let table: FrequencyTable = ["usb", "sensor", "sensor"].into_iter().collect();
        let json = serde_json::to_string(&table).unwrap_or_default();
        assert_eq!(json, r#"[["sensor",2],["usb",1]]"#);
    }

    #[test]
    fn tokenize_drops_short_stop_and_irrelevant() {
        let lexicon = Lexicon::default();
        let tokens = tokenize("El ratón con Batería USB-C y precio en la página 2024", &lexicon);
        assert_eq!(tokens, vec!["ratón", "batería", "usb"]);
    }

    #[test]
    fn features_count_twice() {
        let lexicon = Lexicon::default();
        let mut mouse = record("Mouse");
        mouse.features = vec!["Sensor óptico".to_string()];
        let table = count_terms(&[mouse], &lexicon);
        assert_eq!(table.get("mouse"), 1);
        assert_eq!(table.get("sensor"), 2);
        assert_eq!(table.get("óptico"), 2);
    }

    #[test]
    fn description_passes_through_relevance_gate() {
        let lexicon = Lexicon::default();
        let mut speaker = record("Altavoz");
        speaker.description =
            "La batería de litio ofrece autonomía prolongada. Compra hoy con envío rápido y mejor precio."
                .to_string();
        let table = count_terms(&[speaker], &lexicon);
        assert_eq!(table.get("litio"), 1);
        assert_eq!(table.get("autonomía"), 1);
        assert_eq!(table.get("rápido"), 0);
    }

    #[test]
    fn specifications_keys_and_values_count_once() {
        let lexicon = Lexicon::default();
        let mut camera = record("Cámara");
        camera.specifications.insert("Resolución", "Ultra HD");
        let table = count_terms(&[camera], &lexicon);
        assert_eq!(table.get("resolución"), 1);
        assert_eq!(table.get("ultra"), 1);
    }

    #[test]
    fn failed_records_are_skipped() {
        let lexicon = Lexicon::default();
        let mut failed = record("");
        failed.features = vec!["Bluetooth integrado".to_string()];
        failed.filters = vec!["Negro".to_string()];
        assert!(count_terms(&[failed.clone()], &lexicon).is_empty());
        assert!(count_feature_words(&[failed.clone()], &lexicon).is_empty());
        assert!(count_filters(&[failed]).is_empty());
    }

    #[test]
    fn feature_words_are_unweighted() {
        let lexicon = Lexicon::default();
        let mut a = record("Auriculares");
        a.features = vec!["Cancelación activa de ruido".to_string()];
        let mut b = record("Cascos");
        b.features = vec!["Ruido ambiente reducido".to_string()];
        let table = count_feature_words(&[a, b], &lexicon);
        assert_eq!(table.get("ruido"), 2);
        assert_eq!(table.get("cancelación"), 1);
        assert_eq!(table.get("auriculares"), 0);
    }

    #[test]
    fn feature_words_keep_site_vocabulary() {
        let lexicon = Lexicon::default();
        let mut a = record("Terminal TPV");
        a.features = vec!["Pago con tarjeta sin contacto".to_string()];
        let records = [a];

        let words = count_feature_words(&records, &lexicon);
        assert_eq!(words.get("pago"), 1);
        assert_eq!(words.get("tarjeta"), 1);
        assert_eq!(words.get("contacto"), 0);
        assert_eq!(words.get("con"), 0);

        assert_eq!(count_terms(&records, &lexicon).get("pago"), 0);
    }

    #[test]
    fn filters_are_counted_verbatim() {
        let mut a = record("Ratón A");
        a.filters = vec!["Inalámbrico".to_string(), "Negro".to_string()];
        let mut b = record("Ratón B");
        b.filters = vec!["Negro".to_string()];
        let table = count_filters(&[a, b]);
        assert_eq!(table.most_common(1), vec![("Negro", 2)]);
        assert_eq!(table.get("Inalámbrico"), 1);
    }
}
