//! Competitive gap analysis.
//!
//! [`compute_gaps`] diffs one reference record against its competitors.
//! Features, specification keys and filters are compared case-folded; the
//! resulting sets are ordered so reports are stable.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::price::parse_amount;
use crate::record::ProductRecord;

/// Price position of the reference against the competitor mean.
///
/// Values are kept unrounded so the sign of the delta is exact; the
/// textual report rounds to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceComparison {
    pub reference_price: f64,
    /// Mean of every parseable competitor price.
    pub competitors_average_price: f64,
    /// `reference_price - competitors_average_price`.
    pub absolute_delta: f64,
    /// `absolute_delta / competitors_average_price * 100`.
    pub percent_delta: f64,
    /// How many competitors had a parseable price.
    pub competitors_priced: usize,
}

/// Structured diff between a reference product and its competitors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    /// Reference features some competitor lacks.
    pub missing_features: BTreeSet<String>,
    /// Competitor features the reference lacks.
    pub unique_competitor_features: BTreeSet<String>,
    /// Reference specification keys some competitor lacks.
    pub missing_specs: BTreeSet<String>,
    /// Competitor specification keys the reference lacks.
    pub unique_competitor_specs: BTreeSet<String>,
    /// Competitor filters the reference does not offer.
    pub missing_filters: BTreeSet<String>,
    pub price_comparison: Option<PriceComparison>,
}

impl GapReport {
    /// True if no gap of any kind was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missing_features.is_empty()
            && self.unique_competitor_features.is_empty()
            && self.missing_specs.is_empty()
            && self.unique_competitor_specs.is_empty()
            && self.missing_filters.is_empty()
            && self.price_comparison.is_none()
    }
}

/// Computes the gap report for `reference` against `competitors`.
///
/// Records without a title are ignored. If the reference has no title or no
/// competitor does, the report is empty. A price comparison is only present
/// when the reference and at least one competitor have a parseable price.
#[must_use]
pub fn compute_gaps(reference: &ProductRecord, competitors: &[ProductRecord]) -> GapReport {
    let competitors: Vec<&ProductRecord> =
        competitors.iter().filter(|c| c.is_successful()).collect();
    if !reference.is_successful() || competitors.is_empty() {
        return GapReport::default();
    }

    let mut report = GapReport::default();

    let ref_features = folded(&reference.features);
    let ref_specs = folded(reference.specifications.keys());
    let ref_filters = folded(&reference.filters);

    for competitor in &competitors {
        let features = folded(&competitor.features);
        report.missing_features.extend(ref_features.difference(&features).cloned());
        report
            .unique_competitor_features
            .extend(features.difference(&ref_features).cloned());

        let specs = folded(competitor.specifications.keys());
        report.missing_specs.extend(ref_specs.difference(&specs).cloned());
        report.unique_competitor_specs.extend(specs.difference(&ref_specs).cloned());

        let filters = folded(&competitor.filters);
        report.missing_filters.extend(filters.difference(&ref_filters).cloned());
    }

    report.price_comparison = compare_prices(reference, &competitors);
    report
}

fn compare_prices(reference: &ProductRecord, competitors: &[&ProductRecord]) -> Option<PriceComparison> {
    let reference_price = reference.price.as_deref().and_then(parse_amount)?;
    let prices: Vec<f64> = competitors
        .iter()
        .filter_map(|c| c.price.as_deref().and_then(parse_amount))
        .collect();
    if prices.is_empty() {
        return None;
    }

    let average = prices.iter().sum::<f64>() / prices.len() as f64;
    let delta = reference_price - average;
    Some(PriceComparison {
        reference_price,
        competitors_average_price: average,
        absolute_delta: delta,
        percent_delta: delta / average * 100.0,
        competitors_priced: prices.len(),
    })
}

fn folded<I, S>(items: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn write_section(f: &mut fmt::Formatter<'_>, heading: &str, items: &BTreeSet<String>) -> fmt::Result {
    writeln!(f, "{heading} ({}):", items.len())?;
    if items.is_empty() {
        return writeln!(f, "  - none");
    }
    for item in items {
        writeln!(f, "  - {item}")?;
    }
    Ok(())
}

/// Bullet-list report, one section per gap kind.
impl fmt::Display for GapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_section(f, "Missing features", &self.missing_features)?;
        write_section(f, "Unique competitor features", &self.unique_competitor_features)?;
        write_section(f, "Missing specifications", &self.missing_specs)?;
        write_section(f, "Unique competitor specifications", &self.unique_competitor_specs)?;
        write_section(f, "Missing filters", &self.missing_filters)?;

        writeln!(f, "Price comparison:")?;
        match &self.price_comparison {
            Some(p) => {
                writeln!(f, "  - reference: {:.2}", p.reference_price)?;
                writeln!(
                    f,
                    "  - competitors average: {:.2} ({} priced)",
                    p.competitors_average_price, p.competitors_priced
                )?;
                writeln!(f, "  - difference: {:+.2} ({:+.1}%)", p.absolute_delta, p.percent_delta)
            }
            None => writeln!(f, "  - not available"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(title: &str, features: &[&str], price: Option<&str>) -> ProductRecord {
        let mut record = ProductRecord::empty("", Utc::now());
        record.title = title.to_string();
        record.features = features.iter().map(|f| (*f).to_string()).collect();
        record.price = price.map(str::to_string);
        record
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn feature_gaps_are_case_folded() {
        let reference = product("Monitor A", &["4K display", "USB-C"], None);
        let competitor = product("Monitor B", &["usb-c", "Bluetooth 5.0"], None);
        let report = compute_gaps(&reference, &[competitor]);
        assert_eq!(report.missing_features, set(&["4k display"]));
        assert_eq!(report.unique_competitor_features, set(&["bluetooth 5.0"]));
    }

    #[test]
    fn gaps_accumulate_over_competitors() {
        let reference = product("Ref", &["a1", "b2"], None);
        let c1 = product("C1", &["a1", "c3"], None);
        let c2 = product("C2", &["b2", "d4"], None);
        let report = compute_gaps(&reference, &[c1, c2]);
        assert_eq!(report.missing_features, set(&["a1", "b2"]));
        assert_eq!(report.unique_competitor_features, set(&["c3", "d4"]));
    }

    #[test]
    fn spec_key_and_filter_gaps() {
        let mut reference = product("Ref", &[], None);
        reference.specifications.insert("Peso", "1 kg");
        reference.specifications.insert("Color", "Rojo");
        reference.filters = vec!["Rojo".to_string()];
        let mut competitor = product("Comp", &[], None);
        competitor.specifications.insert("peso", "2 kg");
        competitor.specifications.insert("Garantía", "2 años");
        competitor.filters = vec!["rojo".to_string(), "Azul".to_string()];

        let report = compute_gaps(&reference, &[competitor]);
        assert_eq!(report.missing_specs, set(&["color"]));
        assert_eq!(report.unique_competitor_specs, set(&["garantía"]));
        assert_eq!(report.missing_filters, set(&["azul"]));
    }

    #[test]
    fn price_comparison_against_mean() {
        let reference = product("Ref", &[], Some("199.99€"));
        let report = compute_gaps(
            &reference,
            &[product("C1", &[], Some("149.99€")), product("C2", &[], Some("179.99€"))],
        );
        let price = report.price_comparison.unwrap_or_else(|| panic!("expected a price comparison"));
        assert!((price.competitors_average_price - 164.99).abs() < 1e-9);
        assert!((price.absolute_delta - 35.0).abs() < 1e-9);
        assert!((price.percent_delta - 21.21).abs() < 0.01);
        assert_eq!(price.competitors_priced, 2);
    }

    #[test]
    fn price_absent_without_parseable_prices() {
        let reference = product("Ref", &[], Some("Consultar"));
        let report = compute_gaps(&reference, &[product("C", &[], Some("10 €"))]);
        assert!(report.price_comparison.is_none());

        let reference = product("Ref", &[], Some("10 €"));
        let report = compute_gaps(&reference, &[product("C", &[], None)]);
        assert!(report.price_comparison.is_none());
    }

    #[test]
    fn empty_side_gives_empty_report() {
        let reference = product("Ref", &["x"], Some("10 €"));
        assert!(compute_gaps(&reference, &[]).is_empty());

        let untitled = product("", &["x"], Some("10 €"));
        assert!(compute_gaps(&untitled, &[reference.clone()]).is_empty());
        assert!(compute_gaps(&reference, &[untitled]).is_empty());
    }

    #[test]
    fn display_renders_bullets() {
        let reference = product("Ref", &["4K display"], Some("199.99€"));
        let competitor = product("Comp", &["Bluetooth 5.0"], Some("149.99€"));
        let text = compute_gaps(&reference, &[competitor]).to_string();
        assert!(text.contains("Missing features (1):\n  - 4k display\n"));
        assert!(text.contains("Missing filters (0):\n  - none\n"));
        assert!(text.contains("  - difference: +50.00 (+33.3%)"));
    }
}
