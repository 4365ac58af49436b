//! Price pattern matching and amount parsing.
//!
//! Extraction keeps the raw matched text ("199,99 €", "$1,299.00"); parsing
//! to a number only happens when prices are compared.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Currency patterns in priority order: symbol before amount, amount before
/// symbol, ISO code after the amount, ISO code before it.
pub static PRICE_PATTERNS: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r"[€$£¥]\s*\d+(?:[.,]\d+)*").expect("symbol-first price regex"),
        Regex::new(r"\d+(?:[.,]\d+)*\s*[€$£¥]").expect("symbol-last price regex"),
        Regex::new(r"(?i)\d+(?:[.,]\d+)*\s*(?:EUR|USD|GBP|JPY)\b").expect("code-last price regex"),
        Regex::new(r"(?i)\b(?:EUR|USD|GBP|JPY)\s*\d+(?:[.,]\d+)*").expect("code-first price regex"),
    ]
});

/// First run of digits with optional `.`/`,` separated groups.
static AMOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+(?:[.,]\d+)*").expect("amount regex")
});

/// Returns the first price-looking substring of `text`, trying each pattern
/// over the whole text before moving to the next.
#[must_use]
pub fn find_price(text: &str) -> Option<String> {
    PRICE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(text))
        .map(|m| m.as_str().trim().to_string())
}

/// Parses the first decimal amount out of a price string.
///
/// Separator handling:
/// - both `.` and `,` present: the last one is the decimal mark
/// - only `,` present: decimal mark if it appears once with one or two
///   trailing digits ("199,99"), thousands separator otherwise ("1,299")
/// - only `.` present: same rule mirrored ("1.299" is one thousand two
///   hundred ninety-nine, "19.9" is nineteen point nine)
///
/// Returns `None` for text without digits and for non-positive amounts.
///
/// # Examples
///
/// ```
/// use rs_product_gap::price::parse_amount;
///
/// assert_eq!(parse_amount("199.99€"), Some(199.99));
/// assert_eq!(parse_amount("1.299,00 €"), Some(1299.0));
/// assert_eq!(parse_amount("$1,299"), Some(1299.0));
/// assert_eq!(parse_amount("Consultar"), None);
/// ```
#[must_use]
pub fn parse_amount(text: &str) -> Option<f64> {
    let raw = AMOUNT.find(text)?.as_str();

    let last_dot = raw.rfind('.');
    let last_comma = raw.rfind(',');
    let normalized = match (last_dot, last_comma) {
        (Some(dot), Some(comma)) => {
            let (decimal, thousands) = if dot > comma { ('.', ',') } else { (',', '.') };
            raw.replace(thousands, "").replace(decimal, ".")
        }
        (None, Some(_)) => normalize_single_separator(raw, ','),
        (Some(_), None) => normalize_single_separator(raw, '.'),
        (None, None) => raw.to_string(),
    };

    normalized.parse::<f64>().ok().filter(|v| *v > 0.0 && v.is_finite())
}

fn normalize_single_separator(raw: &str, sep: char) -> String {
    let occurrences = raw.matches(sep).count();
    let fraction_len = raw.rsplit(sep).next().map_or(0, str::len);
    if occurrences == 1 && (1..=2).contains(&fraction_len) {
        raw.replace(sep, ".")
    } else {
        raw.replace(sep, "")
    }
}
