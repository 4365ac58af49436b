//! Charset sniffing and transcoding for raw product pages.
//!
//! Retail sites still ship a good share of pages as windows-1252 or
//! ISO-8859-1, which mangles accented product copy ("Envío", "batería") if
//! decoded as UTF-8. Declarations are looked for in the first 1024 bytes.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

const SNIFF_WINDOW: usize = 1024;

/// Matches both `<meta charset="...">` and the `http-equiv` content-type form.
#[allow(clippy::expect_used)]
static DECLARED_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([A-Za-z0-9_\-:.]+)"#).expect("valid regex")
});

/// Returns the charset label declared in the document head, if any.
#[must_use]
pub fn declared_charset(html: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_WINDOW)]);
    DECLARED_CHARSET
        .captures(&head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Resolves the encoding for a page, defaulting to UTF-8.
#[must_use]
pub fn sniff_encoding(html: &[u8]) -> &'static Encoding {
    declared_charset(html)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decodes page bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD rather than failing; a page that cannot
/// be decoded cleanly still yields whatever product fields survive.
///
/// # Examples
///
/// ```
/// use rs_product_gap::encoding::decode_html;
///
/// let page = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Env\xEDo</body></html>";
/// assert!(decode_html(page).contains("Envío"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = sniff_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }
    let (decoded, _, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "replaced malformed byte sequences while decoding");
    }
    decoded.into_owned()
}
