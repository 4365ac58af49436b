//! E-commerce Noise Classification
//!
//! Separates product-descriptive language from shop furniture: cart buttons,
//! shipping notes, review widgets and account links. Two checks live here:
//!
//! - [`is_ecommerce_noise`] gates whole description spans.
//! - [`is_relevant_sentence`] gates single sentences before term counting.
//!
//! Both are pure functions over text and a borrowed [`Lexicon`].

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;

/// A span containing more boilerplate phrases than this is noise.
pub const MAX_BOILERPLATE_PHRASES: usize = 2;

/// A span whose share of lexicon words exceeds this is noise.
pub const MAX_NOISE_RATIO: f64 = 0.3;

/// A relevant sentence must be longer than this (in chars, trimmed).
pub const MIN_SENTENCE_LEN: usize = 20;

/// Phrases that only appear in cart, checkout, review and account widgets.
/// Matched as lowercase substrings.
pub const BOILERPLATE_PHRASES: &[&str] = &[
    "añadir al carrito",
    "comprar ahora",
    "envío gratis",
    "opiniones de",
    "valoraciones de",
    "política de",
    "mi cuenta",
    "iniciar sesión",
    "comparar producto",
    "stock disponible",
    "descuento del",
    "gastos de envío",
    "add to cart",
    "add to basket",
    "buy now",
    "free shipping",
    "free delivery",
    "customer reviews",
    "write a review",
    "my account",
    "sign in",
    "privacy policy",
    "in stock",
    "compare product",
];

/// Words that signal a sentence describes the product itself.
const POSITIVE_INDICATORS: &[&str] = &[
    "características",
    "especificaciones",
    "incluye",
    "cuenta con",
    "tecnología",
    "material",
    "diseño",
    "tamaño",
    "dimensiones",
    "memoria",
    "procesador",
    "pantalla",
    "batería",
    "compatible",
    "features",
    "specifications",
    "includes",
    "technology",
    "design",
    "size",
    "dimensions",
    "memory",
    "processor",
    "display",
    "screen",
    "battery",
];

/// Words that signal a sentence is about buying rather than the product.
const NEGATIVE_INDICATORS: &[&str] = &[
    "añadir",
    "carrito",
    "comprar",
    "precio",
    "envío",
    "opinión",
    "valoración",
    "stock",
    "oferta",
    "cliente",
    "cart",
    "buy",
    "price",
    "shipping",
    "review",
    "rating",
    "offer",
    "customer",
];

/// Breakdown of the noise decision for one span.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseScore {
    /// Number of distinct boilerplate phrases found.
    pub phrase_count: usize,
    /// Share of words found in the lexicon, in `[0, 1]`.
    pub noise_ratio: f64,
}

impl NoiseScore {
    /// True when either threshold is exceeded.
    #[must_use]
    pub fn is_noise(&self) -> bool {
        self.phrase_count > MAX_BOILERPLATE_PHRASES || self.noise_ratio > MAX_NOISE_RATIO
    }
}

/// Scores `text` against the boilerplate phrases and the lexicon.
///
/// The ratio is taken over raw whitespace tokens of the lowercased text,
/// counting every token the lexicon holds, stopwords included. Tokens are
/// looked up verbatim, so "carrito," does not match "carrito".
#[must_use]
pub fn score_noise(text: &str, lexicon: &Lexicon) -> NoiseScore {
    let lower = text.to_lowercase();

    let phrase_count = BOILERPLATE_PHRASES
        .iter()
        .filter(|phrase| lower.contains(*phrase))
        .count();

    let mut words = 0usize;
    let mut noisy = 0usize;
    for word in lower.split_whitespace() {
        words += 1;
        if lexicon.contains(word) {
            noisy += 1;
        }
    }

    let noise_ratio = if words == 0 {
        0.0
    } else {
        noisy as f64 / words as f64
    };

    NoiseScore { phrase_count, noise_ratio }
}

/// True if `text` reads as cart, shipping, review or account furniture.
#[must_use]
pub fn is_ecommerce_noise(text: &str, lexicon: &Lexicon) -> bool {
    score_noise(text, lexicon).is_noise()
}

/// True if `sentence` describes the product.
///
/// Technical indicators must strictly outnumber commercial ones and the
/// trimmed sentence must be longer than [`MIN_SENTENCE_LEN`].
#[must_use]
pub fn is_relevant_sentence(sentence: &str) -> bool {
    let trimmed = sentence.trim();
    if trimmed.chars().count() <= MIN_SENTENCE_LEN {
        return false;
    }

    let lower = trimmed.to_lowercase();
    let positive = POSITIVE_INDICATORS.iter().filter(|i| lower.contains(*i)).count();
    let negative = NEGATIVE_INDICATORS.iter().filter(|i| lower.contains(*i)).count();
    positive > negative
}
