//! Stopword and e-commerce noise vocabulary.
//!
//! A [`Lexicon`] is built once at startup and handed by reference to every
//! component that filters or classifies text. It is never mutated afterwards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Languages with a built-in stopword list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Spanish,
    English,
}

impl Language {
    /// Every supported language, in lookup order.
    pub const ALL: [Language; 2] = [Language::Spanish, Language::English];

    fn stopwords(self) -> &'static [&'static str] {
        match self {
            Language::Spanish => SPANISH_STOPWORDS,
            Language::English => ENGLISH_STOPWORDS,
        }
    }
}

const SPANISH_STOPWORDS: &[&str] = &[
    "el", "la", "de", "que", "y", "a", "en", "un", "es", "se", "no", "te", "lo", "le", "da",
    "su", "por", "son", "con", "para", "al", "del", "las", "una", "me", "si", "tu", "más",
    "muy", "pero", "como", "los", "este", "esta", "esto", "ese", "esa", "esos", "esas",
    "tiene", "ser", "hacer", "estar", "todo", "todos", "toda", "todas", "cuando", "donde",
    "porque", "aunque", "desde", "hasta", "entre", "sobre", "bajo", "sin", "o", "sus", "ya",
    "nos", "les", "mi", "mis", "uno", "unos", "unas", "ha", "han", "fue", "era", "hay",
];

const ENGLISH_STOPWORDS: &[&str] = &[
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by", "is", "are",
    "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "may", "might", "must", "can", "this", "that", "these",
    "those", "all", "any", "some", "each", "every", "both", "either", "neither", "one", "two",
    "three", "an", "it", "its", "from", "as", "your", "you", "our", "we", "not", "into",
    "than", "then", "also", "more", "most", "very", "so", "if", "up", "out", "about",
];

/// Terms that belong to shop furniture rather than the product itself.
const ECOMMERCE_NOISE: &[&str] = &[
    // Cart and checkout
    "añadir", "carrito", "comprar", "compra", "pedido", "envio", "envío", "entrega",
    "prevista", "generado", "stock", "disponible", "agotado", "precio", "oferta", "descuento",
    "rebaja", "promocion", "promoción", "gratis", "gratuito", "iva", "incluido", "excluido",
    "gastos", "cart", "checkout", "buy", "shipping", "delivery", "free", "discount", "sale",
    "deal", "price", "vat", "available", "unavailable", "basket", "wishlist",
    // Reviews
    "valoracion", "valoración", "opinion", "opinión", "opiniones", "comentario", "puntuacion",
    "puntuación", "estrella", "estrellas", "valorar", "recomendar", "recomiendo", "cliente",
    "clientes", "usuario", "usuarios", "review", "reviews", "rating", "ratings", "stars",
    "customer", "customers",
    // Filler around listings
    "cada", "solo", "sólo", "solamente", "únicamente", "también", "además", "producto",
    "productos", "articulo", "artículo", "item", "items", "marca", "modelo", "referencia",
    "codigo", "código", "sku", "categoria", "categoría", "seccion", "sección", "departamento",
    // Site navigation
    "buscar", "busqueda", "búsqueda", "filtrar", "filtro", "filtros", "ordenar", "clasificar",
    "mostrar", "ver", "inicio", "home", "tienda", "shop", "store", "online", "web", "website",
    "pagina", "página", "sitio", "portal", "search", "menu", "account", "login",
    // Legal
    "cookies", "politica", "política", "privacidad", "terminos", "términos", "condiciones",
    "legal", "aviso", "contacto", "ayuda", "soporte", "privacy", "terms", "conditions",
    "contact", "help", "support",
];

/// Immutable combined stopword + noise-term vocabulary.
///
/// All lookups are case-sensitive against lowercase entries; callers
/// lowercase before asking.
#[derive(Debug, Clone)]
pub struct Lexicon {
    languages: Vec<Language>,
    stopwords: HashSet<&'static str>,
    noise: HashSet<&'static str>,
}

impl Lexicon {
    /// Builds a lexicon for the given languages plus the noise vocabulary.
    #[must_use]
    pub fn new(languages: &[Language]) -> Self {
        let stopwords = languages
            .iter()
            .flat_map(|lang| lang.stopwords().iter().copied())
            .collect();
        Self {
            languages: languages.to_vec(),
            stopwords,
            noise: ECOMMERCE_NOISE.iter().copied().collect(),
        }
    }

    /// Languages whose stopwords are loaded.
    #[must_use]
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    #[must_use]
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    #[must_use]
    pub fn is_noise_term(&self, word: &str) -> bool {
        self.noise.contains(word)
    }

    /// True if `word` is either a stopword or a noise term.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.is_stopword(word) || self.is_noise_term(word)
    }

    /// Number of distinct entries across both sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stopwords.len() + self.noise.difference(&self.stopwords).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty() && self.noise.is_empty()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new(&Language::ALL)
    }
}
