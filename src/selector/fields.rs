//! Ranked selector tables, one per product field.
//!
//! Order matters: the most specific query comes first and generic tags
//! last. Length windows are exclusive on both ends and counted in chars.

use super::FieldRule;

/// Title candidates: product-ish headings first, then any `<h1>`, then the
/// document `<title>`.
pub const TITLE_RULES: &[FieldRule] = &[
    FieldRule::text(r#"h1[class*="title"]"#, 5, 300),
    FieldRule::text(r#"h1[class*="product"]"#, 5, 300),
    FieldRule::text(r#"[data-testid*="title"]"#, 5, 300),
    FieldRule::text(r#"[class*="product-title"]"#, 5, 300),
    FieldRule::text(r#"[class*="product-name"]"#, 5, 300),
    FieldRule::text(r#"[id*="title"]"#, 5, 300),
    FieldRule::text("h1", 5, 300),
    FieldRule::text("title", 5, 300),
    FieldRule::attr(r#"meta[property="og:title"]"#, &["content"], 5, 300),
];

/// Description spans. Every accepted span is kept, not just the first.
pub const DESCRIPTION_RULES: &[FieldRule] = &[
    FieldRule::text(r#"[class*="product-description"]"#, 30, 3000),
    FieldRule::text(r#"[class*="description"]"#, 30, 3000),
    FieldRule::text(r#"[class*="summary"]"#, 30, 3000),
    FieldRule::text(r#"[class*="overview"]"#, 30, 3000),
    FieldRule::text(r#"[class*="details"]"#, 30, 3000),
    FieldRule::text(r#"[data-testid*="description"]"#, 30, 3000),
    FieldRule::text(r#"[class*="product-info"]"#, 30, 3000),
    FieldRule::text(r#"[class*="caracteristicas"]"#, 30, 3000),
];

/// The meta description, appended after the structural spans when enabled.
pub const META_DESCRIPTION_RULE: FieldRule =
    FieldRule::attr(r#"meta[name="description"]"#, &["content"], 30, usize::MAX);

/// Feature bullets.
pub const FEATURE_RULES: &[FieldRule] = &[
    FieldRule::text(r#"[class*="feature"] li"#, 10, 500),
    FieldRule::text(r#"[class*="benefit"] li"#, 10, 500),
    FieldRule::text(r#"[class*="highlight"] li"#, 10, 500),
    FieldRule::text(r#"[class*="spec"] li"#, 10, 500),
    FieldRule::text(r#"ul[class*="feature"] li"#, 10, 500),
    FieldRule::text(".features li", 10, 500),
    FieldRule::text(".benefits li", 10, 500),
    FieldRule::text(r#"div[class*="feature"]"#, 10, 500),
];

/// Elements whose text is scanned for a currency amount.
pub const PRICE_RULES: &[FieldRule] = &[
    FieldRule::text(r#"[class*="price"]"#, 0, usize::MAX),
    FieldRule::text(r#"[class*="cost"]"#, 0, usize::MAX),
    FieldRule::text(r#"[class*="amount"]"#, 0, usize::MAX),
    FieldRule::text(r#"[data-testid*="price"]"#, 0, usize::MAX),
    FieldRule::text(r#"[id*="price"]"#, 0, usize::MAX),
];

/// Facet and filter labels from listing sidebars.
pub const FILTER_RULES: &[FieldRule] = &[
    FieldRule::text(r#"[class*="filter"] a"#, 2, 80),
    FieldRule::text(r#"[class*="facet"] a"#, 2, 80),
    FieldRule::text("select option", 2, 80),
    FieldRule::text(r#"[type="checkbox"] + label"#, 2, 80),
];

/// Breadcrumb and category links.
pub const CATEGORY_RULES: &[FieldRule] = &[
    FieldRule::text(r#"[class*="breadcrumb"] a"#, 2, 50),
    FieldRule::text(r#"[class*="category"] a"#, 2, 50),
    FieldRule::text(".breadcrumb a", 2, 50),
];

/// Breadcrumb labels that name the site root rather than a category.
pub const ROOT_CATEGORY_LABELS: &[&str] = &["home", "inicio", "tienda", "portada", "shop"];

/// Product imagery: declared share image first, then gallery images.
pub const IMAGE_RULES: &[FieldRule] = &[
    FieldRule::attr(r#"meta[property="og:image"]"#, &["content"], 0, 2048),
    FieldRule::attr(r#"img[itemprop="image"]"#, &["src", "data-src"], 0, 2048),
    FieldRule::attr(r#"[class*="product"] img"#, &["src", "data-src"], 0, 2048),
    FieldRule::attr(r#"[class*="gallery"] img"#, &["src", "data-src"], 0, 2048),
];
