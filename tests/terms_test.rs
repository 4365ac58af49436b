//! Term frequency analysis across extracted records.

use rs_product_gap::terms::{count_feature_words, count_filters, count_terms, tokenize};
use rs_product_gap::{extract, Lexicon, ProductRecord};

fn page(title: &str, features: &[&str], description: &str, filters: &[&str]) -> ProductRecord {
    let items: String = features.iter().map(|f| format!("<li>{f}</li>")).collect();
    let links: String = filters.iter().map(|f| format!(r##"<a href="#">{f}</a>"##)).collect();
    extract(&format!(
        r#"<h1 class="product-title">{title}</h1>
        <ul class="features">{items}</ul>
        <div class="product-description">{description}</div>
        <div class="facets">{links}</div>"#
    ))
}

fn corpus() -> Vec<ProductRecord> {
    vec![
        page(
            "Altavoz Bluetooth Onda",
            &["Sonido envolvente 360", "Batería de doce horas"],
            "Batería recargable incluye carga rápida USB-C. Compra ahora envío gratis mejor precio.",
            &["Bluetooth", "Negro"],
        ),
        page(
            "Altavoz Inteligente Eco",
            &["Sonido estéreo potente", "Control por voz"],
            "Diseño compacto incluye tecnología de cancelación activa del eco ambiental.",
            &["Negro", "WiFi"],
        ),
    ]
}

#[test]
fn weighted_counts() {
    let table = count_terms(&corpus(), &Lexicon::default());

    // title once per record
    assert_eq!(table.get("altavoz"), 2);
    // features twice
    assert_eq!(table.get("sonido"), 4);
    // relevant description sentences once, commercial ones never
    assert_eq!(table.get("carga"), 1);
    assert_eq!(table.get("gratis"), 0);
    assert_eq!(table.get("mejor"), 0);
    // stopwords and noise terms never
    assert_eq!(table.get("con"), 0);
    assert_eq!(table.get("precio"), 0);
}

#[test]
fn most_common_is_descending_with_stable_ties() {
    let table = count_terms(&corpus(), &Lexicon::default());
    let top = table.most_common(3);
    assert_eq!(top[0], ("sonido", 4));
    assert!(top.windows(2).all(|w| w[0].1 >= w[1].1));
}

#[test]
fn feature_words_only_look_at_features() {
    let table = count_feature_words(&corpus(), &Lexicon::default());
    assert_eq!(table.get("sonido"), 2);
    assert_eq!(table.get("altavoz"), 0);
    assert_eq!(table.get("batería"), 1);
}

#[test]
fn filters_are_counted() {
    let table = count_filters(&corpus());
    assert_eq!(table.most_common(1), vec![("Negro", 2)]);
    assert_eq!(table.get("WiFi"), 1);
}

#[test]
fn tokenizer_keeps_accents_and_drops_digits() {
    let tokens = tokenize("Cámara 4K, zoom óptico 10x y visión nocturna", &Lexicon::default());
    assert_eq!(tokens, vec!["cámara", "zoom", "óptico", "visión", "nocturna"]);
}
