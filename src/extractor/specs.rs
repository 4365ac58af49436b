//! Specification table extraction.
//!
//! Tables and definition lists are walked in document order and merged into
//! one [`SpecTable`]. A key seen again later overwrites the earlier value.

use crate::dom::{self, Document, Selection};
use crate::record::SpecTable;
use crate::selector::utils;

/// Keys must be shorter than this (in chars).
pub const MAX_KEY_LEN: usize = 100;

/// Values must be shorter than this (in chars).
pub const MAX_VALUE_LEN: usize = 200;

/// Merged key/value pairs from every `<table>` and `<dl>` on the page.
#[must_use]
pub fn extract_specifications(doc: &Document) -> SpecTable {
    let mut specs = SpecTable::new();
    for block in dom::select_each(doc, "table, dl") {
        match utils::tag(&block).as_str() {
            "table" => read_table(&block, &mut specs),
            "dl" => read_definition_list(&block, &mut specs),
            _ => {}
        }
    }
    specs
}

/// First two `td`/`th` cells of each row become key and value.
fn read_table(table: &Selection, specs: &mut SpecTable) {
    for row in dom::select_within(table, "tr") {
        let cells: Vec<Selection> = row
            .children()
            .iter()
            .filter(|cell| matches!(utils::tag(cell).as_str(), "td" | "th"))
            .collect();
        if let [key, value, ..] = cells.as_slice() {
            insert_pair(specs, &dom::clean_text(key), &dom::clean_text(value));
        }
    }
}

/// Each `dd` pairs with the closest preceding `dt`.
fn read_definition_list(list: &Selection, specs: &mut SpecTable) {
    let mut pending: Option<String> = None;
    for item in dom::select_within(list, "dt, dd") {
        match utils::tag(&item).as_str() {
            "dt" => pending = Some(dom::clean_text(&item)),
            "dd" => {
                if let Some(key) = pending.take() {
                    insert_pair(specs, &key, &dom::clean_text(&item));
                }
            }
            _ => {}
        }
    }
}

fn insert_pair(specs: &mut SpecTable, key: &str, value: &str) {
    if key.is_empty() || value.is_empty() {
        return;
    }
    if key.chars().count() >= MAX_KEY_LEN || value.chars().count() >= MAX_VALUE_LEN {
        return;
    }
    specs.insert(key, value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_two_column_rows() {
        let doc = dom::parse(
            r"<table>
                <tr><th>Peso</th><td>120 g</td></tr>
                <tr><td>Conectividad</td><td>Bluetooth 5.0</td><td>extra</td></tr>
                <tr><td colspan='2'>Solo una celda</td></tr>
            </table>",
        );
        let specs = extract_specifications(&doc);
        assert_eq!(specs.len(), 2);
        assert_eq!(specs.get("Peso"), Some("120 g"));
        assert_eq!(specs.get("Conectividad"), Some("Bluetooth 5.0"));
    }

    #[test]
    fn later_tables_overwrite_earlier_keys() {
        let doc = dom::parse(
            r"<table><tr><td>Color</td><td>Negro</td></tr><tr><td>Peso</td><td>120 g</td></tr></table>
              <table><tr><td>Color</td><td>Blanco</td></tr></table>",
        );
        let specs = extract_specifications(&doc);
        assert_eq!(specs.get("Color"), Some("Blanco"));
        assert_eq!(specs.keys().collect::<Vec<_>>(), vec!["Color", "Peso"]);
    }

    #[test]
    fn definition_lists_are_merged() {
        let doc = dom::parse(
            r"<table><tr><td>Batería</td><td>3000 mAh</td></tr></table>
              <dl><dt>Batería</dt><dd>5000 mAh</dd><dt>Pantalla</dt><dd>6,5 pulgadas</dd></dl>",
        );
        let specs = extract_specifications(&doc);
        assert_eq!(specs.get("Batería"), Some("5000 mAh"));
        assert_eq!(specs.get("Pantalla"), Some("6,5 pulgadas"));
    }

    #[test]
    fn oversized_and_empty_cells_are_skipped() {
        let long_value = "x".repeat(MAX_VALUE_LEN);
        let html = format!(
            "<table><tr><td>Notas</td><td>{long_value}</td></tr><tr><td></td><td>vacío</td></tr><tr><td>Zoom</td><td>10x</td></tr></table>"
        );
        let doc = dom::parse(&html);
        let specs = extract_specifications(&doc);
        assert_eq!(specs.len(), 1);
        assert_eq!(specs.get("Zoom"), Some("10x"));
    }

    #[test]
    fn no_tables_gives_empty_specs() {
        let doc = dom::parse("<p>Sin especificaciones</p>");
        assert!(extract_specifications(&doc).is_empty());
    }
}
