//! CartItem - One Product Line in a Shopping Cart
//!
//! The record is owned by whoever manages the cart. The table only reads it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use crate::error::{IoSnafu, Result};

/// A product line in the cart
///
/// Field names on the wire follow the web storefront's JSON shape
/// (`nome`, `descricao`, `imgUrl`, `preco`, `quantidade`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Unique product ID
    pub id: String,
    /// Display name
    #[serde(rename = "nome", alias = "name")]
    pub name: String,
    /// Short description
    #[serde(rename = "descricao", alias = "description", default)]
    pub description: String,
    /// Image reference: a URL, an absolute file path or an embedded asset path
    #[serde(rename = "imgUrl", alias = "image_url", default)]
    pub image_url: String,
    /// Unit of measure label (e.g. "kg", "un")
    #[serde(default)]
    pub unit: String,
    /// Unit price
    #[serde(rename = "preco", alias = "unit_price")]
    pub unit_price: f64,
    /// Quantity; not validated on read
    #[serde(rename = "quantidade", alias = "quantity")]
    pub quantity: i64,
}

impl CartItem {
    /// Create an item with only the fields the table needs for arithmetic
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price: f64, quantity: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            image_url: String::new(),
            unit: String::new(),
            unit_price,
            quantity,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Unit price times quantity, computed fresh on every call
    pub fn subtotal(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

/// Parse a cart snapshot from JSON (an array of items)
pub fn parse_items(json: &str) -> Result<Vec<CartItem>> {
    Ok(serde_json::from_str(json)?)
}

/// Load a cart snapshot from a JSON file
pub fn load_items(path: &Path) -> Result<Vec<CartItem>> {
    let content = fs::read_to_string(path).context(IoSnafu { path })?;
    parse_items(&content)
}

/// Built-in cart used when no snapshot is configured
pub fn sample_items() -> Vec<CartItem> {
    vec![
        CartItem::new("cafe-500", "Café Torrado e Moído", 18.9, 2)
            .with_description("Pacote de café tradicional")
            .with_image("images/cafe-500.svg")
            .with_unit("500 g"),
        CartItem::new("arroz-5kg", "Arroz Agulhinha Tipo 1", 27.49, 1)
            .with_description("Arroz branco longo fino")
            .with_image("images/arroz-5kg.svg")
            .with_unit("5 kg"),
        CartItem::new("azeite-500", "Azeite de Oliva Extra Virgem", 42.0, 3)
            .with_description("Garrafa de vidro")
            .with_image("images/azeite-500.svg")
            .with_unit("500 ml"),
        CartItem::new("geladeira-frost", "Geladeira Frost Free 400L", 3599.9, 1)
            .with_description("Inox, duas portas")
            .with_image("images/geladeira-frost.svg")
            .with_unit("un"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_storefront_shape_in_order() {
        let json = r#"[
            {"id": "b", "nome": "Feijão", "descricao": "Carioca", "imgUrl": "b.png",
             "unit": "1 kg", "preco": 8.5, "quantidade": 2},
            {"id": "a", "nome": "Sal", "preco": 2.0, "quantidade": 1}
        ]"#;

        let items = parse_items(json).expect("valid snapshot");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "b");
        assert_eq!(items[0].name, "Feijão");
        assert_eq!(items[0].description, "Carioca");
        assert_eq!(items[0].image_url, "b.png");
        assert_eq!(items[0].unit, "1 kg");
        assert_eq!(items[1].id, "a");
        assert!(items[1].description.is_empty());
    }

    #[test]
    fn malformed_values_are_kept() {
        let json = r#"[{"id": "x", "nome": "", "preco": -3.0, "quantidade": 0}]"#;
        let items = parse_items(json).expect("valid snapshot");
        assert_eq!(items[0].unit_price, -3.0);
        assert_eq!(items[0].quantity, 0);
        assert!(items[0].name.is_empty());
    }

    #[test]
    fn missing_required_field_is_an_error() {
        assert!(parse_items(r#"[{"id": "x", "nome": "y"}]"#).is_err());
    }

    #[test]
    fn subtotal_uses_current_quantity() {
        let mut item = CartItem::new("a", "A", 10.5, 3);
        assert_eq!(item.subtotal(), 31.5);
        item.quantity = 4;
        assert_eq!(item.subtotal(), 42.0);
    }

    #[test]
    fn load_items_reports_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_items(&dir.path().join("nope.json")).expect_err("missing file");
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn sample_ids_are_unique() {
        let items = sample_items();
        let mut ids: Vec<_> = items.iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), items.len());
    }
}
