//! Cart Table Model
//!
//! Per-row display values, recomputed from the current items on every render.

use gpui::SharedString;

use super::intent::can_decrement;
use crate::components::composite::data_table::ColumnWidth;
use crate::domain::cart_item::CartItem;
use crate::i18n::{t, Locale};
use crate::utils::format::CurrencyFormat;

/// Table columns, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartColumn {
    Product,
    UnitPrice,
    Quantity,
    Subtotal,
    Action,
}

impl CartColumn {
    pub const ALL: [CartColumn; 5] = [
        CartColumn::Product,
        CartColumn::UnitPrice,
        CartColumn::Quantity,
        CartColumn::Subtotal,
        CartColumn::Action,
    ];

    /// Column identifier
    pub fn id(self) -> &'static str {
        match self {
            CartColumn::Product => "product",
            CartColumn::UnitPrice => "unit_price",
            CartColumn::Quantity => "quantity",
            CartColumn::Subtotal => "subtotal",
            CartColumn::Action => "action",
        }
    }

    /// Localized header label
    pub fn label(self, locale: Locale) -> SharedString {
        t(locale, &format!("cart.column.{}", self.id()))
    }

    /// The product column takes the remaining space
    pub fn width(self) -> ColumnWidth {
        match self {
            CartColumn::Product => ColumnWidth::Flex { min: 280.0 },
            CartColumn::UnitPrice => ColumnWidth::Fixed(150.0),
            CartColumn::Quantity => ColumnWidth::Fixed(170.0),
            CartColumn::Subtotal => ColumnWidth::Fixed(150.0),
            CartColumn::Action => ColumnWidth::Fixed(90.0),
        }
    }
}

/// Display values for one cart line
#[derive(Debug, Clone, PartialEq)]
pub struct CartRowModel {
    /// Row key, equal to the product ID
    pub key: SharedString,
    pub name: SharedString,
    pub description: SharedString,
    pub unit: SharedString,
    pub image_url: SharedString,
    /// Shown when the image cannot be loaded
    pub image_alt: SharedString,
    pub unit_price: SharedString,
    pub subtotal: SharedString,
    /// Quantity exactly as supplied, even when below the floor
    pub quantity: i64,
    pub can_decrement: bool,
}

impl CartRowModel {
    pub fn from_item(item: &CartItem, currency: &CurrencyFormat) -> Self {
        Self {
            key: item.id.clone().into(),
            name: item.name.clone().into(),
            description: item.description.clone().into(),
            unit: item.unit.clone().into(),
            image_url: item.image_url.clone().into(),
            image_alt: item.name.clone().into(),
            unit_price: currency.format(item.unit_price).into(),
            subtotal: currency.format(item.subtotal()).into(),
            quantity: item.quantity,
            can_decrement: can_decrement(item.quantity),
        }
    }
}

/// "1 item" / "3 itens"
pub fn item_count_label(locale: Locale, count: usize) -> SharedString {
    let label = if count == 1 {
        rust_i18n::t!("cart.item_count.one", locale = locale.code())
    } else {
        rust_i18n::t!("cart.item_count.other", locale = locale.code(), count = count)
    };
    label.to_string().into()
}

/// Build the rows for `items`, preserving their order
pub fn build_rows(items: &[CartItem], currency: &CurrencyFormat) -> Vec<CartRowModel> {
    items
        .iter()
        .map(|item| CartRowModel::from_item(item, currency))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brl() -> CurrencyFormat {
        CurrencyFormat::brl()
    }

    #[test]
    fn subtotal_is_price_times_quantity() {
        let row = CartRowModel::from_item(&CartItem::new("a", "A", 10.5, 3), &brl());
        assert_eq!(&**row.unit_price, "R$ 10,50");
        assert_eq!(&**row.subtotal, "R$ 31,50");
    }

    #[test]
    fn decrement_flag_follows_quantity() {
        let rows = build_rows(
            &[CartItem::new("a", "A", 1.0, 1), CartItem::new("b", "B", 1.0, 2)],
            &brl(),
        );
        assert!(!rows[0].can_decrement);
        assert!(rows[1].can_decrement);
    }

    #[test]
    fn empty_items_keep_five_headers() {
        assert!(build_rows(&[], &brl()).is_empty());
        let labels: Vec<_> = CartColumn::ALL.iter().map(|c| c.label(Locale::PtBr)).collect();
        assert_eq!(labels.len(), 5);
        assert_eq!(&**labels[0], "Produto");
        assert_eq!(&**labels[2], "Quantidade");
        assert_eq!(&**labels[4], "Ação");
    }

    #[test]
    fn rows_follow_input_order_and_keep_keys() {
        let a = CartItem::new("a", "A", 2.0, 1);
        let b = CartItem::new("b", "B", 3.0, 2);

        let first = build_rows(&[a.clone(), b.clone()], &brl());
        let keys: Vec<_> = first.iter().map(|r| &**r.key).collect();
        assert_eq!(keys, vec!["a", "b"]);

        let swapped = build_rows(&[b, a], &brl());
        let keys: Vec<_> = swapped.iter().map(|r| &**r.key).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(&**swapped[0].subtotal, "R$ 6,00");
        assert_eq!(swapped[1], first[0]);
    }

    #[test]
    fn only_product_column_flexes() {
        for column in CartColumn::ALL {
            let flexible = matches!(column.width(), ColumnWidth::Flex { .. });
            assert_eq!(flexible, column == CartColumn::Product, "{column:?}");
        }
    }

    #[test]
    fn image_alt_is_item_name() {
        let item = CartItem::new("a", "Sal Refinado", 2.0, 1).with_image("https://x/sal.png");
        let row = CartRowModel::from_item(&item, &brl());
        assert_eq!(&**row.image_alt, "Sal Refinado");
    }

    #[test]
    fn item_count_singular_and_plural() {
        assert_eq!(&**item_count_label(Locale::PtBr, 1), "1 item");
        assert_eq!(&**item_count_label(Locale::PtBr, 0), "0 itens");
        assert_eq!(&**item_count_label(Locale::PtBr, 4), "4 itens");
        assert_eq!(&**item_count_label(Locale::EnUs, 1), "1 item");
        assert_eq!(&**item_count_label(Locale::EnUs, 2), "2 items");
    }

    #[test]
    fn malformed_items_render_as_is() {
        let mut item = CartItem::new("x", "", -4.0, 0);
        item.image_url = String::new();
        let row = CartRowModel::from_item(&item, &brl());
        assert_eq!(row.quantity, 0);
        assert_eq!(&**row.unit_price, "-R$ 4,00");
        assert_eq!(&**row.subtotal, "R$ 0,00");
        assert!(row.name.is_empty());
        assert!(!row.can_decrement);
    }
}
