//! CartState - Cart Owned by the Host Application
//!
//! Applies the changes the cart table asks for. The table itself never holds
//! this state.

use crate::domain::cart_item::CartItem;

/// State for the shopping cart
#[derive(Debug, Clone, Default)]
pub struct CartState {
    /// Cart lines in display order
    pub items: Vec<CartItem>,
}

impl CartState {
    pub fn new(items: Vec<CartItem>) -> Self {
        Self { items }
    }

    /// Set the quantity of a line; returns whether a line matched
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        match self.items.iter_mut().find(|item| item.id == product_id) {
            Some(item) => {
                tracing::info!(product_id, from = item.quantity, to = quantity, "Quantity updated");
                item.quantity = quantity;
                true
            }
            None => {
                tracing::debug!(product_id, "Quantity update for unknown line ignored");
                false
            }
        }
    }

    /// Remove a line; returns whether a line matched
    pub fn remove_item(&mut self, product_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != product_id);
        let removed = self.items.len() != before;
        if removed {
            tracing::info!(product_id, "Line removed");
        } else {
            tracing::debug!(product_id, "Removal of unknown line ignored");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> CartState {
        CartState::new(vec![
            CartItem::new("a", "A", 1.0, 1),
            CartItem::new("b", "B", 2.0, 5),
            CartItem::new("c", "C", 3.0, 2),
        ])
    }

    #[test]
    fn test_update_quantity_touches_only_matching_line() {
        let mut state = state();
        assert!(state.update_quantity("b", 9));
        let quantities: Vec<_> = state.items.iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![1, 9, 2]);
    }

    #[test]
    fn test_update_unknown_line() {
        let mut state = state();
        assert!(!state.update_quantity("zzz", 3));
        assert_eq!(state.items, self::state().items);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut state = state();
        assert!(state.remove_item("a"));
        let ids: Vec<_> = state.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c"]);
        assert!(!state.remove_item("a"));
        assert_eq!(state.items.len(), 2);
    }
}
