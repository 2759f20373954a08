//! Cart Intents
//!
//! Turns stepper clicks, typed quantities and remove clicks into requests for
//! the cart owner. Nothing here touches GPUI so the quantity floor can be
//! checked without a window.

use std::rc::Rc;

/// Smallest quantity a user action may request
pub const QUANTITY_FLOOR: i64 = 1;

/// Called with `(product_id, new_quantity)`; `new_quantity` is never below 1
pub type QuantityChangeHandler<Cx> = Rc<dyn Fn(&str, i64, &mut Cx)>;

/// Called with the product ID of the line to remove
pub type RemoveHandler<Cx> = Rc<dyn Fn(&str, &mut Cx)>;

/// A resolved user request, ready to hand to the cart owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartIntent {
    UpdateQuantity { product_id: String, quantity: i64 },
    RemoveItem { product_id: String },
}

/// Whether the decrement control should accept clicks
pub fn can_decrement(quantity: i64) -> bool {
    quantity > QUANTITY_FLOOR
}

/// Request `quantity` unless it is below the floor
fn request_quantity(product_id: &str, quantity: i64) -> Option<CartIntent> {
    if quantity < QUANTITY_FLOOR {
        tracing::trace!(product_id, quantity, "dropping quantity below floor");
        return None;
    }
    Some(CartIntent::UpdateQuantity {
        product_id: product_id.to_string(),
        quantity,
    })
}

/// Decrement stepper, from the quantity currently displayed
pub fn decrement(product_id: &str, quantity: i64) -> Option<CartIntent> {
    request_quantity(product_id, quantity.saturating_sub(1))
}

/// Increment stepper, from the quantity currently displayed
pub fn increment(product_id: &str, quantity: i64) -> Option<CartIntent> {
    request_quantity(product_id, quantity.saturating_add(1))
}

/// Typed quantity; unparseable text falls back to the floor
pub fn edit_quantity(product_id: &str, text: &str) -> Option<CartIntent> {
    let quantity = parse_quantity(text).unwrap_or(QUANTITY_FLOOR);
    request_quantity(product_id, quantity)
}

/// Remove button
pub fn remove(product_id: &str) -> CartIntent {
    CartIntent::RemoveItem {
        product_id: product_id.to_string(),
    }
}

/// Parse the leading integer of `text`
///
/// Leading whitespace and one sign are accepted; parsing stops at the first
/// non-digit, so `"12abc"` is 12 and `"3.7"` is 3. Out-of-range values
/// saturate. Returns `None` when no digit follows the optional sign.
pub fn parse_quantity(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let value = rest[..digits].bytes().fold(0i64, |acc, b| {
        let digit = i64::from(b - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        }
    });
    Some(value)
}

/// What a quantity editor change amounts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorChange {
    /// Text the table wrote into the editor itself
    Echo,
    /// A user edit that resolved to a request
    Dispatch(CartIntent),
    /// A user edit that requests nothing; the editor goes back to this text
    Revert(String),
}

/// Classify a change reported by a line's quantity editor
///
/// `synced` is the last text the table accounted for and `quantity` the
/// line's current quantity.
pub fn editor_change(product_id: &str, synced: &str, typed: &str, quantity: i64) -> EditorChange {
    if synced == typed {
        return EditorChange::Echo;
    }
    match edit_quantity(product_id, typed) {
        Some(intent) => EditorChange::Dispatch(intent),
        None => EditorChange::Revert(quantity.to_string()),
    }
}

/// Text to put back into an editor once the owner supplies `quantity`
///
/// `None` when the typed text already denotes that quantity, so "05" stays
/// as typed for a quantity of 5.
pub fn resync_text(typed: &str, quantity: i64) -> Option<String> {
    (parse_quantity(typed) != Some(quantity)).then(|| quantity.to_string())
}

/// The two upward notifications a cart table can emit
///
/// `Cx` is whatever context the owner needs to apply a change; the GPUI view
/// uses `gpui::App`.
pub struct CartHandlers<Cx: ?Sized> {
    on_update_quantity: QuantityChangeHandler<Cx>,
    on_remove_item: RemoveHandler<Cx>,
}

impl<Cx: ?Sized> Clone for CartHandlers<Cx> {
    fn clone(&self) -> Self {
        Self {
            on_update_quantity: self.on_update_quantity.clone(),
            on_remove_item: self.on_remove_item.clone(),
        }
    }
}

impl<Cx: ?Sized> CartHandlers<Cx> {
    pub fn new(
        on_update_quantity: impl Fn(&str, i64, &mut Cx) + 'static,
        on_remove_item: impl Fn(&str, &mut Cx) + 'static,
    ) -> Self {
        Self {
            on_update_quantity: Rc::new(on_update_quantity),
            on_remove_item: Rc::new(on_remove_item),
        }
    }

    /// Hand an intent to the matching handler, exactly once
    pub fn dispatch(&self, intent: &CartIntent, cx: &mut Cx) {
        match intent {
            CartIntent::UpdateQuantity {
                product_id,
                quantity,
            } => {
                tracing::trace!(product_id = product_id.as_str(), quantity, "update quantity");
                (self.on_update_quantity)(product_id, *quantity, cx);
            }
            CartIntent::RemoveItem { product_id } => {
                tracing::trace!(product_id = product_id.as_str(), "remove item");
                (self.on_remove_item)(product_id, cx);
            }
        }
    }

    /// Dispatch if there is anything to dispatch
    pub fn dispatch_opt(&self, intent: Option<&CartIntent>, cx: &mut Cx) {
        if let Some(intent) = intent {
            self.dispatch(intent, cx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Call {
        Update(String, i64),
        Remove(String),
    }

    fn recorder() -> CartHandlers<Vec<Call>> {
        CartHandlers::new(
            |id, q, calls: &mut Vec<Call>| calls.push(Call::Update(id.to_string(), q)),
            |id, calls: &mut Vec<Call>| calls.push(Call::Remove(id.to_string())),
        )
    }

    #[test]
    fn decrement_enabled_only_above_one() {
        assert!(can_decrement(2));
        assert!(can_decrement(50));
        assert!(!can_decrement(1));
        assert!(!can_decrement(0));
        assert!(!can_decrement(-4));
    }

    #[test]
    fn forced_decrement_at_one_does_not_call() {
        let handlers = recorder();
        let mut calls = Vec::new();
        handlers.dispatch_opt(decrement("a", 1).as_ref(), &mut calls);
        assert!(calls.is_empty());
    }

    #[test]
    fn decrement_requests_one_less() {
        let handlers = recorder();
        let mut calls = Vec::new();
        handlers.dispatch_opt(decrement("a", 3).as_ref(), &mut calls);
        assert_eq!(calls, vec![Call::Update("a".into(), 2)]);
    }

    #[test]
    fn increment_calls_once_with_next_quantity() {
        for q in [1, 2, 7, 99] {
            let handlers = recorder();
            let mut calls = Vec::new();
            handlers.dispatch_opt(increment("a", q).as_ref(), &mut calls);
            assert_eq!(calls, vec![Call::Update("a".into(), q + 1)]);
        }
    }

    #[test]
    fn increment_from_malformed_zero_reaches_floor() {
        assert_eq!(
            increment("a", 0),
            Some(CartIntent::UpdateQuantity {
                product_id: "a".into(),
                quantity: 1
            })
        );
        assert_eq!(increment("a", -5), None);
    }

    #[test]
    fn non_numeric_input_requests_one() {
        for text in ["abc", "", "  ", "-", "x12"] {
            let handlers = recorder();
            let mut calls = Vec::new();
            handlers.dispatch_opt(edit_quantity("a", text).as_ref(), &mut calls);
            assert_eq!(calls, vec![Call::Update("a".into(), 1)], "{text:?}");
        }
    }

    #[test]
    fn zero_or_negative_input_is_dropped() {
        for text in ["0", "-1", "-20", "00", " -3kg"] {
            let handlers = recorder();
            let mut calls = Vec::new();
            handlers.dispatch_opt(edit_quantity("a", text).as_ref(), &mut calls);
            assert!(calls.is_empty(), "{text:?}");
        }
    }

    #[test]
    fn numeric_input_is_forwarded() {
        assert_eq!(
            edit_quantity("a", "12"),
            Some(CartIntent::UpdateQuantity {
                product_id: "a".into(),
                quantity: 12
            })
        );
        assert_eq!(
            edit_quantity("b", "3.7"),
            Some(CartIntent::UpdateQuantity {
                product_id: "b".into(),
                quantity: 3
            })
        );
    }

    #[test]
    fn parse_quantity_prefix_semantics() {
        assert_eq!(parse_quantity("12abc"), Some(12));
        assert_eq!(parse_quantity("3.7"), Some(3));
        assert_eq!(parse_quantity("  +8"), Some(8));
        assert_eq!(parse_quantity("-2"), Some(-2));
        assert_eq!(parse_quantity("abc"), None);
        assert_eq!(parse_quantity("+"), None);
        assert_eq!(parse_quantity("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_quantity("-99999999999999999999999"), Some(i64::MIN));
    }

    #[test]
    fn remove_calls_only_remove_handler() {
        let handlers = recorder();
        let mut calls = Vec::new();
        handlers.dispatch(&remove("abc123"), &mut calls);
        assert_eq!(calls, vec![Call::Remove("abc123".into())]);
    }

    #[test]
    fn text_written_by_table_is_an_echo() {
        assert_eq!(editor_change("a", "3", "3", 3), EditorChange::Echo);
        assert_eq!(editor_change("a", "7", "7", 3), EditorChange::Echo);
    }

    #[test]
    fn user_edit_dispatches_even_when_it_matches_quantity() {
        assert_eq!(
            editor_change("a", "4", "3", 3),
            EditorChange::Dispatch(CartIntent::UpdateQuantity {
                product_id: "a".into(),
                quantity: 3
            })
        );
        assert_eq!(
            editor_change("a", "3", "", 3),
            EditorChange::Dispatch(CartIntent::UpdateQuantity {
                product_id: "a".into(),
                quantity: 1
            })
        );
    }

    #[test]
    fn dropped_edit_reverts_to_current_quantity() {
        for typed in ["0", "-2", "00"] {
            assert_eq!(
                editor_change("a", "3", typed, 3),
                EditorChange::Revert("3".into()),
                "{typed:?}"
            );
        }
    }

    #[test]
    fn resync_keeps_text_that_denotes_quantity() {
        assert_eq!(resync_text("5", 5), None);
        assert_eq!(resync_text("05", 5), None);
        assert_eq!(resync_text("5kg", 5), None);
    }

    #[test]
    fn resync_resets_stale_text() {
        assert_eq!(resync_text("4", 5), Some("5".into()));
        assert_eq!(resync_text("", 1), Some("1".into()));
        assert_eq!(resync_text("abc", 2), Some("2".into()));
        assert_eq!(resync_text("0", 3), Some("3".into()));
    }

    #[test]
    fn rapid_clicks_are_not_debounced() {
        let handlers = recorder();
        let mut calls = Vec::new();
        let intent = increment("a", 1);
        handlers.dispatch_opt(intent.as_ref(), &mut calls);
        handlers.dispatch_opt(intent.as_ref(), &mut calls);
        assert_eq!(calls.len(), 2);
    }
}
