//! Cart Page
//!
//! Hosts the cart table and plays the cart owner: it applies the table's
//! requests to [`CartState`] and hands the updated lines back.

use gpui::{
    div, prelude::*, App, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Subscription, Window,
};

use super::intent::CartHandlers;
use super::model::item_count_label;
use super::table::CartItemsTable;
use crate::app::entities::AppEntities;
use crate::state::cart_state::CartState;
use crate::theme::colors::CartColors;

/// Cart page component
pub struct CartPage {
    entities: AppEntities,
    table: Entity<CartItemsTable>,
    _subscriptions: Vec<Subscription>,
}

impl CartPage {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let (currency, locale) = {
            let config = &entities.config.read(cx).config;
            (config.currency.clone(), config.locale)
        };

        let handlers = Self::cart_handlers(entities.cart.clone());
        let table = cx.new(|cx| CartItemsTable::new(currency, locale, handlers, cx));

        let items = entities.cart.read(cx).items.clone();
        table.update(cx, |table, cx| table.set_items(items, window, cx));

        let mut subscriptions = Vec::new();

        // Re-supply the lines whenever the cart changes
        let table_clone = table.clone();
        subscriptions.push(cx.observe_in(
            &entities.cart,
            window,
            move |_this, cart, window, cx| {
                let items = cart.read(cx).items.clone();
                table_clone.update(cx, |table, cx| table.set_items(items, window, cx));
                cx.notify();
            },
        ));

        let table_clone = table.clone();
        subscriptions.push(cx.observe(&entities.config, move |_this, config, cx| {
            let locale = config.read(cx).config.locale;
            table_clone.update(cx, |table, cx| table.set_locale(locale, cx));
        }));

        Self {
            entities,
            table,
            _subscriptions: subscriptions,
        }
    }

    fn cart_handlers(cart: Entity<CartState>) -> CartHandlers<App> {
        let remove_cart = cart.clone();
        CartHandlers::new(
            move |product_id: &str, quantity: i64, cx: &mut App| {
                cart.update(cx, |state, cx| {
                    state.update_quantity(product_id, quantity);
                    cx.notify();
                });
            },
            move |product_id: &str, cx: &mut App| {
                remove_cart.update(cx, |state, cx| {
                    state.remove_item(product_id);
                    cx.notify();
                });
            },
        )
    }
}

impl Render for CartPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.config.read(cx).config.locale;
        let count_label = item_count_label(locale, self.entities.cart.read(cx).items.len());

        div()
            .id("cart-page")
            .size_full()
            .flex()
            .flex_col()
            .p_6()
            .gap_4()
            .overflow_y_scroll()
            .child(
                div()
                    .text_sm()
                    .text_color(CartColors::text_secondary())
                    .child(count_label),
            )
            .child(self.table.clone())
    }
}
