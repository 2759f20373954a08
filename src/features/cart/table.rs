//! Cart Items Table
//!
//! Renders the lines handed in by the cart owner and reports quantity changes
//! and removals back through [`CartHandlers`]. The table never edits the
//! items itself; it shows exactly what the last [`CartItemsTable::set_items`]
//! call supplied.

use std::path::Path;
use std::rc::Rc;

use ahash::AHashMap;
use gpui::{
    div, img, prelude::*, px, App, Context, ElementId, Entity, ImageSource, IntoElement,
    ObjectFit, ParentElement, Render, SharedString, Styled, Subscription, Window,
};
use gpui_component::input::{Input, InputEvent, InputState};

use super::intent::{self, CartHandlers, EditorChange};
use super::model::{build_rows, CartColumn, CartRowModel};
use crate::assets::CartIconName;
use crate::components::composite::data_table::{Column, DataTable};
use crate::components::primitives::button::Button;
use crate::constants::{
    CART_HEADER_HEIGHT, CART_QUANTITY_INPUT_WIDTH, CART_ROW_HEIGHT, CART_THUMBNAIL_SIZE,
};
use crate::domain::cart_item::CartItem;
use crate::i18n::{t, Locale};
use crate::theme::colors::CartColors;
use crate::utils::format::CurrencyFormat;

/// Editable quantity text for one line, kept per product ID
struct QuantityField {
    input: Entity<InputState>,
    /// Editor text the table has already accounted for
    synced: SharedString,
    _subscription: Subscription,
}

impl QuantityField {
    /// Put text into the editor without treating it as a user edit
    fn write(&mut self, text: SharedString, window: &mut Window, cx: &mut App) {
        self.synced = text.clone();
        self.input
            .update(cx, |state, cx| state.set_value(text, window, cx));
    }
}

/// One rendered line
struct CartRow {
    model: CartRowModel,
    input: Entity<InputState>,
}

/// Cart line-item table
pub struct CartItemsTable {
    items: Vec<CartItem>,
    currency: CurrencyFormat,
    locale: Locale,
    handlers: CartHandlers<App>,
    columns: Rc<[Column<CartRow>]>,
    fields: AHashMap<SharedString, QuantityField>,
}

impl CartItemsTable {
    pub fn new(
        currency: CurrencyFormat,
        locale: Locale,
        handlers: CartHandlers<App>,
        _cx: &mut Context<Self>,
    ) -> Self {
        let columns = Self::create_columns(locale, &handlers);
        Self {
            items: Vec::new(),
            currency,
            locale,
            handlers,
            columns,
            fields: AHashMap::new(),
        }
    }

    /// Replace the displayed items
    ///
    /// Rows keep their editor across calls as long as the product ID stays in
    /// the list. Editors whose text does not already denote the new quantity
    /// are reset to it.
    pub fn set_items(&mut self, items: Vec<CartItem>, window: &mut Window, cx: &mut Context<Self>) {
        self.items = items;

        let mut stale = std::mem::take(&mut self.fields);
        for item in &self.items {
            let key = SharedString::from(item.id.clone());

            let field = match stale.remove(&key) {
                Some(mut field) => {
                    let typed = field.input.read(cx).value().to_string();
                    if let Some(text) = intent::resync_text(&typed, item.quantity) {
                        field.write(text.into(), window, cx);
                    }
                    field
                }
                None => Self::new_field(key.clone(), item.quantity.to_string().into(), window, cx),
            };
            self.fields.insert(key, field);
        }

        if !stale.is_empty() {
            tracing::trace!(dropped = stale.len(), "released editors of removed lines");
        }
        cx.notify();
    }

    /// Switch header and tooltip language
    pub fn set_locale(&mut self, locale: Locale, cx: &mut Context<Self>) {
        self.locale = locale;
        self.columns = Self::create_columns(locale, &self.handlers);
        cx.notify();
    }

    fn new_field(
        product_id: SharedString,
        text: SharedString,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) -> QuantityField {
        let input = cx.new(|cx| InputState::new(window, cx).default_value(text.clone()));

        let subscription = cx.subscribe_in(
            &input,
            window,
            move |this, state, event: &InputEvent, window, cx| {
                if matches!(event, InputEvent::Change) {
                    let typed = SharedString::from(state.read(cx).value().to_string());
                    this.on_quantity_typed(&product_id, typed, window, cx);
                }
            },
        );

        QuantityField {
            input,
            synced: text,
            _subscription: subscription,
        }
    }

    fn on_quantity_typed(
        &mut self,
        product_id: &str,
        typed: SharedString,
        window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let Some(quantity) = self
            .items
            .iter()
            .find(|item| item.id == product_id)
            .map(|item| item.quantity)
        else {
            return;
        };
        let Some(field) = self.fields.get_mut(product_id) else {
            return;
        };

        match intent::editor_change(product_id, &field.synced, &typed, quantity) {
            EditorChange::Echo => {}
            EditorChange::Dispatch(intent) => {
                field.synced = typed;
                self.handlers.dispatch(&intent, cx);
            }
            EditorChange::Revert(text) => field.write(text.into(), window, cx),
        }
    }

    fn create_columns(locale: Locale, handlers: &CartHandlers<App>) -> Rc<[Column<CartRow>]> {
        let stepper_handlers = handlers.clone();
        let remove_handlers = handlers.clone();
        let remove_label = t(locale, "cart.remove_item");

        vec![
            Column::new(
                CartColumn::Product.id(),
                CartColumn::Product.label(locale),
                |row: &CartRow| render_product(&row.model).into_any_element(),
            )
            .width(CartColumn::Product.width()),
            Column::new(
                CartColumn::UnitPrice.id(),
                CartColumn::UnitPrice.label(locale),
                |row: &CartRow| div().child(row.model.unit_price.clone()).into_any_element(),
            )
            .width(CartColumn::UnitPrice.width()),
            Column::new(
                CartColumn::Quantity.id(),
                CartColumn::Quantity.label(locale),
                move |row: &CartRow| render_stepper(row, &stepper_handlers).into_any_element(),
            )
            .width(CartColumn::Quantity.width()),
            Column::new(
                CartColumn::Subtotal.id(),
                CartColumn::Subtotal.label(locale),
                |row: &CartRow| {
                    div()
                        .font_weight(gpui::FontWeight::MEDIUM)
                        .child(row.model.subtotal.clone())
                        .into_any_element()
                },
            )
            .width(CartColumn::Subtotal.width()),
            Column::new(
                CartColumn::Action.id(),
                CartColumn::Action.label(locale),
                move |row: &CartRow| {
                    let handlers = remove_handlers.clone();
                    let product_id = row.model.key.clone();
                    Button::danger("remove", CartIconName::Trash)
                        .tooltip(remove_label.clone())
                        .on_click(move |_, _window, cx| {
                            handlers.dispatch(&intent::remove(&product_id), cx);
                        })
                        .into_any_element()
                },
            )
            .width(CartColumn::Action.width()),
        ]
        .into()
    }
}

/// Remote URLs and embedded asset paths go through as-is; absolute paths are
/// read from disk.
fn thumbnail_source(image_url: &SharedString) -> ImageSource {
    let path = Path::new::<str>(image_url.as_ref());
    if path.is_absolute() {
        ImageSource::from(path.to_path_buf())
    } else {
        ImageSource::from(image_url.clone())
    }
}

/// Shown in place of a thumbnail that cannot be loaded
fn render_image_alt(alt: SharedString) -> impl IntoElement {
    div()
        .size_full()
        .flex()
        .items_center()
        .justify_center()
        .p_1()
        .bg(CartColors::background())
        .text_xs()
        .text_color(CartColors::text_muted())
        .line_clamp(3)
        .child(alt)
}

fn render_product(model: &CartRowModel) -> impl IntoElement {
    div()
        .flex()
        .items_center()
        .gap_4()
        .child(
            div()
                .flex_none()
                .size(px(CART_THUMBNAIL_SIZE))
                .rounded_lg()
                .border_1()
                .border_color(CartColors::border())
                .overflow_hidden()
                .child({
                    let alt = model.image_alt.clone();
                    img(thumbnail_source(&model.image_url))
                        .size(px(CART_THUMBNAIL_SIZE))
                        .object_fit(ObjectFit::Cover)
                        .with_fallback(move || render_image_alt(alt.clone()).into_any_element())
                }),
        )
        .child(
            div()
                .flex()
                .flex_col()
                .overflow_hidden()
                .child(
                    div()
                        .text_sm()
                        .font_weight(gpui::FontWeight::MEDIUM)
                        .text_color(CartColors::text_primary())
                        .line_clamp(2)
                        .child(model.name.clone()),
                )
                .child(
                    div()
                        .text_sm()
                        .text_color(CartColors::text_secondary())
                        .truncate()
                        .child(model.description.clone()),
                )
                .child(
                    div()
                        .text_xs()
                        .text_color(CartColors::text_muted())
                        .child(model.unit.clone()),
                ),
        )
}

fn render_stepper(row: &CartRow, handlers: &CartHandlers<App>) -> impl IntoElement {
    let product_id = row.model.key.clone();
    let quantity = row.model.quantity;

    let decrement = {
        let handlers = handlers.clone();
        let product_id = product_id.clone();
        Button::ghost("decrement", CartIconName::Minus)
            .disabled(!row.model.can_decrement)
            .on_click(move |_, _window, cx| {
                handlers.dispatch_opt(intent::decrement(&product_id, quantity).as_ref(), cx);
            })
    };

    let increment = {
        let handlers = handlers.clone();
        Button::ghost("increment", CartIconName::Plus).on_click(move |_, _window, cx| {
            handlers.dispatch_opt(intent::increment(&product_id, quantity).as_ref(), cx);
        })
    };

    div()
        .flex()
        .items_center()
        .border_1()
        .border_color(CartColors::input_border())
        .rounded_md()
        .child(decrement)
        .child(
            div()
                .w(px(CART_QUANTITY_INPUT_WIDTH))
                .child(Input::new(&row.input).appearance(false)),
        )
        .child(increment)
}

impl Render for CartItemsTable {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let rows: Vec<CartRow> = build_rows(&self.items, &self.currency)
            .into_iter()
            .filter_map(|model| {
                let input = self.fields.get(&model.key)?.input.clone();
                Some(CartRow { model, input })
            })
            .collect();

        div()
            .w_full()
            .flex()
            .flex_col()
            .bg(CartColors::content_bg())
            .border_1()
            .border_color(CartColors::border())
            .rounded_lg()
            .shadow_sm()
            .overflow_hidden()
            .child(
                div()
                    .px_6()
                    .py_4()
                    .border_b_1()
                    .border_color(CartColors::border())
                    .text_lg()
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(CartColors::text_primary())
                    .child(t(self.locale, "cart.title")),
            )
            .child(
                DataTable::new("cart-items", self.columns.clone(), rows, |row: &CartRow| {
                    ElementId::Name(row.model.key.clone())
                })
                .row_height(CART_ROW_HEIGHT)
                .header_height(CART_HEADER_HEIGHT),
            )
    }
}
