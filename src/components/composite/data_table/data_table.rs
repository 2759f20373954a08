//! DataTable Component
//!
//! A header row over keyed body rows, rebuilt on every render of its owner.
//! An empty table keeps its header.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, AnyElement, App, Component, Div, ElementId, IntoElement, ParentElement,
    RenderOnce, Styled, Window,
};

use super::column::{Column, ColumnWidth};
use crate::theme::colors::CartColors;

/// DataTable component
pub struct DataTable<R: 'static> {
    id: ElementId,
    columns: Rc<[Column<R>]>,
    rows: Vec<R>,
    row_key: Box<dyn Fn(&R) -> ElementId>,
    row_height: f32,
    header_height: f32,
}

impl<R: 'static> DataTable<R> {
    /// Create a new data table; `row_key` gives each row a stable identity
    pub fn new(
        id: impl Into<ElementId>,
        columns: Rc<[Column<R>]>,
        rows: Vec<R>,
        row_key: impl Fn(&R) -> ElementId + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            columns,
            rows,
            row_key: Box::new(row_key),
            row_height: 48.0,
            header_height: 40.0,
        }
    }

    /// Set body row height
    pub fn row_height(mut self, height: f32) -> Self {
        self.row_height = height;
        self
    }

    /// Set header row height
    pub fn header_height(mut self, height: f32) -> Self {
        self.header_height = height;
        self
    }

    fn cell(width: ColumnWidth) -> Div {
        let cell = div().px_6().overflow_hidden();
        match width {
            ColumnWidth::Fixed(w) => cell.w(px(w)).flex_none(),
            ColumnWidth::Flex { min } => cell.flex_1().min_w(px(min)),
        }
    }

    /// Render the header row
    fn render_header(&self) -> impl IntoElement {
        div()
            .h(px(self.header_height))
            .w_full()
            .flex()
            .items_center()
            .bg(CartColors::table_header_bg())
            .border_b_1()
            .border_color(CartColors::border())
            .children(self.columns.iter().map(|col| {
                Self::cell(col.width)
                    .text_xs()
                    .font_weight(gpui::FontWeight::MEDIUM)
                    .text_color(CartColors::table_header_text())
                    .child(col.label.to_uppercase())
            }))
    }

    /// Render a data row
    fn render_row(&self, row: &R) -> AnyElement {
        div()
            .id((self.row_key)(row))
            .h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .bg(CartColors::content_bg())
            .hover(|s| s.bg(CartColors::table_row_hover()))
            .border_b_1()
            .border_color(CartColors::border())
            .children(self.columns.iter().map(|col| {
                Self::cell(col.width)
                    .text_sm()
                    .text_color(CartColors::text_primary())
                    .child(col.render_cell(row))
            }))
            .into_any_element()
    }
}

impl<R: 'static> RenderOnce for DataTable<R> {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let body: Vec<AnyElement> = self.rows.iter().map(|row| self.render_row(row)).collect();

        div()
            .id(self.id.clone())
            .w_full()
            .flex()
            .flex_col()
            .overflow_x_scroll()
            .child(self.render_header())
            .child(div().w_full().flex().flex_col().children(body))
    }
}

impl<R: 'static> IntoElement for DataTable<R> {
    type Element = Component<Self>;

    fn into_element(self) -> Self::Element {
        Component::new(self)
    }
}
