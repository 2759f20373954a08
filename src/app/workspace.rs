//! Workspace - Main Shell with Layout
//!
//! The workspace is the main container that holds the header and the cart page.

use gpui::{div, prelude::*, Context, Entity, IntoElement, ParentElement, Render, Styled, Window};

use crate::app::entities::AppEntities;
use crate::components::layout::header::Header;
use crate::features::cart::page::CartPage;
use crate::theme::colors::CartColors;

/// Main workspace containing the application layout
pub struct Workspace {
    header: Entity<Header>,
    cart_page: Entity<CartPage>,
}

impl Workspace {
    pub fn new(entities: AppEntities, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let cart_page = cx.new(|cx| CartPage::new(entities, window, cx));

        Self { header, cart_page }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(CartColors::background())
            .child(self.header.clone())
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .child(self.cart_page.clone()),
            )
    }
}
