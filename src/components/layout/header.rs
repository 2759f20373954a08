//! Header Component
//!
//! The application header with title and language switcher.

use gpui::{
    div, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::i18n::t;
use crate::theme::colors::CartColors;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe locale changes
        cx.observe(&entities.config, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.config.read(cx).config.locale;
        let title = t(locale, "app.title");
        let lang_label = locale.display_name();

        let entities = self.entities.clone();

        div()
            .h(px(48.0))
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .px_6()
            .bg(CartColors::content_bg())
            .border_b_1()
            .border_color(CartColors::border())
            .child(
                div()
                    .text_color(CartColors::text_primary())
                    .text_size(px(18.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .child(title),
            )
            .child(
                div()
                    .id("lang-switcher")
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .text_color(CartColors::text_secondary())
                    .text_size(px(13.0))
                    .cursor_pointer()
                    .hover(|s| s.bg(CartColors::button_ghost_hover()))
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        entities.config.update(cx, |state, cx| {
                            state.toggle_locale();
                            tracing::info!("Locale switched to {}", state.config.locale.code());
                            if let Err(e) = state.save() {
                                tracing::warn!("Failed to save config: {e}");
                            }
                            cx.notify();
                        });
                    })
                    .child(lang_label),
            )
    }
}
