//! Button Component

use gpui::{
    div, prelude::*, App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, Rgba, SharedString, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::{Icon, tooltip::Tooltip};

use crate::theme::colors::CartColors;

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Borderless gray glyph (stepper)
    #[default]
    Ghost,
    /// Red glyph with a light red hover (remove)
    Danger,
}

type ClickHandler = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// A glyph button with an optional tooltip
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    icon: Icon,
    variant: ButtonVariant,
    tooltip: Option<SharedString>,
    disabled: bool,
    on_click: Option<ClickHandler>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, icon: impl Into<Icon>) -> Self {
        Self {
            id: id.into(),
            icon: icon.into(),
            variant: ButtonVariant::default(),
            tooltip: None,
            disabled: false,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Show a tooltip on hover
    pub fn tooltip(mut self, tooltip: impl Into<SharedString>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Set whether the button is disabled
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the click handler
    pub fn on_click(mut self, handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a ghost button
    pub fn ghost(id: impl Into<ElementId>, icon: impl Into<Icon>) -> Self {
        Self::new(id, icon).variant(ButtonVariant::Ghost)
    }

    /// Create a danger button
    pub fn danger(id: impl Into<ElementId>, icon: impl Into<Icon>) -> Self {
        Self::new(id, icon).variant(ButtonVariant::Danger)
    }

    fn colors(&self) -> (Rgba, Rgba, Rgba) {
        match self.variant {
            ButtonVariant::Ghost => (
                CartColors::icon(),
                CartColors::icon(),
                CartColors::button_ghost_hover(),
            ),
            ButtonVariant::Danger => (
                CartColors::danger(),
                CartColors::danger_hover(),
                CartColors::danger_hover_bg(),
            ),
        }
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (text_color, hover_text, hover_bg) = self.colors();
        let opacity = if self.disabled { 0.5 } else { 1.0 };

        let mut element = div()
            .id(self.id)
            .p_2()
            .flex()
            .items_center()
            .justify_center()
            .rounded_md()
            .text_color(text_color)
            .opacity(opacity)
            .child(self.icon.size_4());

        if let Some(tooltip) = self.tooltip {
            element = element.tooltip(move |window, cx| Tooltip::new(tooltip.clone()).build(window, cx));
        }

        if !self.disabled {
            element = element
                .cursor_pointer()
                .hover(|s| s.bg(hover_bg).text_color(hover_text));

            if let Some(handler) = self.on_click {
                element = element.on_click(handler);
            }
        }

        element
    }
}
