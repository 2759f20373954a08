//! Colors - Cart Theme Colors

use gpui::{rgb, Rgba};

/// Cart color palette - All colors are accessed via associated functions
pub struct CartColors;

impl CartColors {
    // Background colors
    /// Main background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Card and table body background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x111827) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x6b7280) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Stepper glyph color
    pub fn icon() -> Rgba { rgb(0x4b5563) }

    // Border colors
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }
    /// Input/stepper border
    pub fn input_border() -> Rgba { rgb(0xd1d5db) }

    // Button colors
    /// Ghost button hover background
    pub fn button_ghost_hover() -> Rgba { rgb(0xf3f4f6) }
    /// Danger text (remove action)
    pub fn danger() -> Rgba { rgb(0xdc2626) }
    /// Danger text on hover
    pub fn danger_hover() -> Rgba { rgb(0x991b1b) }
    /// Danger hover background
    pub fn danger_hover_bg() -> Rgba { rgb(0xfef2f2) }

    // Table colors
    /// Table header background
    pub fn table_header_bg() -> Rgba { rgb(0xf9fafb) }
    /// Table header text
    pub fn table_header_text() -> Rgba { rgb(0x6b7280) }
    /// Table row hover
    pub fn table_row_hover() -> Rgba { rgb(0xf9fafb) }
}
