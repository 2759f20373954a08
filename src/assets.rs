//! Embedded assets for Cart-GUI
//!
//! Uses rust-embed to bundle icons and the sample cart's product images at
//! compile time.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
#[include = "images/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Try component assets first
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(Self::iter().filter_map(|p| p.starts_with(path).then(|| p.into())));

        Ok(files)
    }
}

/// Glyphs used by the cart table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartIconName {
    /// Quantity stepper: decrement
    Minus,
    /// Quantity stepper: increment
    Plus,
    /// Remove line
    Trash,
}

impl CartIconName {
    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            CartIconName::Minus => "icons/minus.svg",
            CartIconName::Plus => "icons/plus.svg",
            CartIconName::Trash => "icons/trash-2.svg",
        }
        .into()
    }
}

impl From<CartIconName> for Icon {
    fn from(val: CartIconName) -> Self {
        Icon::empty().path(val.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_icons_are_embedded() {
        for icon in [CartIconName::Minus, CartIconName::Plus, CartIconName::Trash] {
            assert!(Assets::get(icon.path().as_ref()).is_some(), "{icon:?}");
        }
    }

    #[test]
    fn test_sample_cart_images_are_embedded() {
        for item in crate::domain::cart_item::sample_items() {
            let loaded = Assets.load(&item.image_url).expect("embedded image");
            assert!(loaded.is_some_and(|data| !data.is_empty()), "{}", item.image_url);
        }
    }
}
