//! i18n - Internationalization Module
//!
//! Translations live in `locales/app.yml` and are compiled in by `rust-i18n`.

use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// Portuguese (Brazil)
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    /// English (US)
    #[serde(rename = "en-US")]
    EnUs,
}

impl Locale {
    /// Locale code as used by the translation files
    pub fn code(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::EnUs => "en-US",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::PtBr => "Português",
            Locale::EnUs => "English",
        }
    }

    /// Map a BCP 47 tag to a supported locale
    pub fn from_tag(tag: &str) -> Option<Self> {
        let lang = tag.split(['-', '_']).next()?.to_ascii_lowercase();
        match lang.as_str() {
            "pt" => Some(Locale::PtBr),
            "en" => Some(Locale::EnUs),
            _ => None,
        }
    }

    /// Pick the first supported language from the user's system settings
    pub fn from_system() -> Self {
        let user = locale_config::Locale::user_default();
        user.tags()
            .find_map(|(_, range)| Self::from_tag(range.as_ref()))
            .unwrap_or_default()
    }
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    rust_i18n::t!(key, locale = locale.code()).to_string().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Locale::from_tag("pt-BR"), Some(Locale::PtBr));
        assert_eq!(Locale::from_tag("pt_PT"), Some(Locale::PtBr));
        assert_eq!(Locale::from_tag("en-GB"), Some(Locale::EnUs));
        assert_eq!(Locale::from_tag("de-DE"), None);
        assert_eq!(Locale::from_tag(""), None);
    }

    #[test]
    fn test_table_headers_translated() {
        assert_eq!(&**t(Locale::PtBr, "cart.column.product"), "Produto");
        assert_eq!(&**t(Locale::PtBr, "cart.column.unit_price"), "Preço Unitário");
        assert_eq!(&**t(Locale::PtBr, "cart.title"), "Itens do Carrinho");
        assert_eq!(&**t(Locale::EnUs, "cart.column.product"), "Product");
    }
}
