//! Config - Application Configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::i18n::Locale;
use crate::utils::format::CurrencyFormat;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// UI language
    pub locale: Locale,
    /// Money display rules
    pub currency: CurrencyFormat,
    /// Where the cart snapshot comes from
    pub cart: CartSourceConfig,
    /// Main window geometry
    pub window: WindowConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: Locale::from_system(),
            currency: CurrencyFormat::default(),
            cart: CartSourceConfig::default(),
            window: WindowConfig::default(),
        }
    }
}

/// Cart snapshot source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CartSourceConfig {
    /// JSON snapshot file; the built-in sample cart is used when unset
    pub path: Option<PathBuf>,
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}
