//! UI Constants
//!
//! Centralized UI constants for consistent layout across the application.

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 700.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 420.0;

/// Cart table geometry
pub const CART_ROW_HEIGHT: f32 = 96.0;
pub const CART_HEADER_HEIGHT: f32 = 40.0;
pub const CART_THUMBNAIL_SIZE: f32 = 64.0;
pub const CART_QUANTITY_INPUT_WIDTH: f32 = 64.0;

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the config file path
pub const CONFIG_PATH_ENV: &str = "CART_GUI_CONFIG";

/// Log file prefix inside the platform data directory
pub const LOG_FILE_PREFIX: &str = "cart-gui.log";
