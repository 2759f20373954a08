//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use snafu::{OptionExt, ResultExt};

use crate::constants::{CONFIG_FILE_NAME, CONFIG_PATH_ENV};
use crate::domain::config::AppConfig;
use crate::error::{IoSnafu, NoProjectDirSnafu, Result};

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "cart-gui", "cart-gui")
}

/// Get the application config directory
pub fn app_config_dir() -> Result<PathBuf> {
    let dirs = project_dirs().context(NoProjectDirSnafu { kind: "config" })?;
    Ok(dirs.config_dir().to_path_buf())
}

/// Get the application data directory, creating it if needed
pub fn app_data_dir() -> Result<PathBuf> {
    let dirs = project_dirs().context(NoProjectDirSnafu { kind: "data" })?;
    let dir = dirs.data_local_dir().to_path_buf();

    if !dir.exists() {
        fs::create_dir_all(&dir).context(IoSnafu { path: &dir })?;
    }

    Ok(dir)
}

/// Resolve the config file path, honoring the environment override
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }
    Ok(app_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load a TOML config file; a missing file yields defaults
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path).context(IoSnafu { path })?;
    let config: AppConfig = toml::from_str(&content)?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Save a TOML config file, creating parent directories
pub fn save_config(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context(IoSnafu { path: parent })?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content).context(IoSnafu { path })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_config(&dir.path().join("config.toml")).expect("defaults");
        assert_eq!(config.currency, crate::utils::format::CurrencyFormat::brl());
        assert!(config.cart.path.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.locale = Locale::EnUs;
        config.cart.path = Some(PathBuf::from("/tmp/cart.json"));
        config.window.width = 900.0;

        save_config(&path, &config).expect("save");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "locale = \"pt-BR\"\n[currency]\nsymbol = \"BRL\"\n").expect("write");

        let config = load_config(&path).expect("load");
        assert_eq!(config.locale, Locale::PtBr);
        assert_eq!(config.currency.symbol, "BRL");
        assert_eq!(config.currency.decimal_separator, ',');
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "locale = [").expect("write");

        assert!(matches!(load_config(&path), Err(crate::error::Error::TomlDe { .. })));
    }
}
