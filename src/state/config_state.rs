//! ConfigState - Application Configuration State

use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::error::Result;
use crate::i18n::Locale;
use crate::utils::config_store;

/// State for application configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration
    pub config: AppConfig,
    /// File the configuration was read from, if any
    pub path: Option<PathBuf>,
}

impl ConfigState {
    pub fn new(config: AppConfig, path: Option<PathBuf>) -> Self {
        Self { config, path }
    }

    /// Set the locale
    pub fn set_locale(&mut self, locale: Locale) {
        self.config.locale = locale;
    }

    /// Toggle between Portuguese and English
    pub fn toggle_locale(&mut self) {
        self.config.locale = match self.config.locale {
            Locale::PtBr => Locale::EnUs,
            Locale::EnUs => Locale::PtBr,
        };
    }

    /// Write the configuration back to where it was loaded from.
    /// A state without a path is not saved.
    pub fn save(&self) -> Result<()> {
        match &self.path {
            Some(path) => config_store::save_config(path, &self.config),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_locale() {
        let mut state = ConfigState::default();
        state.set_locale(Locale::PtBr);
        state.toggle_locale();
        assert_eq!(state.config.locale, Locale::EnUs);
        state.toggle_locale();
        assert_eq!(state.config.locale, Locale::PtBr);
    }

    #[test]
    fn test_save_writes_toggled_locale() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        let mut state = ConfigState::new(AppConfig::default(), Some(path.clone()));
        state.set_locale(Locale::PtBr);
        state.toggle_locale();
        state.save().expect("save");

        let loaded = config_store::load_config(&path).expect("load");
        assert_eq!(loaded.locale, Locale::EnUs);
    }

    #[test]
    fn test_save_without_path_is_noop() {
        assert!(ConfigState::default().save().is_ok());
    }
}
