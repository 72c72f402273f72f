// src/config.rs

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const SETTINGS_FILE: &str = "bakery.yaml";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Ajustes del juego. Todos los campos tienen valor por defecto, el fichero es opcional.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub model: String,
    pub api_base: String,
    pub api_key: Option<String>,
    pub categories_file: PathBuf,
    pub score_file: PathBuf,
    pub max_attempts: u32,
    pub retry_delay_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: None,
            categories_file: PathBuf::from("quiz_categories.json"),
            score_file: PathBuf::from("quiz_score.json"),
            max_attempts: 3,
            retry_delay_secs: 2,
            request_timeout_secs: 60,
        }
    }
}

impl GameConfig {
    /// Lee `bakery.yaml` si existe y aplica las variables de entorno encima.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(Path::new(SETTINGS_FILE))?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("{} not found, using default settings", path.display());
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty("GEMINI_API_KEY") {
            self.api_key = Some(key);
        }
        if let Some(model) = non_empty("BAKERY_MODEL") {
            self.model = model;
        }
        if let Some(path) = non_empty("BAKERY_CATEGORIES") {
            self.categories_file = PathBuf::from(path);
        }
        if let Some(path) = non_empty("BAKERY_SCORE_FILE") {
            self.score_file = PathBuf::from(path);
        }
    }

    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = GameConfig::from_yaml("model: gemini-1.5-pro\nmax_attempts: 5\n").unwrap();
        assert_eq!(config.model, "gemini-1.5-pro");
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.retry_delay_secs, 2);
        assert_eq!(config.score_file, PathBuf::from("quiz_score.json"));
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(GameConfig::from_yaml("  \n").unwrap(), GameConfig::default());
    }

    #[test]
    fn environment_overrides_file_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            ("GEMINI_API_KEY", "secret"),
            ("BAKERY_SCORE_FILE", "/tmp/score.json"),
            ("BAKERY_MODEL", "  "),
        ]);
        let mut config = GameConfig::default();
        config.apply_overrides(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.require_api_key().unwrap(), "secret");
        assert_eq!(config.score_file, PathBuf::from("/tmp/score.json"));
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn missing_api_key_is_an_error() {
        let config = GameConfig::default();
        assert!(matches!(config.require_api_key(), Err(ConfigError::MissingApiKey)));
    }
}
