use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::model::Thresholds;

/// City offered when nothing is configured yet.
pub const FALLBACK_CITY: &str = "Sydney";

fn default_cities() -> Vec<String> {
    ["Sydney", "New York", "London", "Beijing"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_city = "London"
/// cities = ["Sydney", "New York", "London", "Beijing"]
///
/// [thresholds]
/// sunny_max_temp_c = 25.0
/// rainy_min_temp_c = 15.0
/// rainy_humidity_pct = 80.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// OpenWeather API key.
    pub api_key: Option<String>,

    /// City the dashboard opens with.
    pub default_city: Option<String>,

    /// Cities offered in the selector.
    #[serde(default = "default_cities")]
    pub cities: Vec<String>,

    /// Classifier thresholds.
    #[serde(default)]
    pub thresholds: Thresholds,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            default_city: None,
            cities: default_cities(),
            thresholds: Thresholds::default(),
        }
    }
}

impl Config {
    /// The configured API key, or a hint on how to set one.
    pub fn api_key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            anyhow!(
                "No OpenWeather API key configured.\n\
                 Hint: run `weatherdash configure` and enter your API key."
            )
        })
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// The city a refresh targets when the user has not picked one: the
    /// configured default, else the first preset, else the fallback.
    pub fn default_city(&self) -> &str {
        self.default_city
            .as_deref()
            .or_else(|| self.cities.first().map(String::as_str))
            .unwrap_or(FALLBACK_CITY)
    }

    pub fn set_default_city(&mut self, city: String) {
        self.default_city = Some(city);
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weatherdash", "weatherdash")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_api_key_errors_with_hint() {
        let cfg = Config::default();
        let err = cfg.api_key().unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("No OpenWeather API key configured"));
        assert!(msg.contains("Hint: run `weatherdash configure`"));
    }

    #[test]
    fn set_and_read_api_key() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());
        assert_eq!(cfg.api_key().expect("key must exist"), "KEY");
    }

    #[test]
    fn default_city_falls_back_to_first_preset() {
        let cfg = Config::default();
        assert_eq!(cfg.default_city(), "Sydney");

        let mut cfg = cfg;
        cfg.set_default_city("London".to_string());
        assert_eq!(cfg.default_city(), "London");
    }

    #[test]
    fn preset_cities_match_the_selector_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.cities, ["Sydney", "New York", "London", "Beijing"]);
    }

    #[test]
    fn toml_round_trip() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());
        cfg.set_default_city("Beijing".to_string());
        cfg.thresholds.sunny_max_temp_c = 28.0;

        let text = toml::to_string_pretty(&cfg).expect("serializes");
        let back: Config = toml::from_str(&text).expect("parses");

        assert_eq!(back.api_key.as_deref(), Some("KEY"));
        assert_eq!(back.default_city(), "Beijing");
        assert_eq!(back.thresholds.sunny_max_temp_c, 28.0);
        assert_eq!(back.thresholds.rainy_humidity_pct, 80.0);
    }

    #[test]
    fn sparse_toml_gets_defaults() {
        let back: Config = toml::from_str("api_key = \"KEY\"").expect("parses");
        assert_eq!(back.cities.len(), 4);
        assert_eq!(back.thresholds, Thresholds::default());
    }
}
