use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::input::DEFAULT_SWIPE_THRESHOLD;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "pitchdeck";

pub const VALID_KEYS: &str =
    "defaults.theme, defaults.animations, defaults.start_slide, input.swipe_threshold";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<InputConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Staggered slide entrance; `false` swaps in a no-op animator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animations: Option<bool>,

    /// 1-based slide to open on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_slide: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_threshold: Option<f32>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `pitchdeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("Using default config: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# pitchdeck configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn theme(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.theme.as_deref())
    }

    pub fn animations_enabled(&self) -> bool {
        self.defaults
            .as_ref()
            .and_then(|d| d.animations)
            .unwrap_or(true)
    }

    pub fn start_slide(&self) -> Option<usize> {
        self.defaults.as_ref().and_then(|d| d.start_slide)
    }

    pub fn swipe_threshold(&self) -> f32 {
        self.input
            .as_ref()
            .and_then(|i| i.swipe_threshold)
            .unwrap_or(DEFAULT_SWIPE_THRESHOLD)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .theme = Some(value.to_string());
            }
            "defaults.animations" => {
                let enabled = match value {
                    "on" | "true" => true,
                    "off" | "false" => false,
                    _ => anyhow::bail!("Invalid animations value: {value}. Must be 'on' or 'off'."),
                };
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .animations = Some(enabled);
            }
            "defaults.start_slide" => {
                let slide = match value.parse::<usize>() {
                    Ok(n) if n >= 1 => n,
                    _ => anyhow::bail!(
                        "Invalid start_slide: {value}. Must be a slide number starting at 1."
                    ),
                };
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .start_slide = Some(slide);
            }
            "input.swipe_threshold" => {
                let threshold = match value.parse::<f32>() {
                    Ok(t) if t.is_finite() && t > 0.0 => t,
                    _ => anyhow::bail!(
                        "Invalid swipe_threshold: {value}. Must be a positive number."
                    ),
                };
                self.input
                    .get_or_insert_with(InputConfig::default)
                    .swipe_threshold = Some(threshold);
            }
            _ => anyhow::bail!("Unknown config key: {key}. Valid keys: {VALID_KEYS}"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.animations_enabled());
        assert_eq!(config.swipe_threshold(), 50.0);
        assert_eq!(config.start_slide(), None);
        assert_eq!(config.theme(), None);
    }

    #[test]
    fn test_set_valid_values() {
        let mut config = Config::default();
        config.set("defaults.theme", "dark").unwrap();
        config.set("defaults.animations", "off").unwrap();
        config.set("defaults.start_slide", "3").unwrap();
        config.set("input.swipe_threshold", "80").unwrap();
        assert_eq!(config.theme(), Some("dark"));
        assert!(!config.animations_enabled());
        assert_eq!(config.start_slide(), Some(3));
        assert_eq!(config.swipe_threshold(), 80.0);
    }

    #[test]
    fn test_set_rejects_invalid() {
        let mut config = Config::default();
        assert!(config.set("defaults.theme", "neon").is_err());
        assert!(config.set("defaults.animations", "maybe").is_err());
        assert!(config.set("defaults.start_slide", "0").is_err());
        assert!(config.set("input.swipe_threshold", "-5").is_err());
        assert!(config.set("input.swipe_threshold", "NaN").is_err());
        let err = config.set("defaults.transition", "fade").unwrap_err();
        assert!(err.to_string().contains("Unknown config key"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(FILENAME);
        let mut config = Config::default();
        config.set("defaults.theme", "light").unwrap();
        config.set("input.swipe_threshold", "64").unwrap();
        config.save_to(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# pitchdeck configuration"));
        assert!(!written.contains("animations"));

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join(FILENAME)).unwrap_err();
        assert!(err.to_string().contains("No config found"));
    }
}
