// src/core/config.rs
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Serialize, Deserialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("No config directory available on this platform")]
    NoConfigDir,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Color theme preference, stored as "light" / "dark" / "system".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::System
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
            Theme::System => write!(f, "system"),
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(format!(
                "unknown theme '{}' (expected light, dark or system)",
                other
            )),
        }
    }
}

// Configuration for the generator toolkit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("keyport").join("config.json"))
    }

    /// Load the stored config; a missing or unreadable file falls back to
    /// defaults rather than failing.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                log::debug!("Using default config: {}", e);
                Self::default()
            }
        }
    }

    fn try_load() -> Result<Self> {
        let content = fs::read_to_string(Self::path()?)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_defaults_to_system() {
        assert_eq!(Config::default().theme, Theme::System);
    }

    #[test]
    fn theme_round_trips_through_strings() {
        for theme in [Theme::Light, Theme::Dark, Theme::System] {
            let parsed: Theme = theme.to_string().parse().unwrap();
            assert_eq!(parsed, theme);
        }
        assert!("solarized".parse::<Theme>().is_err());
    }

    #[test]
    fn config_serializes_theme_as_lowercase_string() {
        let config = Config { theme: Theme::Dark };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, "{\"theme\":\"dark\"}");
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.theme, Theme::System);
    }
}
