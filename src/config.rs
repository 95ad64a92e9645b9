//! Configuration loading and defaults for getidle.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::OutputFormat;

/// Main configuration for getidle.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Display to open. If unset, `$DISPLAY` is used.
    pub display: Option<String>,

    /// Output format (default: seconds).
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration from the default path, or return defaults if not found.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(p) = path {
            return Self::load(p);
        }

        if let Some(default_path) = Self::default_path()
            && default_path.exists()
        {
            return Self::load(&default_path);
        }

        Ok(Self::default())
    }

    /// `<config_dir>/getidle/config.toml`, if a config dir is known.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("getidle").join("config.toml"))
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(mut self, display: Option<String>, format: Option<OutputFormat>) -> Self {
        if display.is_some() {
            self.display = display;
        }
        if let Some(f) = format {
            self.format = f;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.display.is_none());
        assert_eq!(config.format, OutputFormat::Seconds);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            display = ":1"
            format = "json"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.as_deref(), Some(":1"));
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_empty_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides() {
        let config = Config {
            display: Some(":1".to_string()),
            format: OutputFormat::Json,
        };

        let unchanged = config.clone().with_overrides(None, None);
        assert_eq!(unchanged, config);

        let overridden = config.with_overrides(Some(":2".to_string()), Some(OutputFormat::Millis));
        assert_eq!(overridden.display.as_deref(), Some(":2"));
        assert_eq!(overridden.format, OutputFormat::Millis);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "format = \"millis\"").unwrap();

        let config = Config::load_or_default(Some(file.path())).unwrap();
        assert_eq!(config.format, OutputFormat::Millis);
        assert!(config.display.is_none());
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "format = \"hours\"").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read config file"));
    }
}
