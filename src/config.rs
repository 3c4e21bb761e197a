//! User configuration loaded from `~/.config/zcalc/config.toml`.

use crate::calculator::DisplayFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("display.max_width must be at least 1")]
    ZeroWidth,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub behavior: BehaviorConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Characters shown before the readout is shortened.
    pub max_width: usize,
    /// Fraction digits in exponent notation.
    pub exponent_digits: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        let format = DisplayFormat::default();
        Self {
            max_width: format.max_width,
            exponent_digits: format.exponent_digits,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Copy the final result to the clipboard after every run.
    pub copy_result: bool,
}

impl Config {
    /// Default config file location, if a config directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => path,
            None => {
                debug!("No config directory, using defaults");
                return Ok(Self::default());
            }
        };

        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        config.validate()?;

        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parse and validate config text that did not come from a file.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.display.max_width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        Ok(())
    }

    pub fn display_format(&self) -> DisplayFormat {
        DisplayFormat {
            max_width: self.display.max_width,
            exponent_digits: self.display.exponent_digits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.display_format(), DisplayFormat::default());
        assert!(!config.behavior.copy_result);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml("[display]\nmax_width = 8\n").unwrap();
        assert_eq!(config.display.max_width, 8);
        assert_eq!(config.display.exponent_digits, 6);
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_toml(
            "[display]\nmax_width = 16\nexponent_digits = 3\n\n[behavior]\ncopy_result = true\n",
        )
        .unwrap();
        assert_eq!(
            config.display_format(),
            DisplayFormat {
                max_width: 16,
                exponent_digits: 3
            }
        );
        assert!(config.behavior.copy_result);
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            Config::from_toml("[display]\nmax_width = \"wide\"\n"),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            Config::from_toml("[display]\nmax_width = 0\n"),
            Err(ConfigError::ZeroWidth)
        ));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("zcalc-test-missing").join("config.toml");
        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("zcalc-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[behavior]\ncopy_result = true\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(config.behavior.copy_result);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
