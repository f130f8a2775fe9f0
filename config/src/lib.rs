//! Configuration loading and parsing for udigit.
//!
//! The config file is optional. Its location is `$UDIGIT_CONFIG` when set, otherwise
//! `<config_dir>/udigit/config.toml`.
//!
//! ```toml
//! [map]
//! anchor = "tamil"   # a digit character or a script name
//!
//! [parse]
//! radix = 10
//! bits = 64
//! unsigned = false
//! ```

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use toml::de;
use udigit_types::{BitWidth, Radix};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "UDIGIT_CONFIG";

#[derive(Debug, Default, Deserialize)]
pub struct UdigitConfig {
    pub map: Option<MapConfig>,
    pub parse: Option<ParseConfig>,
}

/// Defaults for `udigit map`.
#[derive(Debug, Default, Deserialize)]
pub struct MapConfig {
    /// Digit character or script name selecting the target decade.
    pub anchor: Option<String>,
}

/// Defaults for `udigit parse`.
#[derive(Debug, Default, Deserialize)]
pub struct ParseConfig {
    pub radix: Option<Radix>,
    /// Bit width of the result: 0, 8, 16, 32, or 64.
    pub bits: Option<BitWidth>,
    #[serde(default)]
    pub unsigned: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl UdigitConfig {
    /// Load the config from its default location.
    ///
    /// Returns `Ok(None)` when no location can be determined or the file does not exist.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load the config from `path`. A missing file is not an error.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file");
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "Loaded config");
                Ok(Some(config))
            }
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn anchor(&self) -> Option<&str> {
        self.map.as_ref().and_then(|map| map.anchor.as_deref())
    }

    #[must_use]
    pub fn radix(&self) -> Radix {
        self.parse
            .as_ref()
            .and_then(|parse| parse.radix)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn bit_width(&self) -> BitWidth {
        self.parse
            .as_ref()
            .and_then(|parse| parse.bits)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn unsigned(&self) -> bool {
        self.parse.as_ref().is_some_and(|parse| parse.unsigned)
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("udigit").join("config.toml"))
}
