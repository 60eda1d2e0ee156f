//! Configuration loading from framecut.toml

use serde::Deserialize;
use std::path::Path;

use framecut_core::{is_valid_marker, DEFAULT_MARKER};

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_PATH: &str = "framecut.toml";

/// Root configuration. Every key is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    /// Pixels of transparent frame to keep
    #[serde(default)]
    pub frame: u32,
    /// Overwrite input files instead of writing marked copies
    #[serde(default, rename = "override")]
    pub overwrite: bool,
    /// Marker inserted before the extension, without the dot
    #[serde(default = "default_marker")]
    pub marker: String,
    /// Reject fully transparent images
    #[serde(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame: 0,
            overwrite: false,
            marker: default_marker(),
            strict: false,
        }
    }
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.as_ref().display(), e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        if !is_valid_marker(&config.marker) {
            return Err(ConfigError::Parse(format!(
                "marker {:?} must be non-empty and free of path separators",
                config.marker
            )));
        }
        Ok(config)
    }

    /// Load from default path (framecut.toml in current directory), if present
    pub fn load_default() -> Result<Self, ConfigError> {
        if Path::new(DEFAULT_CONFIG_PATH).is_file() {
            Self::load(DEFAULT_CONFIG_PATH)
        } else {
            Ok(Self::default())
        }
    }

    /// Explicit path if given, otherwise the default lookup
    pub fn resolve(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::load(path)?,
            None => Self::load_default()?,
        };
        log::debug!("Config: {:?}", config);
        Ok(config)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
