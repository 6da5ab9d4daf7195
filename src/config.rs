//! Configuration file handling for braille-art.
//!
//! Loads configuration from `<config dir>/braille-art/config.toml` or a custom path.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::ascii::{CharsetRegistry, BRAILLE_NAME};
use crate::error::RenderError;
use crate::generator::{GenerateOptions, DEFAULT_WIDTH};

/// Template written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# braille-art configuration

[render]
# Output width in characters
width = 100
# Charset: braille, default, block, standard, a name from [charsets],
# or a literal ramp ordered light to dense (black uses the last character)
charset = "braille"
# Flip which pixels count as dark (for light-on-dark display)
invert = false
# Keep braille output under 1000 bytes
steam = false

[charsets]
# Extra ramps, registered at startup
# dots = "@Oo:. "
"#;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    /// Custom ramps by name.
    #[serde(default)]
    pub charsets: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_charset")]
    pub charset: String,
    #[serde(default)]
    pub invert: bool,
    #[serde(default)]
    pub steam: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            charset: default_charset(),
            invert: false,
            steam: false,
        }
    }
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

fn default_charset() -> String {
    BRAILLE_NAME.to_string()
}

impl Config {
    /// Load configuration from a file path.
    ///
    /// With no path, the default location is used and a missing file yields
    /// the default config. An explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (default_path(), false),
        };

        if !path.exists() {
            if required {
                return Err(ConfigError::NotFound { path });
            }
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;
        let config = Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.clone(),
            source: e,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Built-in charsets plus the ramps from `[charsets]`.
    pub fn registry(&self) -> Result<CharsetRegistry, RenderError> {
        let mut registry = CharsetRegistry::new();
        for (name, chars) in &self.charsets {
            registry.register(name, chars)?;
        }
        Ok(registry)
    }

    /// Render options from the `[render]` table.
    pub fn options(&self) -> GenerateOptions {
        GenerateOptions {
            width: self.render.width,
            charset: self.render.charset.clone(),
            invert: self.render.invert,
            steam: self.render.steam,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("braille-art").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/braille-art/config.toml")
        })
}
