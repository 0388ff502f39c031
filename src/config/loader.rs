//! Configuration loading from disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::raw::RawConfig;
use crate::config::schema::ResolvedConfig;
use crate::config::validation::resolve;

/// Built-in document used when no config file exists.
pub const DEFAULT_CONFIG_TOML: &str = r#"# Shape editor configuration.

[window]
width = 800.0
height = 600.0
title = "Shapes"
# Valid options are 1 or 4. Defaults to 4 if omitted or invalid.
msaa_level = 4
# Optional, defaults to 1.0.
ui_scale_factor = 1.0

[shape]
width = 120.0
height = 70.0
corner_radius = 10.0
base_color_rgb = [100, 200, 255]
# Optional, defaults to yellow.
selection_outline_color_rgb = [255, 255, 0]
# Optional, defaults to 2.0.
selection_outline_width = 2.0

# All optional.
[colors]
connector_line_rgb = [255, 255, 255]
selected_connector_line_rgb = [255, 255, 0]
# Drawn with a fixed alpha of 0.7 by the renderer.
preview_connector_line_rgb = [200, 200, 200]
default_port_rgb = [255, 255, 255]
selected_connector_port_rgb = [255, 165, 0]
active_new_line_start_port_rgb = [0, 255, 0]
"#;

/// Error type for configuration loading and resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Document is not valid TOML.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A required key is absent.
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// A required key holds the wrong type.
    #[error("Invalid type for {path}: found {found}")]
    InvalidType { path: String, found: &'static str },

    /// A required color is not three integers in 0-255.
    #[error("Invalid color for {path}: {reason}")]
    InvalidColor { path: String, reason: String },

    /// A required value has the right type but violates its range.
    #[error("Invalid value for {path}: {reason}")]
    InvalidValue { path: String, reason: String },
}

impl ConfigError {
    /// Key path of the offending field, for resolution errors.
    pub fn path(&self) -> Option<&str> {
        match self {
            ConfigError::MissingField(path)
            | ConfigError::InvalidType { path, .. }
            | ConfigError::InvalidColor { path, .. }
            | ConfigError::InvalidValue { path, .. } => Some(path.as_str()),
            ConfigError::Io { .. } | ConfigError::Parse(_) => None,
        }
    }
}

/// Parse and resolve a TOML document held in memory.
pub fn parse_config(text: &str) -> Result<ResolvedConfig, ConfigError> {
    let raw = RawConfig::from_toml_str(text)?;
    resolve(raw)
}

/// Load and resolve configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ResolvedConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse_config(&content)?;
    tracing::info!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

/// Like [`load_config`], but a missing file yields the built-in defaults.
///
/// Any other failure (unreadable file, bad syntax, invalid required field)
/// is still returned to the caller.
pub fn load_config_or_default(path: &Path) -> Result<ResolvedConfig, ConfigError> {
    match load_config(path) {
        Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "Config file not found, using built-in defaults");
            parse_config(DEFAULT_CONFIG_TOML)
        }
        other => other,
    }
}
