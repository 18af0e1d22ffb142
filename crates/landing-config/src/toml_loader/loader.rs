//! Core TOML config loading: parse a string, read a path, or fall back to defaults.

use crate::schema::LandingConfig;
use crate::validation;
use landing_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

/// Parse a config from TOML text, filling missing fields with defaults.
pub fn from_toml_str(content: &str) -> Result<LandingConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load config from a specific TOML file path.
///
/// After loading, the config is validated; if validation fails, a warning
/// is logged and the parsed config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<LandingConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config = from_toml_str(&content)?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}; using parsed config with potentially invalid values");
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `path` if given, otherwise use the built-in defaults.
///
/// Unlike [`load_from_path`], validation errors are returned to the caller.
pub fn load_or_default(path: Option<&Path>) -> Result<LandingConfig, ConfigError> {
    let config = match path {
        Some(path) => load_from_path(path)?,
        None => {
            info!("no config path given, using defaults");
            LandingConfig::default()
        }
    };
    validation::validate(&config)?;
    Ok(config)
}
