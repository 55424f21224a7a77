//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{message, ConfigError, Error, Result};

use super::ControllerConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Example
///
/// ```rust,ignore
/// use coop_door::load_config;
///
/// let config = load_config("coop.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ControllerConfig> {
    let content = fs::read_to_string(path.as_ref())
        .map_err(|e| Error::Config(ConfigError::IoError(message(&e.to_string()))))?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<ControllerConfig> {
    let config: ControllerConfig = toml::from_str(content)
        .map_err(|e| Error::Config(ConfigError::ParseError(message(e.message()))))?;

    super::validation::validate_config(&config)?;

    Ok(config)
}
