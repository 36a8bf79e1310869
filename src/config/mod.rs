//! Configuration management for the fraud detection pipeline.
//!
//! A YAML document is fetched from disk, parsed into an untyped
//! mapping, then validated field by field into the typed records the
//! feature-engineering and training stages consume. The records are
//! read-only after construction.

mod schema;
mod validate;

pub use schema::{AppConfig, ModelConfig, ValidatedConfig};
pub use validate::create_and_validate_config;

use crate::error::ConfigError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Untyped mapping produced by parsing the YAML text, before any
/// schema checks.
pub type RawConfig = serde_yaml::Value;

/// Default configuration filename, looked up by [`find_config_file`].
pub const CONFIG_FILE: &str = "config.yml";

/// Read and parse a YAML config file.
///
/// Purely syntactic: fails with [`ConfigError::FileAccess`] when the
/// path is missing or unreadable and [`ConfigError::Parse`] when the
/// text is not valid YAML, but performs no field validation.
pub fn fetch_config_from_yaml(path: &Path) -> Result<RawConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let raw = serde_yaml::from_str(&text)?;
    debug!(path = %path.display(), "parsed configuration document");
    Ok(raw)
}

/// Locate the default `config.yml`: the working directory first, then
/// the package root.
pub fn find_config_file() -> Result<PathBuf, ConfigError> {
    let local = PathBuf::from(CONFIG_FILE);
    if local.is_file() {
        return Ok(local);
    }
    let bundled = Path::new(env!("CARGO_MANIFEST_DIR")).join(CONFIG_FILE);
    if bundled.is_file() {
        return Ok(bundled);
    }
    Err(ConfigError::FileAccess {
        path: local,
        source: io::Error::new(io::ErrorKind::NotFound, "no config.yml found"),
    })
}

impl ValidatedConfig {
    /// Load and validate the default configuration file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(&find_config_file()?)
    }

    /// Load and validate configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fetch_config_from_yaml(path)?;
        let config = create_and_validate_config(&raw)?;
        info!(
            path = %path.display(),
            pipeline = %config.app_config.pipeline_name,
            "configuration loaded"
        );
        Ok(config)
    }
}
