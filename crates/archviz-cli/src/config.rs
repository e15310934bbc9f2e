//! Configuration file discovery for the CLI
//!
//! Diagram styling lives in an optional TOML file. This module decides which
//! one to read (the `--config` flag, `archviz/config.toml` in the working
//! directory, or the platform config directory) and deserializes it into an
//! [`AppConfig`]. A bare `archviz` invocation needs none of them.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use archviz::{ArchvizError, config::AppConfig};

/// Errors raised while locating or parsing a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for ArchvizError {
    fn from(err: ConfigError) -> Self {
        ArchvizError::Config(err.to_string())
    }
}

/// Locate and load the styling configuration.
///
/// An explicit path wins; otherwise `archviz/config.toml` in the working
/// directory is tried, then `config.toml` in the platform config directory.
/// When nothing is found the defaults apply, so a configless run stays
/// valid.
///
/// # Errors
///
/// Returns an error when an explicitly requested file is missing, or when a
/// discovered file cannot be read or parsed as TOML.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ArchvizError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("archviz/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "archviz", "archviz") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Read and deserialize a single TOML configuration file.
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, ArchvizError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}
