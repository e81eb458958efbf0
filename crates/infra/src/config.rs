//! Configuration loader
//!
//! Loads the store endpoint from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//!
//! ## Environment Variables
//! - `SALONBOOK_ENDPOINT`: URL of the remote reservation store
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.toml` or `./salonbook.toml` (current working directory)
//! 2. `../config.toml` or `../salonbook.toml` (parent directory)

use std::path::PathBuf;

use salonbook_domain::{BookingError, Result};
use serde::Deserialize;

/// Remote store settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// URL of the reservation store endpoint (read and write).
    pub endpoint: String,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    store: StoreConfig,
}

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the endpoint
/// variable is missing, falls back to loading from a config file.
pub fn load() -> Result<StoreConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `BookingError::Config` if `SALONBOOK_ENDPOINT` is missing or
/// empty.
pub fn load_from_env() -> Result<StoreConfig> {
    let endpoint = std::env::var("SALONBOOK_ENDPOINT")
        .map_err(|_| BookingError::Config("SALONBOOK_ENDPOINT is not set".into()))?;
    if endpoint.trim().is_empty() {
        return Err(BookingError::Config("SALONBOOK_ENDPOINT is empty".into()));
    }
    Ok(StoreConfig { endpoint })
}

/// Load configuration from a TOML file
///
/// If `path` is `None`, probes the standard locations listed in the module
/// documentation.
///
/// # Errors
/// Returns `BookingError::Config` if no file is found or the file does not
/// parse as a `[store]` table with an `endpoint`.
pub fn load_from_file(path: Option<PathBuf>) -> Result<StoreConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(BookingError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            BookingError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    let contents = std::fs::read_to_string(&config_path).map_err(|err| {
        BookingError::Config(format!("Failed to read {}: {err}", config_path.display()))
    })?;
    parse_toml(&contents)
}

/// Probe the standard config file locations, returning the first that exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    const CANDIDATES: [&str; 4] =
        ["config.toml", "salonbook.toml", "../config.toml", "../salonbook.toml"];
    CANDIDATES.iter().map(PathBuf::from).find(|p| p.exists())
}

fn parse_toml(contents: &str) -> Result<StoreConfig> {
    let file: ConfigFile = toml::from_str(contents)
        .map_err(|err| BookingError::Config(format!("Invalid config file: {err}")))?;
    Ok(file.store)
}
