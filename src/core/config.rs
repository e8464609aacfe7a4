//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.sift/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SiftConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub visible_rows: Option<usize>,
    pub initial_query: Option<String>,
    pub log_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_VISIBLE_ROWS: usize = 20;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub visible_rows: usize,
    pub initial_query: String,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.sift/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".sift").join("config.toml"))
}

/// Load config from `~/.sift/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SiftConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SiftConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SiftConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SiftConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: SiftConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Sift Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# visible_rows = 20                  # Result rows below the query line
# initial_query = ""                 # Seed the query before the first render
# log_file = "sift.log"              # Debug log destination (omit to disable)
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// CLI arguments are `None` when the flag was not given.
pub fn resolve(
    config: &SiftConfig,
    cli_rows: Option<usize>,
    cli_search: Option<&str>,
    cli_log_file: Option<&str>,
) -> ResolvedConfig {
    // Visible rows: CLI → env → config → default; a selector needs at
    // least one result row
    let visible_rows = cli_rows
        .or_else(|| std::env::var("SIFT_ROWS").ok().and_then(|v| v.parse().ok()))
        .or(config.general.visible_rows)
        .unwrap_or(DEFAULT_VISIBLE_ROWS)
        .max(1);

    // Initial query: CLI → config → empty
    let initial_query = cli_search
        .map(|s| s.to_string())
        .or_else(|| config.general.initial_query.clone())
        .unwrap_or_default();

    // Log file: CLI → env → config → disabled
    let log_file = cli_log_file
        .map(|s| s.to_string())
        .or_else(|| std::env::var("SIFT_LOG").ok())
        .or_else(|| config.general.log_file.clone())
        .map(PathBuf::from);

    ResolvedConfig {
        visible_rows,
        initial_query,
        log_file,
    }
}
