//! # Configuration
//!
//! Display settings with a clear override hierarchy:
//! defaults → config file → env vars.
//!
//! Config lives at `~/.boxoffice/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BoxofficeConfig {
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub width: Option<u16>,
    pub seat_available: Option<String>,
    pub seat_reserved: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_INTERFACE_WIDTH: u16 = 80;
pub const DEFAULT_SEAT_AVAILABLE_ICON: &str = "o";
pub const DEFAULT_SEAT_RESERVED_ICON: &str = "x";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub width: u16,
    pub seat_available: String,
    pub seat_reserved: String,
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

/// Returns the path to `~/.boxoffice/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".boxoffice").join("config.toml"))
}

/// Load config from `~/.boxoffice/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `BoxofficeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<BoxofficeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(BoxofficeConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(BoxofficeConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: BoxofficeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Boxoffice Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars.

# [display]
# width = 80             # Interface width in columns
# seat_available = "o"   # Icon for a free seat in layout views
# seat_reserved = "x"    # Icon for a reserved seat in layout views
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

/// Resolve the final config by collapsing: defaults → config file → env vars.
pub fn resolve(config: &BoxofficeConfig) -> ResolvedConfig {
    // Width: env → config → default
    let width = std::env::var("BOXOFFICE_WIDTH")
        .ok()
        .and_then(|value| value.parse().ok())
        .or(config.display.width)
        .unwrap_or(DEFAULT_INTERFACE_WIDTH);

    ResolvedConfig {
        width,
        seat_available: config
            .display
            .seat_available
            .clone()
            .unwrap_or_else(|| DEFAULT_SEAT_AVAILABLE_ICON.to_string()),
        seat_reserved: config
            .display
            .seat_reserved
            .clone()
            .unwrap_or_else(|| DEFAULT_SEAT_RESERVED_ICON.to_string()),
    }
}
