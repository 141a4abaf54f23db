//! # Configuration
//!
//! One tunable exists: the share of the terminal given to the read panel in
//! dual mode. It lives at `~/notez/config.toml`; if the file is missing on
//! first run, a commented-out default is generated so the option is
//! discoverable. A malformed config degrades to defaults with a warning;
//! it never aborts the session.

use std::fmt;
use std::fs;
use std::path::PathBuf;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::core::paths;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NotezConfig {
    #[serde(default)]
    pub dual: DualConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DualConfig {
    pub panel_ratio: Option<f32>,
}

/// Share of the terminal height given to the read panel in dual mode.
pub const DEFAULT_PANEL_RATIO: f32 = 0.80;

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

/// Resolved, concrete values (no `Option`s).
#[derive(Debug, Clone, Copy)]
pub struct ResolvedConfig {
    pub panel_ratio: f32,
}

/// Returns the path to `~/notez/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(paths::NOTES_DIR).join("config.toml"))
}

/// Load config from `~/notez/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and returns
/// `NotezConfig::default()`. If it exists but is malformed, returns
/// `ConfigError::Parse`.
pub fn load_config() -> Result<NotezConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(NotezConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(NotezConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: NotezConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# noteZ Configuration
# All settings are optional — defaults are used for anything not specified.

# [dual]
# panel_ratio = 0.80    # Share of the terminal height given to the read panel
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

/// Collapse the sparse config into concrete values.
pub fn resolve(config: &NotezConfig) -> ResolvedConfig {
    ResolvedConfig {
        panel_ratio: config.dual.panel_ratio.unwrap_or(DEFAULT_PANEL_RATIO),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_resolves_to_default_ratio() {
        let resolved = resolve(&NotezConfig::default());
        assert_eq!(resolved.panel_ratio, DEFAULT_PANEL_RATIO);
    }

    #[test]
    fn test_config_value_overrides_default() {
        let config = NotezConfig {
            dual: DualConfig {
                panel_ratio: Some(0.5),
            },
        };
        assert_eq!(resolve(&config).panel_ratio, 0.5);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: NotezConfig = toml::from_str("").unwrap();
        assert!(config.dual.panel_ratio.is_none());

        let config: NotezConfig = toml::from_str("[dual]\npanel_ratio = 0.65\n").unwrap();
        assert_eq!(config.dual.panel_ratio, Some(0.65));
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let err = toml::from_str::<NotezConfig>("[dual]\npanel_ratio = \"high\"\n");
        assert!(err.is_err());
    }
}
