//! Configuration module for detector-search
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit settings file
pub const SETTINGS_PATH_ENV: &str = "DETECTOR_SEARCH_SETTINGS_PATH";

/// Where the effective settings came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsSource {
    File(PathBuf),
    Defaults,
}

impl std::fmt::Display for SettingsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// Default locations searched for a settings file, in order
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/detector-search/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("detector-search/settings.yml"));
    }
    paths
}

/// Load settings from an explicit path, the settings-path environment
/// variable, the first existing default path, or built-in defaults.
///
/// Environment overrides are applied in every case.
pub fn load(explicit: Option<&Path>) -> Result<(Settings, SettingsSource)> {
    let candidate = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var(SETTINGS_PATH_ENV).ok().map(PathBuf::from));

    if let Some(path) = candidate {
        if !path.exists() {
            anyhow::bail!("Settings file not found: {}", path.display());
        }
        let mut settings = Settings::from_file(&path)?;
        settings.merge_env();
        return Ok((settings, SettingsSource::File(path)));
    }

    for path in default_paths() {
        if path.exists() {
            let mut settings = Settings::from_file(&path)?;
            settings.merge_env();
            return Ok((settings, SettingsSource::File(path)));
        }
    }

    let mut settings = Settings::default();
    settings.merge_env();
    Ok((settings, SettingsSource::Defaults))
}
