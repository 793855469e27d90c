//! Settings structures for detector-search configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure, read from settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub search: SearchApiSettings,
    pub outgoing: OutgoingSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with environment variables (DETECTOR_SEARCH_* prefix)
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn merge_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("DETECTOR_SEARCH_DEBUG") {
            self.general.debug = val.parse().unwrap_or(false);
        }
        if let Some(val) = lookup("DETECTOR_SEARCH_ENABLED") {
            if let Ok(enabled) = val.parse() {
                self.search.enabled = enabled;
            }
        }
        if let Some(val) = lookup("DETECTOR_SEARCH_BASE_URL") {
            self.search.base_url = val;
        }
        if let Some(val) = lookup("DETECTOR_SEARCH_TIMEOUT") {
            match val.parse::<f64>() {
                Ok(timeout) if timeout.is_finite() && timeout > 0.0 => {
                    self.outgoing.request_timeout = timeout;
                }
                _ => {}
            }
        }
    }
}

/// General settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
}

/// Remote search API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchApiSettings {
    /// When false, every search call returns an absent response
    pub enabled: bool,
    /// Base address of the search API; endpoint paths are appended to it
    pub base_url: String,
}

impl Default for SearchApiSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "http://localhost:8010".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Request timeout in seconds
    pub request_timeout: f64,
    /// Idle connections kept per host
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: crate::DEFAULT_TIMEOUT as f64,
            pool_maxsize: 20,
            verify_ssl: true,
            proxies: ProxySettings::default(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert!(settings.search.enabled);
        assert!(!settings.general.debug);
        assert_eq!(settings.outgoing.request_timeout, 30.0);
        assert!(settings.outgoing.verify_ssl);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
search:
  enabled: false
  base_url: "https://search.example"
"#;
        let settings = Settings::from_yaml(yaml).unwrap();
        assert!(!settings.search.enabled);
        assert_eq!(settings.search.base_url, "https://search.example");
        assert_eq!(settings.outgoing.request_timeout, 30.0);
        assert_eq!(settings.outgoing.pool_maxsize, 20);
    }

    #[test]
    fn test_merge_vars() {
        let vars: HashMap<&str, &str> = [
            ("DETECTOR_SEARCH_ENABLED", "false"),
            ("DETECTOR_SEARCH_BASE_URL", "http://10.0.0.5:8010"),
            ("DETECTOR_SEARCH_TIMEOUT", "12.5"),
            ("DETECTOR_SEARCH_DEBUG", "true"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings.merge_vars(|key| vars.get(key).map(|v| v.to_string()));

        assert!(!settings.search.enabled);
        assert_eq!(settings.search.base_url, "http://10.0.0.5:8010");
        assert_eq!(settings.outgoing.request_timeout, 12.5);
        assert!(settings.general.debug);
    }

    #[test]
    fn test_merge_vars_ignores_unparseable_values() {
        let mut settings = Settings::default();
        settings.merge_vars(|key| match key {
            "DETECTOR_SEARCH_ENABLED" => Some("maybe".to_string()),
            "DETECTOR_SEARCH_TIMEOUT" => Some("soon".to_string()),
            _ => None,
        });

        assert!(settings.search.enabled);
        assert_eq!(settings.outgoing.request_timeout, 30.0);
    }

    #[test]
    fn test_merge_vars_rejects_non_positive_timeouts() {
        for raw in ["-1", "0", "NaN", "inf"] {
            let mut settings = Settings::default();
            settings.merge_vars(|key| {
                (key == "DETECTOR_SEARCH_TIMEOUT").then(|| raw.to_string())
            });
            assert_eq!(settings.outgoing.request_timeout, 30.0, "accepted {raw}");
        }
    }
}
