//! Provider configuration, loaded from an optional `geoprobe.toml`.

use crate::error::{GeoProbeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use url::Url;

const DEFAULT_ENDPOINT: &str = "https://geo.example.com/search";
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_USER_AGENT: &str = "geoprobe";

/// Top-level configuration file shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoProbeConfig {
    pub provider: ProviderConfig,
}

/// Geocoding provider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base search endpoint; the address is appended as the `q` query parameter.
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for GeoProbeConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig {
                endpoint: DEFAULT_ENDPOINT.to_string(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
                user_agent: DEFAULT_USER_AGENT.to_string(),
            },
        }
    }
}

impl GeoProbeConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let content = std::fs::read_to_string(path_ref).map_err(GeoProbeError::Io)?;

        let config: GeoProbeConfig = toml::from_str(&content).map_err(|e| {
            GeoProbeError::invalid_config(format!(
                "Failed to parse TOML in {}: {}",
                path_ref.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration if the file exists, otherwise fall back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.provider.endpoint).map_err(|e| {
            GeoProbeError::invalid_config(format!(
                "provider.endpoint '{}' is not a valid URL: {}",
                self.provider.endpoint, e
            ))
        })?;

        if self.provider.timeout_secs == 0 {
            return Err(GeoProbeError::invalid_config(
                "provider.timeout_secs must be greater than zero",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = GeoProbeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.provider.timeout_secs, 10);
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[provider]\nendpoint = \"https://geocoder.local/api\"\ntimeout_secs = 5"
        )
        .unwrap();

        let config = GeoProbeConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.provider.endpoint, "https://geocoder.local/api");
        assert_eq!(config.provider.timeout_secs, 5);
        assert_eq!(config.provider.user_agent, "geoprobe");
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let config = GeoProbeConfig {
            provider: ProviderConfig {
                endpoint: "not a url".to_string(),
                timeout_secs: 10,
                user_agent: "geoprobe".to_string(),
            },
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = GeoProbeConfig {
            provider: ProviderConfig {
                endpoint: DEFAULT_ENDPOINT.to_string(),
                timeout_secs: 0,
                user_agent: "geoprobe".to_string(),
            },
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_when_missing() {
        let config = GeoProbeConfig::load_or_default("definitely-missing.toml").unwrap();
        assert_eq!(config, GeoProbeConfig::default());
    }
}
