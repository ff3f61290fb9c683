//! Client configuration.

use config::{Config, Environment, File, FileFormat};
use pontoon_error::{ConfigError, PontoonResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

const DEFAULT_CONFIG: &str = r#"
base_url = "https://api.bridge.xyz/v0"
"#;

/// Connection settings for the Bridge API.
///
/// Loaded with precedence: environment (`BRIDGE_API_KEY`, `BRIDGE_BASE_URL`)
/// over `./pontoon.toml` over bundled defaults. The API key has no default;
/// a missing key fails at load time, before any request is attempted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct BridgeConfig {
    /// API key sent as the `Api-Key` header
    api_key: String,
    /// Base URL of the Bridge API
    base_url: String,
}

impl BridgeConfig {
    /// Build a config from explicit values, mainly for tests.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Load configuration with precedence: environment > `./pontoon.toml` >
    /// bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when no API key is configured or the config
    /// file fails to parse.
    pub fn load() -> PontoonResult<Self> {
        debug!("Loading Bridge client configuration");

        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::with_name("pontoon").required(false))
            .add_source(Environment::with_prefix("BRIDGE"))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to read configuration: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {e}")).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_values_round_trip() {
        let config = BridgeConfig::new("sk-test", "https://api.example.test/v0");
        assert_eq!(config.api_key(), "sk-test");
        assert_eq!(config.base_url(), "https://api.example.test/v0");
    }

    #[test]
    fn bundled_default_points_at_production() {
        assert!(DEFAULT_CONFIG.contains("https://api.bridge.xyz/v0"));
    }
}
