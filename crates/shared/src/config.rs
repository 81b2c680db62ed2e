//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Exchange-rate provider configuration.
    #[serde(default)]
    pub rates: RatesConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Exchange-rate provider configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Endpoint returning the latest rates (Frankfurter-compatible).
    #[serde(default = "default_rates_api_url")]
    pub api_url: String,
    /// How long a fetched snapshot is served from cache.
    #[serde(default = "default_rates_ttl")]
    pub ttl_secs: u64,
    /// Request timeout for the rate endpoint.
    #[serde(default = "default_rates_timeout")]
    pub timeout_secs: u64,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            api_url: default_rates_api_url(),
            ttl_secs: default_rates_ttl(),
            timeout_secs: default_rates_timeout(),
        }
    }
}

fn default_rates_api_url() -> String {
    "https://api.frankfurter.dev/v1/latest".to_string()
}

fn default_rates_ttl() -> u64 {
    86_400 // 24 hours
}

fn default_rates_timeout() -> u64 {
    10
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("WARIKAN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
