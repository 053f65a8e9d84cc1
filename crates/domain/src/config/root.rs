use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::cache::{CacheConfig, MAX_TTL_SECS};
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::zone::ZoneConfig;

/// Main configuration structure for zonedns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listener configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Answer cache configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Authoritative zones, registered in file order
    #[serde(default)]
    pub zones: Vec<ZoneConfig>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. zonedns.toml in current directory
    /// 3. /etc/zonedns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("zonedns.toml").exists() {
            Self::from_file("zonedns.toml")?
        } else if std::path::Path::new("/etc/zonedns/config.toml").exists() {
            Self::from_file("/etc/zonedns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.no_cache {
            self.cache.enabled = false;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.bind_address.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Bind address cannot be empty".to_string(),
            ));
        }

        if self.cache.enabled && self.cache.sweep_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "Cache sweep interval must be at least 1 second".to_string(),
            ));
        }

        if self.cache.default_ttl_secs > MAX_TTL_SECS {
            return Err(ConfigError::Validation(format!(
                "Cache default TTL cannot exceed {} seconds",
                MAX_TTL_SECS
            )));
        }

        let mut origins = HashSet::new();
        for zone in &self.zones {
            let origin = zone.normalized_origin();
            if !origins.insert(origin.clone()) {
                return Err(ConfigError::Validation(format!(
                    "Zone '{}' is defined more than once",
                    origin
                )));
            }

            zone.to_records().map_err(|e| {
                ConfigError::Validation(format!("Zone '{}': {}", origin, e))
            })?;
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
    pub no_cache: bool,
}
