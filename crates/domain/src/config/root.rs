use serde::{Deserialize, Serialize};

use super::doh::DohConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolvers::ResolverEntry;
use super::server::ServerConfig;
use crate::resolver::{ResolverEndpoint, ResolverRegistry};
use crate::validators::validate_url;

const LOCAL_CONFIG_PATH: &str = "dohgate.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dohgate/config.toml";

/// Main configuration structure for dohgate
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream request settings
    #[serde(default)]
    pub doh: DohConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Extra or overriding resolver endpoints
    #[serde(default)]
    pub resolvers: Vec<ResolverEntry>,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dohgate.toml in current directory
    /// 3. /etc/dohgate/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.doh.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "DoH timeout must be greater than 0".to_string(),
            ));
        }

        let registry = self.resolver_registry()?;
        if !registry.contains(&self.doh.default_resolver) {
            return Err(ConfigError::Validation(format!(
                "Default resolver '{}' is not registered (known: {})",
                self.doh.default_resolver,
                registry.names().join(", ")
            )));
        }

        Ok(())
    }

    /// Built-in resolvers with the `[[resolvers]]` entries applied on top.
    pub fn resolver_registry(&self) -> Result<ResolverRegistry, ConfigError> {
        let mut registry = ResolverRegistry::builtin();

        for entry in &self.resolvers {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "Resolver name cannot be empty".to_string(),
                ));
            }
            validate_url(&entry.url).map_err(|e| {
                ConfigError::Validation(format!("Resolver '{}': {}", entry.name, e))
            })?;
            let endpoint = ResolverEndpoint::from_url(&entry.name, &entry.url, entry.dialect)
                .map_err(ConfigError::Validation)?;
            registry.insert(endpoint);
        }

        Ok(registry)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
}
