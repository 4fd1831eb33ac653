use serde::{Deserialize, Serialize};

use super::api::ApiConfig;
use super::blockchain::{BackendPlan, BlockchainConfig, Endpoint, ProtocolsConfig};
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use crate::naming_service::NamingServiceKind;

/// Main configuration structure for the naming-service dispatcher
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResolutionConfig {
    /// Direct blockchain backends, or `false` for the API proxy
    #[serde(default)]
    pub blockchain: BlockchainConfig,

    /// Centralized API proxy settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Per-request HTTP timeout applied by every backend
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            blockchain: BlockchainConfig::default(),
            api: ApiConfig::default(),
            request_timeout_secs: default_request_timeout_secs(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ResolutionConfig {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. nameroute.toml in current directory
    /// 3. /etc/nameroute/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::get_config_path() {
                Some(found) => Self::from_file(&found)?,
                None => Self::default(),
            },
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// API proxy configuration: `blockchain = false`.
    pub fn proxy(api_url: impl Into<String>) -> Self {
        Self {
            blockchain: BlockchainConfig::Enabled(false),
            api: ApiConfig {
                url: api_url.into(),
            },
            ..Self::default()
        }
    }

    /// Direct configuration with every protocol given explicitly.
    pub fn direct(protocols: ProtocolsConfig) -> Self {
        Self {
            blockchain: BlockchainConfig::Protocols(protocols),
            ..Self::default()
        }
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if overrides.proxy {
            self.blockchain = BlockchainConfig::Enabled(false);
        }
        if let Some(url) = overrides.api_url {
            self.api.url = url;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Resolve every default once into the concrete backend set.
    pub fn backend_plan(&self) -> BackendPlan {
        match &self.blockchain {
            BlockchainConfig::Enabled(false) => BackendPlan::Proxy {
                url: self.api.url.clone(),
            },
            BlockchainConfig::Enabled(true) => BackendPlan::Direct {
                ens: Some(Endpoint::default_for(NamingServiceKind::Ens)),
                zns: Some(Endpoint::default_for(NamingServiceKind::Zns)),
                cns: Some(Endpoint::default_for(NamingServiceKind::Cns)),
            },
            BlockchainConfig::Protocols(protocols) => BackendPlan::Direct {
                ens: protocols.ens.endpoint(NamingServiceKind::Ens),
                zns: protocols.zns.endpoint(NamingServiceKind::Zns),
                cns: protocols.cns.endpoint(NamingServiceKind::Cns),
            },
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "request_timeout_secs cannot be 0".to_string(),
            ));
        }

        match self.backend_plan() {
            BackendPlan::Proxy { url } => validate_url("api.url", &url)?,
            plan => {
                for (kind, endpoint) in plan.direct_endpoints() {
                    let field = format!("blockchain.{}", kind.as_str().to_lowercase());
                    validate_url(&format!("{field}.url"), &endpoint.url)?;
                    if endpoint.network.trim().is_empty() {
                        return Err(ConfigError::Validation(format!(
                            "{field}.network cannot be empty"
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new("nameroute.toml").exists() {
            Some("nameroute.toml".to_string())
        } else if std::path::Path::new("/etc/nameroute/config.toml").exists() {
            Some("/etc/nameroute/config.toml".to_string())
        } else {
            None
        }
    }
}

fn validate_url(field: &str, url: &str) -> Result<(), ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!(
            "{field} must be an http(s) URL, got '{url}'"
        )))
    }
}

fn default_request_timeout_secs() -> u64 {
    10
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub proxy: bool,
    pub api_url: Option<String>,
    pub log_level: Option<String>,
}
