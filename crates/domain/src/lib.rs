//! Nameroute Domain Layer
pub mod config;
pub mod errors;
pub mod naming_service;
pub mod record_key;
pub mod resolution;

pub use config::{
    ApiConfig, BackendPlan, BackendSetting, BlockchainConfig, CliOverrides, ConfigError, Endpoint,
    LoggingConfig, ProtocolsConfig, ResolutionConfig, DEFAULT_API_URL,
};
pub use errors::{NamingError, ResolutionError, ResolutionErrorCode};
pub use naming_service::{BackendKind, NamingServiceKind};
pub use record_key::{CurrencyTicker, RecordKey};
pub use resolution::{ResolutionMeta, ResolutionResponse};
