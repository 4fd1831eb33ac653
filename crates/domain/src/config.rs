pub mod api;
pub mod blockchain;
pub mod errors;
pub mod logging;
pub mod root;

pub use api::{ApiConfig, DEFAULT_API_URL};
pub use blockchain::{BackendPlan, BackendSetting, BlockchainConfig, Endpoint, ProtocolsConfig};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, ResolutionConfig};
