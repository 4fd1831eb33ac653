use nameroute_domain::NamingError;
use std::time::Duration;

pub const USER_AGENT: &str = concat!("nameroute/", env!("CARGO_PKG_VERSION"));

/// HTTP client shared by every request of one backend instance.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, NamingError> {
    reqwest::Client::builder()
        .use_rustls_tls()
        .timeout(timeout)
        .pool_max_idle_per_host(4)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| NamingError::Configuration(format!("Failed to build HTTP client: {e}")))
}
