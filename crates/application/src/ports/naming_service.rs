use async_trait::async_trait;
use nameroute_domain::{BackendKind, NamingError, ResolutionResponse};

/// Capability surface every naming-service backend provides, whether it
/// queries a chain directly or proxies a centralized API.
#[async_trait]
pub trait NamingService: Send + Sync {
    fn kind(&self) -> BackendKind;

    /// Routing predicate. Must be pure and never touch the network.
    fn is_supported_domain(&self, domain: &str) -> bool;

    /// Whether the configured network can be used right now.
    fn is_supported_network(&self) -> bool;

    /// `Ok(None)` means the domain is supported but unclaimed.
    async fn resolve(&self, domain: &str) -> Result<Option<ResolutionResponse>, NamingError>;

    async fn address(&self, domain: &str, currency_ticker: &str) -> Result<String, NamingError>;

    async fn owner(&self, domain: &str) -> Result<Option<String>, NamingError>;

    async fn record(&self, domain: &str, key: &str) -> Result<String, NamingError>;

    fn namehash(&self, domain: &str) -> String;

    fn service_name(&self, domain: &str) -> &'static str;

    /// Protocol-specific reverse lookup, exposed by at most one backend.
    fn as_reverse(&self) -> Option<&dyn ReverseResolver> {
        None
    }
}

#[async_trait]
pub trait ReverseResolver: Send + Sync {
    /// Primary domain name registered for `address`, if any.
    async fn reverse(
        &self,
        address: &str,
        currency_ticker: &str,
    ) -> Result<Option<String>, NamingError>;
}
