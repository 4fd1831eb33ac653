use nameroute_domain::{NamingError, RecordKey, ResolutionError, ResolutionResponse};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::NamingService;

/// Routes each domain to the first configured backend whose suffix test
/// accepts it and normalizes the outcome.
///
/// The backend set is fixed at construction and read-only afterwards, so a
/// single instance can serve concurrent calls without locking.
pub struct Resolution {
    services: Vec<Arc<dyn NamingService>>,
}

impl Resolution {
    pub fn new(services: Vec<Arc<dyn NamingService>>) -> Self {
        debug!(
            backends = ?services.iter().map(|s| s.kind().as_str()).collect::<Vec<_>>(),
            "Resolution dispatcher created"
        );
        Self { services }
    }

    pub fn services(&self) -> &[Arc<dyn NamingService>] {
        &self.services
    }

    /// First backend in priority order accepting `domain`.
    pub fn select_or_none(&self, domain: &str) -> Option<&Arc<dyn NamingService>> {
        self.services.iter().find(|s| s.is_supported_domain(domain))
    }

    pub fn select_or_throw(&self, domain: &str) -> Result<&Arc<dyn NamingService>, ResolutionError> {
        let service = self
            .select_or_none(domain)
            .ok_or_else(|| ResolutionError::unsupported_domain(domain))?;
        debug!(domain, backend = %service.kind(), "Backend selected");
        Ok(service)
    }

    /// Full resolution. Unclaimed domains yield the unclaimed sentinel.
    #[instrument(skip(self))]
    pub async fn resolve(&self, domain: &str) -> Result<ResolutionResponse, NamingError> {
        let service = self.select_or_throw(domain)?;
        let response = service.resolve(domain).await?;
        Ok(response.unwrap_or_else(ResolutionResponse::unclaimed))
    }

    /// Non-throwing address lookup: every resolution error becomes `None`,
    /// any other error propagates unchanged.
    #[instrument(skip(self))]
    pub async fn address(
        &self,
        domain: &str,
        currency_ticker: &str,
    ) -> Result<Option<String>, NamingError> {
        match self.address_or_throw(domain, currency_ticker).await {
            Ok(address) => Ok(Some(address)),
            Err(NamingError::Resolution(e)) => {
                debug!(code = %e.code(), "Address lookup suppressed resolution error");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    #[instrument(skip(self))]
    pub async fn address_or_throw(
        &self,
        domain: &str,
        currency_ticker: &str,
    ) -> Result<String, NamingError> {
        let service = self.select_or_throw(domain)?;
        service.address(domain, currency_ticker).await
    }

    /// Owner address. Returns `None` both when no backend matches and when
    /// the matched backend reports no owner; callers cannot tell them apart.
    #[instrument(skip(self))]
    pub async fn owner(&self, domain: &str) -> Result<Option<String>, NamingError> {
        let Some(service) = self.select_or_none(domain) else {
            return Ok(None);
        };
        let owner = service.owner(domain).await?;
        Ok(owner.filter(|o| !o.is_empty()))
    }

    pub async fn ipfs_hash(&self, domain: &str) -> Result<String, NamingError> {
        self.record(domain, RecordKey::IPFS_HASH).await
    }

    pub async fn ipfs_redirect(&self, domain: &str) -> Result<String, NamingError> {
        self.record(domain, RecordKey::IPFS_REDIRECT).await
    }

    pub async fn email(&self, domain: &str) -> Result<String, NamingError> {
        self.record(domain, RecordKey::EMAIL).await
    }

    #[instrument(skip(self))]
    pub async fn record(&self, domain: &str, key: &str) -> Result<String, NamingError> {
        let service = self.select_or_throw(domain)?;
        service.record(domain, key).await
    }

    pub fn namehash(&self, domain: &str) -> Result<String, ResolutionError> {
        Ok(self.select_or_throw(domain)?.namehash(domain))
    }

    pub fn service_name(&self, domain: &str) -> Result<&'static str, ResolutionError> {
        Ok(self.select_or_throw(domain)?.service_name(domain))
    }

    pub fn is_supported_domain(&self, domain: &str) -> bool {
        self.select_or_none(domain).is_some()
    }

    pub fn is_supported_domain_in_network(&self, domain: &str) -> bool {
        self.select_or_none(domain)
            .is_some_and(|service| service.is_supported_network())
    }

    /// Reverse lookup, delegated to the one backend that implements it
    /// without suffix routing.
    #[instrument(skip(self))]
    pub async fn reverse(
        &self,
        address: &str,
        currency_ticker: &str,
    ) -> Result<Option<String>, NamingError> {
        let reverse = self
            .services
            .iter()
            .find_map(|s| s.as_reverse())
            .ok_or_else(|| {
                NamingError::Configuration(
                    "reverse lookup requires the ENS backend to be configured".to_string(),
                )
            })?;
        reverse.reverse(address, currency_ticker).await
    }
}
