use async_trait::async_trait;
use futures::future::join_all;
use nameroute_application::ports::NamingService;
use nameroute_domain::{
    BackendKind, CurrencyTicker, Endpoint, NamingError, NamingServiceKind, RecordKey,
    ResolutionError, ResolutionMeta, ResolutionResponse,
};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

use crate::naming::namehash::{ens_namehash, ens_namehash_bytes, to_hex};
use crate::naming::transport::abi::Token;
use crate::naming::transport::EthereumRpc;

const SERVICE: &str = "CNS";

const REGISTRIES: &[(&str, &str)] =
    &[("mainnet", "0xD1E5b0FF1287aA9f9A268759062E4Ab08b9Dacbe")];

/// Tickers collected by `resolve`.
pub const RESOLVE_TICKERS: &[&str] = &[
    "BTC", "ETH", "ZIL", "LTC", "XRP", "BCH", "ADA", "EOS", "XLM", "BNB", "DOGE",
];

/// Crypto Name Service: an ERC-721 registry where the token id is the
/// domain's namehash.
pub struct Cns {
    rpc: EthereumRpc,
    network: String,
    registry: Option<String>,
}

impl Cns {
    pub fn new(endpoint: &Endpoint, timeout: Duration) -> Result<Self, NamingError> {
        let registry = registry_for(&endpoint.network).map(str::to_string);
        Self::with_registry(endpoint, registry, timeout)
    }

    pub fn with_registry(
        endpoint: &Endpoint,
        registry: Option<String>,
        timeout: Duration,
    ) -> Result<Self, NamingError> {
        debug!(url = %endpoint.url, network = %endpoint.network, ?registry, "CNS backend created");
        Ok(Self {
            rpc: EthereumRpc::new(&endpoint.url, SERVICE, timeout)?,
            network: endpoint.network.clone(),
            registry,
        })
    }

    pub fn network(&self) -> &str {
        &self.network
    }

    fn registry(&self, domain: &str) -> Result<&str, NamingError> {
        self.registry
            .as_deref()
            .ok_or_else(|| ResolutionError::unsupported_network(domain, SERVICE).into())
    }

    /// `ownerOf` reverts for tokens that were never minted.
    async fn owner_of(&self, registry: &str, token: [u8; 32]) -> Result<Option<String>, NamingError> {
        self.rpc
            .call_address(registry, "ownerOf(uint256)", &[Token::Word(token)])
            .await
    }

    async fn resolver_of(
        &self,
        registry: &str,
        token: [u8; 32],
    ) -> Result<Option<String>, NamingError> {
        self.rpc
            .call_address(registry, "resolverOf(uint256)", &[Token::Word(token)])
            .await
    }

    async fn get(
        &self,
        resolver: &str,
        key: &str,
        token: [u8; 32],
    ) -> Result<Option<String>, NamingError> {
        self.rpc
            .call_string(
                resolver,
                "get(string,uint256)",
                &[Token::String(key), Token::Word(token)],
            )
            .await
    }

    async fn claimed(&self, domain: &str) -> Result<(String, Option<String>), NamingError> {
        let registry = self.registry(domain)?;
        let token = ens_namehash_bytes(domain);
        let owner = self
            .owner_of(registry, token)
            .await?
            .ok_or_else(|| ResolutionError::unregistered_domain(domain))?;
        let resolver = self.resolver_of(registry, token).await?;
        Ok((owner, resolver))
    }
}

pub fn registry_for(network: &str) -> Option<&'static str> {
    REGISTRIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(network))
        .map(|(_, address)| *address)
}

#[async_trait]
impl NamingService for Cns {
    fn kind(&self) -> BackendKind {
        BackendKind::Cns
    }

    fn is_supported_domain(&self, domain: &str) -> bool {
        NamingServiceKind::Cns.supports(domain)
    }

    fn is_supported_network(&self) -> bool {
        self.registry.is_some()
    }

    async fn resolve(&self, domain: &str) -> Result<Option<ResolutionResponse>, NamingError> {
        let registry = self.registry(domain)?;
        let token = ens_namehash_bytes(domain);

        let Some(owner) = self.owner_of(registry, token).await? else {
            debug!(domain, "CNS domain has no owner");
            return Ok(None);
        };

        let mut addresses = BTreeMap::new();
        if let Some(resolver) = self.resolver_of(registry, token).await? {
            let lookups = RESOLVE_TICKERS.iter().map(|ticker| {
                let key = format!("crypto.{ticker}.address");
                let resolver = resolver.as_str();
                async move { (*ticker, self.get(resolver, &key, token).await) }
            });

            for (ticker, value) in join_all(lookups).await {
                if let Some(address) = value? {
                    addresses.insert(ticker.to_string(), address);
                }
            }
        }

        Ok(Some(ResolutionResponse {
            addresses,
            meta: ResolutionMeta {
                owner: Some(owner),
                service: Some(SERVICE.to_string()),
                ttl: 0,
                namehash: Some(to_hex(&token)),
            },
        }))
    }

    async fn address(&self, domain: &str, currency_ticker: &str) -> Result<String, NamingError> {
        let (_, resolver) = self.claimed(domain).await?;
        let ticker = CurrencyTicker::parse(domain, currency_ticker)?;
        let key = RecordKey::crypto_address(&ticker);
        let not_found = || ResolutionError::record_not_found(domain, key.as_str());

        let resolver = resolver.ok_or_else(not_found)?;
        let address = self
            .get(&resolver, &key, ens_namehash_bytes(domain))
            .await?
            .ok_or_else(not_found)?;
        Ok(address)
    }

    async fn owner(&self, domain: &str) -> Result<Option<String>, NamingError> {
        let registry = self.registry(domain)?;
        self.owner_of(registry, ens_namehash_bytes(domain)).await
    }

    async fn record(&self, domain: &str, key: &str) -> Result<String, NamingError> {
        let (_, resolver) = self.claimed(domain).await?;
        let not_found = || ResolutionError::record_not_found(domain, key);

        let resolver = resolver.ok_or_else(not_found)?;
        let value = self
            .get(&resolver, key, ens_namehash_bytes(domain))
            .await?
            .ok_or_else(not_found)?;
        Ok(value)
    }

    fn namehash(&self, domain: &str) -> String {
        ens_namehash(domain)
    }

    fn service_name(&self, _domain: &str) -> &'static str {
        SERVICE
    }
}
