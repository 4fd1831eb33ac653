use async_trait::async_trait;
use nameroute_application::ports::{NamingService, ReverseResolver};
use nameroute_domain::{
    BackendKind, CurrencyTicker, Endpoint, NamingError, NamingServiceKind, RecordKey,
    ResolutionError, ResolutionMeta, ResolutionResponse,
};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

use crate::naming::namehash::{ens_namehash, ens_namehash_bytes, to_hex};
use crate::naming::transport::abi::{self, Token};
use crate::naming::transport::EthereumRpc;

const SERVICE: &str = "ENS";

/// Registry deployments by network name.
const REGISTRIES: &[(&str, &str)] = &[
    ("mainnet", "0x00000000000C2E074eC69A0dFb2997BA6C7d2e1e"),
    ("ropsten", "0x00000000000C2E074eC69A0dFb2997BA6C7d2e1e"),
    ("rinkeby", "0x00000000000C2E074eC69A0dFb2997BA6C7d2e1e"),
    ("goerli", "0x00000000000C2E074eC69A0dFb2997BA6C7d2e1e"),
];

/// Ethereum Name Service, queried directly through an Ethereum node.
pub struct Ens {
    rpc: EthereumRpc,
    network: String,
    registry: Option<String>,
}

impl Ens {
    pub fn new(endpoint: &Endpoint, timeout: Duration) -> Result<Self, NamingError> {
        let registry = registry_for(&endpoint.network).map(str::to_string);
        Self::with_registry(endpoint, registry, timeout)
    }

    /// Uses an explicit registry address regardless of network.
    pub fn with_registry(
        endpoint: &Endpoint,
        registry: Option<String>,
        timeout: Duration,
    ) -> Result<Self, NamingError> {
        debug!(url = %endpoint.url, network = %endpoint.network, ?registry, "ENS backend created");
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

    async fn owner_of(&self, registry: &str, node: [u8; 32]) -> Result<Option<String>, NamingError> {
        self.rpc
            .call_address(registry, "owner(bytes32)", &[Token::Word(node)])
            .await
    }

    async fn resolver_of(
        &self,
        registry: &str,
        node: [u8; 32],
    ) -> Result<Option<String>, NamingError> {
        self.rpc
            .call_address(registry, "resolver(bytes32)", &[Token::Word(node)])
            .await
    }

    async fn ttl_of(&self, registry: &str, node: [u8; 32]) -> Result<u64, NamingError> {
        let ttl = self
            .rpc
            .call_decoded(registry, "ttl(bytes32)", &[Token::Word(node)], abi::decode_u64)
            .await?;
        Ok(ttl.unwrap_or(0))
    }

    async fn eth_address(
        &self,
        resolver: &str,
        node: [u8; 32],
    ) -> Result<Option<String>, NamingError> {
        self.rpc
            .call_address(resolver, "addr(bytes32)", &[Token::Word(node)])
            .await
    }

    /// Owner and resolver of a claimed domain; `UnregisteredDomain` otherwise.
    async fn claimed(&self, domain: &str) -> Result<(String, Option<String>), NamingError> {
        let registry = self.registry(domain)?;
        let node = ens_namehash_bytes(domain);
        let owner = self
            .owner_of(registry, node)
            .await?
            .ok_or_else(|| ResolutionError::unregistered_domain(domain))?;
        let resolver = self.resolver_of(registry, node).await?;
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
impl NamingService for Ens {
    fn kind(&self) -> BackendKind {
        BackendKind::Ens
    }

    fn is_supported_domain(&self, domain: &str) -> bool {
        NamingServiceKind::Ens.supports(domain)
    }

    fn is_supported_network(&self) -> bool {
        self.registry.is_some()
    }

    async fn resolve(&self, domain: &str) -> Result<Option<ResolutionResponse>, NamingError> {
        let registry = self.registry(domain)?;
        let node = ens_namehash_bytes(domain);

        let Some(owner) = self.owner_of(registry, node).await? else {
            debug!(domain, "ENS domain has no owner");
            return Ok(None);
        };
        let resolver = self.resolver_of(registry, node).await?;
        let ttl = self.ttl_of(registry, node).await?;

        let mut addresses = BTreeMap::new();
        if let Some(resolver) = &resolver {
            if let Some(address) = self.eth_address(resolver, node).await? {
                addresses.insert("ETH".to_string(), address);
            }
        }

        Ok(Some(ResolutionResponse {
            addresses,
            meta: ResolutionMeta {
                owner: Some(owner),
                service: Some(SERVICE.to_string()),
                ttl,
                namehash: Some(to_hex(&node)),
            },
        }))
    }

    async fn address(&self, domain: &str, currency_ticker: &str) -> Result<String, NamingError> {
        let (_, resolver) = self.claimed(domain).await?;
        let ticker = CurrencyTicker::parse(domain, currency_ticker)?;
        let not_found = || ResolutionError::record_not_found(domain, RecordKey::crypto_address(&ticker));

        if ticker.as_str() != "ETH" {
            return Err(not_found().into());
        }
        let resolver = resolver.ok_or_else(not_found)?;
        let address = self
            .eth_address(&resolver, ens_namehash_bytes(domain))
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
            .rpc
            .call_string(
                &resolver,
                "text(bytes32,string)",
                &[Token::Word(ens_namehash_bytes(domain)), Token::String(key)],
            )
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

    fn as_reverse(&self) -> Option<&dyn ReverseResolver> {
        Some(self)
    }
}

#[async_trait]
impl ReverseResolver for Ens {
    async fn reverse(
        &self,
        address: &str,
        currency_ticker: &str,
    ) -> Result<Option<String>, NamingError> {
        let ticker = CurrencyTicker::parse(address, currency_ticker)?;
        if ticker.as_str() != "ETH" {
            return Err(ResolutionError::unspecified_currency(address, currency_ticker).into());
        }

        let reverse_name = format!(
            "{}.addr.reverse",
            address.trim_start_matches("0x").to_ascii_lowercase()
        );
        let registry = self.registry(&reverse_name)?;
        let node = ens_namehash_bytes(&reverse_name);

        let Some(resolver) = self.resolver_of(registry, node).await? else {
            return Ok(None);
        };
        self.rpc
            .call_string(&resolver, "name(bytes32)", &[Token::Word(node)])
            .await
    }
}
