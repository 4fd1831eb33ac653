use async_trait::async_trait;
use nameroute_application::ports::NamingService;
use nameroute_domain::{
    BackendKind, CurrencyTicker, Endpoint, NamingError, NamingServiceKind, RecordKey,
    ResolutionError, ResolutionMeta, ResolutionResponse,
};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::debug;

use crate::naming::namehash::zns_namehash;
use crate::naming::transport::abi::is_zero_address;
use crate::naming::transport::ZilliqaRpc;

const SERVICE: &str = "ZNS";

const REGISTRIES: &[(&str, &str)] = &[("mainnet", "0x9611c53be6d1b32058b2747bdececed7e1216793")];

/// Owner and resolver contract stored in the registry for one namehash.
#[derive(Debug, Clone, PartialEq, Eq)]
struct RegistryRecord {
    owner: String,
    resolver: String,
}

/// Claimed domain with its resolver's records loaded.
struct ZnsDomain {
    owner: String,
    records: BTreeMap<String, String>,
}

/// Zilliqa Naming Service, read through the registry and resolver
/// contracts' state.
pub struct Zns {
    rpc: ZilliqaRpc,
    network: String,
    registry: Option<String>,
}

impl Zns {
    pub fn new(endpoint: &Endpoint, timeout: Duration) -> Result<Self, NamingError> {
        let registry = registry_for(&endpoint.network).map(str::to_string);
        Self::with_registry(endpoint, registry, timeout)
    }

    pub fn with_registry(
        endpoint: &Endpoint,
        registry: Option<String>,
        timeout: Duration,
    ) -> Result<Self, NamingError> {
        debug!(url = %endpoint.url, network = %endpoint.network, ?registry, "ZNS backend created");
        Ok(Self {
            rpc: ZilliqaRpc::new(&endpoint.url, SERVICE, timeout)?,
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

    /// Registry entry is an ADT `Record(owner, resolver)`.
    async fn registry_record(&self, domain: &str) -> Result<Option<RegistryRecord>, NamingError> {
        let registry = self.registry(domain)?;
        let node = zns_namehash(domain);

        let Some(records) = self.rpc.sub_state(registry, "records", &[node.as_str()]).await? else {
            return Ok(None);
        };

        let Some(arguments) = records
            .get(&node)
            .and_then(|entry| entry.get("arguments"))
            .and_then(Value::as_array)
        else {
            return Ok(None);
        };

        match arguments.as_slice() {
            [Value::String(owner), Value::String(resolver), ..] => {
                if is_zero_address(owner) {
                    return Ok(None);
                }
                Ok(Some(RegistryRecord {
                    owner: owner.to_ascii_lowercase(),
                    resolver: resolver.to_ascii_lowercase(),
                }))
            }
            _ => Err(NamingError::invalid_response(
                SERVICE,
                format!("unexpected registry record for {domain}: {arguments:?}"),
            )),
        }
    }

    async fn resolver_records(&self, resolver: &str) -> Result<BTreeMap<String, String>, NamingError> {
        if is_zero_address(resolver) {
            return Ok(BTreeMap::new());
        }

        let records = self.rpc.sub_state(resolver, "records", &[]).await?;
        let Some(Value::Object(map)) = records else {
            return Ok(BTreeMap::new());
        };

        Ok(map
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(v) if !v.is_empty() => Some((key, v)),
                _ => None,
            })
            .collect())
    }

    async fn load(&self, domain: &str) -> Result<Option<ZnsDomain>, NamingError> {
        let Some(record) = self.registry_record(domain).await? else {
            return Ok(None);
        };
        let records = self.resolver_records(&record.resolver).await?;
        Ok(Some(ZnsDomain {
            owner: record.owner,
            records,
        }))
    }

    async fn claimed(&self, domain: &str) -> Result<ZnsDomain, NamingError> {
        self.load(domain)
            .await?
            .ok_or_else(|| ResolutionError::unregistered_domain(domain).into())
    }
}

pub fn registry_for(network: &str) -> Option<&'static str> {
    REGISTRIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(network))
        .map(|(_, address)| *address)
}

/// `crypto.<TICKER>.address` keys become the address map.
fn addresses_from_records(records: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    records
        .iter()
        .filter_map(|(key, value)| {
            let ticker = key.strip_prefix("crypto.")?.strip_suffix(".address")?;
            (!ticker.is_empty() && !ticker.contains('.')).then(|| (ticker.to_string(), value.clone()))
        })
        .collect()
}

#[async_trait]
impl NamingService for Zns {
    fn kind(&self) -> BackendKind {
        BackendKind::Zns
    }

    fn is_supported_domain(&self, domain: &str) -> bool {
        NamingServiceKind::Zns.supports(domain)
    }

    fn is_supported_network(&self) -> bool {
        self.registry.is_some()
    }

    async fn resolve(&self, domain: &str) -> Result<Option<ResolutionResponse>, NamingError> {
        let Some(loaded) = self.load(domain).await? else {
            debug!(domain, "ZNS domain has no owner");
            return Ok(None);
        };

        Ok(Some(ResolutionResponse {
            addresses: addresses_from_records(&loaded.records),
            meta: ResolutionMeta {
                owner: Some(loaded.owner),
                service: Some(SERVICE.to_string()),
                ttl: 0,
                namehash: Some(zns_namehash(domain)),
            },
        }))
    }

    async fn address(&self, domain: &str, currency_ticker: &str) -> Result<String, NamingError> {
        let loaded = self.claimed(domain).await?;
        let ticker = CurrencyTicker::parse(domain, currency_ticker)?;
        let key = RecordKey::crypto_address(&ticker);

        loaded
            .records
            .get(&key)
            .cloned()
            .ok_or_else(|| ResolutionError::record_not_found(domain, key).into())
    }

    async fn owner(&self, domain: &str) -> Result<Option<String>, NamingError> {
        Ok(self.registry_record(domain).await?.map(|r| r.owner))
    }

    async fn record(&self, domain: &str, key: &str) -> Result<String, NamingError> {
        let loaded = self.claimed(domain).await?;
        loaded
            .records
            .get(key)
            .cloned()
            .ok_or_else(|| ResolutionError::record_not_found(domain, key).into())
    }

    fn namehash(&self, domain: &str) -> String {
        zns_namehash(domain)
    }

    fn service_name(&self, _domain: &str) -> &'static str {
        SERVICE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addresses_from_records_keeps_crypto_addresses_only() {
        let records: BTreeMap<String, String> = [
            ("crypto.ZIL.address", "zil1abc"),
            ("crypto.BTC.address", "1btc"),
            ("crypto.ETH.version", "ERC20"),
            ("ipfs.html.value", "QmHash"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let addresses = addresses_from_records(&records);

        assert_eq!(addresses.len(), 2);
        assert_eq!(addresses["ZIL"], "zil1abc");
        assert_eq!(addresses["BTC"], "1btc");
    }
}
