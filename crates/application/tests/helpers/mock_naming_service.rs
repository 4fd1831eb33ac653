#![allow(dead_code)]

use async_trait::async_trait;
use nameroute_application::ports::{NamingService, ReverseResolver};
use nameroute_domain::{
    BackendKind, CurrencyTicker, NamingError, NamingServiceKind, ResolutionError,
    ResolutionMeta, ResolutionResponse,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// In-memory backend that behaves like a real one: registration check,
/// then ticker format, then value lookup.
#[derive(Clone)]
pub struct MockNamingService {
    kind: BackendKind,
    suffixes: Vec<&'static str>,
    network_supported: bool,
    reverse_enabled: bool,
    domains: Arc<RwLock<HashMap<String, ResolutionResponse>>>,
    records: Arc<RwLock<HashMap<(String, String), String>>>,
    reverse_names: Arc<RwLock<HashMap<String, String>>>,
    failures: Arc<RwLock<HashMap<String, NamingError>>>,
    calls: Arc<AtomicUsize>,
}

impl MockNamingService {
    pub fn new(kind: BackendKind) -> Self {
        let suffixes = match kind.protocol() {
            Some(protocol) => protocol.suffixes().to_vec(),
            None => NamingServiceKind::ALL
                .iter()
                .flat_map(|k| k.suffixes().iter().copied())
                .collect(),
        };

        Self {
            kind,
            suffixes,
            network_supported: true,
            reverse_enabled: false,
            domains: Arc::new(RwLock::new(HashMap::new())),
            records: Arc::new(RwLock::new(HashMap::new())),
            reverse_names: Arc::new(RwLock::new(HashMap::new())),
            failures: Arc::new(RwLock::new(HashMap::new())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_suffixes(mut self, suffixes: Vec<&'static str>) -> Self {
        self.suffixes = suffixes;
        self
    }

    pub fn with_network_supported(mut self, supported: bool) -> Self {
        self.network_supported = supported;
        self
    }

    pub fn with_reverse(mut self) -> Self {
        self.reverse_enabled = true;
        self
    }

    pub fn register(&self, domain: &str, owner: &str, addresses: &[(&str, &str)]) {
        let response = ResolutionResponse {
            addresses: addresses
                .iter()
                .map(|(t, a)| (t.to_string(), a.to_string()))
                .collect::<BTreeMap<_, _>>(),
            meta: ResolutionMeta {
                owner: Some(owner.to_string()),
                service: Some(self.kind.as_str().to_string()),
                ttl: 0,
                namehash: None,
            },
        };
        self.domains
            .write()
            .unwrap()
            .insert(domain.to_string(), response);
    }

    pub fn set_record(&self, domain: &str, key: &str, value: &str) {
        self.records
            .write()
            .unwrap()
            .insert((domain.to_string(), key.to_string()), value.to_string());
    }

    pub fn set_reverse(&self, address: &str, domain: &str) {
        self.reverse_names
            .write()
            .unwrap()
            .insert(address.to_lowercase(), domain.to_string());
    }

    pub fn fail_with(&self, domain: &str, error: NamingError) {
        self.failures
            .write()
            .unwrap()
            .insert(domain.to_string(), error);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self, domain: &str) -> Result<(), NamingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.failures.read().unwrap().get(domain) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn claimed(&self, domain: &str) -> Option<ResolutionResponse> {
        self.domains.read().unwrap().get(domain).cloned()
    }
}

#[async_trait]
impl NamingService for MockNamingService {
    fn kind(&self) -> BackendKind {
        self.kind
    }

    fn is_supported_domain(&self, domain: &str) -> bool {
        match domain.rsplit_once('.') {
            Some((name, suffix)) => !name.is_empty() && self.suffixes.contains(&suffix),
            None => false,
        }
    }

    fn is_supported_network(&self) -> bool {
        self.network_supported
    }

    async fn resolve(&self, domain: &str) -> Result<Option<ResolutionResponse>, NamingError> {
        self.enter(domain)?;
        Ok(self.claimed(domain))
    }

    async fn address(&self, domain: &str, currency_ticker: &str) -> Result<String, NamingError> {
        self.enter(domain)?;
        let response = self
            .claimed(domain)
            .ok_or_else(|| ResolutionError::unregistered_domain(domain))?;
        let ticker = CurrencyTicker::parse(domain, currency_ticker)?;
        response
            .address(ticker.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                ResolutionError::record_not_found(domain, format!("crypto.{ticker}.address"))
                    .into()
            })
    }

    async fn owner(&self, domain: &str) -> Result<Option<String>, NamingError> {
        self.enter(domain)?;
        Ok(self.claimed(domain).and_then(|r| r.meta.owner))
    }

    async fn record(&self, domain: &str, key: &str) -> Result<String, NamingError> {
        self.enter(domain)?;
        if self.claimed(domain).is_none() {
            return Err(ResolutionError::unregistered_domain(domain).into());
        }
        self.records
            .read()
            .unwrap()
            .get(&(domain.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| ResolutionError::record_not_found(domain, key).into())
    }

    fn namehash(&self, domain: &str) -> String {
        format!("0x{}:{}", self.kind.as_str().to_lowercase(), domain)
    }

    fn service_name(&self, domain: &str) -> &'static str {
        match self.kind.protocol() {
            Some(protocol) => protocol.as_str(),
            None => NamingServiceKind::for_domain(domain)
                .map(|k| k.as_str())
                .unwrap_or("API"),
        }
    }

    fn as_reverse(&self) -> Option<&dyn ReverseResolver> {
        if self.reverse_enabled {
            Some(self)
        } else {
            None
        }
    }
}

#[async_trait]
impl ReverseResolver for MockNamingService {
    async fn reverse(
        &self,
        address: &str,
        currency_ticker: &str,
    ) -> Result<Option<String>, NamingError> {
        if currency_ticker != "ETH" {
            return Err(ResolutionError::unspecified_currency(address, currency_ticker).into());
        }
        Ok(self
            .reverse_names
            .read()
            .unwrap()
            .get(&address.to_lowercase())
            .cloned())
    }
}
