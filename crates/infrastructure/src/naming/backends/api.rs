use async_trait::async_trait;
use nameroute_application::ports::NamingService;
use nameroute_domain::{
    BackendKind, CurrencyTicker, NamingError, NamingServiceKind, RecordKey, ResolutionError,
    ResolutionResponse,
};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::naming::namehash::namehash_for;
use crate::naming::transport::http::{build_client, USER_AGENT};

const SERVICE: &str = "API";

/// Header the centralized API uses to identify client libraries.
pub const DEFAULT_USER_AGENT_HEADER: &str = "DefaultUserAgent";

/// Domain as returned by the API: the resolution response plus whatever
/// record sections the API attached.
struct ApiDomain {
    response: ResolutionResponse,
    body: Value,
}

impl ApiDomain {
    fn parse(body: Value) -> Result<Self, NamingError> {
        let response: ResolutionResponse = serde_json::from_value(body.clone())
            .map_err(|e| NamingError::invalid_response(SERVICE, e))?;
        Ok(Self { response, body })
    }

    fn owner(&self) -> Option<&str> {
        self.response
            .meta
            .owner
            .as_deref()
            .filter(|owner| !owner.is_empty())
    }

    fn is_claimed(&self) -> bool {
        self.owner().is_some()
    }

    /// Flat `records` map first, then the nested section path with a
    /// trailing `value` segment dropped (`ipfs.html.value` -> `ipfs.html`).
    fn record(&self, key: &str) -> Option<String> {
        if let Some(value) = self
            .body
            .get("records")
            .and_then(|records| records.get(key))
            .and_then(Value::as_str)
        {
            return Some(value.to_string()).filter(|v| !v.is_empty());
        }

        let mut segments: Vec<&str> = key.split('.').collect();
        if segments.len() > 1 && segments.last() == Some(&"value") {
            segments.pop();
        }
        segments
            .iter()
            .try_fold(&self.body, |node, segment| node.get(*segment))
            .and_then(Value::as_str)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }
}

/// Centralized HTTP API that fronts every protocol.
pub struct Api {
    client: reqwest::Client,
    url: String,
}

impl Api {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, NamingError> {
        debug!(url, "API backend created");
        Ok(Self {
            client: build_client(timeout)?,
            url: url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch(&self, domain: &str) -> Result<ApiDomain, NamingError> {
        let url = format!("{}/{}", self.url, domain);
        debug!(url = %url, domain, "Fetching domain from API");

        let response = self
            .client
            .get(&url)
            .header(DEFAULT_USER_AGENT_HEADER, USER_AGENT)
            .send()
            .await
            .map_err(|e| NamingError::transport(SERVICE, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NamingError::transport(
                SERVICE,
                format!(
                    "{url} returned HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            ));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| NamingError::invalid_response(SERVICE, e))?;
        ApiDomain::parse(body)
    }

    async fn claimed(&self, domain: &str) -> Result<ApiDomain, NamingError> {
        let fetched = self.fetch(domain).await?;
        if !fetched.is_claimed() {
            return Err(ResolutionError::unregistered_domain(domain).into());
        }
        Ok(fetched)
    }
}

#[async_trait]
impl NamingService for Api {
    fn kind(&self) -> BackendKind {
        BackendKind::Proxy
    }

    fn is_supported_domain(&self, domain: &str) -> bool {
        NamingServiceKind::for_domain(domain).is_some()
    }

    fn is_supported_network(&self) -> bool {
        true
    }

    async fn resolve(&self, domain: &str) -> Result<Option<ResolutionResponse>, NamingError> {
        let fetched = self.fetch(domain).await?;
        if !fetched.is_claimed() {
            debug!(domain, "API reports no owner");
            return Ok(None);
        }
        Ok(Some(fetched.response))
    }

    async fn address(&self, domain: &str, currency_ticker: &str) -> Result<String, NamingError> {
        let fetched = self.claimed(domain).await?;
        let ticker = CurrencyTicker::parse(domain, currency_ticker)?;

        fetched
            .response
            .address(ticker.as_str())
            .filter(|address| !address.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                ResolutionError::record_not_found(domain, RecordKey::crypto_address(&ticker)).into()
            })
    }

    async fn owner(&self, domain: &str) -> Result<Option<String>, NamingError> {
        let fetched = self.fetch(domain).await?;
        Ok(fetched.owner().map(str::to_string))
    }

    async fn record(&self, domain: &str, key: &str) -> Result<String, NamingError> {
        let fetched = self.claimed(domain).await?;
        fetched
            .record(key)
            .ok_or_else(|| ResolutionError::record_not_found(domain, key).into())
    }

    fn namehash(&self, domain: &str) -> String {
        NamingServiceKind::for_domain(domain)
            .map(|kind| namehash_for(kind, domain))
            .unwrap_or_default()
    }

    fn service_name(&self, domain: &str) -> &'static str {
        NamingServiceKind::for_domain(domain)
            .map(|kind| kind.as_str())
            .unwrap_or(SERVICE)
    }
}
