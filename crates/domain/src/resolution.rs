use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResolutionMeta {
    /// Owner address, `None` when the domain is unclaimed.
    #[serde(default)]
    pub owner: Option<String>,

    /// Protocol label of the backend that produced the response.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,

    #[serde(default)]
    pub ttl: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namehash: Option<String>,
}

/// Full resolution result: currency ticker to address, plus ownership metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResolutionResponse {
    #[serde(default)]
    pub addresses: BTreeMap<String, String>,

    #[serde(default)]
    pub meta: ResolutionMeta,
}

impl ResolutionResponse {
    /// Canonical value for a domain that is supported but has no claim:
    /// no addresses and no owner.
    pub fn unclaimed() -> Self {
        Self::default()
    }

    pub fn is_unclaimed(&self) -> bool {
        self.addresses.is_empty() && self.meta.owner.is_none()
    }

    pub fn address(&self, ticker: &str) -> Option<&str> {
        self.addresses.get(ticker).map(String::as_str)
    }
}
