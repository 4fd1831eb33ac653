use serde::{Deserialize, Serialize};

use crate::naming_service::NamingServiceKind;

/// Concrete node endpoint for a direct backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Endpoint {
    pub url: String,

    #[serde(default = "default_network")]
    pub network: String,
}

impl Endpoint {
    pub fn new(url: impl Into<String>, network: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            network: network.into(),
        }
    }

    pub fn default_for(kind: NamingServiceKind) -> Self {
        match kind {
            NamingServiceKind::Ens => Self::new("https://mainnet.infura.io", "mainnet"),
            NamingServiceKind::Zns => Self::new("https://api.zilliqa.com", "mainnet"),
            NamingServiceKind::Cns => Self::new("https://mainnet.infura.io", "mainnet"),
        }
    }
}

/// Per-protocol setting: `true` for defaults, `false` to disable, or an
/// explicit endpoint. Absent means enabled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum BackendSetting {
    Enabled(bool),
    Custom(Endpoint),
}

impl Default for BackendSetting {
    fn default() -> Self {
        Self::Enabled(true)
    }
}

impl BackendSetting {
    pub fn endpoint(&self, kind: NamingServiceKind) -> Option<Endpoint> {
        match self {
            Self::Enabled(true) => Some(Endpoint::default_for(kind)),
            Self::Enabled(false) => None,
            Self::Custom(endpoint) => Some(endpoint.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProtocolsConfig {
    #[serde(default)]
    pub ens: BackendSetting,

    #[serde(default)]
    pub zns: BackendSetting,

    #[serde(default)]
    pub cns: BackendSetting,
}

impl ProtocolsConfig {
    pub fn setting(&self, kind: NamingServiceKind) -> &BackendSetting {
        match kind {
            NamingServiceKind::Ens => &self.ens,
            NamingServiceKind::Zns => &self.zns,
            NamingServiceKind::Cns => &self.cns,
        }
    }
}

/// `true` enables every direct backend with defaults, `false` switches to
/// the API proxy, a table configures each protocol.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum BlockchainConfig {
    Enabled(bool),
    Protocols(ProtocolsConfig),
}

impl Default for BlockchainConfig {
    fn default() -> Self {
        Self::Enabled(true)
    }
}

/// Backend set after every default has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendPlan {
    Direct {
        ens: Option<Endpoint>,
        zns: Option<Endpoint>,
        cns: Option<Endpoint>,
    },
    Proxy {
        url: String,
    },
}

impl BackendPlan {
    pub fn is_proxy(&self) -> bool {
        matches!(self, Self::Proxy { .. })
    }

    /// Enabled direct endpoints in priority order.
    pub fn direct_endpoints(&self) -> Vec<(NamingServiceKind, Endpoint)> {
        match self {
            Self::Direct { ens, zns, cns } => [
                (NamingServiceKind::Ens, ens),
                (NamingServiceKind::Zns, zns),
                (NamingServiceKind::Cns, cns),
            ]
            .into_iter()
            .filter_map(|(kind, endpoint)| endpoint.clone().map(|e| (kind, e)))
            .collect(),
            Self::Proxy { .. } => Vec::new(),
        }
    }
}

fn default_network() -> String {
    "mainnet".to_string()
}
