use serde::{Deserialize, Serialize};
use std::fmt;

/// Naming-service protocols a domain can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingServiceKind {
    Ens,
    Zns,
    Cns,
}

impl NamingServiceKind {
    /// Fixed priority order used when building direct backends.
    pub const ALL: [NamingServiceKind; 3] = [Self::Ens, Self::Zns, Self::Cns];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ens => "ENS",
            Self::Zns => "ZNS",
            Self::Cns => "CNS",
        }
    }

    pub fn suffixes(&self) -> &'static [&'static str] {
        match self {
            Self::Ens => &["eth", "luxe", "xyz"],
            Self::Zns => &["zil"],
            Self::Cns => &["crypto"],
        }
    }

    /// Syntactic eligibility: at least one non-empty label in front of a
    /// suffix owned by this protocol, and no empty labels anywhere.
    pub fn supports(&self, domain: &str) -> bool {
        let Some((name, suffix)) = domain.rsplit_once('.') else {
            return false;
        };
        if name.is_empty() || name.split('.').any(str::is_empty) {
            return false;
        }
        self.suffixes().contains(&suffix)
    }

    pub fn for_domain(domain: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.supports(domain))
    }
}

impl fmt::Display for NamingServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag carried by every backend instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    Ens,
    Zns,
    Cns,
    Proxy,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ens => "ENS",
            Self::Zns => "ZNS",
            Self::Cns => "CNS",
            Self::Proxy => "API",
        }
    }

    pub fn protocol(&self) -> Option<NamingServiceKind> {
        match self {
            Self::Ens => Some(NamingServiceKind::Ens),
            Self::Zns => Some(NamingServiceKind::Zns),
            Self::Cns => Some(NamingServiceKind::Cns),
            Self::Proxy => None,
        }
    }
}

impl From<NamingServiceKind> for BackendKind {
    fn from(kind: NamingServiceKind) -> Self {
        match kind {
            NamingServiceKind::Ens => Self::Ens,
            NamingServiceKind::Zns => Self::Zns,
            NamingServiceKind::Cns => Self::Cns,
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
