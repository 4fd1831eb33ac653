use std::fmt;
use thiserror::Error;

/// Closed set of resolution failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionErrorCode {
    UnsupportedDomain,
    UnsupportedNetwork,
    UnregisteredDomain,
    UnspecifiedCurrency,
    RecordNotFound,
}

impl ResolutionErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnsupportedDomain => "UnsupportedDomain",
            Self::UnsupportedNetwork => "UnsupportedNetwork",
            Self::UnregisteredDomain => "UnregisteredDomain",
            Self::UnspecifiedCurrency => "UnspecifiedCurrency",
            Self::RecordNotFound => "RecordNotFound",
        }
    }
}

impl fmt::Display for ResolutionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("Domain {domain} is not supported")]
    UnsupportedDomain { domain: String },

    #[error("Domain {domain} is not supported by the configured {service} network")]
    UnsupportedNetwork { domain: String, service: String },

    #[error("Domain {domain} is not registered")]
    UnregisteredDomain { domain: String },

    #[error("Currency ticker {currency_ticker:?} is missing or unrecognized for domain {domain}")]
    UnspecifiedCurrency {
        domain: String,
        currency_ticker: String,
    },

    #[error("No {record_name} record found for domain {domain}")]
    RecordNotFound { domain: String, record_name: String },
}

impl ResolutionError {
    pub fn unsupported_domain(domain: impl Into<String>) -> Self {
        Self::UnsupportedDomain {
            domain: domain.into(),
        }
    }

    pub fn unsupported_network(domain: impl Into<String>, service: impl Into<String>) -> Self {
        Self::UnsupportedNetwork {
            domain: domain.into(),
            service: service.into(),
        }
    }

    pub fn unregistered_domain(domain: impl Into<String>) -> Self {
        Self::UnregisteredDomain {
            domain: domain.into(),
        }
    }

    pub fn unspecified_currency(domain: impl Into<String>, ticker: impl Into<String>) -> Self {
        Self::UnspecifiedCurrency {
            domain: domain.into(),
            currency_ticker: ticker.into(),
        }
    }

    pub fn record_not_found(domain: impl Into<String>, record_name: impl Into<String>) -> Self {
        Self::RecordNotFound {
            domain: domain.into(),
            record_name: record_name.into(),
        }
    }

    pub fn code(&self) -> ResolutionErrorCode {
        match self {
            Self::UnsupportedDomain { .. } => ResolutionErrorCode::UnsupportedDomain,
            Self::UnsupportedNetwork { .. } => ResolutionErrorCode::UnsupportedNetwork,
            Self::UnregisteredDomain { .. } => ResolutionErrorCode::UnregisteredDomain,
            Self::UnspecifiedCurrency { .. } => ResolutionErrorCode::UnspecifiedCurrency,
            Self::RecordNotFound { .. } => ResolutionErrorCode::RecordNotFound,
        }
    }

    pub fn domain(&self) -> &str {
        match self {
            Self::UnsupportedDomain { domain }
            | Self::UnsupportedNetwork { domain, .. }
            | Self::UnregisteredDomain { domain }
            | Self::UnspecifiedCurrency { domain, .. }
            | Self::RecordNotFound { domain, .. } => domain,
        }
    }
}

/// Error returned by every backend and dispatcher operation.
///
/// Only the `Resolution` variant is subject to the non-throwing
/// downgrade of `Resolution::address`; everything else propagates.
#[derive(Error, Debug, Clone)]
pub enum NamingError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("{service} transport error: {message}")]
    Transport { service: String, message: String },

    #[error("{service} returned an invalid response: {message}")]
    InvalidResponse { service: String, message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl NamingError {
    pub fn transport(service: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Transport {
            service: service.into(),
            message: message.to_string(),
        }
    }

    pub fn invalid_response(service: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::InvalidResponse {
            service: service.into(),
            message: message.to_string(),
        }
    }

    pub fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolution(_))
    }

    pub fn as_resolution(&self) -> Option<&ResolutionError> {
        match self {
            Self::Resolution(e) => Some(e),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<ResolutionErrorCode> {
        self.as_resolution().map(ResolutionError::code)
    }
}
