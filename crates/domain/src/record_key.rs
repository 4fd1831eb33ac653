use crate::errors::ResolutionError;
use std::fmt;

/// Dotted path naming a structured sub-value of a domain's records.
///
/// Opaque to the dispatcher; backends interpret it.
pub struct RecordKey;

impl RecordKey {
    pub const IPFS_HASH: &'static str = "ipfs.html.value";
    pub const IPFS_REDIRECT: &'static str = "ipfs.redirect_domain.value";
    pub const EMAIL: &'static str = "whois.email.value";

    pub fn crypto_address(ticker: &CurrencyTicker) -> String {
        format!("crypto.{}.address", ticker.as_str())
    }
}

const MAX_TICKER_LEN: usize = 10;

/// Validated, upper-cased currency ticker (`BTC`, `ETH`, `ZIL`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurrencyTicker(String);

impl CurrencyTicker {
    /// Fails with `UnspecifiedCurrency` unless the ticker is 1 to 10 ASCII
    /// alphanumerics after trimming.
    pub fn parse(domain: &str, raw: &str) -> Result<Self, ResolutionError> {
        let trimmed = raw.trim();
        let valid = !trimmed.is_empty()
            && trimmed.len() <= MAX_TICKER_LEN
            && trimmed.chars().all(|c| c.is_ascii_alphanumeric());

        if !valid {
            return Err(ResolutionError::unspecified_currency(domain, raw));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyTicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
