use nameroute_domain::NamingError;
use serde_json::json;
use std::time::Duration;

use super::abi::{self, AbiError, Token};
use super::json_rpc::JsonRpcClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    Returned(Vec<u8>),
    /// Execution reverted, or the target returned no data at all.
    Reverted,
}

/// `eth_call` against the latest block.
pub struct EthereumRpc {
    rpc: JsonRpcClient,
    service: &'static str,
}

impl EthereumRpc {
    pub fn new(url: &str, service: &'static str, timeout: Duration) -> Result<Self, NamingError> {
        Ok(Self {
            rpc: JsonRpcClient::new(url, service, timeout)?,
            service,
        })
    }

    pub async fn call(
        &self,
        to: &str,
        signature: &str,
        tokens: &[Token<'_>],
    ) -> Result<CallOutcome, NamingError> {
        let data = format!("0x{}", hex::encode(abi::encode_call(signature, tokens)));
        let params = json!([{ "to": to, "data": data }, "latest"]);

        let result = match self.rpc.call::<_, String>("eth_call", params).await? {
            Ok(result) => result,
            Err(error) if error.is_revert() => return Ok(CallOutcome::Reverted),
            Err(error) => {
                return Err(NamingError::invalid_response(
                    self.service,
                    format!("eth_call {signature} failed: {} ({})", error.message, error.code),
                ))
            }
        };

        let bytes = hex::decode(result.trim_start_matches("0x"))
            .map_err(|e| NamingError::invalid_response(self.service, e))?;
        if bytes.is_empty() {
            return Ok(CallOutcome::Reverted);
        }
        Ok(CallOutcome::Returned(bytes))
    }

    /// Calls and decodes, mapping a revert to `None`.
    pub async fn call_decoded<T>(
        &self,
        to: &str,
        signature: &str,
        tokens: &[Token<'_>],
        decode: fn(&[u8]) -> Result<T, AbiError>,
    ) -> Result<Option<T>, NamingError> {
        match self.call(to, signature, tokens).await? {
            CallOutcome::Returned(bytes) => decode(&bytes)
                .map(Some)
                .map_err(|e| NamingError::invalid_response(self.service, format!("{signature}: {e}"))),
            CallOutcome::Reverted => Ok(None),
        }
    }

    /// Non-zero address returned by `signature`, if any.
    pub async fn call_address(
        &self,
        to: &str,
        signature: &str,
        tokens: &[Token<'_>],
    ) -> Result<Option<String>, NamingError> {
        let address = self
            .call_decoded(to, signature, tokens, abi::decode_address)
            .await?;
        Ok(address.filter(|a| !abi::is_zero_address(a)))
    }

    /// Non-empty string returned by `signature`, if any.
    pub async fn call_string(
        &self,
        to: &str,
        signature: &str,
        tokens: &[Token<'_>],
    ) -> Result<Option<String>, NamingError> {
        let value = self
            .call_decoded(to, signature, tokens, abi::decode_string)
            .await?;
        Ok(value.filter(|v| !v.is_empty()))
    }
}
