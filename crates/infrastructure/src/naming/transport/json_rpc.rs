use nameroute_domain::NamingError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::debug;

use super::http::build_client;

#[derive(Serialize)]
struct RpcRequest<'a, P> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: P,
}

#[derive(Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcError>,
}

/// Error object returned by the node itself, as opposed to a transport failure.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

impl RpcError {
    /// `eth_call` execution reverted (geth/infura use code 3).
    pub fn is_revert(&self) -> bool {
        self.code == 3 || self.message.to_ascii_lowercase().contains("revert")
    }
}

/// JSON-RPC 2.0 over HTTP POST.
pub struct JsonRpcClient {
    client: reqwest::Client,
    url: String,
    service: &'static str,
    next_id: AtomicU64,
}

impl JsonRpcClient {
    pub fn new(url: &str, service: &'static str, timeout: Duration) -> Result<Self, NamingError> {
        Ok(Self {
            client: build_client(timeout)?,
            url: url.to_string(),
            service,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Outer error: transport or malformed envelope. Inner error: the node
    /// answered with a JSON-RPC error object.
    pub async fn call<P, R>(&self, method: &str, params: P) -> Result<Result<R, RpcError>, NamingError>
    where
        P: Serialize + Send,
        R: DeserializeOwned,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!(service = self.service, url = %self.url, method, id, "Sending JSON-RPC request");

        let response = self
            .client
            .post(&self.url)
            .json(&RpcRequest {
                jsonrpc: "2.0",
                id,
                method,
                params,
            })
            .send()
            .await
            .map_err(|e| NamingError::transport(self.service, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NamingError::transport(
                self.service,
                format!(
                    "{} returned HTTP {}: {}",
                    self.url,
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            ));
        }

        let envelope: RpcResponse = response
            .json()
            .await
            .map_err(|e| NamingError::invalid_response(self.service, e))?;

        if let Some(error) = envelope.error {
            debug!(service = self.service, method, code = error.code, message = %error.message, "JSON-RPC error");
            return Ok(Err(error));
        }

        let result = envelope.result.unwrap_or(Value::Null);
        serde_json::from_value(result)
            .map(Ok)
            .map_err(|e| NamingError::invalid_response(self.service, e))
    }
}
