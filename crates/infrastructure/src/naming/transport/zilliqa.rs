use nameroute_domain::NamingError;
use serde_json::{json, Value};
use std::time::Duration;

use super::json_rpc::JsonRpcClient;

/// Zilliqa JSON-RPC, limited to reading smart contract state.
pub struct ZilliqaRpc {
    rpc: JsonRpcClient,
    service: &'static str,
}

impl ZilliqaRpc {
    pub fn new(url: &str, service: &'static str, timeout: Duration) -> Result<Self, NamingError> {
        Ok(Self {
            rpc: JsonRpcClient::new(url, service, timeout)?,
            service,
        })
    }

    /// `GetSmartContractSubState` for `field`, optionally narrowed to map
    /// `indices`. Returns the value stored under `field`, `None` when the
    /// contract holds nothing there.
    pub async fn sub_state(
        &self,
        contract: &str,
        field: &str,
        indices: &[&str],
    ) -> Result<Option<Value>, NamingError> {
        let address = contract.trim_start_matches("0x").to_ascii_lowercase();
        let params = json!([address, field, indices]);

        let state = match self
            .rpc
            .call::<_, Option<Value>>("GetSmartContractSubState", params)
            .await?
        {
            Ok(state) => state,
            Err(error) => {
                return Err(NamingError::invalid_response(
                    self.service,
                    format!(
                        "GetSmartContractSubState {field} failed: {} ({})",
                        error.message, error.code
                    ),
                ))
            }
        };

        Ok(state.and_then(|mut s| s.get_mut(field).map(Value::take)))
    }
}
