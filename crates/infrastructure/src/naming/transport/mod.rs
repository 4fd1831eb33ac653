pub mod abi;
pub mod ethereum;
pub mod http;
pub mod json_rpc;
pub mod zilliqa;

pub use ethereum::{CallOutcome, EthereumRpc};
pub use json_rpc::{JsonRpcClient, RpcError};
pub use zilliqa::ZilliqaRpc;
