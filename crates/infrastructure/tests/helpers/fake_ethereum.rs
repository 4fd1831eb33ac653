use nameroute_infrastructure::naming::transport::abi::{encode_call, encode_return, Token};
use serde_json::{json, Value};
use std::collections::HashMap;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

#[derive(Debug, Clone)]
pub enum EthReply {
    Return(Vec<u8>),
    Revert,
    /// `0x`, what a node returns for a call to an address without code.
    Empty,
    /// JSON-RPC error that is not a revert.
    NodeError(i64, String),
}

/// Ethereum node answering `eth_call` from a table keyed on target and
/// calldata. Unknown calls return a single zero word.
#[derive(Default)]
pub struct FakeEthereumNode {
    calls: HashMap<(String, String), EthReply>,
}

pub fn address_word(address: &str) -> [u8; 32] {
    let bytes = hex::decode(address.trim_start_matches("0x")).unwrap();
    let mut word = [0u8; 32];
    word[32 - bytes.len()..].copy_from_slice(&bytes);
    word
}

fn u64_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}

impl FakeEthereumNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_call(
        mut self,
        to: &str,
        signature: &str,
        tokens: &[Token<'_>],
        reply: EthReply,
    ) -> Self {
        let data = format!("0x{}", hex::encode(encode_call(signature, tokens)));
        self.calls.insert((to.to_ascii_lowercase(), data), reply);
        self
    }

    pub fn returns_address(self, to: &str, signature: &str, tokens: &[Token<'_>], address: &str) -> Self {
        let data = encode_return(&[Token::Word(address_word(address))]);
        self.on_call(to, signature, tokens, EthReply::Return(data))
    }

    pub fn returns_u64(self, to: &str, signature: &str, tokens: &[Token<'_>], value: u64) -> Self {
        let data = encode_return(&[Token::Word(u64_word(value))]);
        self.on_call(to, signature, tokens, EthReply::Return(data))
    }

    pub fn returns_string(self, to: &str, signature: &str, tokens: &[Token<'_>], value: &str) -> Self {
        let data = encode_return(&[Token::String(value)]);
        self.on_call(to, signature, tokens, EthReply::Return(data))
    }

    pub fn reverts(self, to: &str, signature: &str, tokens: &[Token<'_>]) -> Self {
        self.on_call(to, signature, tokens, EthReply::Revert)
    }

    pub async fn start(self) -> MockServer {
        let server = MockServer::start().await;
        let calls = self.calls;

        Mock::given(method("POST"))
            .respond_with(move |request: &Request| {
                let body: Value = serde_json::from_slice(&request.body).unwrap();
                let id = body["id"].clone();
                let call = &body["params"][0];
                let to = call["to"].as_str().unwrap_or_default().to_ascii_lowercase();
                let data = call["data"].as_str().unwrap_or_default().to_string();

                let reply = calls
                    .get(&(to, data))
                    .cloned()
                    .unwrap_or(EthReply::Return(vec![0u8; 32]));

                let envelope = match reply {
                    EthReply::Return(bytes) => {
                        json!({ "jsonrpc": "2.0", "id": id, "result": format!("0x{}", hex::encode(bytes)) })
                    }
                    EthReply::Empty => json!({ "jsonrpc": "2.0", "id": id, "result": "0x" }),
                    EthReply::Revert => json!({
                        "jsonrpc": "2.0",
                        "id": id,
                        "error": { "code": 3, "message": "execution reverted" }
                    }),
                    EthReply::NodeError(code, message) => json!({
                        "jsonrpc": "2.0",
                        "id": id,
                        "error": { "code": code, "message": message }
                    }),
                };
                ResponseTemplate::new(200).set_body_json(envelope)
            })
            .mount(&server)
            .await;

        server
    }
}
