use serde_json::{json, Value};
use std::collections::HashMap;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

type StateKey = (String, String, Vec<String>);

/// Zilliqa node answering `GetSmartContractSubState`. Unknown queries
/// return `null`, as a real node does for empty state.
#[derive(Default)]
pub struct FakeZilliqaNode {
    states: HashMap<StateKey, Value>,
}

impl FakeZilliqaNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// `result` is the full object the node returns, e.g.
    /// `{"records": {...}}`.
    pub fn sub_state(mut self, contract: &str, field: &str, indices: &[&str], result: Value) -> Self {
        let key = (
            contract.trim_start_matches("0x").to_ascii_lowercase(),
            field.to_string(),
            indices.iter().map(|i| i.to_string()).collect(),
        );
        self.states.insert(key, result);
        self
    }

    /// Registry entry for `node` pointing at `owner` and `resolver`.
    pub fn registry_record(self, registry: &str, node: &str, owner: &str, resolver: &str) -> Self {
        let mut records = serde_json::Map::new();
        records.insert(
            node.to_string(),
            json!({
                "argtypes": [],
                "arguments": [owner, resolver],
                "constructor": "Record"
            }),
        );
        let result = json!({ "records": records });
        self.sub_state(registry, "records", &[node], result)
    }

    pub fn resolver_records(self, resolver: &str, records: &[(&str, &str)]) -> Self {
        let map: serde_json::Map<String, Value> = records
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect();
        self.sub_state(resolver, "records", &[], json!({ "records": map }))
    }

    pub async fn start(self) -> MockServer {
        let server = MockServer::start().await;
        let states = self.states;

        Mock::given(method("POST"))
            .respond_with(move |request: &Request| {
                let body: Value = serde_json::from_slice(&request.body).unwrap();
                let params = &body["params"];
                let key = (
                    params[0].as_str().unwrap_or_default().to_string(),
                    params[1].as_str().unwrap_or_default().to_string(),
                    params[2]
                        .as_array()
                        .map(|indices| {
                            indices
                                .iter()
                                .filter_map(|i| i.as_str().map(str::to_string))
                                .collect()
                        })
                        .unwrap_or_default(),
                );

                let result = states.get(&key).cloned().unwrap_or(Value::Null);
                ResponseTemplate::new(200).set_body_json(json!({
                    "jsonrpc": "2.0",
                    "id": body["id"].clone(),
                    "result": result
                }))
            })
            .mount(&server)
            .await;

        server
    }
}
