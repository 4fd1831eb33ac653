use serde_json::Value;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Centralized API serving one JSON document per domain. Requests without
/// the client identification header are not matched.
pub struct FakeApi {
    server: MockServer,
}

impl FakeApi {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn url(&self) -> String {
        self.server.uri()
    }

    pub async fn domain(&self, domain: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/{domain}")))
            .and(header_exists("DefaultUserAgent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn failing(&self, domain: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/{domain}")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}
