use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://unstoppabledomains.com/api/v1";

/// Centralized resolution API, used only when `blockchain = false`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}
