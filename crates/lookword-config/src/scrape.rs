use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_wordfind_url() -> String {
    "http://www.wordfind.com/contains/".to_string()
}

fn default_cambridge_url() -> String {
    "http://dictionary.cambridge.org/search/english-vietnamese/direct/".to_string()
}

fn default_user_agent() -> String {
    concat!("lookword/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_request_timeout_ms() -> u64 {
    8000
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ScrapeConfig {
    #[serde(default = "default_wordfind_url")]
    pub wordfind_url: String,
    #[serde(default = "default_cambridge_url")]
    pub cambridge_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// HTTP client timeout shared by every source
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            wordfind_url: default_wordfind_url(),
            cambridge_url: default_cambridge_url(),
            user_agent: default_user_agent(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl ScrapeConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
