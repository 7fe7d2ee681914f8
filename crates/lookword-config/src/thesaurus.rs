use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.wordnik.com/v4/word.json/".to_string()
}

fn default_auth_url() -> String {
    "https://api.wordnik.com/v4/account.json/authenticate/".to_string()
}

/// Wordnik credentials and endpoints
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ThesaurusConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl Default for ThesaurusConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            auth_url: default_auth_url(),
            api_key: String::new(),
            username: String::new(),
            password: String::new(),
        }
    }
}

impl ThesaurusConfig {
    /// Account authentication is only attempted with a full credential set
    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty() && !self.username.is_empty() && !self.password.is_empty()
    }
}
