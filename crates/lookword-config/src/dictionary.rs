use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "assets/dict.txt".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_path")]
    pub path: String,
    /// Loaded after `path`; later files override earlier headwords
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            additional_paths: vec![],
        }
    }
}
