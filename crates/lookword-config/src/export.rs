use lookword_core::ExportStyle;
use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "dump/save.txt".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ExportConfig {
    /// File written by the save route and served by download
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default)]
    pub style: ExportStyle,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            style: ExportStyle::default(),
        }
    }
}
