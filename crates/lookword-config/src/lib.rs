use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::export::ExportConfig;
use self::lookup::LookupConfig;
use self::scrape::ScrapeConfig;
use self::server::ServerConfig;
use self::thesaurus::ThesaurusConfig;

pub mod dictionary;
pub mod export;
pub mod lookup;
pub mod scrape;
pub mod server;
pub mod thesaurus;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub dictionary: DictionaryConfig,
    pub thesaurus: ThesaurusConfig,
    pub scrape: ScrapeConfig,
    pub lookup: LookupConfig,
    pub export: ExportConfig,
}

impl Config {
    /// Defaults overridden by the process environment
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env(|key| env::var(key).ok());
        config
    }

    /// Load a JSON config file; missing sections and fields keep their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config file {}", path.display());

        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let reader = BufReader::new(file);

        serde_json::from_reader(reader).map_err(|source| ConfigError::Json {
            path: path.display().to_string(),
            source,
        })
    }

    /// Override fields from environment-style variables.
    ///
    /// Unparseable numeric or enum values are ignored with a warning.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(host) = var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = parsed(&var, "PORT") {
            self.server.port = port;
        }
        if let Some(prefix) = var("ROUTE_PREFIX") {
            self.server.route_prefix = prefix;
        }

        if let Some(path) = var("DICT_PATH") {
            self.dictionary.path = path;
        }

        if let Some(api_key) = var("API_KEY") {
            self.thesaurus.api_key = api_key;
        }
        if let Some(username) = var("WORDNIK_USERNAME") {
            self.thesaurus.username = username;
        }
        if let Some(password) = var("WORDNIK_PASSWORD") {
            self.thesaurus.password = password;
        }

        if let Some(url) = var("WORDFIND_URL") {
            self.scrape.wordfind_url = url;
        }
        if let Some(url) = var("CAMBRIDGE_URL") {
            self.scrape.cambridge_url = url;
        }

        match parsed(&var, "LOOKUP_TIMEOUT_MS") {
            Some(0) => tracing::warn!("Ignoring LOOKUP_TIMEOUT_MS=0"),
            Some(timeout_ms) => self.lookup.timeout_ms = timeout_ms,
            None => {}
        }
        if let Some(policy) = parsed(&var, "JOIN_POLICY") {
            self.lookup.join_policy = policy;
        }

        if let Some(path) = var("EXPORT_PATH") {
            self.export.path = path;
        }
        if let Some(style) = parsed(&var, "EXPORT_STYLE") {
            self.export.style = style;
        }
    }
}

fn parsed<T: FromStr>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = var(key)?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid {key}={raw}");
            None
        }
    }
}
