use async_trait::async_trait;
use lookword_source::{FetchError, SourceMetadata, WordSource};
use reqwest::Url;

use crate::client::{check_status, parse_base};
use crate::html::{TokenPath, extract_tokens};

const NAME: &str = "cambridge";

/// Headwords of the English-Vietnamese Cambridge search page (word family)
#[derive(Clone)]
pub struct CambridgeSource {
    client: reqwest::Client,
    search_url: Url,
}

impl CambridgeSource {
    pub fn new(client: reqwest::Client, search_url: &str) -> Result<Self, FetchError> {
        Ok(Self {
            client,
            search_url: parse_base(search_url)?,
        })
    }
}

#[async_trait]
impl WordSource for CambridgeSource {
    async fn fetch(&self, query: &str) -> Result<Vec<String>, FetchError> {
        let response = self
            .client
            .get(self.search_url.clone())
            .query(&[("q", query)])
            .send()
            .await?;
        let html = check_status(NAME, response)?.text().await?;

        let tokens = extract_tokens(&html, "span.w", TokenPath::ChildText)?;
        tracing::debug!("{NAME}: {} tokens for '{query}'", tokens.len());
        Ok(tokens)
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: NAME.to_string(),
            requires_api_key: false,
        }
    }
}
