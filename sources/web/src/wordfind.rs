use async_trait::async_trait;
use lookword_source::{FetchError, SourceMetadata, WordSource};
use reqwest::Url;

use crate::client::{check_status, parse_base, with_segments};
use crate::html::{TokenPath, extract_tokens};

const NAME: &str = "wordfind";

/// Words containing the query, scraped from the wordfind "contains" listing
#[derive(Clone)]
pub struct WordfindSource {
    client: reqwest::Client,
    base_url: Url,
}

impl WordfindSource {
    pub fn new(client: reqwest::Client, base_url: &str) -> Result<Self, FetchError> {
        Ok(Self {
            client,
            base_url: parse_base(base_url)?,
        })
    }
}

#[async_trait]
impl WordSource for WordfindSource {
    async fn fetch(&self, query: &str) -> Result<Vec<String>, FetchError> {
        let url = with_segments(&self.base_url, &[query]);
        tracing::debug!("GET {url}");

        let response = self.client.get(url).send().await?;
        let html = check_status(NAME, response)?.text().await?;

        let tokens = extract_tokens(&html, "li.defLink", TokenPath::ChildElementText)?;
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
