use async_trait::async_trait;
use lookword_source::{FetchError, SourceMetadata, WordSource};
use reqwest::header::ACCEPT;
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::client::{check_status, parse_base, with_segments};

const NAME: &str = "wordnik";

/// Relationship type requested from the relatedWords endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    Synonym,
    Antonym,
}

impl Relation {
    pub fn as_str(self) -> &'static str {
        match self {
            Relation::Synonym => "synonym",
            Relation::Antonym => "antonym",
        }
    }
}

#[derive(Debug, Deserialize)]
struct RelatedWords {
    #[serde(default)]
    words: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct AuthToken {
    token: String,
}

/// Wordnik API client. Holds the account token once authenticated.
#[derive(Clone)]
pub struct WordnikClient {
    client: reqwest::Client,
    api_url: Url,
    auth_url: Url,
    api_key: String,
    auth_token: Option<String>,
}

impl WordnikClient {
    pub fn new(
        client: reqwest::Client,
        api_url: &str,
        auth_url: &str,
        api_key: String,
    ) -> Result<Self, FetchError> {
        Ok(Self {
            client,
            api_url: parse_base(api_url)?,
            auth_url: parse_base(auth_url)?,
            api_key,
            auth_token: None,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_token.is_some()
    }

    /// Exchange account credentials for an auth token
    pub async fn authenticate(&mut self, username: &str, password: &str) -> Result<(), FetchError> {
        if self.api_key.is_empty() {
            return Err(FetchError::AuthenticationError);
        }

        let response = self
            .client
            .get(with_segments(&self.auth_url, &[username]))
            .query(&[("password", password), ("api_key", self.api_key.as_str())])
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let token: AuthToken = check_status(NAME, response)?
            .json()
            .await
            .map_err(|e| FetchError::InvalidResponse {
                adapter: NAME.to_string(),
                reason: e.to_string(),
            })?;

        tracing::info!("Authenticated with Wordnik as {username}");
        self.auth_token = Some(token.token);
        Ok(())
    }

    /// Related words of one relationship type, flattened in response order
    pub async fn related_words(
        &self,
        word: &str,
        relation: Relation,
    ) -> Result<Vec<String>, FetchError> {
        if self.api_key.is_empty() {
            return Err(FetchError::AuthenticationError);
        }

        let mut request = self
            .client
            .get(with_segments(&self.api_url, &[word, "relatedWords"]))
            .query(&[
                ("useCanonical", "true"),
                ("relationshipTypes", relation.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .header(ACCEPT, "application/json");

        if let Some(token) = &self.auth_token {
            request = request.header("auth_token", token);
        }

        let response = request.send().await?;

        // Unknown words have no relations
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(vec![]);
        }

        let groups: Vec<RelatedWords> = check_status(NAME, response)?
            .json()
            .await
            .map_err(|e| FetchError::InvalidResponse {
                adapter: NAME.to_string(),
                reason: e.to_string(),
            })?;

        Ok(groups.into_iter().flat_map(|g| g.words).collect())
    }
}

/// One thesaurus section (synonyms or antonyms) backed by Wordnik
#[derive(Clone)]
pub struct WordnikSource {
    client: WordnikClient,
    relation: Relation,
}

impl WordnikSource {
    pub fn new(client: WordnikClient, relation: Relation) -> Self {
        Self { client, relation }
    }
}

#[async_trait]
impl WordSource for WordnikSource {
    async fn fetch(&self, query: &str) -> Result<Vec<String>, FetchError> {
        let words = self.client.related_words(query, self.relation).await?;
        tracing::debug!("{NAME}: {} {}s for '{query}'", words.len(), self.relation.as_str());
        Ok(words)
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: format!("{NAME}-{}", self.relation.as_str()),
            requires_api_key: true,
        }
    }
}
