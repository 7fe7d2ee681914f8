use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use lookword_config::Config;
use lookword_config::export::ExportConfig;
use lookword_core::{Aggregator, DictionaryLoader, Sources};
use lookword_source_web::{
    CambridgeSource, Relation, WordfindSource, WordnikClient, WordnikSource, build_client,
};

pub struct AppState {
    pub aggregator: Aggregator,
    pub export: ExportConfig,
}

impl AppState {
    pub fn new(aggregator: Aggregator, export: ExportConfig) -> Self {
        Self { aggregator, export }
    }

    /// Load the dictionary and wire up every source.
    ///
    /// Fails when the dictionary is unusable or Wordnik rejects the configured credentials.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let index = DictionaryLoader::load_all(
            Path::new(&config.dictionary.path),
            &config.dictionary.additional_paths,
        )
        .with_context(|| format!("Failed to load dictionary {}", config.dictionary.path))?;

        let client = build_client(&config.scrape.user_agent, config.scrape.request_timeout())
            .context("Failed to build HTTP client")?;

        let thesaurus = &config.thesaurus;
        let mut wordnik = WordnikClient::new(
            client.clone(),
            &thesaurus.api_url,
            &thesaurus.auth_url,
            thesaurus.api_key.clone(),
        )
        .context("Invalid Wordnik configuration")?;

        if thesaurus.has_credentials() {
            wordnik
                .authenticate(&thesaurus.username, &thesaurus.password)
                .await
                .context("Wordnik authentication failed")?;
        } else if thesaurus.api_key.is_empty() {
            tracing::warn!("API_KEY not set, thesaurus lookups will fail");
        }

        let sources = Sources {
            wordfind: Arc::new(
                WordfindSource::new(client.clone(), &config.scrape.wordfind_url)
                    .context("Invalid wordfind URL")?,
            ),
            cambridge: Arc::new(
                CambridgeSource::new(client, &config.scrape.cambridge_url)
                    .context("Invalid cambridge URL")?,
            ),
            synonyms: Arc::new(WordnikSource::new(wordnik.clone(), Relation::Synonym)),
            antonyms: Arc::new(WordnikSource::new(wordnik, Relation::Antonym)),
        };

        let timeout = config.lookup.timeout();
        let aggregator = Aggregator::new(sources, Arc::new(index))
            .with_timeout(timeout)
            .with_policy(config.lookup.join_policy);

        tracing::info!(
            "Lookup ready: {} headwords, {:?} join, {:?} per source",
            aggregator.index().len(),
            aggregator.policy(),
            timeout
        );

        Ok(Self::new(aggregator, config.export.clone()))
    }
}
