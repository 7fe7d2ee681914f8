//! In-process fakes for the HTTP route tests

mod serve_tests;

use std::sync::Arc;
use std::time::Duration;

use lookword_config::export::ExportConfig;
use lookword_core::{Aggregator, DictionaryIndex, ExportStyle, Sources};
use lookword_source::{FetchError, SourceMetadata, WordSource};

use crate::state::AppState;

pub(crate) enum Fake {
    Words(&'static [&'static str]),
    Fails,
    Stalls,
}

#[async_trait::async_trait]
impl WordSource for Fake {
    async fn fetch(&self, _query: &str) -> Result<Vec<String>, FetchError> {
        match self {
            Fake::Words(words) => Ok(words.iter().map(|w| w.to_string()).collect()),
            Fake::Fails => Err(FetchError::HttpStatus {
                adapter: "fake".to_string(),
                status: 500,
            }),
            Fake::Stalls => std::future::pending().await,
        }
    }

    fn metadata(&self) -> SourceMetadata {
        SourceMetadata {
            name: "fake".to_string(),
            requires_api_key: false,
        }
    }
}

pub(crate) fn state_with(antonyms: Fake, export_dir: &std::path::Path) -> Arc<AppState> {
    let index = DictionaryIndex::parse(
        "@rail /reɪl/\nđường ray\n@railing /ˈreɪlɪŋ/\nlan can\n@track /træk/\ndấu vết",
    );

    let sources = Sources {
        wordfind: Arc::new(Fake::Words(&["railing", "derail"])),
        cambridge: Arc::new(Fake::Words(&["Rail"])),
        synonyms: Arc::new(Fake::Words(&["track", "bar"])),
        antonyms: Arc::new(antonyms),
    };

    let aggregator = Aggregator::new(sources, Arc::new(index))
        .with_timeout(Duration::from_millis(100));

    let export = ExportConfig {
        path: export_dir.join("dump").join("save.txt").display().to_string(),
        style: ExportStyle::English,
    };

    Arc::new(AppState::new(aggregator, export))
}
