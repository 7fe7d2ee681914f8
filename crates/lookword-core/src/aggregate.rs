use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use lookword_source::{FetchError, WordSource};
use lookword_types::{LookupResult, Section, WordMatch};
use serde::{Deserialize, Serialize};

use crate::dictionary::DictionaryIndex;
use crate::lookup::merge_all;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// How the four-way fan-out treats a failed source.
///
/// `Strict` ("strict-join") fails the whole lookup if any source fails.
/// `Partial` ("partial-join") keeps the sections that succeeded and lists the
/// failed ones in [`LookupResult::failed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinPolicy {
    #[default]
    Strict,
    Partial,
}

impl FromStr for JoinPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" | "strict-join" => Ok(JoinPolicy::Strict),
            "partial" | "partial-join" => Ok(JoinPolicy::Partial),
            other => Err(format!("unknown join policy: {other}")),
        }
    }
}

/// One source per result section
#[derive(Clone)]
pub struct Sources {
    pub wordfind: Arc<dyn WordSource>,
    pub cambridge: Arc<dyn WordSource>,
    pub synonyms: Arc<dyn WordSource>,
    pub antonyms: Arc<dyn WordSource>,
}

impl Sources {
    pub fn get(&self, section: Section) -> &Arc<dyn WordSource> {
        match section {
            Section::Wordfind => &self.wordfind,
            Section::Cambridge => &self.cambridge,
            Section::Synonyms => &self.synonyms,
            Section::Antonyms => &self.antonyms,
        }
    }
}

/// Fans a query out to every source and merges the answers with the local dictionary
pub struct Aggregator {
    sources: Sources,
    index: Arc<DictionaryIndex>,
    timeout: Duration,
    policy: JoinPolicy,
}

impl Aggregator {
    pub fn new(sources: Sources, index: Arc<DictionaryIndex>) -> Self {
        Self {
            sources,
            index,
            timeout: DEFAULT_TIMEOUT,
            policy: JoinPolicy::default(),
        }
    }

    /// Upper bound for each individual source call
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_policy(mut self, policy: JoinPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn index(&self) -> &DictionaryIndex {
        &self.index
    }

    pub fn policy(&self) -> JoinPolicy {
        self.policy
    }

    /// Query all four sources concurrently and wait for every one of them
    pub async fn aggregate(&self, query: &str) -> Result<LookupResult, FetchError> {
        let started = Instant::now();

        let (wordfind, cambridge, synonyms, antonyms) = tokio::join!(
            self.fetch(Section::Wordfind, query),
            self.fetch(Section::Cambridge, query),
            self.fetch(Section::Synonyms, query),
            self.fetch(Section::Antonyms, query),
        );

        let mut result = LookupResult::new(query);
        let outcomes = Section::ALL
            .into_iter()
            .zip([wordfind, cambridge, synonyms, antonyms]);

        for (section, outcome) in outcomes {
            match outcome {
                Ok(tokens) => *result.section_mut(section) = self.to_matches(section, tokens),
                Err(e) => match self.policy {
                    JoinPolicy::Strict => {
                        tracing::warn!("Lookup '{query}' failed on {section}: {e}");
                        return Err(e);
                    }
                    JoinPolicy::Partial => {
                        tracing::warn!("Lookup '{query}': dropping {section} section: {e}");
                        result.failed.push(section);
                    }
                },
            }
        }

        tracing::debug!("Lookup '{query}' joined in {:?}", started.elapsed());
        Ok(result)
    }

    async fn fetch(&self, section: Section, query: &str) -> Result<Vec<String>, FetchError> {
        let source = self.sources.get(section);

        match tokio::time::timeout(self.timeout, source.fetch(query)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(FetchError::Timeout {
                adapter: source.metadata().name,
                after: self.timeout,
            }),
        }
    }

    fn to_matches(&self, section: Section, tokens: Vec<String>) -> Vec<WordMatch> {
        if section.has_definitions() {
            merge_all(&tokens, &self.index)
        } else {
            tokens.into_iter().map(WordMatch::bare).collect()
        }
    }
}
