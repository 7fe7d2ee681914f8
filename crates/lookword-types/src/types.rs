use std::fmt;

use serde::{Deserialize, Serialize};

/// Definition data for one headword of the local dictionary.
///
/// On the wire this is the array `[pronunciation-or-null, ...definitions]`,
/// the shape the lookup client renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Option<String>>", into = "Vec<Option<String>>")]
pub struct DictionaryEntry {
    pub pronunciation: Option<String>,
    pub definitions: Vec<String>,
}

impl DictionaryEntry {
    pub fn new(pronunciation: Option<String>, definitions: Vec<String>) -> Self {
        Self {
            pronunciation,
            definitions,
        }
    }

    /// Pronunciation (when known) followed by every definition line
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.pronunciation
            .as_deref()
            .into_iter()
            .chain(self.definitions.iter().map(String::as_str))
    }
}

impl From<Vec<Option<String>>> for DictionaryEntry {
    fn from(raw: Vec<Option<String>>) -> Self {
        let mut parts = raw.into_iter();
        let pronunciation = parts.next().flatten();
        let definitions = parts.flatten().collect();

        Self {
            pronunciation,
            definitions,
        }
    }
}

impl From<DictionaryEntry> for Vec<Option<String>> {
    fn from(entry: DictionaryEntry) -> Self {
        std::iter::once(entry.pronunciation)
            .chain(entry.definitions.into_iter().map(Some))
            .collect()
    }
}

/// A scraped token paired with its local dictionary entry, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMatch {
    /// Token text exactly as the source returned it
    pub word: String,
    #[serde(rename = "def", default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<DictionaryEntry>,
}

impl WordMatch {
    /// Match without local definition data (thesaurus results)
    pub fn bare(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: None,
        }
    }
}

/// The four result sections of a lookup, in their fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Wordfind,
    Cambridge,
    Synonyms,
    Antonyms,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Wordfind,
        Section::Cambridge,
        Section::Synonyms,
        Section::Antonyms,
    ];

    /// JSON field name of the section
    pub fn key(self) -> &'static str {
        match self {
            Section::Wordfind => "wordfind",
            Section::Cambridge => "cambridge",
            Section::Synonyms => "synonyms",
            Section::Antonyms => "antonyms",
        }
    }

    /// Whether matches in this section carry local definitions
    pub fn has_definitions(self) -> bool {
        matches!(self, Section::Wordfind | Section::Cambridge)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Combined result of one lookup request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub query: String,
    pub wordfind: Vec<WordMatch>,
    pub cambridge: Vec<WordMatch>,
    pub synonyms: Vec<WordMatch>,
    pub antonyms: Vec<WordMatch>,
    /// Sections whose source failed; only filled by the partial join policy
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failed: Vec<Section>,
}

impl LookupResult {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn section(&self, section: Section) -> &[WordMatch] {
        match section {
            Section::Wordfind => &self.wordfind,
            Section::Cambridge => &self.cambridge,
            Section::Synonyms => &self.synonyms,
            Section::Antonyms => &self.antonyms,
        }
    }

    pub fn section_mut(&mut self, section: Section) -> &mut Vec<WordMatch> {
        match section {
            Section::Wordfind => &mut self.wordfind,
            Section::Cambridge => &mut self.cambridge,
            Section::Synonyms => &mut self.synonyms,
            Section::Antonyms => &mut self.antonyms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_serializes_as_flat_array() {
        let entry = DictionaryEntry::new(Some("reɪl".into()), vec!["đường ray".into()]);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json, serde_json::json!(["reɪl", "đường ray"]));
    }

    #[test]
    fn entry_without_pronunciation_keeps_null_slot() {
        let entry = DictionaryEntry::new(None, vec!["a fence".into()]);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json, serde_json::json!([null, "a fence"]));

        let back: DictionaryEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn entry_lines_skip_missing_pronunciation() {
        let entry = DictionaryEntry::new(None, vec!["one".into(), "two".into()]);
        assert_eq!(entry.lines().collect::<Vec<_>>(), vec!["one", "two"]);
    }

    #[test]
    fn word_match_omits_absent_definition() {
        let json = serde_json::to_string(&WordMatch::bare("track")).unwrap();
        assert_eq!(json, r#"{"word":"track"}"#);
    }

    #[test]
    fn lookup_result_hides_empty_failed_list() {
        let json = serde_json::to_value(LookupResult::new("rail")).unwrap();
        assert!(json.get("failed").is_none());
        assert_eq!(json["wordfind"], serde_json::json!([]));
    }
}
