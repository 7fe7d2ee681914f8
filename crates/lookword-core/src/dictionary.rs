use std::collections::HashMap;
use std::path::Path;

use lookword_types::DictionaryEntry;

use crate::error::{LoadError, ParseError};
use crate::preprocess::normalize_key;

/// Entries are separated by a line starting with this marker
const BLOCK_DELIMITER: &str = "\n@";

/// In-memory local dictionary, keyed by lowercased headword.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    entries: HashMap<String, DictionaryEntry>,
}

impl DictionaryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat dictionary file, logging and skipping malformed blocks
    pub fn parse(text: &str) -> Self {
        let (index, errors) = Self::parse_with_report(text);
        for error in &errors {
            tracing::warn!("Skipping dictionary entry: {error}");
        }
        index
    }

    /// Parse a flat dictionary file, returning the skipped blocks alongside
    pub fn parse_with_report(text: &str) -> (Self, Vec<ParseError>) {
        let mut index = Self::new();
        let mut errors = Vec::new();

        for (block_no, (line, block)) in blocks(text).enumerate() {
            match parse_block(block) {
                Some((headword, entry)) => {
                    if index.insert(&headword, entry).is_some() {
                        tracing::debug!("Duplicate headword '{headword}' at line {line}, keeping later entry");
                    }
                }
                None => errors.push(ParseError::MissingHeadword {
                    block: block_no + 1,
                    line,
                }),
            }
        }

        (index, errors)
    }

    /// Look up a headword in any casing
    pub fn get(&self, word: &str) -> Option<&DictionaryEntry> {
        self.entries.get(&normalize_key(word))
    }

    pub fn insert(&mut self, headword: &str, entry: DictionaryEntry) -> Option<DictionaryEntry> {
        self.entries.insert(normalize_key(headword), entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge another index into this one; entries of `other` win on conflict
    pub fn merge(mut self, other: DictionaryIndex) -> Self {
        self.entries.extend(other.entries);
        self
    }
}

/// Parse a flat dictionary file into an index.
pub fn parse(text: &str) -> DictionaryIndex {
    DictionaryIndex::parse(text)
}

/// Split the file into `(first line number, block)` pairs
fn blocks(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let text = text.strip_prefix('@').unwrap_or(text);

    let mut line = 1;
    text.split(BLOCK_DELIMITER).map(move |block| {
        let start = line;
        line += block.matches('\n').count() + 1;
        (start, block)
    })
}

fn parse_block(block: &str) -> Option<(String, DictionaryEntry)> {
    let mut lines = block.lines().map(|l| l.trim_end_matches('\r'));

    // "headword /pronunciation/", slashes may repeat
    let mut tokens = lines
        .next()?
        .split('/')
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let headword = normalize_key(tokens.next()?);
    let pronunciation = tokens.next().map(str::to_string);

    let definitions = lines
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect();

    Some((headword, DictionaryEntry::new(pronunciation, definitions)))
}

/// Loads dictionary files from disk
pub struct DictionaryLoader;

impl DictionaryLoader {
    /// Load dictionary from file path
    pub fn load_from_file(path: &Path) -> Result<DictionaryIndex, LoadError> {
        tracing::info!("Loading dictionary from file: {}", path.display());

        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LoadError::FileNotFound(path.display().to_string()),
            _ => LoadError::IoError(e),
        })?;

        let index = DictionaryIndex::parse(&text);
        if index.is_empty() {
            return Err(LoadError::Empty(path.display().to_string()));
        }

        tracing::info!("Loaded {} dictionary entries", index.len());
        Ok(index)
    }

    /// Load the primary dictionary, then merge additional ones in order
    pub fn load_all<P: AsRef<Path>>(
        primary: &Path,
        additional: &[P],
    ) -> Result<DictionaryIndex, LoadError> {
        let mut index = Self::load_from_file(primary)?;

        for path in additional {
            let extra = Self::load_from_file(path.as_ref())?;
            index = index.merge(extra);
        }

        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn entry(pron: &str, defs: &[&str]) -> DictionaryEntry {
        DictionaryEntry::new(
            Some(pron.to_string()),
            defs.iter().map(|d| d.to_string()).collect(),
        )
    }

    #[test]
    fn parses_two_entries() {
        let index = parse("word1/wɜːrd1\ndef1\n@word2/wɜːrd2\ndef2a\ndef2b");

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("word1"), Some(&entry("wɜːrd1", &["def1"])));
        assert_eq!(index.get("word2"), Some(&entry("wɜːrd2", &["def2a", "def2b"])));
    }

    #[test]
    fn lookup_ignores_casing() {
        let index = parse("Rail /reɪl/\n* danh từ\n- tay vịn\n");
        let expected = entry("reɪl", &["* danh từ", "- tay vịn"]);

        assert_eq!(index.get("rail"), Some(&expected));
        assert_eq!(index.get("RAIL"), Some(&expected));
        assert_eq!(index.get("rAiL"), Some(&expected));
    }

    #[test]
    fn repeated_slashes_split_like_one() {
        let index = parse("@abate //ə'beit//\n- giảm bớt");
        assert_eq!(index.get("abate"), Some(&entry("ə'beit", &["- giảm bớt"])));
    }

    #[test]
    fn missing_pronunciation_stays_absent() {
        let index = parse("railway\nđường sắt");
        let found = index.get("railway").unwrap();

        assert_eq!(found.pronunciation, None);
        assert_eq!(found.definitions, vec!["đường sắt".to_string()]);
    }

    #[test]
    fn empty_lines_are_dropped() {
        let index = parse("rail /reɪl/\n\n  \nbar\n\n");
        assert_eq!(index.get("rail"), Some(&entry("reɪl", &["bar"])));
    }

    #[test]
    fn crlf_input_parses_the_same() {
        let index = parse("word1/w1\r\ndef1\r\n@word2/w2\r\ndef2\r\n");
        assert_eq!(index.get("word1"), Some(&entry("w1", &["def1"])));
        assert_eq!(index.get("word2"), Some(&entry("w2", &["def2"])));
    }

    #[test]
    fn malformed_block_does_not_stop_parsing() {
        let text = "alpha /a/\nfirst\n@ // \norphan line\n@beta /b/\nsecond";
        let (index, errors) = DictionaryIndex::parse_with_report(text);

        assert_eq!(index.len(), 2);
        assert_eq!(index.get("beta"), Some(&entry("b", &["second"])));
        assert_eq!(errors, vec![ParseError::MissingHeadword { block: 2, line: 3 }]);
    }

    #[test]
    fn empty_block_is_reported() {
        let (index, errors) = DictionaryIndex::parse_with_report("alpha /a/\nfirst\n@");
        assert_eq!(index.len(), 1);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn later_duplicate_wins() {
        let index = parse("rail /r1/\nold\n@RAIL /r2/\nnew");
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("rail"), Some(&entry("r2", &["new"])));
    }

    #[test]
    fn merge_prefers_other() {
        let base = parse("rail /r/\nbase\n@road /rd/\nroad");
        let extra = parse("rail /r/\nextra");
        let merged = base.merge(extra);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get("rail"), Some(&entry("r", &["extra"])));
    }

    #[test]
    fn loader_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "@rail /reɪl/\nđường ray\n@road /roʊd/\ncon đường").unwrap();

        let index = DictionaryLoader::load_from_file(file.path()).unwrap();
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn loader_rejects_missing_and_empty_files() {
        let missing = DictionaryLoader::load_from_file(Path::new("/nonexistent/dict.txt"));
        assert!(matches!(missing, Err(LoadError::FileNotFound(_))));

        let file = tempfile::NamedTempFile::new().unwrap();
        let empty = DictionaryLoader::load_from_file(file.path());
        assert!(matches!(empty, Err(LoadError::Empty(_))));
    }
}
