use lookword_types::WordMatch;

use crate::dictionary::DictionaryIndex;

/// Pair a scraped token with its local dictionary entry.
pub fn merge(token: &str, index: &DictionaryIndex) -> WordMatch {
    WordMatch {
        word: token.to_string(),
        definition: index.get(token).cloned(),
    }
}

pub fn merge_all<I, S>(tokens: I, index: &DictionaryIndex) -> Vec<WordMatch>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|token| merge(token.as_ref(), index))
        .collect()
}
