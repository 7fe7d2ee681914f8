use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default query preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // NFC keeps Vietnamese diacritics composed
        let text: String = text.nfc().collect();

        // Collapse line breaks and runs of whitespace
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Index key for a headword or token: NFC, lowercased.
pub fn normalize_key(word: &str) -> String {
    word.trim().nfc().collect::<String>().to_lowercase()
}
