pub mod types;

pub use types::{DictionaryEntry, LookupResult, Section, WordMatch};
