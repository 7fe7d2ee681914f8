pub mod aggregate;
pub mod dictionary;
pub mod error;
pub mod export;
pub mod lookup;
pub mod preprocess;

pub use aggregate::{Aggregator, JoinPolicy, Sources};
pub use dictionary::{DictionaryIndex, DictionaryLoader, parse};
pub use error::{FormatError, LoadError, ParseError};
pub use export::{ExportStyle, format, format_with_style};
pub use lookup::{merge, merge_all};
