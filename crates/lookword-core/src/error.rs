use lookword_types::Section;

/// A dictionary block that could not be turned into an entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("block {block} (line {line}) has no headword")]
    MissingHeadword { block: usize, line: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Dictionary {0} contains no usable entries")]
    Empty(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A lookup result that cannot be exported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Expected a JSON object")]
    NotAnObject,

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Field {field} must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Query is empty")]
    EmptyQuery,

    #[error("Missing section: {0}")]
    MissingSection(Section),

    #[error("Malformed section {section}: {reason}")]
    InvalidSection { section: Section, reason: String },
}
