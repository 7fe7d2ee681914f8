use std::time::Duration;

/// Word source interface: one external site or API that turns a query into tokens
#[async_trait::async_trait]
pub trait WordSource: Send + Sync {
    /// Fetch the raw word tokens for `query`, in the source's native order
    async fn fetch(&self, query: &str) -> Result<Vec<String>, FetchError>;

    /// Source metadata
    fn metadata(&self) -> SourceMetadata;
}

#[derive(Debug, Clone)]
pub struct SourceMetadata {
    pub name: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("{adapter} returned HTTP {status}")]
    HttpStatus { adapter: String, status: u16 },

    #[error("Invalid response from {adapter}: {reason}")]
    InvalidResponse { adapter: String, reason: String },

    #[error("{adapter} did not answer within {after:?}")]
    Timeout { adapter: String, after: Duration },

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}

impl FetchError {
    pub fn is_timeout(&self) -> bool {
        match self {
            FetchError::Timeout { .. } => true,
            FetchError::NetworkError(e) => e.is_timeout(),
            _ => false,
        }
    }
}
