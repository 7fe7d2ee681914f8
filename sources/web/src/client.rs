use std::time::Duration;

use lookword_source::FetchError;
use reqwest::{Response, StatusCode, Url};

/// HTTP client shared by every web source
pub fn build_client(user_agent: &str, timeout: Duration) -> Result<reqwest::Client, FetchError> {
    let client = reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

pub(crate) fn parse_base(base: &str) -> Result<Url, FetchError> {
    let url = Url::parse(base)
        .map_err(|e| FetchError::ApiError(format!("Invalid base URL {base}: {e}")))?;

    if url.cannot_be_a_base() {
        return Err(FetchError::ApiError(format!("Base URL {base} cannot take a path")));
    }
    Ok(url)
}

/// `base` with `segments` appended as percent-encoded path segments
pub(crate) fn with_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

/// Map non-success statuses to errors
pub(crate) fn check_status(adapter: &str, response: Response) -> Result<Response, FetchError> {
    let status = response.status();

    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(FetchError::RateLimitExceeded);
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(FetchError::AuthenticationError);
    }

    if !status.is_success() {
        return Err(FetchError::HttpStatus {
            adapter: adapter.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_are_appended_and_encoded() {
        let base = parse_base("http://www.wordfind.com/contains/").unwrap();
        let url = with_segments(&base, &["ice cream"]);
        assert_eq!(url.as_str(), "http://www.wordfind.com/contains/ice%20cream");

        let base = parse_base("https://api.wordnik.com/v4/word.json").unwrap();
        let url = with_segments(&base, &["rail", "relatedWords"]);
        assert_eq!(url.as_str(), "https://api.wordnik.com/v4/word.json/rail/relatedWords");
    }

    #[test]
    fn invalid_base_is_rejected() {
        assert!(parse_base("not a url").is_err());
        assert!(parse_base("mailto:someone@example.com").is_err());
    }
}
