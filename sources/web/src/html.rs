//! Token extraction from scraped HTML pages.
//!
//! `scraper::Html` is not `Send`, so parsing stays inside these synchronous
//! helpers and never lives across an await point.

use lookword_source::FetchError;
use scraper::{Html, Selector};

/// Where a token sits relative to each selected element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPath {
    /// Direct text children: `<span class="w">rail</span>`
    ChildText,
    /// First text node of each child element: `<li><a>railing</a></li>`
    ChildElementText,
}

/// Collect the trimmed, non-empty tokens under every element matching `selector`
pub fn extract_tokens(
    html: &str,
    selector: &str,
    path: TokenPath,
) -> Result<Vec<String>, FetchError> {
    let selector = Selector::parse(selector)
        .map_err(|e| FetchError::ApiError(format!("Invalid selector {selector}: {e:?}")))?;
    let document = Html::parse_document(html);

    let mut tokens = Vec::new();
    for element in document.select(&selector) {
        for child in element.children() {
            let text = match path {
                TokenPath::ChildText => child.value().as_text().map(|t| &**t),
                TokenPath::ChildElementText if child.value().is_element() => child
                    .first_child()
                    .and_then(|c| c.value().as_text())
                    .map(|t| &**t),
                TokenPath::ChildElementText => None,
            };

            if let Some(token) = text.map(str::trim).filter(|t| !t.is_empty()) {
                tokens.push(token.to_string());
            }
        }
    }

    Ok(tokens)
}
