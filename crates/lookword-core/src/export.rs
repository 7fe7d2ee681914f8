//! Plain-text export of a lookup result.
//!
//! The output is a display artifact for the save/download routes and is never
//! parsed back into a dictionary:
//!
//! ```text
//! //================
//! rail
//! //================
//! o~~~~~ Contains ~~~~~o
//! railing
//! ˈreɪlɪŋ
//! lan can
//!
//! o~~~~~ Word family ~~~~~o
//! ...
//! ```

use std::str::FromStr;

use lookword_types::{LookupResult, Section, WordMatch};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FormatError;

const RULE: &str = "//================";

/// Label set used for the section headers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportStyle {
    #[default]
    English,
    Vietnamese,
}

impl ExportStyle {
    pub fn label(self, section: Section) -> &'static str {
        match (self, section) {
            (ExportStyle::English, Section::Wordfind) => "Contains",
            (ExportStyle::English, Section::Cambridge) => "Word family",
            (ExportStyle::English, Section::Synonyms) => "Synonyms",
            (ExportStyle::English, Section::Antonyms) => "Antonyms",
            (ExportStyle::Vietnamese, Section::Wordfind) => "Có trong",
            (ExportStyle::Vietnamese, Section::Cambridge) => "Từ loại",
            (ExportStyle::Vietnamese, Section::Synonyms) => "Đồng nghĩa",
            (ExportStyle::Vietnamese, Section::Antonyms) => "Trái nghĩa",
        }
    }
}

impl FromStr for ExportStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(ExportStyle::English),
            "vietnamese" | "vi" => Ok(ExportStyle::Vietnamese),
            other => Err(format!("unknown export style: {other}")),
        }
    }
}

/// Render a lookup result with the default (English) labels.
pub fn format(result: &LookupResult) -> String {
    format_with_style(result, ExportStyle::default())
}

pub fn format_with_style(result: &LookupResult, style: ExportStyle) -> String {
    let mut out = format!("{RULE}\n{}\n{RULE}\n", result.query);

    for (i, section) in Section::ALL.into_iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
        }
        out.push_str(&format!("o~~~~~ {} ~~~~~o\n", style.label(section)));

        let body = result
            .section(section)
            .iter()
            .map(|m| render_match(m, section))
            .collect::<Vec<_>>()
            .join("\n");
        out.push_str(&body);
    }

    out
}

fn render_match(word: &WordMatch, section: Section) -> String {
    if !section.has_definitions() {
        return word.word.clone();
    }

    std::iter::once(word.word.as_str())
        .chain(word.definition.iter().flat_map(|d| d.lines()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Validate an export request body and turn it into a [`LookupResult`].
pub fn parse_body(body: &Value) -> Result<LookupResult, FormatError> {
    let object = body.as_object().ok_or(FormatError::NotAnObject)?;

    let query = object
        .get("query")
        .ok_or(FormatError::MissingField("query"))?
        .as_str()
        .ok_or(FormatError::InvalidField {
            field: "query",
            expected: "a string",
        })?
        .trim();
    if query.is_empty() {
        return Err(FormatError::EmptyQuery);
    }

    let mut result = LookupResult::new(query);
    for section in Section::ALL {
        let raw = object
            .get(section.key())
            .ok_or(FormatError::MissingSection(section))?;

        *result.section_mut(section) = Vec::<WordMatch>::deserialize(raw).map_err(|e| {
            FormatError::InvalidSection {
                section,
                reason: e.to_string(),
            }
        })?;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use lookword_types::DictionaryEntry;
    use serde_json::json;

    use super::*;

    fn rail_result() -> LookupResult {
        LookupResult {
            query: "rail".to_string(),
            wordfind: vec![WordMatch {
                word: "railing".to_string(),
                definition: Some(DictionaryEntry::new(
                    Some("r".to_string()),
                    vec!["a fence".to_string()],
                )),
            }],
            cambridge: vec![],
            synonyms: vec![WordMatch::bare("track")],
            antonyms: vec![],
            failed: vec![],
        }
    }

    #[test]
    fn format_renders_all_sections_in_order() {
        let text = format(&rail_result());

        let expected = "//================\n\
                        rail\n\
                        //================\n\
                        o~~~~~ Contains ~~~~~o\n\
                        railing\n\
                        r\n\
                        a fence\n\
                        \n\
                        o~~~~~ Word family ~~~~~o\n\
                        \n\
                        \n\
                        o~~~~~ Synonyms ~~~~~o\n\
                        track\n\
                        \n\
                        o~~~~~ Antonyms ~~~~~o\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn format_is_deterministic() {
        let result = rail_result();
        assert_eq!(format(&result), format(&result));
    }

    #[test]
    fn thesaurus_words_are_joined_without_blank_lines() {
        let mut result = LookupResult::new("big");
        result.synonyms = vec![WordMatch::bare("large"), WordMatch::bare("huge")];
        result.antonyms = vec![WordMatch::bare("small"), WordMatch::bare("tiny")];

        let text = format(&result);
        assert!(text.contains("o~~~~~ Synonyms ~~~~~o\nlarge\nhuge\n\n"));
        assert!(text.ends_with("o~~~~~ Antonyms ~~~~~o\nsmall\ntiny"));
    }

    #[test]
    fn word_without_definition_renders_alone() {
        let mut result = LookupResult::new("rail");
        result.cambridge = vec![WordMatch::bare("derail"), WordMatch::bare("railway")];

        let text = format(&result);
        assert!(text.contains("o~~~~~ Word family ~~~~~o\nderail\nrailway\n\n"));
    }

    #[test]
    fn vietnamese_labels() {
        let text = format_with_style(&rail_result(), ExportStyle::Vietnamese);
        assert!(text.contains("o~~~~~ Có trong ~~~~~o\n"));
        assert!(text.contains("o~~~~~ Trái nghĩa ~~~~~o\n"));
    }

    #[test]
    fn parse_body_accepts_client_shape() {
        let body = json!({
            "query": "rail",
            "wordfind": [{"word": "railing", "def": ["r", "a fence"]}],
            "cambridge": [],
            "synonyms": [{"word": "track"}],
            "antonyms": []
        });

        assert_eq!(parse_body(&body).unwrap(), rail_result());
    }

    #[test]
    fn parse_body_reports_missing_section() {
        let body = json!({"query": "rail", "wordfind": [], "cambridge": [], "synonyms": []});
        assert_eq!(
            parse_body(&body),
            Err(FormatError::MissingSection(Section::Antonyms))
        );
    }

    #[test]
    fn parse_body_rejects_bad_input() {
        assert_eq!(parse_body(&json!([])), Err(FormatError::NotAnObject));
        assert_eq!(
            parse_body(&json!({"wordfind": []})),
            Err(FormatError::MissingField("query"))
        );
        assert_eq!(
            parse_body(&json!({"query": "  "})),
            Err(FormatError::EmptyQuery)
        );

        let bad = json!({
            "query": "rail",
            "wordfind": [{"def": []}],
            "cambridge": [],
            "synonyms": [],
            "antonyms": []
        });
        assert!(matches!(
            parse_body(&bad),
            Err(FormatError::InvalidSection {
                section: Section::Wordfind,
                ..
            })
        ));
    }
}
