//! Parser boundary: raw vocabulary text in, entry drafts out.

use serde::Deserialize;
use thiserror::Error;

use crate::model::EntryDraft;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseError {
    #[error("failed to parse vocabulary file: {message}")]
    Syntax { message: String },
}

/// Turns the concatenated text of one upload batch into entry drafts.
pub trait VocaParser {
    /// # Errors
    ///
    /// Returns `ParseError` if the text is not a well-formed vocabulary file.
    fn parse(&self, raw: &str) -> Result<Vec<EntryDraft>, ParseError>;
}

/// TOML vocabulary files: a top-level `[[voca]]` array of `word` + `[[voca.info]]` pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlVocaParser;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct VocaFile {
    voca: Vec<EntryDraft>,
}

impl TomlVocaParser {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl VocaParser for TomlVocaParser {
    fn parse(&self, raw: &str) -> Result<Vec<EntryDraft>, ParseError> {
        let file: VocaFile = toml::from_str(raw).map_err(|err| ParseError::Syntax {
            message: err.message().to_string(),
        })?;
        Ok(file.voca)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerPage;

    const SAMPLE: &str = r#"
[[voca]]
word = "terse"

[[voca.info]]
meaning = "brief"
synos = ["concise", "succinct"]
example = "a terse reply"

[[voca.info]]
meaning = "curt"

[[voca]]
word = "laconic"
info = [{ meaning = "using few words" }]
"#;

    #[test]
    fn parses_words_and_pages() {
        let drafts = TomlVocaParser::new().parse(SAMPLE).unwrap();

        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].word, "terse");
        assert_eq!(
            drafts[0].pages,
            vec![
                AnswerPage::new("brief")
                    .with_synonyms(["concise", "succinct"])
                    .with_example("a terse reply"),
                AnswerPage::new("curt"),
            ]
        );
        assert_eq!(drafts[1].pages, vec![AnswerPage::new("using few words")]);
    }

    #[test]
    fn concatenated_files_merge_into_one_list() {
        let second = "[[voca]]\nword = \"pithy\"\ninfo = [{ meaning = \"concise\" }]\n";
        let joined = format!("{SAMPLE}\n{second}\n");

        let drafts = TomlVocaParser::new().parse(&joined).unwrap();
        let words: Vec<_> = drafts.iter().map(|d| d.word.as_str()).collect();
        assert_eq!(words, ["terse", "laconic", "pithy"]);
    }

    #[test]
    fn missing_voca_table_fails() {
        let err = TomlVocaParser::new().parse("title = \"x\"").unwrap_err();
        assert!(matches!(err, ParseError::Syntax { .. }));
    }

    #[test]
    fn misspelled_field_fails() {
        let raw = "[[voca]]\nword = \"terse\"\ninfo = [{ meaning = \"brief\", synonyms = [\"x\"] }]\n";
        assert!(TomlVocaParser::new().parse(raw).is_err());
    }

    #[test]
    fn empty_voca_list_parses() {
        let drafts = TomlVocaParser::new().parse("voca = []").unwrap();
        assert!(drafts.is_empty());
    }
}
