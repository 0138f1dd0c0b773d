use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EntryError {
    #[error("entry word cannot be empty")]
    EmptyWord,

    #[error("entry `{word}` has no answer pages")]
    NoPages { word: String },

    #[error("entry `{word}` has an empty meaning on page {page}")]
    EmptyMeaning { word: String, page: usize },
}

//
// ─── ANSWER PAGE ───────────────────────────────────────────────────────────────
//

/// One page of answer detail for an entry.
///
/// `synonyms` and `example` are visibility-bearing: `None` hides the region,
/// `Some(vec![])` still shows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnswerPage {
    pub meaning: String,
    #[serde(default, rename = "synos")]
    pub synonyms: Option<Vec<String>>,
    #[serde(default)]
    pub example: Option<String>,
}

impl AnswerPage {
    pub fn new(meaning: impl Into<String>) -> Self {
        Self {
            meaning: meaning.into(),
            synonyms: None,
            example: None,
        }
    }

    #[must_use]
    pub fn with_synonyms<I, S>(mut self, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.synonyms = Some(synonyms.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = Some(example.into());
        self
    }

    pub fn meaning(&self) -> &str {
        &self.meaning
    }

    pub fn synonyms(&self) -> Option<&[String]> {
        self.synonyms.as_deref()
    }

    pub fn example(&self) -> Option<&str> {
        self.example.as_deref()
    }

    /// Synonyms joined with `", "`, or `None` when the page defines none.
    #[must_use]
    pub fn joined_synonyms(&self) -> Option<String> {
        self.synonyms.as_ref().map(|synos| synos.join(", "))
    }
}

//
// ─── ENTRY DRAFT ───────────────────────────────────────────────────────────────
//

/// Unvalidated entry as produced by a parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntryDraft {
    pub word: String,
    #[serde(rename = "info")]
    pub pages: Vec<AnswerPage>,
}

impl EntryDraft {
    pub fn new(word: impl Into<String>, pages: Vec<AnswerPage>) -> Self {
        Self {
            word: word.into(),
            pages,
        }
    }

    /// Validate the draft into an immutable `Entry`.
    ///
    /// # Errors
    ///
    /// Returns `EntryError::EmptyWord` if the word is blank.
    /// Returns `EntryError::NoPages` if there is no answer page.
    /// Returns `EntryError::EmptyMeaning` if any page has a blank meaning.
    pub fn validate(self) -> Result<Entry, EntryError> {
        if self.word.trim().is_empty() {
            return Err(EntryError::EmptyWord);
        }
        if self.pages.is_empty() {
            return Err(EntryError::NoPages { word: self.word });
        }
        if let Some(page) = self
            .pages
            .iter()
            .position(|page| page.meaning.trim().is_empty())
        {
            return Err(EntryError::EmptyMeaning {
                word: self.word,
                page,
            });
        }

        Ok(Entry {
            word: self.word,
            pages: self.pages,
        })
    }
}

//
// ─── ENTRY ─────────────────────────────────────────────────────────────────────
//

/// A validated vocabulary item: a prompt word plus at least one answer page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    word: String,
    pages: Vec<AnswerPage>,
}

impl Entry {
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn page(&self, index: usize) -> Option<&AnswerPage> {
        self.pages.get(index)
    }

    /// First answer page. Always present for a validated entry.
    #[must_use]
    pub fn first_page(&self) -> &AnswerPage {
        &self.pages[0]
    }

    /// Number of answer pages, always `>= 1`.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
