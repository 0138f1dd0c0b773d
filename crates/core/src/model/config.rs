use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid join strategy `{raw}` (expected `newline` or `raw`)")]
    InvalidJoin { raw: String },

    #[error("invalid synonym reference `{raw}` (expected `first` or `current`)")]
    InvalidSynonymReference { raw: String },

    #[error("invalid seed `{raw}`")]
    InvalidSeed { raw: String },
}

//
// ─── SOURCE JOIN ───────────────────────────────────────────────────────────────
//

/// How the text of several uploaded files is concatenated before parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceJoin {
    /// Every blob is followed by a single `\n`.
    #[default]
    Newline,
    /// Blobs are concatenated as-is.
    Raw,
}

impl SourceJoin {
    /// Concatenate the blobs in order.
    pub fn join<I, S>(self, blobs: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = String::new();
        for blob in blobs {
            out.push_str(blob.as_ref());
            if self == Self::Newline {
                out.push('\n');
            }
        }
        out
    }
}

impl FromStr for SourceJoin {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "newline" | "nl" => Ok(Self::Newline),
            "raw" | "concat" => Ok(Self::Raw),
            _ => Err(ConfigError::InvalidJoin { raw: raw.into() }),
        }
    }
}

impl fmt::Display for SourceJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Newline => f.write_str("newline"),
            Self::Raw => f.write_str("raw"),
        }
    }
}

//
// ─── SYNONYM REFERENCE ─────────────────────────────────────────────────────────
//

/// Which page decides whether the synonyms region is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SynonymReference {
    /// Page 0 of the active entry, whatever page is displayed.
    #[default]
    FirstPage,
    /// The page currently displayed.
    CurrentPage,
}

impl FromStr for SynonymReference {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "first" | "first-page" => Ok(Self::FirstPage),
            "current" | "current-page" => Ok(Self::CurrentPage),
            _ => Err(ConfigError::InvalidSynonymReference { raw: raw.into() }),
        }
    }
}

impl fmt::Display for SynonymReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstPage => f.write_str("first"),
            Self::CurrentPage => f.write_str("current"),
        }
    }
}

//
// ─── QUIZ CONFIG ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuizConfig {
    join: SourceJoin,
    synonym_reference: SynonymReference,
    seed: Option<u64>,
}

/// Raw, string-typed configuration as read from the environment or flags.
#[derive(Debug, Clone, Default)]
pub struct QuizConfigDraft {
    pub join: Option<String>,
    pub synonym_reference: Option<String>,
    pub seed: Option<String>,
}

impl QuizConfigDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill unset fields from `other`.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self {
            join: self.join.or(other.join),
            synonym_reference: self.synonym_reference.or(other.synonym_reference),
            seed: self.seed.or(other.seed),
        }
    }

    /// Validate the draft; blank values fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for any unrecognised value.
    pub fn validate(self) -> Result<QuizConfig, ConfigError> {
        let join = match normalize_optional(self.join) {
            Some(raw) => raw.parse()?,
            None => SourceJoin::default(),
        };
        let synonym_reference = match normalize_optional(self.synonym_reference) {
            Some(raw) => raw.parse()?,
            None => SynonymReference::default(),
        };
        let seed = normalize_optional(self.seed)
            .map(|raw| {
                raw.parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed { raw })
            })
            .transpose()?;

        Ok(QuizConfig {
            join,
            synonym_reference,
            seed,
        })
    }
}

impl QuizConfig {
    #[must_use]
    pub fn new(join: SourceJoin, synonym_reference: SynonymReference, seed: Option<u64>) -> Self {
        Self {
            join,
            synonym_reference,
            seed,
        }
    }

    #[must_use]
    pub fn join(&self) -> SourceJoin {
        self.join
    }

    #[must_use]
    pub fn synonym_reference(&self) -> SynonymReference {
        self.synonym_reference
    }

    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    #[must_use]
    pub fn with_synonym_reference(mut self, synonym_reference: SynonymReference) -> Self {
        self.synonym_reference = synonym_reference;
        self
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
