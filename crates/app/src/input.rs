use std::fmt;
use std::path::PathBuf;

use services::{PageDirection, QuizIntent};

/// One line typed at the quiz prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Intent(QuizIntent),
    Load(Vec<PathBuf>),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    MissingFiles,
    Unknown(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::MissingFiles => write!(f, "`l` needs at least one file"),
            InputError::Unknown(raw) => write!(f, "unknown command: {raw} (type `h` for help)"),
        }
    }
}

impl std::error::Error for InputError {}

impl Command {
    /// An empty line counts as "don't know", like the default answer of the prompt.
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Self::Intent(QuizIntent::Unknown));
        };

        let command = match head {
            "y" | "Y" | "yes" => Self::Intent(QuizIntent::Known),
            "n" | "N" | "no" => Self::Intent(QuizIntent::Unknown),
            ">" | "." => Self::Intent(QuizIntent::PageNav(PageDirection::Next)),
            "<" | "," => Self::Intent(QuizIntent::PageNav(PageDirection::Prev)),
            "q" | "quit" => Self::Quit,
            "h" | "help" | "?" => Self::Help,
            "l" | "load" => {
                let files: Vec<PathBuf> = words.map(PathBuf::from).collect();
                if files.is_empty() {
                    return Err(InputError::MissingFiles);
                }
                Self::Load(files)
            }
            other => return Err(InputError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

/// Whitespace-separated paths typed at the filename prompt.
pub fn parse_filenames(line: &str) -> Vec<PathBuf> {
    line.split_whitespace().map(PathBuf::from).collect()
}

pub const FILENAME_PROMPT: &str = "Enter filenames: ";

pub const PROMPT: &str = "Do you know this word? (q/y/N, </> pages, l FILE...): ";

pub const HELP: &str = "\
  y        I know it, next word
  n, Enter show the answer
  <  >     previous / next answer page
  l FILE.. load vocabulary files (replaces the current set)
  q        quit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_line_reveals() {
        assert_eq!(
            Command::parse("   ").unwrap(),
            Command::Intent(QuizIntent::Unknown)
        );
    }

    #[test]
    fn page_keys_map_to_directions() {
        assert_eq!(
            Command::parse(">").unwrap(),
            Command::Intent(QuizIntent::PageNav(PageDirection::Next))
        );
        assert_eq!(
            Command::parse("<").unwrap(),
            Command::Intent(QuizIntent::PageNav(PageDirection::Prev))
        );
    }

    #[test]
    fn load_collects_paths() {
        assert_eq!(
            Command::parse("l a.toml b.toml").unwrap(),
            Command::Load(vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")])
        );
        assert_eq!(Command::parse("l").unwrap_err(), InputError::MissingFiles);
    }

    #[test]
    fn filename_line_splits_on_whitespace() {
        assert_eq!(
            parse_filenames("  demos/words.toml\tmore.toml "),
            [PathBuf::from("demos/words.toml"), PathBuf::from("more.toml")]
        );
        assert!(parse_filenames("   ").is_empty());
    }

    #[test]
    fn unknown_word_is_an_error() {
        assert!(matches!(
            Command::parse("maybe"),
            Err(InputError::Unknown(raw)) if raw == "maybe"
        ));
    }
}
