mod config;
mod entry;

pub use config::{ConfigError, QuizConfig, QuizConfigDraft, SourceJoin, SynonymReference};
pub use entry::{AnswerPage, Entry, EntryDraft, EntryError};
