//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use voca_core::ParseError;
use voca_core::model::EntryError;

/// Errors emitted by the quiz session controller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no entries available for the quiz")]
    EmptyEntrySet,
    #[error("entry #{index} is invalid: {source}")]
    InvalidEntry {
        index: usize,
        #[source]
        source: EntryError,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("no vocabulary loaded")]
    Idle,
}

/// Errors emitted while reading vocabulary sources.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("no vocabulary files selected")]
    NoSources,
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("file reader task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
