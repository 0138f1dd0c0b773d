use thiserror::Error;

use crate::model::{ConfigError, EntryError};
use crate::parse::ParseError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Entry(#[from] EntryError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
