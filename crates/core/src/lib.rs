#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod parse;
pub mod random;

pub use error::Error;
pub use parse::{ParseError, TomlVocaParser, VocaParser};
pub use random::RandomSource;
