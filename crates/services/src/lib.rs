#![forbid(unsafe_code)]

pub mod error;
pub mod loader;
pub mod quiz;

pub use voca_core::RandomSource;

pub use error::{LoadError, QuizError};
pub use loader::SourceLoader;
pub use quiz::{
    AnswerPager, DisplayEffect, PageDirection, PageView, QuizIntent, QuizSession, Region,
    Selector, SessionController, SessionState,
};
