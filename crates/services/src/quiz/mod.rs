mod controller;
mod effect;
mod pager;
mod selector;

pub use controller::{QuizIntent, QuizSession, SessionController, SessionState};
pub use effect::{DisplayEffect, Region};
pub use pager::{AnswerPager, PageDirection, PageView};
pub use selector::Selector;
