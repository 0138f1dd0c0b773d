use std::num::NonZeroUsize;

use voca_core::RandomSource;
use voca_core::model::Entry;

use crate::error::QuizError;

/// Picks the active entry. Keeps no history, so repeats are possible.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    random: RandomSource,
}

impl Selector {
    #[must_use]
    pub fn new(random: RandomSource) -> Self {
        Self { random }
    }

    /// Draw an index uniformly from `[0, entries.len())`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyEntrySet` if `entries` is empty; the random
    /// source is not consulted in that case.
    pub fn select_random(&mut self, entries: &[Entry]) -> Result<usize, QuizError> {
        let bound = NonZeroUsize::new(entries.len()).ok_or(QuizError::EmptyEntrySet)?;
        Ok(self.random.random_int(bound))
    }
}
