use voca_core::RandomSource;
use voca_core::VocaParser;
use voca_core::model::{Entry, EntryDraft, QuizConfig};

use crate::error::QuizError;

use super::effect::{DisplayEffect, Region, page_effects, prompt_effects};
use super::pager::{AnswerPager, PageDirection};
use super::selector::Selector;

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Nothing loaded yet.
    Idle,
    /// A word is shown, its answer hidden.
    Ready,
    /// The active word's answer is shown and paging is live.
    Revealed,
}

/// User actions that do not carry data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizIntent {
    Known,
    Unknown,
    PageNav(PageDirection),
}

/// Entries of one successful load plus the active selection.
///
/// `active_entry` and `pager` are always replaced together with the entry set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    entries: Vec<Entry>,
    active_entry: usize,
    pager: Option<AnswerPager>,
}

impl QuizSession {
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn active_entry_index(&self) -> usize {
        self.active_entry
    }

    #[must_use]
    pub fn active_entry(&self) -> &Entry {
        &self.entries[self.active_entry]
    }

    /// Displayed page index, `None` until the answer is revealed.
    #[must_use]
    pub fn active_page_index(&self) -> Option<usize> {
        self.pager.map(|pager| pager.page_index())
    }
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Owns the quiz session and turns user actions into display effects.
#[derive(Debug, Clone)]
pub struct SessionController {
    config: QuizConfig,
    selector: Selector,
    session: Option<QuizSession>,
}

impl SessionController {
    /// Controller drawing from a seeded RNG when the config carries a seed.
    #[must_use]
    pub fn new(config: QuizConfig) -> Self {
        Self::with_random(config, RandomSource::from_seed(config.seed()))
    }

    #[must_use]
    pub fn with_random(config: QuizConfig, random: RandomSource) -> Self {
        Self {
            config,
            selector: Selector::new(random),
            session: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        match &self.session {
            None => SessionState::Idle,
            Some(session) if session.pager.is_some() => SessionState::Revealed,
            Some(_) => SessionState::Ready,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn active_entry(&self) -> Option<&Entry> {
        self.session.as_ref().map(QuizSession::active_entry)
    }

    #[must_use]
    pub fn page_index(&self) -> Option<usize> {
        self.session
            .as_ref()
            .and_then(QuizSession::active_page_index)
    }

    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.session.as_ref().map_or(0, |session| session.entries.len())
    }

    /// Replace the session with a freshly parsed entry set.
    ///
    /// The whole batch is rejected if any draft is invalid. On failure the
    /// previous session, if any, is left untouched and no effects are emitted.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyEntrySet` for an empty batch.
    /// Returns `QuizError::InvalidEntry` for the first draft that fails validation.
    pub fn on_load(&mut self, drafts: Vec<EntryDraft>) -> Result<Vec<DisplayEffect>, QuizError> {
        let result = self.replace_entries(drafts);
        if let Err(err) = &result {
            tracing::warn!(state = ?self.state(), "load refused: {err}");
        }
        result
    }

    /// Parse `text` and load the resulting entries.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Parse` if the parser rejects the text, otherwise
    /// the errors of [`SessionController::on_load`].
    pub fn load_text(
        &mut self,
        parser: &dyn VocaParser,
        text: &str,
    ) -> Result<Vec<DisplayEffect>, QuizError> {
        match parser.parse(text) {
            Ok(drafts) => self.on_load(drafts),
            Err(err) => {
                tracing::warn!(state = ?self.state(), "load refused: {err}");
                Err(err.into())
            }
        }
    }

    fn replace_entries(
        &mut self,
        drafts: Vec<EntryDraft>,
    ) -> Result<Vec<DisplayEffect>, QuizError> {
        let entries = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| {
                draft
                    .validate()
                    .map_err(|source| QuizError::InvalidEntry { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let active_entry = self.selector.select_random(&entries)?;
        let session = QuizSession {
            entries,
            active_entry,
            pager: None,
        };
        let effects = prompt_effects(session.active_entry());
        tracing::debug!(
            entries = session.entries.len(),
            active_entry,
            "entries loaded"
        );
        self.session = Some(session);
        Ok(effects)
    }

    /// Draw a new word and hide the answer.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Idle` if nothing is loaded.
    pub fn on_known(&mut self) -> Result<Vec<DisplayEffect>, QuizError> {
        let Some(session) = self.session.as_mut() else {
            return Err(QuizError::Idle);
        };

        session.active_entry = self.selector.select_random(&session.entries)?;
        session.pager = None;
        tracing::debug!(active_entry = session.active_entry, "next word drawn");

        Ok(vec![
            DisplayEffect::SetVisible(Region::Answer, false),
            DisplayEffect::SetWord(session.active_entry().word().to_string()),
        ])
    }

    /// Reveal the active word's answer at page 0.
    ///
    /// Calling this again while revealed re-opens at page 0.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Idle` if nothing is loaded.
    pub fn on_unknown(&mut self) -> Result<Vec<DisplayEffect>, QuizError> {
        let Some(session) = self.session.as_mut() else {
            return Err(QuizError::Idle);
        };

        let entry = &session.entries[session.active_entry];
        let (pager, view) = AnswerPager::open(entry);
        let effects = page_effects(entry, view, self.config.synonym_reference());
        session.pager = Some(pager);
        tracing::debug!(
            active_entry = session.active_entry,
            pages = pager.page_count(),
            "answer revealed"
        );
        Ok(effects)
    }

    /// Move between answer pages. Ignored unless the answer is revealed.
    pub fn on_page_nav(&mut self, direction: PageDirection) -> Vec<DisplayEffect> {
        let Some(session) = self.session.as_mut() else {
            return Vec::new();
        };
        let Some(pager) = session.pager.as_mut() else {
            return Vec::new();
        };

        let view = pager.navigate(direction);
        tracing::debug!(?direction, page = view.index, "answer page changed");
        page_effects(
            &session.entries[session.active_entry],
            view,
            self.config.synonym_reference(),
        )
    }

    /// Route a data-less intent to its handler.
    ///
    /// # Errors
    ///
    /// Returns the error of the routed handler.
    pub fn dispatch(&mut self, intent: QuizIntent) -> Result<Vec<DisplayEffect>, QuizError> {
        match intent {
            QuizIntent::Known => self.on_known(),
            QuizIntent::Unknown => self.on_unknown(),
            QuizIntent::PageNav(direction) => Ok(self.on_page_nav(direction)),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
