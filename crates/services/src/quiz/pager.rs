use voca_core::model::Entry;

/// Which way a page-navigation action moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirection {
    Prev,
    Next,
}

/// Visible page plus derived navigation-control visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView {
    pub index: usize,
    pub show_prev: bool,
    pub show_next: bool,
}

/// Tracks the displayed answer page of the active entry.
///
/// The index is clamped to `[0, page_count)`: moving past either end is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerPager {
    page_index: usize,
    page_count: usize,
}

impl AnswerPager {
    /// Open `entry` at page 0.
    ///
    /// A single-page entry gets `show_next == false` right away.
    #[must_use]
    pub fn open(entry: &Entry) -> (Self, PageView) {
        let pager = Self {
            page_index: 0,
            page_count: entry.page_count().max(1),
        };
        (pager, pager.view())
    }

    #[must_use]
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    #[must_use]
    pub fn view(&self) -> PageView {
        PageView {
            index: self.page_index,
            show_prev: self.page_index > 0,
            show_next: self.page_index + 1 < self.page_count,
        }
    }

    pub fn advance(&mut self) -> PageView {
        if self.page_index + 1 < self.page_count {
            self.page_index += 1;
        }
        self.view()
    }

    pub fn retreat(&mut self) -> PageView {
        if self.page_index > 0 {
            self.page_index -= 1;
        }
        self.view()
    }

    pub fn navigate(&mut self, direction: PageDirection) -> PageView {
        match direction {
            PageDirection::Prev => self.retreat(),
            PageDirection::Next => self.advance(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voca_core::model::{AnswerPage, EntryDraft};

    fn entry_with_pages(count: usize) -> Entry {
        let pages = (0..count)
            .map(|i| AnswerPage::new(format!("meaning {i}")))
            .collect();
        EntryDraft::new("word", pages).validate().unwrap()
    }

    #[test]
    fn single_page_never_shows_controls() {
        let (mut pager, view) = AnswerPager::open(&entry_with_pages(1));
        assert_eq!(
            view,
            PageView {
                index: 0,
                show_prev: false,
                show_next: false
            }
        );
        assert_eq!(pager.advance(), view);
        assert_eq!(pager.retreat(), view);
    }

    #[test]
    fn advance_clamps_at_last_page() {
        for count in 1..=5 {
            let (mut pager, _) = AnswerPager::open(&entry_with_pages(count));
            for _ in 0..count - 1 {
                pager.advance();
            }
            let last = pager.view();
            let clamped = pager.advance();

            assert_eq!(clamped, last);
            assert_eq!(clamped.index, count - 1);
            assert!(!clamped.show_next);
        }
    }

    #[test]
    fn retreat_from_first_page_is_noop() {
        let (mut pager, opened) = AnswerPager::open(&entry_with_pages(3));
        let view = pager.retreat();
        assert_eq!(view, opened);
        assert!(!view.show_prev);
        assert!(view.show_next);
    }

    #[test]
    fn middle_page_shows_both_controls() {
        let (mut pager, _) = AnswerPager::open(&entry_with_pages(3));
        let view = pager.navigate(PageDirection::Next);
        assert_eq!(
            view,
            PageView {
                index: 1,
                show_prev: true,
                show_next: true
            }
        );
        assert_eq!(pager.navigate(PageDirection::Prev).index, 0);
    }
}
