use std::fmt::Write as _;

use services::{DisplayEffect, Region};

const BOX_WIDTH: usize = 48;

/// Terminal-side copy of everything the quiz has asked to display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    word: Option<String>,
    meaning: String,
    synonyms: Option<String>,
    example: Option<String>,
    answer: bool,
    synonyms_region: bool,
    example_region: bool,
    prev: bool,
    next: bool,
}

impl Screen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, effects: impl IntoIterator<Item = DisplayEffect>) {
        for effect in effects {
            match effect {
                DisplayEffect::SetWord(word) => self.word = Some(word),
                DisplayEffect::SetMeaning(meaning) => self.meaning = meaning,
                DisplayEffect::SetSynonyms(synonyms) => self.synonyms = synonyms,
                DisplayEffect::SetExample(example) => self.example = example,
                DisplayEffect::SetVisible(region, visible) => *self.flag_mut(region) = visible,
            }
        }
    }

    #[must_use]
    pub fn is_visible(&self, region: Region) -> bool {
        match region {
            Region::Answer => self.answer,
            Region::Synonyms => self.synonyms_region,
            Region::Example => self.example_region,
            Region::PrevPage => self.prev,
            Region::NextPage => self.next,
        }
    }

    fn flag_mut(&mut self, region: Region) -> &mut bool {
        match region {
            Region::Answer => &mut self.answer,
            Region::Synonyms => &mut self.synonyms_region,
            Region::Example => &mut self.example_region,
            Region::PrevPage => &mut self.prev,
            Region::NextPage => &mut self.next,
        }
    }

    /// Render the visible regions as plain text (ANSI bold for the word box).
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let Some(word) = &self.word else {
            out.push_str("No vocabulary loaded. Use `l FILE...` to load files.\n");
            return out;
        };

        let rule = "-".repeat(BOX_WIDTH + 2);
        let _ = writeln!(out, "\x1b[1m{rule}");
        let _ = writeln!(out, "|{word:^width$}|", width = BOX_WIDTH);
        let _ = writeln!(out, "{rule}\x1b[0m");

        if !self.is_visible(Region::Answer) {
            return out;
        }

        let _ = writeln!(out, "  Meaning: {}", self.meaning);
        if self.is_visible(Region::Synonyms) {
            let _ = writeln!(out, "  Synonyms: {}", self.synonyms.as_deref().unwrap_or(""));
        }
        if self.is_visible(Region::Example) {
            let _ = writeln!(out, "  Example: {}", self.example.as_deref().unwrap_or(""));
        }

        let mut nav = Vec::new();
        if self.is_visible(Region::PrevPage) {
            nav.push("[<] previous");
        }
        if self.is_visible(Region::NextPage) {
            nav.push("[>] next");
        }
        if !nav.is_empty() {
            let _ = writeln!(out, "  {}", nav.join("  "));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revealed() -> Screen {
        let mut screen = Screen::new();
        screen.apply([
            DisplayEffect::SetWord("terse".into()),
            DisplayEffect::SetVisible(Region::Answer, false),
            DisplayEffect::SetVisible(Region::PrevPage, false),
            DisplayEffect::SetVisible(Region::NextPage, true),
            DisplayEffect::SetMeaning("brief".into()),
            DisplayEffect::SetVisible(Region::Synonyms, true),
            DisplayEffect::SetSynonyms(Some("concise, succinct".into())),
            DisplayEffect::SetVisible(Region::Example, false),
            DisplayEffect::SetExample(None),
            DisplayEffect::SetVisible(Region::Answer, true),
        ]);
        screen
    }

    #[test]
    fn empty_screen_asks_for_files() {
        assert!(Screen::new().render().contains("No vocabulary loaded"));
    }

    #[test]
    fn effects_apply_in_order() {
        let mut screen = revealed();
        assert!(screen.is_visible(Region::Answer));

        screen.apply([
            DisplayEffect::SetVisible(Region::Answer, false),
            DisplayEffect::SetWord("laconic".into()),
        ]);
        assert!(!screen.is_visible(Region::Answer));
        let text = screen.render();
        assert!(text.contains("laconic"));
        assert!(!text.contains("Meaning"));
    }

    #[test]
    fn revealed_answer_lists_visible_regions() {
        let text = revealed().render();

        assert!(text.contains("Meaning: brief"));
        assert!(text.contains("Synonyms: concise, succinct"));
        assert!(!text.contains("Example"));
        assert!(text.contains("[>] next"));
        assert!(!text.contains("[<] previous"));
    }
}
