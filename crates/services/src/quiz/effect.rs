use voca_core::model::{Entry, SynonymReference};

use super::pager::PageView;

/// UI regions whose visibility the quiz controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Answer,
    Synonyms,
    Example,
    PrevPage,
    NextPage,
}

/// An observable UI update. Renderers apply these in order and never report back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayEffect {
    SetWord(String),
    SetVisible(Region, bool),
    SetMeaning(String),
    SetSynonyms(Option<String>),
    SetExample(Option<String>),
}

/// Effects for displaying page `view.index` of `entry`.
///
/// Every reveal and every page move goes through here, so returning to a page
/// always reproduces the same list.
pub(crate) fn page_effects(
    entry: &Entry,
    view: PageView,
    reference: SynonymReference,
) -> Vec<DisplayEffect> {
    let Some(page) = entry.page(view.index) else {
        return Vec::new();
    };

    let reference_page = match reference {
        SynonymReference::FirstPage => entry.first_page(),
        SynonymReference::CurrentPage => page,
    };
    let show_synonyms = reference_page.synonyms().is_some();
    let synonyms = if show_synonyms {
        page.joined_synonyms()
    } else {
        None
    };
    let example = page.example().map(str::to_string);

    vec![
        DisplayEffect::SetVisible(Region::PrevPage, view.show_prev),
        DisplayEffect::SetVisible(Region::NextPage, view.show_next),
        DisplayEffect::SetMeaning(page.meaning().to_string()),
        DisplayEffect::SetVisible(Region::Synonyms, show_synonyms),
        DisplayEffect::SetSynonyms(synonyms),
        DisplayEffect::SetVisible(Region::Example, example.is_some()),
        DisplayEffect::SetExample(example),
        DisplayEffect::SetVisible(Region::Answer, true),
    ]
}

/// Effects for presenting a new prompt word with the answer hidden.
pub(crate) fn prompt_effects(entry: &Entry) -> Vec<DisplayEffect> {
    vec![
        DisplayEffect::SetWord(entry.word().to_string()),
        DisplayEffect::SetVisible(Region::Answer, false),
    ]
}
