//! Language picker view model
//!
//! Pure presentation-side computation: merges the chapter's languages with
//! the session's pending additions, marks the active and original rows, and
//! works out which catalog languages can still be added. No I/O here; the
//! catalog itself comes from
//! [`crate::infrastructure::services::LanguageCatalogService`].

use looma_model::{Language, LanguageCode};

/// One selectable row in the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerRow {
    pub language: Language,
    /// Currently being edited; selecting it again is a no-op
    pub active: bool,
    /// The language the chapter was originally authored in
    pub original: bool,
}

impl PickerRow {
    /// Rows stay selectable unless they are the active language.
    pub fn selectable(&self) -> bool {
        !self.active
    }
}

/// Everything the picker needs to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePicker {
    pub rows: Vec<PickerRow>,
    /// Catalog languages not yet on the chapter, offered for adding
    pub addable: Vec<Language>,
    /// True while a language switch is loading; the whole picker disables
    pub disabled: bool,
}

impl LanguagePicker {
    pub fn build(
        available: &[Language],
        pending: &[Language],
        original: &LanguageCode,
        active: Option<&LanguageCode>,
        loading: bool,
        catalog: &[Language],
    ) -> Self {
        let mut merged: Vec<Language> = Vec::new();
        for language in available.iter().chain(pending) {
            if !merged.iter().any(|l| l.code == language.code) {
                merged.push(language.clone());
            }
        }

        let rows = merged
            .iter()
            .map(|language| PickerRow {
                active: active == Some(&language.code),
                original: &language.code == original,
                language: language.clone(),
            })
            .collect();

        let addable = catalog
            .iter()
            .filter(|candidate| !merged.iter().any(|l| l.code == candidate.code))
            .cloned()
            .collect();

        Self {
            rows,
            addable,
            disabled: loading,
        }
    }
}
