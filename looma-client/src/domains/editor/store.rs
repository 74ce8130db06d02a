//! VersionStore - single source of truth for per-language draft state
//!
//! One [`LanguageDraft`] per language touched in the session. Drafts are
//! created lazily and never removed while the editor lives; switching away
//! from a language keeps its draft (and any unsaved edits) intact.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use looma_model::{Language, LanguageCode};

/// Client-held state for one language of the chapter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LanguageDraft {
    /// Current editor content, possibly unsaved
    pub content: String,
    /// True when `content` differs from the last fetched/saved value
    pub dirty: bool,
    /// True while a network fetch for this language is in flight
    pub fetching: bool,
    /// Last fetch/save failure for this language, cleared on the next attempt
    pub error: Option<String>,
    pub last_fetched_at: Option<DateTime<Utc>>,
    pub last_saved_at: Option<DateTime<Utc>>,
}

/// Map of language code → draft, plus the session-local pending languages
///
/// Mutated exclusively by the editor controller (single writer); the
/// presentation layer only ever sees cloned snapshots.
#[derive(Debug, Clone, Default)]
pub struct VersionStore {
    drafts: HashMap<LanguageCode, LanguageDraft>,
    pending: Vec<Language>,
}

impl VersionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a draft, if that language was ever touched.
    pub fn draft(&self, code: &LanguageCode) -> Option<&LanguageDraft> {
        self.drafts.get(code)
    }

    /// Get or lazily create the draft for a language.
    pub fn ensure_draft(&mut self, code: &LanguageCode) -> &mut LanguageDraft {
        self.drafts.entry(code.clone()).or_default()
    }

    /// Mark a fetch as started for `code`.
    ///
    /// Clears every other draft's fetching flag first: at most one fetch is
    /// in flight at any time, so a newly started one supersedes whatever
    /// flag an aborted predecessor left behind.
    pub fn begin_fetch(&mut self, code: &LanguageCode) {
        self.clear_fetching();
        let draft = self.ensure_draft(code);
        draft.fetching = true;
        draft.error = None;
    }

    /// Drop all fetching flags (used when a fetch starts without a known
    /// target language, or when the editor shuts down mid-fetch).
    pub fn clear_fetching(&mut self) {
        for draft in self.drafts.values_mut() {
            draft.fetching = false;
        }
    }

    /// Commit a fetched content payload for `code`.
    ///
    /// Unsaved local edits win: the incoming content is stored only when the
    /// draft is not dirty. Returns whether the content was actually written.
    pub fn commit_fetch(
        &mut self,
        code: &LanguageCode,
        content: &str,
        now: DateTime<Utc>,
    ) -> bool {
        let draft = self.ensure_draft(code);
        let overwritten = if draft.dirty {
            log::debug!(
                "VersionStore: keeping dirty draft for {code}, discarding fetched content"
            );
            false
        } else {
            draft.content = content.to_string();
            true
        };
        draft.fetching = false;
        draft.error = None;
        draft.last_fetched_at = Some(now);
        overwritten
    }

    /// Record a fetch failure for `code`.
    pub fn fail_fetch(&mut self, code: &LanguageCode, message: impl Into<String>) {
        let draft = self.ensure_draft(code);
        draft.fetching = false;
        draft.error = Some(message.into());
    }

    /// Apply a local edit to `code` and mark it dirty.
    pub fn edit(&mut self, code: &LanguageCode, content: impl Into<String>) {
        let draft = self.ensure_draft(code);
        draft.content = content.into();
        draft.dirty = true;
    }

    /// Record a successful save for `code`.
    pub fn mark_saved(&mut self, code: &LanguageCode, now: DateTime<Utc>) {
        let draft = self.ensure_draft(code);
        draft.dirty = false;
        draft.error = None;
        draft.last_saved_at = Some(now);
    }

    /// Record a failed save for `code`; the draft stays dirty so the user
    /// can retry.
    pub fn fail_save(&mut self, code: &LanguageCode, message: impl Into<String>) {
        let draft = self.ensure_draft(code);
        draft.error = Some(message.into());
    }

    pub fn is_dirty(&self, code: &LanguageCode) -> bool {
        self.drafts.get(code).is_some_and(|draft| draft.dirty)
    }

    /// Languages added this session that the server may not list yet.
    pub fn pending(&self) -> &[Language] {
        &self.pending
    }

    /// Remember a session-local language addition.
    pub fn add_pending(&mut self, language: Language) {
        if !self.pending.iter().any(|l| l.code == language.code) {
            self.pending.push(language);
        }
    }

    /// All drafts, for snapshotting.
    pub fn drafts(&self) -> &HashMap<LanguageCode, LanguageDraft> {
        &self.drafts
    }
}
