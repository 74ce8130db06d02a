//! ChapterEditor - orchestration point for multi-language chapter editing
//!
//! The editor is the single writer for the version store and the only
//! component that moves the active language or starts a content fetch.
//! Fetches run as spawned tasks with last-request-wins admission (see
//! [`super::fetch`]); every other remote operation awaits inline behind a
//! busy flag the presentation layer is expected to honor.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, Weak};

use chrono::Utc;
use log::{debug, warn};
use looma_model::prelude::*;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domains::editor::errors::EditorError;
use crate::domains::editor::fetch::FetchGate;
use crate::domains::editor::notify::{
    EditorSubscriber, Notification, NotificationHub,
};
use crate::domains::editor::storage::LastLanguageStore;
use crate::domains::editor::store::{LanguageDraft, VersionStore};
use crate::infrastructure::constants::messages;
use crate::infrastructure::services::ChapterService;

/// Owned view of the editor state for presentation layers
#[derive(Debug, Clone)]
pub struct EditorSnapshot {
    pub chapter: Option<Chapter>,
    pub active_language: Option<LanguageCode>,
    /// True while a language fetch is outstanding
    pub loading_language: bool,
    /// True while a draft save is outstanding
    pub saving: bool,
    /// True while a price save is outstanding
    pub price_saving: bool,
    pub versions: HashMap<LanguageCode, LanguageDraft>,
    pub pending_languages: Vec<Language>,
    /// Whether the active language has unsaved edits
    pub dirty_active: bool,
}

struct EditorState {
    chapter: Option<Chapter>,
    active_language: Option<LanguageCode>,
    loading_language: bool,
    saving: bool,
    price_saving: bool,
    store: VersionStore,
    gate: FetchGate,
    in_flight: Option<JoinHandle<()>>,
    hub: NotificationHub,
}

/// Orchestrator for one chapter's editing session
///
/// Cheap to clone; clones share the same state. Drop the last clone (or
/// call [`ChapterEditor::shutdown`]) when the editing surface unmounts.
#[derive(Clone)]
pub struct ChapterEditor {
    chapter_id: ChapterId,
    service: Arc<dyn ChapterService>,
    last_language: Arc<dyn LastLanguageStore>,
    state: Arc<RwLock<EditorState>>,
    revision: watch::Sender<u64>,
}

impl std::fmt::Debug for ChapterEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChapterEditor")
            .field("chapter_id", &self.chapter_id)
            .finish()
    }
}

impl ChapterEditor {
    pub fn new(
        chapter_id: ChapterId,
        service: Arc<dyn ChapterService>,
        last_language: Arc<dyn LastLanguageStore>,
    ) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            chapter_id,
            service,
            last_language,
            state: Arc::new(RwLock::new(EditorState {
                chapter: None,
                active_language: None,
                loading_language: false,
                saving: false,
                price_saving: false,
                store: VersionStore::new(),
                gate: FetchGate::new(),
                in_flight: None,
                hub: NotificationHub::new(),
            })),
            revision,
        }
    }

    pub fn chapter_id(&self) -> ChapterId {
        self.chapter_id
    }

    /// Receiver that ticks on every state change; presentation layers
    /// re-read [`ChapterEditor::snapshot`] when it does.
    pub fn changes(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Register a notification subscriber (toasts).
    pub fn subscribe(&self, subscriber: Weak<dyn EditorSubscriber>) {
        self.state.write().unwrap().hub.subscribe(subscriber);
    }

    /// Start the initial content fetch: the remembered last language when
    /// one is stored for this chapter, otherwise the server's default.
    pub fn load(&self) {
        let remembered = self.last_language.load(self.chapter_id);
        debug!(
            "[ChapterEditor] Loading chapter {} (remembered language: {:?})",
            self.chapter_id, remembered
        );
        self.begin_fetch(remembered);
    }

    /// Switch the editor to another language.
    ///
    /// No-op when the chapter hasn't loaded yet or `code` is already
    /// active. Warning about unsaved changes in the current language is the
    /// caller's job; this method switches unconditionally.
    pub fn switch_language(&self, code: LanguageCode) {
        {
            let state = self.state.read().unwrap();
            if state.chapter.is_none() {
                debug!("[ChapterEditor] Ignoring switch before initial load");
                return;
            }
            if state.active_language.as_ref() == Some(&code) {
                return;
            }
        }
        self.begin_fetch(Some(code));
    }

    /// Replace the active draft's content and mark it dirty. No-op without
    /// an active language; never touches the network.
    pub fn update_content(&self, content: impl Into<String>) {
        {
            let mut state = self.state.write().unwrap();
            let Some(active) = state.active_language.clone() else {
                return;
            };
            state.store.edit(&active, content);
        }
        self.bump();
    }

    /// Add a language to the chapter and start editing it.
    ///
    /// Appending is skipped when the chapter already lists the language;
    /// either way an empty draft is ensured and the editor switches to it.
    pub fn add_language(&self, language: Language) {
        let code = language.code.clone();
        {
            let mut state = self.state.write().unwrap();
            let Some(chapter) = state.chapter.as_mut() else {
                debug!("[ChapterEditor] Ignoring add_language before initial load");
                return;
            };
            if chapter.add_language(language.clone()) {
                state.store.add_pending(language);
            }
            state.store.ensure_draft(&code);
        }
        self.bump();
        self.switch_language(code);
    }

    /// Persist the active language's draft.
    ///
    /// Blank content is rejected locally: no request is issued and the
    /// draft stays dirty. A failed save also stays dirty, with the error
    /// mirrored onto the draft so the user can retry.
    pub async fn save_active_language(
        &self,
        allow_ai_translation: bool,
    ) -> Result<(), EditorError> {
        let (active, request) = {
            let state = self.state.read().unwrap();
            let chapter = state
                .chapter
                .as_ref()
                .ok_or(EditorError::ChapterNotLoaded)?;
            let active = state
                .active_language
                .clone()
                .ok_or(EditorError::NoActiveLanguage)?;
            let content = state
                .store
                .draft(&active)
                .map(|draft| draft.content.clone())
                .unwrap_or_default();

            if content.trim().is_empty() {
                drop(state);
                let error =
                    EditorError::Validation(messages::EMPTY_CONTENT.to_string());
                self.notify(Notification::error(error.user_message()));
                return Err(error);
            }

            let mut versions = HashMap::new();
            versions.insert(active.clone(), content);
            let request = ChapterUpdateRequest {
                title: chapter.title.clone(),
                status: chapter.publication_status,
                last_update: Utc::now(),
                price: chapter.price,
                allow_ai_translation,
                versions,
            };
            (active, request)
        };

        {
            let mut state = self.state.write().unwrap();
            state.saving = true;
        }
        self.bump();

        let result = self.service.update_chapter(self.chapter_id, &request).await;

        let outcome = {
            let mut state = self.state.write().unwrap();
            state.saving = false;
            match result {
                Ok(()) => {
                    state.store.mark_saved(&active, Utc::now());
                    if let Some(chapter) = state.chapter.as_mut() {
                        chapter.allow_ai_translation = allow_ai_translation;
                    }
                    Ok(())
                }
                Err(err) => {
                    let error = EditorError::from(err);
                    state.store.fail_save(&active, error.user_message());
                    Err(error)
                }
            }
        };

        match &outcome {
            Ok(()) => self.notify(Notification::success(messages::SAVE_SUCCESS)),
            Err(error) => self.notify(Notification::error(error.user_message())),
        }
        outcome
    }

    /// Persist only the chapter price; independent of any language state.
    pub async fn save_price(&self) -> Result<(), EditorError> {
        let price = {
            let state = self.state.read().unwrap();
            state
                .chapter
                .as_ref()
                .ok_or(EditorError::ChapterNotLoaded)?
                .price
        };

        {
            let mut state = self.state.write().unwrap();
            state.price_saving = true;
        }
        self.bump();

        let result = self
            .service
            .update_price(self.chapter_id, &PriceUpdateRequest { price })
            .await;

        {
            let mut state = self.state.write().unwrap();
            state.price_saving = false;
        }

        let outcome = result.map_err(EditorError::from);
        match &outcome {
            Ok(()) => {
                self.notify(Notification::success(messages::PRICE_SAVE_SUCCESS))
            }
            Err(error) => self.notify(Notification::error(error.user_message())),
        }
        outcome
    }

    /// Local title edit; persisted by the next draft save.
    pub fn set_title(&self, title: impl Into<String>) {
        {
            let mut state = self.state.write().unwrap();
            if let Some(chapter) = state.chapter.as_mut() {
                chapter.title = title.into();
            }
        }
        self.bump();
    }

    /// Local price edit; persisted by [`ChapterEditor::save_price`] or the
    /// next draft save.
    pub fn set_price(&self, price: f64) {
        {
            let mut state = self.state.write().unwrap();
            if let Some(chapter) = state.chapter.as_mut() {
                chapter.price = price;
            }
        }
        self.bump();
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> EditorSnapshot {
        let state = self.state.read().unwrap();
        let dirty_active = state
            .active_language
            .as_ref()
            .map(|code| state.store.is_dirty(code))
            .unwrap_or(false);
        EditorSnapshot {
            chapter: state.chapter.clone(),
            active_language: state.active_language.clone(),
            loading_language: state.loading_language,
            saving: state.saving,
            price_saving: state.price_saving,
            versions: state.store.drafts().clone(),
            pending_languages: state.store.pending().to_vec(),
            dirty_active,
        }
    }

    /// Abort any in-flight fetch; call when the editing surface unmounts.
    pub fn shutdown(&self) {
        let mut state = self.state.write().unwrap();
        if let Some(handle) = state.in_flight.take() {
            handle.abort();
        }
        state.store.clear_fetching();
        state.loading_language = false;
    }

    /// Start a content fetch for `target` (None = server default language),
    /// superseding whatever fetch is currently in flight.
    fn begin_fetch(&self, target: Option<LanguageCode>) {
        let ticket = {
            let mut state = self.state.write().unwrap();
            if let Some(previous) = state.in_flight.take() {
                previous.abort();
            }
            let ticket = state.gate.issue();
            match &target {
                Some(code) => state.store.begin_fetch(code),
                None => state.store.clear_fetching(),
            }
            state.loading_language = true;
            ticket
        };
        self.bump();

        let editor = self.clone();
        let handle = tokio::spawn(async move {
            let result = editor
                .service
                .fetch_content(editor.chapter_id, target.as_ref())
                .await;

            let persist = {
                let mut state = editor.state.write().unwrap();
                if !state.gate.admits(ticket) {
                    // A newer fetch superseded this one; discard silently.
                    debug!(
                        "[ChapterEditor] Discarding superseded fetch for {:?}",
                        target
                    );
                    return;
                }
                state.in_flight = None;
                state.loading_language = false;

                match result {
                    Ok(payload) => {
                        // The effective language is the one we asked for; a
                        // default-language request resolves to whatever the
                        // server reports as the chapter's original.
                        let effective = target.clone().unwrap_or_else(|| {
                            payload.language_default_code.code.clone()
                        });
                        if state.chapter.is_none() {
                            state.chapter = Some(Chapter::from_payload(&payload));
                        }
                        state.store.commit_fetch(
                            &effective,
                            &payload.content,
                            Utc::now(),
                        );
                        state.active_language = Some(effective.clone());
                        Some(effective)
                    }
                    Err(err) => {
                        let message = EditorError::from(err).user_message();
                        if let Some(code) = &target {
                            state.store.fail_fetch(code, &message);
                        }
                        state.hub.broadcast(Notification::error(message));
                        None
                    }
                }
            };

            if let Some(code) = persist
                && let Err(e) = editor.last_language.store(editor.chapter_id, &code)
            {
                warn!("[ChapterEditor] Failed to persist last language: {e:#}");
            }
            editor.bump();
        });

        self.state.write().unwrap().in_flight = Some(handle);
    }

    fn notify(&self, notification: Notification) {
        self.state.write().unwrap().hub.broadcast(notification);
        self.bump();
    }

    fn bump(&self) {
        self.revision.send_modify(|revision| *revision += 1);
    }
}
