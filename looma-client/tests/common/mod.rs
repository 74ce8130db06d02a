//! Shared test doubles for editor and publication tests
//!
//! `ScriptedChapterService` plays back queued responses and records every
//! call; fetch steps can be held open with a `Notify` so tests can overlap
//! requests deterministically.
#![allow(dead_code)] // each test binary uses its own subset of the helpers

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use looma_client::domains::editor::{
    ChapterEditor, EditorSnapshot, EditorSubscriber, Notification,
    NotificationKind,
};
use looma_client::infrastructure::api_client::ApiError;
use looma_client::infrastructure::services::ChapterService;
use looma_model::prelude::*;
use tokio::sync::Notify;

/// Route `log` output through the test harness when `RUST_LOG` is set.
pub fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn code(s: &str) -> LanguageCode {
    LanguageCode::new(s).unwrap()
}

pub fn language(c: &str, name: &str) -> Language {
    Language::new(code(c), name)
}

pub fn status_error(status: u16, message: &str) -> ApiError {
    ApiError::Status {
        status,
        message: message.to_string(),
    }
}

/// Chapter payload builder with sensible defaults for tests
pub fn payload(
    id: u64,
    default_language: (&str, &str),
    content: &str,
    available: &[(&str, &str)],
) -> ChapterContentPayload {
    ChapterContentPayload {
        id: ChapterId(id),
        title: "Capitulo uno".to_string(),
        content: content.to_string(),
        price: 2.5,
        work_name: "La Obra".to_string(),
        work_id: WorkId(7),
        last_update: None,
        likes: 0,
        allow_ai_translation: false,
        language_default_code: language(default_language.0, default_language.1),
        publication_status: PublicationStatus::Draft,
        scheduled_publication_date: None,
        published_at: None,
        available_languages: available
            .iter()
            .map(|(c, name)| language(c, name))
            .collect(),
        chapter_number: 1,
    }
}

/// One scripted response for `fetch_content`
pub enum FetchStep {
    /// Resolve immediately
    Ready(Result<ChapterContentPayload, ApiError>),
    /// Park until the `Notify` is released, then resolve
    Hold(Arc<Notify>, Result<ChapterContentPayload, ApiError>),
}

/// Lifecycle operations recorded by the scripted service
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleCall {
    Publish,
    Schedule(DateTime<FixedOffset>),
    CancelSchedule,
    Delete,
}

#[derive(Default)]
pub struct ScriptedChapterService {
    /// Fetch responses keyed by the requested language, so overlapping
    /// requests cannot consume each other's scripts.
    pub fetch_steps: Mutex<HashMap<Option<LanguageCode>, VecDeque<FetchStep>>>,
    pub fetch_calls: Mutex<Vec<Option<LanguageCode>>>,
    pub update_results: Mutex<VecDeque<Result<(), ApiError>>>,
    pub update_calls: Mutex<Vec<ChapterUpdateRequest>>,
    pub price_results: Mutex<VecDeque<Result<(), ApiError>>>,
    pub price_calls: Mutex<Vec<PriceUpdateRequest>>,
    pub lifecycle_results: Mutex<VecDeque<Result<(), ApiError>>>,
    pub lifecycle_calls: Mutex<Vec<LifecycleCall>>,
}

impl ScriptedChapterService {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn script_fetch(
        &self,
        lang: Option<&str>,
        result: Result<ChapterContentPayload, ApiError>,
    ) {
        self.fetch_steps
            .lock()
            .unwrap()
            .entry(lang.map(code))
            .or_default()
            .push_back(FetchStep::Ready(result));
    }

    /// Script a fetch that blocks until the returned handle is notified.
    pub fn script_held_fetch(
        &self,
        lang: Option<&str>,
        result: Result<ChapterContentPayload, ApiError>,
    ) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.fetch_steps
            .lock()
            .unwrap()
            .entry(lang.map(code))
            .or_default()
            .push_back(FetchStep::Hold(gate.clone(), result));
        gate
    }

    pub fn push_update(&self, result: Result<(), ApiError>) {
        self.update_results.lock().unwrap().push_back(result);
    }

    pub fn push_price(&self, result: Result<(), ApiError>) {
        self.price_results.lock().unwrap().push_back(result);
    }

    pub fn push_lifecycle(&self, result: Result<(), ApiError>) {
        self.lifecycle_results.lock().unwrap().push_back(result);
    }

    fn next_lifecycle(&self, call: LifecycleCall) -> Result<(), ApiError> {
        self.lifecycle_calls.lock().unwrap().push(call);
        self.lifecycle_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

#[async_trait]
impl ChapterService for ScriptedChapterService {
    async fn fetch_content(
        &self,
        _chapter: ChapterId,
        lang: Option<&LanguageCode>,
    ) -> Result<ChapterContentPayload, ApiError> {
        self.fetch_calls.lock().unwrap().push(lang.cloned());
        let step = self
            .fetch_steps
            .lock()
            .unwrap()
            .get_mut(&lang.cloned())
            .and_then(VecDeque::pop_front)
            .expect("unexpected fetch_content call");
        match step {
            FetchStep::Ready(result) => result,
            FetchStep::Hold(gate, result) => {
                gate.notified().await;
                result
            }
        }
    }

    async fn update_chapter(
        &self,
        _chapter: ChapterId,
        request: &ChapterUpdateRequest,
    ) -> Result<(), ApiError> {
        self.update_calls.lock().unwrap().push(request.clone());
        self.update_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    async fn update_price(
        &self,
        _chapter: ChapterId,
        request: &PriceUpdateRequest,
    ) -> Result<(), ApiError> {
        self.price_calls.lock().unwrap().push(request.clone());
        self.price_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(()))
    }

    async fn publish(&self, _chapter: ChapterId) -> Result<(), ApiError> {
        self.next_lifecycle(LifecycleCall::Publish)
    }

    async fn schedule(
        &self,
        _chapter: ChapterId,
        payload: &SchedulePayload,
    ) -> Result<(), ApiError> {
        self.next_lifecycle(LifecycleCall::Schedule(payload.when))
    }

    async fn cancel_schedule(&self, _chapter: ChapterId) -> Result<(), ApiError> {
        self.next_lifecycle(LifecycleCall::CancelSchedule)
    }

    async fn delete(&self, _chapter: ChapterId) -> Result<(), ApiError> {
        self.next_lifecycle(LifecycleCall::Delete)
    }
}

/// Collects notifications for assertions
#[derive(Default)]
pub struct RecordingSubscriber {
    pub notifications: Mutex<Vec<Notification>>,
}

impl RecordingSubscriber {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn count(&self, kind: NotificationKind) -> usize {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.kind == kind)
            .count()
    }
}

impl EditorSubscriber for RecordingSubscriber {
    fn on_notification(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

/// Wait until the editor's snapshot satisfies `predicate`, or panic after
/// two seconds.
pub async fn wait_until(
    editor: &ChapterEditor,
    predicate: impl Fn(&EditorSnapshot) -> bool,
) {
    let mut changes = editor.changes();
    tokio::time::timeout(std::time::Duration::from_secs(2), async {
        loop {
            if predicate(&editor.snapshot()) {
                return;
            }
            changes
                .changed()
                .await
                .expect("editor dropped while waiting");
        }
    })
    .await
    .expect("timed out waiting for editor state");
}
