//! Publication flow controller
//!
//! One instance per chapter being edited. Methods return `Ok(())` exactly
//! when the caller should navigate away (the action took effect server
//! side); failures land in per-operation error fields for inline display.
//! Duplicate submission is prevented by the presentation layer honoring the
//! busy flags, not by queueing here.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, FixedOffset};
use log::debug;
use looma_model::prelude::*;

use crate::domains::editor::errors::EditorError;
use crate::domains::publication::confirm::ConfirmationPhrase;
use crate::infrastructure::constants::messages;
use crate::infrastructure::services::ChapterService;

/// Busy flags and errors for the publication actions
#[derive(Debug, Clone, Default)]
pub struct PublicationSnapshot {
    pub publishing: bool,
    pub scheduling: bool,
    pub canceling_schedule: bool,
    pub deleting: bool,
    pub publish_error: Option<String>,
    pub schedule_error: Option<String>,
    pub cancel_schedule_error: Option<String>,
    pub delete_error: Option<String>,
}

/// Server-authoritative publish/schedule/delete operations for one chapter
#[derive(Clone)]
pub struct PublicationFlow {
    chapter_id: ChapterId,
    service: Arc<dyn ChapterService>,
    state: Arc<RwLock<PublicationSnapshot>>,
}

impl std::fmt::Debug for PublicationFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicationFlow")
            .field("chapter_id", &self.chapter_id)
            .finish()
    }
}

impl PublicationFlow {
    pub fn new(chapter_id: ChapterId, service: Arc<dyn ChapterService>) -> Self {
        Self {
            chapter_id,
            service,
            state: Arc::new(RwLock::new(PublicationSnapshot::default())),
        }
    }

    pub fn chapter_id(&self) -> ChapterId {
        self.chapter_id
    }

    pub fn snapshot(&self) -> PublicationSnapshot {
        self.state.read().unwrap().clone()
    }

    /// Publish immediately. Not phrase-gated.
    pub async fn publish(&self) -> Result<(), EditorError> {
        {
            let mut state = self.state.write().unwrap();
            state.publishing = true;
            state.publish_error = None;
        }
        let result = self.service.publish(self.chapter_id).await;
        let mut state = self.state.write().unwrap();
        state.publishing = false;
        match result {
            Ok(()) => Ok(()),
            Err(err) => {
                let error = EditorError::from(err);
                state.publish_error = Some(error.user_message());
                Err(error)
            }
        }
    }

    /// Schedule publication for `when`, gated on the schedule phrase.
    pub async fn confirm_schedule(
        &self,
        typed: &str,
        when: DateTime<FixedOffset>,
    ) -> Result<(), EditorError> {
        if !ConfirmationPhrase::Schedule.matches(typed) {
            let error = self.confirmation_error();
            self.state.write().unwrap().schedule_error = Some(error.user_message());
            return Err(error);
        }

        {
            let mut state = self.state.write().unwrap();
            state.scheduling = true;
            state.schedule_error = None;
        }
        let result = self
            .service
            .schedule(self.chapter_id, &SchedulePayload { when })
            .await;
        let mut state = self.state.write().unwrap();
        state.scheduling = false;
        match result {
            Ok(()) => Ok(()),
            Err(err) => {
                let error = EditorError::from(err);
                state.schedule_error = Some(error.user_message());
                Err(error)
            }
        }
    }

    /// Undo a pending scheduled publication, gated on the cancel phrase.
    pub async fn confirm_cancel_schedule(&self, typed: &str) -> Result<(), EditorError> {
        if !ConfirmationPhrase::CancelSchedule.matches(typed) {
            let error = self.confirmation_error();
            self.state.write().unwrap().cancel_schedule_error =
                Some(error.user_message());
            return Err(error);
        }

        {
            let mut state = self.state.write().unwrap();
            state.canceling_schedule = true;
            state.cancel_schedule_error = None;
        }
        let result = self.service.cancel_schedule(self.chapter_id).await;
        let mut state = self.state.write().unwrap();
        state.canceling_schedule = false;
        match result {
            Ok(()) => Ok(()),
            Err(err) => {
                let error = EditorError::from(err);
                state.cancel_schedule_error = Some(error.user_message());
                Err(error)
            }
        }
    }

    /// Delete the chapter, gated on the delete phrase.
    pub async fn confirm_delete(&self, typed: &str) -> Result<(), EditorError> {
        if !ConfirmationPhrase::DeleteChapter.matches(typed) {
            let error = self.confirmation_error();
            self.state.write().unwrap().delete_error = Some(error.user_message());
            return Err(error);
        }

        {
            let mut state = self.state.write().unwrap();
            state.deleting = true;
            state.delete_error = None;
        }
        let result = self.service.delete(self.chapter_id).await;
        let mut state = self.state.write().unwrap();
        state.deleting = false;
        match result {
            Ok(()) => Ok(()),
            Err(err) => {
                let error = EditorError::from(err);
                state.delete_error = Some(error.user_message());
                Err(error)
            }
        }
    }

    fn confirmation_error(&self) -> EditorError {
        debug!("[PublicationFlow] Confirmation phrase mismatch");
        EditorError::Validation(messages::CONFIRMATION_MISMATCH.to_string())
    }
}
