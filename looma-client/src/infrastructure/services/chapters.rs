//! Chapter service trait and API adapter
//!
//! Covers everything the editor and the publication flow need: content
//! retrieval per language, draft persistence, price updates, and the
//! publish/schedule/delete lifecycle.

use std::sync::Arc;

use async_trait::async_trait;
use looma_model::prelude::*;

use crate::infrastructure::api_client::{ApiClient, ApiError};
use crate::infrastructure::constants::routes;

/// Remote operations on a single chapter
#[async_trait]
pub trait ChapterService: Send + Sync {
    /// Fetch the chapter payload with content for `language`, or for the
    /// chapter's default language when `language` is `None`.
    async fn fetch_content(
        &self,
        chapter: ChapterId,
        language: Option<&LanguageCode>,
    ) -> Result<ChapterContentPayload, ApiError>;

    /// Persist title, status, price, flags, and the versions map.
    async fn update_chapter(
        &self,
        chapter: ChapterId,
        request: &ChapterUpdateRequest,
    ) -> Result<(), ApiError>;

    /// Persist only the price.
    async fn update_price(
        &self,
        chapter: ChapterId,
        request: &PriceUpdateRequest,
    ) -> Result<(), ApiError>;

    /// Publish immediately.
    async fn publish(&self, chapter: ChapterId) -> Result<(), ApiError>;

    /// Schedule publication for a future instant.
    async fn schedule(
        &self,
        chapter: ChapterId,
        payload: &SchedulePayload,
    ) -> Result<(), ApiError>;

    /// Undo a pending scheduled publication.
    async fn cancel_schedule(&self, chapter: ChapterId) -> Result<(), ApiError>;

    /// Delete the chapter.
    async fn delete(&self, chapter: ChapterId) -> Result<(), ApiError>;
}

/// [`ChapterService`] backed by the real API
#[derive(Debug, Clone)]
pub struct ChapterApiAdapter {
    client: Arc<ApiClient>,
}

impl ChapterApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChapterService for ChapterApiAdapter {
    async fn fetch_content(
        &self,
        chapter: ChapterId,
        language: Option<&LanguageCode>,
    ) -> Result<ChapterContentPayload, ApiError> {
        let query = language.map(|code| ("language", code.as_str()));
        self.client.get(&routes::chapters::edit(chapter), query).await
    }

    async fn update_chapter(
        &self,
        chapter: ChapterId,
        request: &ChapterUpdateRequest,
    ) -> Result<(), ApiError> {
        self.client
            .put_status(&routes::chapters::update(chapter), request)
            .await
    }

    async fn update_price(
        &self,
        chapter: ChapterId,
        request: &PriceUpdateRequest,
    ) -> Result<(), ApiError> {
        self.client
            .put_status(&routes::chapters::price(chapter), request)
            .await
    }

    async fn publish(&self, chapter: ChapterId) -> Result<(), ApiError> {
        self.client.post_empty(&routes::chapters::publish(chapter)).await
    }

    async fn schedule(
        &self,
        chapter: ChapterId,
        payload: &SchedulePayload,
    ) -> Result<(), ApiError> {
        self.client
            .post_status(&routes::chapters::schedule(chapter), payload)
            .await
    }

    async fn cancel_schedule(&self, chapter: ChapterId) -> Result<(), ApiError> {
        self.client
            .delete_status(&routes::chapters::schedule(chapter))
            .await
    }

    async fn delete(&self, chapter: ChapterId) -> Result<(), ApiError> {
        self.client
            .delete_status(&routes::chapters::delete(chapter))
            .await
    }
}
