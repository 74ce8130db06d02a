//! Global language catalog service
//!
//! The language picker needs the full list of languages a chapter could be
//! translated into; this is a plain list endpoint independent of any
//! chapter.

use std::sync::Arc;

use async_trait::async_trait;
use looma_model::Language;

use crate::infrastructure::api_client::{ApiClient, ApiError};
use crate::infrastructure::constants::routes;

/// Catalog of all languages the platform supports
#[async_trait]
pub trait LanguageCatalogService: Send + Sync {
    async fn list_languages(&self) -> Result<Vec<Language>, ApiError>;
}

/// [`LanguageCatalogService`] backed by the real API
#[derive(Debug, Clone)]
pub struct LanguageCatalogApiAdapter {
    client: Arc<ApiClient>,
}

impl LanguageCatalogApiAdapter {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LanguageCatalogService for LanguageCatalogApiAdapter {
    async fn list_languages(&self) -> Result<Vec<Language>, ApiError> {
        self.client.get(routes::languages::LIST, None).await
    }
}
