use chrono::{DateTime, Utc};

use crate::ids::{ChapterId, WorkId};
use crate::language::{Language, LanguageCode};
use crate::publication::PublicationStatus;

/// Chapter-with-content payload as the edit endpoint returns it
///
/// Wire names are a mix of camelCase and snake_case; the renames below pin
/// the exact shape so the struct survives server-side serializer quirks.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChapterContentPayload {
    pub id: ChapterId,
    pub title: String,
    /// Content for the language the request asked for (or the default)
    pub content: String,
    pub price: f64,
    #[cfg_attr(feature = "serde", serde(rename = "workName"))]
    pub work_name: String,
    #[cfg_attr(feature = "serde", serde(rename = "workId"))]
    pub work_id: WorkId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub last_update: Option<DateTime<Utc>>,
    pub likes: u64,
    #[cfg_attr(feature = "serde", serde(rename = "allowAiTranslation"))]
    pub allow_ai_translation: bool,
    #[cfg_attr(feature = "serde", serde(rename = "languageDefaultCode"))]
    pub language_default_code: Language,
    #[cfg_attr(feature = "serde", serde(rename = "publicationStatus"))]
    pub publication_status: PublicationStatus,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "scheduledPublicationDate", default)
    )]
    pub scheduled_publication_date: Option<DateTime<Utc>>,
    #[cfg_attr(feature = "serde", serde(rename = "publishedAt", default))]
    pub published_at: Option<DateTime<Utc>>,
    #[cfg_attr(feature = "serde", serde(rename = "availableLanguages"))]
    pub available_languages: Vec<Language>,
    #[cfg_attr(feature = "serde", serde(rename = "chapterNumber"))]
    pub chapter_number: u32,
}

/// In-memory chapter identity for an editing session
///
/// Built from the first successful content fetch and mutated only through
/// editor setters. The per-language content itself lives in the version
/// store, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    pub id: ChapterId,
    pub title: String,
    pub price: f64,
    pub work_id: WorkId,
    pub work_name: String,
    pub likes: u64,
    pub allow_ai_translation: bool,
    pub default_language: Language,
    pub publication_status: PublicationStatus,
    pub scheduled_publication_date: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub available_languages: Vec<Language>,
    pub chapter_number: u32,
}

impl Chapter {
    /// Build the session model from a fetched payload, leaving the content
    /// for the version store to pick up.
    pub fn from_payload(payload: &ChapterContentPayload) -> Self {
        Self {
            id: payload.id,
            title: payload.title.clone(),
            price: payload.price,
            work_id: payload.work_id,
            work_name: payload.work_name.clone(),
            likes: payload.likes,
            allow_ai_translation: payload.allow_ai_translation,
            default_language: payload.language_default_code.clone(),
            publication_status: payload.publication_status,
            scheduled_publication_date: payload.scheduled_publication_date,
            published_at: payload.published_at,
            available_languages: payload.available_languages.clone(),
            chapter_number: payload.chapter_number,
        }
    }

    pub fn has_language(&self, code: &LanguageCode) -> bool {
        self.available_languages
            .iter()
            .any(|language| &language.code == code)
    }

    /// Append a language to the available list. Returns false when it was
    /// already present.
    pub fn add_language(&mut self, language: Language) -> bool {
        if self.has_language(&language.code) {
            return false;
        }
        self.available_languages.push(language);
        true
    }
}
