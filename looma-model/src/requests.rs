use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, Utc};

use crate::language::LanguageCode;
use crate::publication::PublicationStatus;

/// Body of the chapter update endpoint
///
/// `versions` carries only the languages being persisted by this request;
/// the editor sends a single-entry map for the active language.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChapterUpdateRequest {
    pub title: String,
    pub status: PublicationStatus,
    pub last_update: DateTime<Utc>,
    pub price: f64,
    pub allow_ai_translation: bool,
    pub versions: HashMap<LanguageCode, String>,
}

/// Body of the schedule endpoint. `when` keeps the author's own offset on
/// the wire (ISO 8601 with offset) rather than normalizing to UTC.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchedulePayload {
    pub when: DateTime<FixedOffset>,
}

/// Body of the price-only update endpoint
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceUpdateRequest {
    pub price: f64,
}
