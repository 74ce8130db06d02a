//! Frequently used model types in one import.

pub use crate::chapter::{Chapter, ChapterContentPayload};
pub use crate::error::{ModelError, Result as ModelResult};
pub use crate::ids::{ChapterId, WorkId};
pub use crate::language::{Language, LanguageCode};
pub use crate::publication::PublicationStatus;
pub use crate::requests::{
    ChapterUpdateRequest, PriceUpdateRequest, SchedulePayload,
};
