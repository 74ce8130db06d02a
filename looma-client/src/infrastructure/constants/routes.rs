//! API route builders for the Looma server
//!
//! The server mounts all of these under the environment-configured base URL,
//! so every builder returns a path starting with `/`.

use looma_model::ChapterId;

/// Chapter editing and lifecycle endpoints
pub mod chapters {
    use super::ChapterId;

    /// Chapter-with-content payload; accepts an optional `language` query
    /// parameter (absent means the chapter's default language)
    pub fn edit(chapter: ChapterId) -> String {
        format!("/edit-chapter/{chapter}")
    }

    /// Persist title, status, price, flags, and a versions map
    pub fn update(chapter: ChapterId) -> String {
        format!("/edit-chapter/update/{chapter}")
    }

    /// Price-only persistence
    pub fn price(chapter: ChapterId) -> String {
        format!("/chapter/{chapter}/price")
    }

    /// Immediate publication
    pub fn publish(chapter: ChapterId) -> String {
        format!("/chapter/{chapter}/publish")
    }

    /// Scheduled publication; POST schedules, DELETE cancels
    pub fn schedule(chapter: ChapterId) -> String {
        format!("/chapter/{chapter}/schedule")
    }

    /// Chapter removal
    pub fn delete(chapter: ChapterId) -> String {
        format!("/chapter/{chapter}/delete")
    }
}

/// Language catalog endpoints
pub mod languages {
    /// Global catalog of languages chapters can be translated into
    pub const LIST: &str = "/languages";
}
