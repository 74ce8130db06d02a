//! Chapter multi-language draft editor
//!
//! The editor keeps one draft per language, lets exactly one language be
//! active at a time, fetches content lazily with last-request-wins
//! cancellation, and persists edits without clobbering unsaved work in
//! other languages.

pub mod controller;
pub mod errors;
pub mod fetch;
pub mod notify;
pub mod picker;
pub mod storage;
pub mod store;

pub use controller::{ChapterEditor, EditorSnapshot};
pub use errors::EditorError;
pub use notify::{EditorSubscriber, Notification, NotificationKind};
pub use picker::{LanguagePicker, PickerRow};
pub use storage::{FileLanguageStore, LastLanguageStore, MemoryLanguageStore};
pub use store::{LanguageDraft, VersionStore};
