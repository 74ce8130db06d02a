//! Service traits over the Looma API
//!
//! Domains depend on these traits rather than on [`super::api_client`]
//! directly, so tests can substitute scripted implementations.

pub mod chapters;
pub mod languages;

pub use chapters::{ChapterApiAdapter, ChapterService};
pub use languages::{LanguageCatalogApiAdapter, LanguageCatalogService};
