//! Durable last-active-language storage
//!
//! A reload of the editor resumes on the language the author last worked
//! in. The file store keeps one small JSON map (chapter id → language code)
//! under the platform data directory; nothing else is persisted client-side.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use looma_model::{ChapterId, LanguageCode};

pub(crate) const LAST_LANGUAGE_FILE: &str = "last_language.json";

/// Per-chapter memory of the last active language
pub trait LastLanguageStore: Send + Sync {
    /// Language the author last edited this chapter in, if remembered.
    fn load(&self, chapter: ChapterId) -> Option<LanguageCode>;

    /// Remember `code` as the chapter's current language.
    fn store(&self, chapter: ChapterId, code: &LanguageCode) -> Result<()>;
}

/// File-backed store under the platform data directory
#[derive(Debug)]
pub struct FileLanguageStore {
    path: PathBuf,
}

impl FileLanguageStore {
    pub fn new() -> Result<Self> {
        let proj_dirs = ProjectDirs::from("", "looma", "looma-client")
            .ok_or_else(|| anyhow::anyhow!("Unable to determine data directory"))?;
        Ok(Self {
            path: proj_dirs.data_dir().join(LAST_LANGUAGE_FILE),
        })
    }

    /// Store rooted at an explicit path (tests, portable installs).
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_map(&self) -> HashMap<String, String> {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return HashMap::new();
        };
        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(e) => {
                // A corrupt map is not worth failing a page load over.
                log::warn!(
                    "[FileLanguageStore] Discarding unreadable {}: {e}",
                    self.path.display()
                );
                HashMap::new()
            }
        }
    }
}

impl LastLanguageStore for FileLanguageStore {
    fn load(&self, chapter: ChapterId) -> Option<LanguageCode> {
        let map = self.read_map();
        let raw = map.get(&chapter.to_string())?;
        LanguageCode::new(raw).ok()
    }

    fn store(&self, chapter: ChapterId, code: &LanguageCode) -> Result<()> {
        let mut map = self.read_map();
        map.insert(chapter.to_string(), code.as_str().to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(&map)?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

/// In-memory store for tests and embedders with their own persistence
#[derive(Debug, Default)]
pub struct MemoryLanguageStore {
    map: RwLock<HashMap<ChapterId, LanguageCode>>,
}

impl MemoryLanguageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LastLanguageStore for MemoryLanguageStore {
    fn load(&self, chapter: ChapterId) -> Option<LanguageCode> {
        self.map.read().unwrap().get(&chapter).cloned()
    }

    fn store(&self, chapter: ChapterId, code: &LanguageCode) -> Result<()> {
        self.map.write().unwrap().insert(chapter, code.clone());
        Ok(())
    }
}
