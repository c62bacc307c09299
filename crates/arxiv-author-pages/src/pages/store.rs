//! Storage collaborators for author info and written pages.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::{StoreError, StoreResult};

/// Where biographies are read from and pages are written to.
pub trait SummaryStore: Send + Sync {
    /// Load the author name to biography mapping stored as a JSON object at `path`.
    fn load_author_infos(&self, path: &Path) -> StoreResult<HashMap<String, String>>;

    /// Write `content` to `path`, replacing any existing file.
    fn dump_file(&self, content: &str, path: &Path) -> StoreResult<()>;

    /// File stems (names without the final extension) of the files directly in `dir`.
    fn list_stems(&self, dir: &Path) -> StoreResult<Vec<String>>;
}

fn parse_author_infos(path: &Path, raw: &str) -> StoreResult<HashMap<String, String>> {
    serde_json::from_str(raw).map_err(|source| StoreError::Json { path: path.to_path_buf(), source })
}

/// Local filesystem store.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl SummaryStore for FsStore {
    fn load_author_infos(&self, path: &Path) -> StoreResult<HashMap<String, String>> {
        let raw = std::fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        parse_author_infos(path, &raw)
    }

    fn dump_file(&self, content: &str, path: &Path) -> StoreResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }
        std::fs::write(path, content).map_err(|e| StoreError::io(path, e))
    }

    fn list_stems(&self, dir: &Path) -> StoreResult<Vec<String>> {
        let mut stems = Vec::new();

        for entry in std::fs::read_dir(dir).map_err(|e| StoreError::io(dir, e))? {
            let entry = entry.map_err(|e| StoreError::io(dir, e))?;
            let file_type = entry.file_type().map_err(|e| StoreError::io(entry.path(), e))?;
            if !file_type.is_file() {
                continue;
            }
            if let Some(stem) = entry.path().file_stem() {
                stems.push(stem.to_string_lossy().into_owned());
            }
        }

        stems.sort();
        Ok(stems)
    }
}

/// In-memory store keyed by path, for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: Mutex<BTreeMap<PathBuf, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, builder style.
    #[must_use]
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.lock().insert(path.into(), content.into());
        self
    }

    /// Contents of the file at `path`, if present.
    #[must_use]
    pub fn read(&self, path: &Path) -> Option<String> {
        self.lock().get(path).cloned()
    }

    /// Paths of all stored files, sorted.
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.lock().keys().cloned().collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<PathBuf, String>> {
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SummaryStore for MemoryStore {
    fn load_author_infos(&self, path: &Path) -> StoreResult<HashMap<String, String>> {
        let raw = self.read(path).ok_or_else(|| {
            StoreError::io(path, std::io::Error::from(std::io::ErrorKind::NotFound))
        })?;
        parse_author_infos(path, &raw)
    }

    fn dump_file(&self, content: &str, path: &Path) -> StoreResult<()> {
        self.lock().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn list_stems(&self, dir: &Path) -> StoreResult<Vec<String>> {
        Ok(self
            .lock()
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .filter_map(|path| path.file_stem())
            .map(|stem| stem.to_string_lossy().into_owned())
            .collect())
    }
}
