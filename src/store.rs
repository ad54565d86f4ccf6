use std::fs;
use std::path::PathBuf;

use crate::error::Result;

/// Origin-scoped key-value storage holding the serialized article history
/// under a single key. Missing data reads as `None`; callers decide how to
/// degrade.
pub trait PersistentStore {
    fn get(&self) -> Option<Vec<u8>>;
    fn set(&mut self, value: &[u8]) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

/// File-backed store: the whole value lives in one file, rewritten on every
/// set. Last-writer-wins, no versioning.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PersistentStore for FileStore {
    fn get(&self) -> Option<Vec<u8>> {
        fs::read(&self.path).ok()
    }

    fn set(&mut self, value: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, value)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store for tests and throwaway sessions.
#[derive(Default)]
pub struct MemoryStore {
    value: Option<Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from pre-seeded bytes, as if a previous session had written them.
    pub fn with_value(value: impl Into<Vec<u8>>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl PersistentStore for MemoryStore {
    fn get(&self) -> Option<Vec<u8>> {
        self.value.clone()
    }

    fn set(&mut self, value: &[u8]) -> Result<()> {
        self.value = Some(value.to_vec());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.value = None;
        Ok(())
    }
}
