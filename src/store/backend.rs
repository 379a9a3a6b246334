//! Storage Backend Module
//!
//! The durable key/value medium underneath the persisted store. Values are
//! whole JSON documents; there is no partial update.

use std::collections::HashMap;
use std::fmt::Debug;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::{Result, ServiceError};

// == Storage Backend Trait ==
/// A string-keyed, string-valued durable medium.
pub trait StorageBackend: Send + Sync + Debug {
    /// Returns the stored document, or `None` if the key was never written.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the document stored under `key`.
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes `key`. Deleting an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}

// == Memory Backend ==
/// Process-local backend, used for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    documents: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let documents = self
            .documents
            .read()
            .map_err(|_| ServiceError::LockPoisoned("read"))?;
        Ok(documents.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| ServiceError::LockPoisoned("write"))?;
        documents.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut documents = self
            .documents
            .write()
            .map_err(|_| ServiceError::LockPoisoned("remove"))?;
        documents.remove(key);
        Ok(())
    }
}

// == File Backend ==
/// One `<key>.json` file per key inside a data directory.
///
/// Writes go to a temporary sibling that is flushed to disk and renamed into
/// place, so a reader never observes a half-written document.
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Opens (and creates if needed) the data directory.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)
            .map_err(|e| ServiceError::io(root.display().to_string(), e))?;
        Ok(Self { root })
    }

    /// The data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ServiceError::io(key, e)),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let target = self.path_for(key);
        let staging = self.root.join(format!("{}.json.tmp", key));

        let written = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&staging)
            .and_then(|mut file| {
                file.write_all(value.as_bytes())?;
                file.sync_all()
            })
            .and_then(|()| fs::rename(&staging, &target));

        written.map_err(|e| {
            let _ = fs::remove_file(&staging);
            ServiceError::io(key, e)
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ServiceError::io(key, e)),
        }
    }
}
