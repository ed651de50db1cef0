//! Key-value storage backends
//!
//! Each key holds one JSON blob. `FileStore` keeps one file per key in the
//! data directory; `MemoryStore` keeps blobs in a map.

use crate::types::{Result, TeatrackError};
use fs2::FileExt;
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Minimal string-blob store addressed by fixed keys
pub trait KeyValueStore {
    /// Read the blob under `key`, `None` if it was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;
}

/// File-backed store: `<dir>/<key>.json`, guarded by `<dir>/<key>.lock`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

/// Advisory lock held on a key's sidecar file until dropped
struct KeyLock {
    file: File,
}

impl KeyLock {
    fn open(path: &Path) -> Result<File> {
        OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|e| TeatrackError::Storage(format!("{}: {}", path.display(), e)))
    }

    fn shared(path: &Path) -> Result<Self> {
        let file = Self::open(path)?;
        FileExt::lock_shared(&file)
            .map_err(|e| TeatrackError::Storage(format!("shared lock on {}: {}", path.display(), e)))?;
        Ok(Self { file })
    }

    fn exclusive(path: &Path) -> Result<Self> {
        let file = Self::open(path)?;
        FileExt::lock_exclusive(&file).map_err(|e| {
            TeatrackError::Storage(format!("exclusive lock on {}: {}", path.display(), e))
        })?;
        Ok(Self { file })
    }
}

impl Drop for KeyLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn lock_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.lock", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _lock = KeyLock::shared(&self.lock_path(key))?;
        match fs::read_to_string(self.key_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Whole-blob replace: the key lock is held from the temp write through the rename
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let _lock = KeyLock::exclusive(&self.lock_path(key))?;

        let path = self.key_path(key);
        let staged = path.with_extension("json.tmp");
        let mut file = File::create(&staged)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&staged, &path).map_err(|e| {
            let _ = fs::remove_file(&staged);
            TeatrackError::Storage(format!("replace {}: {}", path.display(), e))
        })
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let _lock = KeyLock::exclusive(&self.lock_path(key))?;
        match fs::remove_file(self.key_path(key)) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}

/// In-process store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one blob
    pub fn with_blob(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.blobs.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.blobs.remove(key);
        Ok(())
    }
}
