//! Durable key-value storage
//!
//! Users, the active user and every user's layouts live under three keys.
//! Values are JSON documents; the backend only moves strings around.
//! - `FileStore` keeps one `<key>.json` file per key in a directory
//! - `MemoryStore` keeps everything in process (tests, ephemeral sessions)

use crate::error::{StorageError, StorageResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key holding the registry of all users
pub const USERS_KEY: &str = "users";
/// Key holding the currently active user
pub const CURRENT_USER_KEY: &str = "user";
/// Key holding every user's saved layouts
pub const LAYOUTS_KEY: &str = "layouts";

/// String key-value persistence backend.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete `key`. Missing keys are not an error.
    fn remove(&mut self, key: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn put(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).put(key, value)
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

/// Read and decode the JSON value stored under `key`.
pub fn read_json<T, S>(store: &S, key: &str) -> StorageResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.get(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Corrupted {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        None => Ok(None),
    }
}

/// Encode `value` as JSON and store it under `key`.
pub fn write_json<T, S>(store: &mut S, key: &str, value: &T) -> StorageResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.put(key, &raw)
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        tracing::info!("Opened layout storage at {}", dir.display());
        Ok(Self { dir })
    }

    /// Directory backing this store
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        // Write then rename so readers never observe a partial value
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!("Wrote {} bytes to '{}'", value.len(), key);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process store; contents vanish with the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StorageResult<()> {
        self.values.remove(key);
        Ok(())
    }
}
