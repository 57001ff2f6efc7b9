// src/store.rs
//
// String key-value backends for local persistence.
// FileKv keeps the whole map in memory and rewrites the JSON file on each set.

use std::{
    collections::{BTreeMap, HashMap},
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O error at {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("store file {} is not a JSON string map: {source}", path.display())]
    Json { path: PathBuf, source: serde_json::Error },
}

/// Minimal get/set capability the notes layer is written against.
pub trait KeyValue {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Process-lifetime store.
#[derive(Debug, Default, Clone)]
pub struct MemoryKv {
    map: HashMap<String, String>,
}

impl MemoryKv {
    pub fn new() -> Self { Self::default() }
    pub fn len(&self) -> usize { self.map.len() }
    pub fn is_empty(&self) -> bool { self.map.is_empty() }
}

impl KeyValue for MemoryKv {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.map.insert(s!(key), s!(value));
        Ok(())
    }
}

/// JSON object file `{ key: value, … }`.
#[derive(Debug)]
pub struct FileKv {
    path: PathBuf,
    map: BTreeMap<String, String>,
}

impl FileKv {
    /// Open (or lazily create) the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let map = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => BTreeMap::new(),
            Ok(text) => serde_json::from_str(&text)
                .map_err(|source| StoreError::Json { path: path.clone(), source })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        logd!("Store: Opened {} (keys={})", path.display(), map.len());
        Ok(Self { path, map })
    }

    pub fn path(&self) -> &Path { &self.path }
    pub fn len(&self) -> usize { self.map.len() }
    pub fn is_empty(&self) -> bool { self.map.is_empty() }

    fn flush(&self) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io { path: self.path.clone(), source };

        // Ensure parent directories exist
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let text = serde_json::to_string_pretty(&self.map)
            .map_err(|source| StoreError::Json { path: self.path.clone(), source })?;

        // Write beside the target, then swap in
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, text).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        Ok(())
    }
}

impl KeyValue for FileKv {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.map.insert(s!(key), s!(value));
        self.flush()
    }
}
