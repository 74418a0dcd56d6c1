use std::collections::BTreeMap;

use crate::error::GalleryResult;

#[cfg(not(target_arch = "wasm32"))]
use crate::error::GalleryError;
#[cfg(not(target_arch = "wasm32"))]
use anyhow::{Context, Result};
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

/// String-keyed, string-valued persistent storage (browser `localStorage` shape).
/// Access pattern is read, then full rewrite of a slot. No partial updates.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> GalleryResult<()>;
}

/// In-process store. Used by tests and as the empty default for previews.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one slot
    pub fn with_slot(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.slots.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> GalleryResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Native store backed by a JSON object file (`{ "slot": "json string", ... }`),
/// i.e. a snapshot of a browser's localStorage. Rewritten in full on every `set`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    slots: BTreeMap<String, String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl JsonFileStore {
    /// Open a snapshot file. A missing file is an empty store.
    pub fn open(path: &Path) -> Result<Self> {
        let slots = if path.exists() {
            let text = std::fs::read_to_string(path)
                .context(format!("Failed to read storage snapshot: {}", path.display()))?;
            serde_json::from_str(&text)
                .context(format!("Storage snapshot is not a JSON object of strings: {}", path.display()))?
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path: path.to_path_buf(),
            slots,
        })
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .context(format!("Failed to create directory: {}", parent.display()))?;
            }
        }
        let text = serde_json::to_string_pretty(&self.slots)?;
        std::fs::write(&self.path, text)
            .context(format!("Failed to write storage snapshot: {}", self.path.display()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> GalleryResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        self.save()
            .map_err(|e| GalleryError::Storage(format!("{e:#}")))
    }
}
