//! Persisted favorites.
//!
//! The favorite set is a set of [`PhotoId`]s stored under a single namespaced
//! key as a JSON array of integers (`[5,12,3]`). It is read once when the
//! gallery starts and rewritten wholesale after every toggle.
//!
//! ## Storage port
//!
//! Persistence goes through the [`FavoriteStore`] trait so the engine never
//! touches a global. Two adapters ship with the crate:
//!
//! - [`FileStore`]: one `<key>.json` file per key inside a state directory.
//! - [`MemoryStore`]: a `HashMap`, used by tests and embedders that persist
//!   elsewhere. Writes can be made to fail to exercise the warning paths.
//!
//! ## Failure policy
//!
//! Storage is never allowed to break the gallery. A missing key loads as an
//! empty set. Unreadable or malformed data also loads as an empty set but
//! produces a [`StorageWarning`]. A failed write keeps the in-memory change
//! and produces a warning as well.

use crate::catalog::PhotoId;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Key/value persistence for the favorite set.
pub trait FavoriteStore {
    /// Read the raw value for `key`. `Ok(None)` means the key was never written.
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: FavoriteStore + ?Sized> FavoriteStore for Box<S> {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).write(key, value)
    }
}

/// Which storage operation a warning came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageOp {
    Load,
    Save,
}

/// A storage failure that was absorbed instead of propagated.
#[derive(Debug)]
pub struct StorageWarning {
    pub op: StorageOp,
    pub key: String,
    pub error: StoreError,
}

impl fmt::Display for StorageWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.op {
            StorageOp::Load => write!(
                f,
                "could not load favorites from '{}', starting empty: {}",
                self.key, self.error
            ),
            StorageOp::Save => write!(
                f,
                "could not save favorites to '{}', change kept for this session: {}",
                self.key, self.error
            ),
        }
    }
}

/// The set of favorite photo ids.
///
/// Membership is set semantics. Iteration and serialization keep insertion
/// order: added ids are appended, removed ids are taken out in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: Vec<PhotoId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode the stored JSON array. Duplicate ids collapse to their first
    /// occurrence.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: Vec<PhotoId> = serde_json::from_str(json)?;
        let mut set = Self::new();
        for id in raw {
            set.insert(id);
        }
        Ok(set)
    }

    pub fn to_json(&self) -> String {
        // A Vec<u32> always serializes.
        serde_json::to_string(&self.ids).unwrap_or_else(|_| "[]".to_string())
    }

    pub fn contains(&self, id: PhotoId) -> bool {
        self.ids.contains(&id)
    }

    /// Returns `true` if the id was newly added.
    pub fn insert(&mut self, id: PhotoId) -> bool {
        if self.contains(id) {
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Returns `true` if the id was present.
    pub fn remove(&mut self, id: PhotoId) -> bool {
        match self.ids.iter().position(|&x| x == id) {
            Some(pos) => {
                self.ids.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Keep only ids for which `keep` returns true. Returns the removed ids.
    pub fn retain(&mut self, mut keep: impl FnMut(PhotoId) -> bool) -> Vec<PhotoId> {
        let (kept, dropped) = self.ids.iter().partition(|&&id| keep(id));
        self.ids = kept;
        dropped
    }

    /// Flip membership. Returns the new membership state.
    pub fn toggle(&mut self, id: PhotoId) -> bool {
        if self.remove(id) {
            false
        } else {
            self.insert(id)
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = PhotoId> + '_ {
        self.ids.iter().copied()
    }

    /// Set equality, ignoring order.
    pub fn same_members(&self, other: &FavoriteSet) -> bool {
        self.len() == other.len() && self.iter().all(|id| other.contains(id))
    }
}

/// Load the favorite set stored under `key`.
///
/// Never fails: problems degrade to an empty set plus a warning.
pub fn load(store: &dyn FavoriteStore, key: &str) -> (FavoriteSet, Option<StorageWarning>) {
    let warn = |error: StoreError| {
        let warning = StorageWarning {
            op: StorageOp::Load,
            key: key.to_string(),
            error,
        };
        log::warn!("{warning}");
        (FavoriteSet::new(), Some(warning))
    };

    match store.read(key) {
        Ok(None) => {
            log::debug!("no favorites stored under '{key}'");
            (FavoriteSet::new(), None)
        }
        Ok(Some(json)) => match FavoriteSet::from_json(&json) {
            Ok(set) => {
                log::debug!("loaded {} favorites from '{key}'", set.len());
                (set, None)
            }
            Err(e) => warn(StoreError::Json(e)),
        },
        Err(e) => warn(e),
    }
}

/// Write the whole favorite set under `key`.
pub fn save(
    store: &mut dyn FavoriteStore,
    key: &str,
    favorites: &FavoriteSet,
) -> Option<StorageWarning> {
    match store.write(key, &favorites.to_json()) {
        Ok(()) => {
            log::debug!("saved {} favorites to '{key}'", favorites.len());
            None
        }
        Err(error) => {
            let warning = StorageWarning {
                op: StorageOp::Save,
                key: key.to_string(),
                error,
            };
            log::warn!("{warning}");
            Some(warning)
        }
    }
}

// ============================================================================
// Adapters
// ============================================================================

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl FavoriteStore for FileStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with one key.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    /// Make every subsequent write fail, like a browser store over quota.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl FavoriteStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Unavailable("quota exceeded".into()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
