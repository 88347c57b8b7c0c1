//! Persisted favorites set.
//!
//! A set of entry ids, stored at rest as a JSON array of integers and
//! rewritten synchronously after every toggle. Loading never fails: an
//! absent or unparsable file yields the empty set, and legacy string-typed
//! ids are coerced to integers so membership checks survive format changes.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::paths::favorites_path;

/// On-disk id representation. Older revisions of the app persisted ids as
/// strings; both forms must resolve to the same membership.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PersistedId {
    Num(u32),
    Text(String),
}

impl PersistedId {
    fn normalize(self) -> Option<u32> {
        match self {
            PersistedId::Num(id) => Some(id),
            PersistedId::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// The favorites set, persisted to `favorites.json` under the pokedex home.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    ids: BTreeSet<u32>,
    path: PathBuf,
}

impl Default for FavoritesStore {
    fn default() -> Self {
        Self {
            ids: BTreeSet::new(),
            path: favorites_path(),
        }
    }
}

impl FavoritesStore {
    /// Load the persisted set from the default location.
    pub fn load() -> Self {
        Self::load_from(favorites_path())
    }

    /// Load the persisted set from an explicit path. Missing or corrupt
    /// data is treated as the empty set; startup must never fail here.
    pub fn load_from(path: PathBuf) -> Self {
        let ids = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Vec<PersistedId>>(&content) {
                Ok(raw) => raw.into_iter().filter_map(PersistedId::normalize).collect(),
                Err(e) => {
                    tracing::warn!("unparsable favorites file {}: {e}", path.display());
                    BTreeSet::new()
                }
            },
            Err(_) => BTreeSet::new(),
        };
        Self { ids, path }
    }

    pub fn is_favorite(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Flip membership for `id` and persist the full set before returning.
    /// Returns the new membership state. The write happens first: if it
    /// fails, membership is unchanged and memory stays consistent with disk.
    pub fn toggle(&mut self, id: u32) -> Result<bool> {
        let mut next = self.ids.clone();
        let now_favorite = if next.remove(&id) {
            false
        } else {
            next.insert(id);
            true
        };
        write_ids(&self.path, &next)?;
        self.ids = next;
        Ok(now_favorite)
    }

    /// Remove all favorites and persist the empty set. Like `toggle`, the
    /// set only clears once the write succeeds.
    pub fn clear(&mut self) -> Result<()> {
        write_ids(&self.path, &BTreeSet::new())?;
        self.ids.clear();
        Ok(())
    }

    /// All favorite ids in ascending order.
    pub fn ids(&self) -> Vec<u32> {
        self.ids.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

fn write_ids(path: &Path, ids: &BTreeSet<u32>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let list: Vec<u32> = ids.iter().copied().collect();
    fs::write(path, serde_json::to_string(&list)?)?;
    Ok(())
}
