//! JSON file store: one document holding the whole game map.

use std::path::{Path, PathBuf};

use super::{GameMap, GameStore, StoreError};

/// Stores the game map as a single JSON file on disk.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    capacity: Option<usize>,
}

impl JsonFileStore {
    /// Store backed by `path`, with no size quota.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            capacity: None,
        }
    }

    /// Limit the serialized document to `bytes`. Saves beyond the limit
    /// fail with [`StoreError::StorageFull`].
    #[must_use]
    pub fn with_capacity(mut self, bytes: usize) -> Self {
        self.capacity = Some(bytes);
        self
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GameStore for JsonFileStore {
    fn load(&self) -> GameMap {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return GameMap::default();
            }
            Err(err) => {
                tracing::warn!("failed to read store at {:?}: {err}", self.path);
                return GameMap::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(games) => games,
            Err(err) => {
                tracing::warn!(
                    "corrupt store at {:?}, starting empty: {err}",
                    self.path
                );
                GameMap::default()
            }
        }
    }

    fn save(&self, games: &GameMap) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(games)?;

        if let Some(capacity) = self.capacity {
            if encoded.len() > capacity {
                return Err(StoreError::StorageFull {
                    needed: encoded.len(),
                    capacity,
                });
            }
        }

        std::fs::write(&self.path, encoded)?;
        Ok(())
    }
}
