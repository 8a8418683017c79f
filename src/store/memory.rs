//! In-memory store with the same contract as the file store.
//!
//! Keeps the serialized document in a cell, so tests can exercise the
//! corrupt-data and quota paths without touching disk.

use std::cell::RefCell;

use super::{GameMap, GameStore, StoreError};

/// An in-process store slot.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
    capacity: Option<usize>,
}

impl MemoryStore {
    /// Empty store with no quota.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit the serialized document to `bytes`.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            slot: RefCell::new(None),
            capacity: Some(bytes),
        }
    }

    /// Replace the raw stored document, bypassing serialization. Used to
    /// stage corrupt data.
    pub fn inject_raw(&self, raw: impl Into<String>) {
        *self.slot.borrow_mut() = Some(raw.into());
    }

    /// The raw stored document, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl GameStore for MemoryStore {
    fn load(&self) -> GameMap {
        let slot = self.slot.borrow();
        let Some(content) = slot.as_deref() else {
            return GameMap::default();
        };

        match serde_json::from_str(content) {
            Ok(games) => games,
            Err(err) => {
                tracing::warn!("corrupt in-memory store, starting empty: {err}");
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

        *self.slot.borrow_mut() = Some(encoded);
        Ok(())
    }
}
