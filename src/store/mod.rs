//! Persistence: the whole game map is read and written wholesale.
//!
//! Every mutation goes through one `load`, an in-memory edit, and one
//! `save`; there is no partial-write state and no concurrent writer.
//!
//! ## Contract
//!
//! - `load` never fails: missing or corrupt data is recovered as an empty
//!   map (with a logged warning for corruption).
//! - `save` fails with [`StoreError::StorageFull`] when the serialized map
//!   exceeds the configured quota; the mutation is lost and the caller
//!   surfaces the error to the user.

mod file;
mod memory;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::{Game, GameId};

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// The persisted mapping of game id to game record.
pub type GameMap = FxHashMap<GameId, Game>;

/// Errors from writing the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The serialized map no longer fits the storage quota.
    #[error("storage full: {needed} bytes needed but capacity is {capacity}")]
    StorageFull { needed: usize, capacity: usize },

    #[error("failed to write store: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode store: {0}")]
    Encode(#[from] serde_json::Error),
}

/// A persistence provider for the game map.
pub trait GameStore {
    /// Load the full map. Missing or corrupt data yields an empty map.
    fn load(&self) -> GameMap;

    /// Persist the full map, replacing whatever was stored before.
    fn save(&self, games: &GameMap) -> Result<(), StoreError>;
}
