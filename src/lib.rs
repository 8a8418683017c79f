//! # cipher-notes
//!
//! State and persistence engine for a personal note companion tracking a
//! word-code party game: two teams, numbered rounds, three hint words per
//! round placed on a 3- or 4-column board, and a derived digit "answer"
//! encoding which column each hint occupies.
//!
//! ## Design Principles
//!
//! 1. **Explicit context**: no global mutable state. The active game id and
//!    the store handle live in [`app::AppContext`] and are passed to every
//!    handler.
//!
//! 2. **Wholesale persistence**: each mutation loads the full game map,
//!    edits it in memory, stamps `updatedAt`, and writes it back through a
//!    [`store::GameStore`]. Corrupt or missing data loads as empty; a save
//!    over quota surfaces [`store::StoreError::StorageFull`].
//!
//! 3. **Pure round engine**: answer derivation, column swaps, and history
//!    edits in [`engine`] are synchronous transformations with no storage
//!    or UI dependencies.
//!
//! ## Modules
//!
//! - `core`: team sides, ids, variant configuration, round and game state
//! - `engine`: answer derivation, column placement, finalize/edit/delete
//! - `store`: the persistence provider trait plus file and memory stores
//! - `app`: user-level operations as load/mutate/save transactions
//! - `gesture`: the tap/drag pointer state machine for hint cells

pub mod app;
pub mod core;
pub mod engine;
pub mod gesture;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    Game, GameId, Hints, IdGen, NotesConfig, Positions, Round, TeamNotes, TeamPair, TeamSide,
    WorkingRound,
};

pub use crate::engine::{
    derive_answer, positions_from_answer, swap_columns, AnswerParse, EngineError, NO_ANSWER,
};

pub use crate::store::{GameMap, GameStore, JsonFileStore, MemoryStore, StoreError};

pub use crate::app::{AppContext, GameSummary, NotesError};

pub use crate::gesture::{DragGesture, GestureOutcome, DRAG_THRESHOLD};
