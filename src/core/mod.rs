//! Core types: sides, ids, variant configuration, round and game state.

mod config;
mod ids;
mod round;
mod side;
mod state;

pub use config::NotesConfig;
pub use ids::{GameId, IdGen};
pub use round::{Hints, Positions, Round, WorkingRound};
pub use side::{TeamPair, TeamSide};
pub use state::{Game, TeamNotes};
