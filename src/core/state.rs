//! Persisted game state.
//!
//! ## Game
//!
//! One tracked play session: name, timestamps, the shared round counter,
//! and a `TeamPair` of independent per-side notes.
//!
//! ## TeamNotes
//!
//! One side's view: finalized round history (append-only until explicitly
//! edited or deleted), the working round, and (opponent side only) the
//! four guessed-term slots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::config::NotesConfig;
use super::ids::GameId;
use super::round::{Hints, Round, WorkingRound};
use super::side::{TeamPair, TeamSide};

/// One team's notes within a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamNotes {
    /// Finalized rounds, oldest first.
    pub rounds: Vec<Round>,

    /// The round in progress.
    pub current: WorkingRound,

    /// Free-text guesses at the opposing team's secret terms.
    /// Tracked for the opponent side only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guessed_terms: Option<Hints>,
}

impl TeamNotes {
    /// Empty notes for one side. The opponent side carries guessed-term
    /// slots, one per column.
    #[must_use]
    pub fn empty(config: &NotesConfig, side: TeamSide) -> Self {
        let guessed_terms = match side {
            TeamSide::Own => None,
            TeamSide::Opponent => {
                Some((0..config.column_count).map(|_| String::new()).collect())
            }
        };

        Self {
            rounds: Vec::new(),
            current: WorkingRound::fresh(config),
            guessed_terms,
        }
    }

    /// Number of finalized rounds.
    #[must_use]
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Get a finalized round by history index.
    #[must_use]
    pub fn round(&self, index: usize) -> Option<&Round> {
        self.rounds.get(index)
    }
}

/// One tracked play session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Next round number to assign at finalize. Shared by both sides,
    /// starts at 1.
    pub current_round: u32,

    pub teams: TeamPair<TeamNotes>,
}

impl Game {
    /// Create a fresh game.
    #[must_use]
    pub fn new(id: GameId, name: impl Into<String>, now: DateTime<Utc>, config: &NotesConfig) -> Self {
        Self {
            id,
            name: name.into(),
            created_at: now,
            updated_at: now,
            current_round: 1,
            teams: TeamPair::new(|side| TeamNotes::empty(config, side)),
        }
    }

    /// Default name for a game created at `now`, e.g. `Game 2024-05-01 12:00`.
    #[must_use]
    pub fn default_name(now: DateTime<Utc>) -> String {
        format!("Game {}", now.format("%Y-%m-%d %H:%M"))
    }

    /// One side's notes.
    #[must_use]
    pub fn team(&self, side: TeamSide) -> &TeamNotes {
        &self.teams[side]
    }

    /// One side's notes, mutable.
    pub fn team_mut(&mut self, side: TeamSide) -> &mut TeamNotes {
        &mut self.teams[side]
    }

    /// Stamp the last-modified time. Called by every committing mutation.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
