//! Team identification and per-team data storage.
//!
//! ## TeamSide
//!
//! Which of the two sides of the table a record belongs to. The note taker's
//! own team and the opposing team keep fully independent round histories.
//!
//! ## TeamPair
//!
//! Per-side data storage with O(1) access, indexable by `TeamSide`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides tracked in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TeamSide {
    /// The note taker's own team.
    Own,
    /// The opposing team.
    Opponent,
}

impl TeamSide {
    /// Iterate over both sides, own team first.
    pub fn all() -> impl Iterator<Item = TeamSide> {
        [TeamSide::Own, TeamSide::Opponent].into_iter()
    }

    /// The other side.
    #[must_use]
    pub const fn other(self) -> TeamSide {
        match self {
            TeamSide::Own => TeamSide::Opponent,
            TeamSide::Opponent => TeamSide::Own,
        }
    }

    /// Storage index (own = 0, opponent = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            TeamSide::Own => 0,
            TeamSide::Opponent => 1,
        }
    }
}

impl std::fmt::Display for TeamSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamSide::Own => write!(f, "own team"),
            TeamSide::Opponent => write!(f, "opponent team"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// Holds exactly one `T` per `TeamSide`.
///
/// ## Example
///
/// ```
/// use cipher_notes::core::{TeamPair, TeamSide};
///
/// let mut scores: TeamPair<i32> = TeamPair::with_value(0);
/// scores[TeamSide::Own] = 2;
///
/// assert_eq!(scores[TeamSide::Own], 2);
/// assert_eq!(scores[TeamSide::Opponent], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPair<T> {
    own: T,
    opponent: T,
}

impl<T> TeamPair<T> {
    /// Create a pair from a factory function.
    ///
    /// The factory receives the `TeamSide` for each entry.
    pub fn new(factory: impl Fn(TeamSide) -> T) -> Self {
        Self {
            own: factory(TeamSide::Own),
            opponent: factory(TeamSide::Opponent),
        }
    }

    /// Create a pair with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a pair with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to one side's data.
    #[must_use]
    pub fn get(&self, side: TeamSide) -> &T {
        match side {
            TeamSide::Own => &self.own,
            TeamSide::Opponent => &self.opponent,
        }
    }

    /// Get a mutable reference to one side's data.
    pub fn get_mut(&mut self, side: TeamSide) -> &mut T {
        match side {
            TeamSide::Own => &mut self.own,
            TeamSide::Opponent => &mut self.opponent,
        }
    }

    /// Iterate over (TeamSide, &T) pairs, own team first.
    pub fn iter(&self) -> impl Iterator<Item = (TeamSide, &T)> {
        [
            (TeamSide::Own, &self.own),
            (TeamSide::Opponent, &self.opponent),
        ]
        .into_iter()
    }
}

impl<T> Index<TeamSide> for TeamPair<T> {
    type Output = T;

    fn index(&self, side: TeamSide) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<TeamSide> for TeamPair<T> {
    fn index_mut(&mut self, side: TeamSide) -> &mut Self::Output {
        self.get_mut(side)
    }
}
