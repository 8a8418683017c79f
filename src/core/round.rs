//! Round records: finalized history entries and the in-progress round.
//!
//! `positions[h]` is the 1-based column that hint `h` currently occupies.
//! Only the first `hint_count` entries are live; the spare slot at the end
//! (the unclaimed fourth column in the classic variant) is a placeholder and
//! is exempt from the injectivity invariant.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::NotesConfig;

/// Hint strings, one per column slot.
pub type Hints = SmallVec<[String; 4]>;

/// Column assignment per hint index.
pub type Positions = SmallVec<[u8; 4]>;

/// A finalized round in a team's history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    /// Round number at finalize time. Never renumbered, even after deletes.
    pub number: u32,

    /// The 3 hint words given this round.
    pub hints: Hints,

    /// Column occupied by each hint.
    pub positions: Positions,

    /// Derived answer code (or the string typed during a manual edit).
    pub answer: String,

    /// Snapshot of the opponent's guessed terms at finalize time.
    /// Present only on opponent-side rounds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guessed_terms: Option<Hints>,
}

/// The in-progress round for one team: hints entered so far and where they
/// have been dragged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingRound {
    pub hints: Hints,
    pub positions: Positions,
}

impl WorkingRound {
    /// A fresh working round: empty hints, identity column placement.
    #[must_use]
    pub fn fresh(config: &NotesConfig) -> Self {
        Self {
            hints: (0..config.column_count).map(|_| String::new()).collect(),
            positions: (1..=config.column_count as u8).collect(),
        }
    }

    /// Are the first `hint_count` hints all non-blank after trimming?
    #[must_use]
    pub fn is_complete(&self, config: &NotesConfig) -> bool {
        self.blank_hints(config).is_empty()
    }

    /// Indices of blank (or missing) hints among the active slots.
    #[must_use]
    pub fn blank_hints(&self, config: &NotesConfig) -> Vec<usize> {
        (0..config.hint_count)
            .filter(|&i| self.hints.get(i).map_or(true, |h| h.trim().is_empty()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_fresh_defaults() {
        let working = WorkingRound::fresh(&NotesConfig::classic());

        assert_eq!(working.hints.len(), 4);
        assert!(working.hints.iter().all(String::is_empty));
        assert_eq!(working.positions.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_fresh_compact_variant() {
        let working = WorkingRound::fresh(&NotesConfig::compact());

        assert_eq!(working.hints.len(), 3);
        assert_eq!(working.positions.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_blank_hints() {
        let config = NotesConfig::classic();
        let mut working = WorkingRound::fresh(&config);
        assert_eq!(working.blank_hints(&config), vec![0, 1, 2]);

        working.hints[0] = "apple".into();
        working.hints[2] = "  ".into(); // whitespace only counts as blank
        assert_eq!(working.blank_hints(&config), vec![1, 2]);

        working.hints[1] = "boat".into();
        working.hints[2] = "cloud".into();
        assert!(working.is_complete(&config));
    }

    #[test]
    fn test_round_serde_shape() {
        let round = Round {
            number: 2,
            hints: smallvec!["a".into(), "b".into(), "c".into()],
            positions: smallvec![2, 4, 1, 4],
            answer: "241".into(),
            guessed_terms: None,
        };

        let json = serde_json::to_value(&round).unwrap();
        assert_eq!(json["number"], 2);
        assert_eq!(json["answer"], "241");
        // Absent snapshot stays off the wire entirely.
        assert!(json.get("guessedTerms").is_none());

        let back: Round = serde_json::from_value(json).unwrap();
        assert_eq!(back, round);
    }
}
