//! Round engine: answer derivation, column placement, and history edits.
//!
//! Everything here is a synchronous transformation of one team's round data.
//! The app layer wraps these in load/save transactions; nothing in this
//! module touches storage.
//!
//! ## Answer codes
//!
//! The answer for a round is the concatenation of each hint's column digit:
//! hint 0 in column 2, hint 1 in column 4, hint 2 in column 1 reads `"241"`.
//!
//! ## The placeholder slot
//!
//! In the classic variant `positions` has four entries but only the first
//! three are hints; the last is a placeholder for the spare column. Column
//! moves and the injectivity invariant apply to the live entries only.

use thiserror::Error;

use crate::core::{Game, Hints, NotesConfig, Positions, Round, TeamNotes, TeamSide};

/// Sentinel answer for a positions array too short to encode.
pub const NO_ANSWER: &str = "-";

/// Errors from round edit operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Finalize was attempted with blank hints. `blank` holds the offending
    /// 0-based hint indices.
    #[error("cannot finalize: hint(s) {blank:?} are blank")]
    IncompleteRound { blank: Vec<usize> },

    /// A history index beyond the current round list.
    #[error("round index {index} out of range (history has {len} rounds)")]
    RoundOutOfRange { index: usize, len: usize },
}

/// Derive the answer code from a positions array.
///
/// Returns [`NO_ANSWER`] when fewer than 3 entries are present; otherwise
/// the first three entries as a digit string.
#[must_use]
pub fn derive_answer(positions: &[u8]) -> String {
    if positions.len() < 3 {
        return NO_ANSWER.to_owned();
    }
    positions[..3].iter().map(|p| p.to_string()).collect()
}

/// Exchange the occupants of two columns among the live hint entries.
///
/// At most one hint occupies each column. Moving a hint onto an empty
/// column simply vacates its old column; two empty columns are a no-op.
/// Injectivity among the first `hint_count` entries is preserved.
pub fn swap_columns(positions: &mut [u8], hint_count: usize, col_a: u8, col_b: u8) {
    if col_a == col_b {
        return;
    }

    let live = hint_count.min(positions.len());
    let at_a = positions[..live].iter().position(|&p| p == col_a);
    let at_b = positions[..live].iter().position(|&p| p == col_b);

    match (at_a, at_b) {
        (Some(a), Some(b)) => positions.swap(a, b),
        (Some(a), None) => positions[a] = col_b,
        (None, Some(b)) => positions[b] = col_a,
        (None, None) => {}
    }
}

/// Positions recovered from a manually typed answer string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerParse {
    /// Column per hint, padded to the variant's column count.
    pub positions: Positions,

    /// Hint indices whose answer character was not a valid column digit and
    /// fell back to the identity column `i + 1`.
    pub invalid: Vec<usize>,
}

impl AnswerParse {
    /// Did every character parse as a valid column digit?
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.invalid.is_empty()
    }
}

/// Re-derive positions from a typed answer string.
///
/// Character `i` of the answer places hint `i`; anything that is not a
/// valid column digit for the variant (including a too-short answer) falls
/// back to the identity column `i + 1`. The result is padded with the
/// spare column up to the variant's column count.
///
/// The fallback mirrors the original behavior; callers wanting to surface
/// a validation warning can inspect [`AnswerParse::invalid`].
#[must_use]
pub fn positions_from_answer(answer: &str, config: &NotesConfig) -> AnswerParse {
    let mut chars = answer.chars();
    let mut positions = Positions::new();
    let mut invalid = Vec::new();

    for i in 0..config.hint_count {
        match chars.next().and_then(|ch| config.column_from_digit(ch)) {
            Some(col) => positions.push(col),
            None => {
                invalid.push(i);
                positions.push(i as u8 + 1);
            }
        }
    }

    while positions.len() < config.column_count {
        positions.push(config.column_count as u8);
    }

    AnswerParse { positions, invalid }
}

impl TeamNotes {
    /// Move the working round's hint from `col_a` to `col_b` (swapping with
    /// any occupant).
    pub fn swap_working_columns(&mut self, config: &NotesConfig, col_a: u8, col_b: u8) {
        swap_columns(&mut self.current.positions, config.hint_count, col_a, col_b);
    }

    /// Move a finalized round's hint between columns and refresh its stored
    /// answer.
    pub fn swap_round_columns(
        &mut self,
        config: &NotesConfig,
        index: usize,
        col_a: u8,
        col_b: u8,
    ) -> Result<(), EngineError> {
        let len = self.rounds.len();
        let round = self
            .rounds
            .get_mut(index)
            .ok_or(EngineError::RoundOutOfRange { index, len })?;

        swap_columns(&mut round.positions, config.hint_count, col_a, col_b);
        round.answer = derive_answer(&round.positions);
        Ok(())
    }

    /// Finalize the working round as round `number`.
    ///
    /// Rejected (no state change) unless all hints are filled in. On
    /// success the round is appended to history, the working round resets
    /// to defaults, and the new history index is returned.
    pub fn finalize_round(
        &mut self,
        number: u32,
        config: &NotesConfig,
    ) -> Result<usize, EngineError> {
        let blank = self.current.blank_hints(config);
        if !blank.is_empty() {
            return Err(EngineError::IncompleteRound { blank });
        }

        let hints: Hints = self.current.hints[..config.hint_count].to_vec().into();
        let positions = self.current.positions.clone();
        let answer = derive_answer(&positions);

        self.rounds.push(Round {
            number,
            hints,
            positions,
            answer,
            guessed_terms: self.guessed_terms.clone(),
        });
        self.current = crate::core::WorkingRound::fresh(config);

        Ok(self.rounds.len() - 1)
    }

    /// Replace a finalized round's hints and answer.
    ///
    /// Hints and answer are stored verbatim; positions are re-derived from
    /// the answer with identity fallback for invalid digits (see
    /// [`positions_from_answer`]). The parse report is returned so callers
    /// can warn about fallbacks.
    pub fn edit_round(
        &mut self,
        index: usize,
        hints: Hints,
        answer: &str,
        config: &NotesConfig,
    ) -> Result<AnswerParse, EngineError> {
        let len = self.rounds.len();
        let round = self
            .rounds
            .get_mut(index)
            .ok_or(EngineError::RoundOutOfRange { index, len })?;

        let parse = positions_from_answer(answer, config);
        round.hints = hints;
        round.answer = answer.to_owned();
        round.positions = parse.positions.clone();
        Ok(parse)
    }

    /// Delete a finalized round. Later rounds shift down in the history but
    /// keep their original round numbers.
    pub fn delete_round(&mut self, index: usize) -> Result<Round, EngineError> {
        let len = self.rounds.len();
        if index >= len {
            return Err(EngineError::RoundOutOfRange { index, len });
        }
        Ok(self.rounds.remove(index))
    }

    /// Set a single hint slot, on the working round or a finalized round.
    pub fn set_hint(
        &mut self,
        round_index: Option<usize>,
        hint_index: usize,
        text: impl Into<String>,
    ) -> Result<(), EngineError> {
        let len = self.rounds.len();
        let hints = match round_index {
            Some(index) => {
                &mut self
                    .rounds
                    .get_mut(index)
                    .ok_or(EngineError::RoundOutOfRange { index, len })?
                    .hints
            }
            None => &mut self.current.hints,
        };

        while hints.len() <= hint_index {
            hints.push(String::new());
        }
        hints[hint_index] = text.into();
        Ok(())
    }
}

impl Game {
    /// Finalize one side's working round, assigning and advancing the
    /// shared round counter. Returns the assigned round number.
    pub fn finalize_round(
        &mut self,
        side: TeamSide,
        config: &NotesConfig,
    ) -> Result<u32, EngineError> {
        let number = self.current_round;
        self.teams[side].finalize_round(number, config)?;
        self.current_round += 1;
        Ok(number)
    }
}
