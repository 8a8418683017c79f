//! Game variant configuration.
//!
//! The engine never hardcodes the table shape. The classic variant places
//! 3 hints on a 4-column board; a compact variant drops the spare column.
//! Everything downstream (answer derivation, edit validation, working-round
//! defaults) reads the shape from `NotesConfig`.

use serde::{Deserialize, Serialize};

/// Shape of the game variant being tracked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotesConfig {
    /// Number of hints given per round.
    pub hint_count: usize,

    /// Number of columns a hint can occupy (1-based, 1..=column_count).
    pub column_count: usize,
}

impl NotesConfig {
    /// The classic variant: 3 hints over 4 columns.
    #[must_use]
    pub const fn classic() -> Self {
        Self {
            hint_count: 3,
            column_count: 4,
        }
    }

    /// The compact variant: 3 hints over 3 columns.
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            hint_count: 3,
            column_count: 3,
        }
    }

    /// Override the column count.
    #[must_use]
    pub fn with_column_count(mut self, columns: usize) -> Self {
        assert!(columns >= self.hint_count, "Need a column per hint");
        assert!(columns <= 9, "Columns must encode as a single digit");
        self.column_count = columns;
        self
    }

    /// Is `column` a valid 1-based column index for this variant?
    #[must_use]
    pub fn is_valid_column(&self, column: u8) -> bool {
        column >= 1 && (column as usize) <= self.column_count
    }

    /// Parse an answer character into a column, if valid for this variant.
    #[must_use]
    pub fn column_from_digit(&self, ch: char) -> Option<u8> {
        let digit = ch.to_digit(10)? as u8;
        self.is_valid_column(digit).then_some(digit)
    }
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_shape() {
        let config = NotesConfig::classic();
        assert_eq!(config.hint_count, 3);
        assert_eq!(config.column_count, 4);
    }

    #[test]
    fn test_compact_shape() {
        let config = NotesConfig::compact();
        assert_eq!(config.column_count, 3);
    }

    #[test]
    fn test_valid_column() {
        let config = NotesConfig::classic();
        assert!(config.is_valid_column(1));
        assert!(config.is_valid_column(4));
        assert!(!config.is_valid_column(0));
        assert!(!config.is_valid_column(5));
    }

    #[test]
    fn test_column_from_digit() {
        let config = NotesConfig::classic();
        assert_eq!(config.column_from_digit('1'), Some(1));
        assert_eq!(config.column_from_digit('4'), Some(4));
        assert_eq!(config.column_from_digit('5'), None);
        assert_eq!(config.column_from_digit('x'), None);

        let compact = NotesConfig::compact();
        assert_eq!(compact.column_from_digit('4'), None);
        assert_eq!(compact.column_from_digit('3'), Some(3));
    }

    #[test]
    #[should_panic(expected = "Need a column per hint")]
    fn test_too_few_columns() {
        NotesConfig::classic().with_column_count(2);
    }
}
