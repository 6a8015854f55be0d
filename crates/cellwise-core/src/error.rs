//! Error types for grid construction and consistency checking.

use crate::{digit::Digit, position::Position, unit::Unit};

/// The input sequence used to build a grid did not contain exactly 81 cells.
///
/// Raised at construction time and never recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("expected exactly 81 cells, got {len}")]
pub struct InvalidInputSize {
    /// The length that was actually supplied.
    pub len: usize,
}

/// A contradiction in grid state, fatal to the current solve.
///
/// Propagation has no fallback search strategy, so neither variant is ever
/// retried: both abort the solve and propagate to the caller with positional
/// context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConsistencyError {
    /// An unsolved cell was left with an empty candidate set.
    #[display(
        "no candidates remain at {position} (row {}, column {}, box {})",
        position.y(),
        position.x(),
        position.box_index()
    )]
    Contradiction {
        /// The cell that ran out of candidates.
        position: Position,
    },
    /// Two solved cells in one unit hold the same value.
    ///
    /// Indicates either malformed input or an elimination bug; the solve
    /// halts immediately rather than continuing with corrupted state.
    #[display("{unit} contains {digit} more than once")]
    DuplicateValue {
        /// The unit in which the duplicate was found.
        unit: Unit,
        /// The duplicated digit.
        digit: Digit,
    },
}

/// Failure to parse grid text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum ParseGridError {
    /// A character that is neither a digit, an empty-cell marker, nor
    /// whitespace.
    #[display("unexpected character {_0:?} in grid text")]
    UnexpectedChar(#[error(not(source))] char),
    /// The text did not describe exactly 81 cells.
    #[display("{_0}")]
    BadSize(InvalidInputSize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_positional_context() {
        let err = ConsistencyError::Contradiction {
            position: Position::new(5, 2),
        };
        assert_eq!(
            err.to_string(),
            "no candidates remain at r2c5 (row 2, column 5, box 1)"
        );

        let err = ConsistencyError::DuplicateValue {
            unit: Unit::Row { y: 4 },
            digit: Digit::D7,
        };
        assert_eq!(err.to_string(), "row 4 contains 7 more than once");
    }

    #[test]
    fn test_invalid_input_size_message() {
        let err = InvalidInputSize { len: 80 };
        assert_eq!(err.to_string(), "expected exactly 81 cells, got 80");
    }

    #[test]
    fn test_parse_error_from_size() {
        let err = ParseGridError::from(InvalidInputSize { len: 3 });
        assert_eq!(err.to_string(), "expected exactly 81 cells, got 3");
    }
}
