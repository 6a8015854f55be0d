//! Cell state: a committed value or a set of remaining candidates.

use crate::{digit::Digit, digit_set::DigitSet};

/// One grid cell: either a committed value or the candidates still possible.
///
/// A cell is never in both states at once. Elimination may only shrink the
/// candidate set; committing replaces it with a value that is immutable for
/// the rest of the solve. An unsolved cell with an empty candidate set is a
/// contradiction, which the owning [`Grid`](crate::Grid) reports as an error
/// rather than tolerating.
///
/// # Examples
///
/// ```
/// use cellwise_core::{Cell, Digit, DigitSet};
///
/// let mut cell = Cell::unsolved();
/// assert_eq!(cell.candidates().len(), 9);
///
/// cell.remove_candidates(!DigitSet::from_elem(Digit::D4));
/// assert_eq!(cell.single_candidate(), Some(Digit::D4));
///
/// cell.commit(Digit::D4);
/// assert_eq!(cell.value(), Some(Digit::D4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// A committed value.
    Value(Digit),
    /// The digits still possible for this cell.
    Candidates(DigitSet),
}

impl Default for Cell {
    fn default() -> Self {
        Self::unsolved()
    }
}

impl Cell {
    /// Creates an unsolved cell with all nine candidates.
    #[must_use]
    pub const fn unsolved() -> Self {
        Self::Candidates(DigitSet::FULL)
    }

    /// Creates a solved cell holding `digit`.
    #[must_use]
    pub const fn solved(digit: Digit) -> Self {
        Self::Value(digit)
    }

    /// Returns `true` if this cell holds a committed value.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Returns the committed value, or `None` while unsolved.
    #[must_use]
    pub const fn value(&self) -> Option<Digit> {
        match self {
            Self::Value(digit) => Some(*digit),
            Self::Candidates(_) => None,
        }
    }

    /// Returns the remaining candidates, or the empty set once solved.
    #[must_use]
    pub const fn candidates(&self) -> DigitSet {
        match self {
            Self::Value(_) => DigitSet::EMPTY,
            Self::Candidates(set) => *set,
        }
    }

    /// Returns the sole remaining candidate of an unsolved cell, if any.
    #[must_use]
    pub const fn single_candidate(&self) -> Option<Digit> {
        match self {
            Self::Value(_) => None,
            Self::Candidates(set) => set.as_single(),
        }
    }

    /// Removes `digits` from the candidate set.
    ///
    /// No-op on a solved cell. Returns `true` if the candidate set shrank.
    /// The caller is responsible for checking [`is_contradicted`]
    /// afterwards; this method never hides an emptied set.
    ///
    /// [`is_contradicted`]: Self::is_contradicted
    pub const fn remove_candidates(&mut self, digits: DigitSet) -> bool {
        match self {
            Self::Value(_) => false,
            Self::Candidates(set) => set.remove_all(digits),
        }
    }

    /// Transitions to `Value(digit)`, discarding the candidates.
    ///
    /// The caller guarantees that `digit` was a legal candidate; this is
    /// debug-asserted only, matching the commit contract where legality was
    /// established by the elimination rule that found the digit.
    pub fn commit(&mut self, digit: Digit) {
        debug_assert!(
            self.candidates().contains(digit),
            "commit of {digit} which is not a candidate"
        );
        *self = Self::Value(digit);
    }

    /// Returns `true` if this cell is unsolved with no candidates left.
    #[must_use]
    pub const fn is_contradicted(&self) -> bool {
        match self {
            Self::Value(_) => false,
            Self::Candidates(set) => set.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digit::Digit::*;

    #[test]
    fn test_unsolved_starts_full() {
        let cell = Cell::unsolved();
        assert!(!cell.is_solved());
        assert_eq!(cell.value(), None);
        assert_eq!(cell.candidates(), DigitSet::FULL);
    }

    #[test]
    fn test_remove_candidates_shrinks() {
        let mut cell = Cell::unsolved();
        assert!(cell.remove_candidates(DigitSet::from_iter([D1, D2])));
        assert!(!cell.remove_candidates(DigitSet::from_iter([D1, D2])));
        assert_eq!(cell.candidates().len(), 7);
    }

    #[test]
    fn test_remove_candidates_ignores_solved() {
        let mut cell = Cell::solved(D5);
        assert!(!cell.remove_candidates(DigitSet::FULL));
        assert_eq!(cell.value(), Some(D5));
    }

    #[test]
    fn test_single_candidate() {
        let mut cell = Cell::unsolved();
        assert_eq!(cell.single_candidate(), None);
        cell.remove_candidates(!DigitSet::from_elem(D8));
        assert_eq!(cell.single_candidate(), Some(D8));
        cell.commit(D8);
        assert_eq!(cell.single_candidate(), None);
    }

    #[test]
    fn test_commit_discards_candidates() {
        let mut cell = Cell::unsolved();
        cell.commit(D3);
        assert!(cell.is_solved());
        assert_eq!(cell.value(), Some(D3));
        assert_eq!(cell.candidates(), DigitSet::EMPTY);
    }

    #[test]
    fn test_contradiction_detection() {
        let mut cell = Cell::unsolved();
        assert!(!cell.is_contradicted());
        cell.remove_candidates(DigitSet::FULL);
        assert!(cell.is_contradicted());
        assert!(!Cell::solved(D1).is_contradicted());
    }
}
