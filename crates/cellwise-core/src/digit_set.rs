//! Candidate digit sets.
//!
//! [`DigitSet`] is the per-cell candidate model: the set of digits 1-9 not
//! yet ruled out for an unsolved cell. It is backed by a 16-bit mask where
//! bits 0-8 represent digits 1-9, so all set operations are single integer
//! instructions.
//!
//! # Examples
//!
//! ```
//! use cellwise_core::{Digit, DigitSet};
//!
//! let mut candidates = DigitSet::FULL;
//! candidates.remove(Digit::D5);
//! candidates.remove(Digit::D7);
//!
//! assert_eq!(candidates.len(), 7);
//! assert!(!candidates.contains(Digit::D5));
//! assert!(candidates.contains(Digit::D1));
//! ```

use std::{fmt, iter::FusedIterator, ops};

use crate::digit::Digit;

/// A set of digits 1-9, represented as a bitmask.
///
/// # Set Operations
///
/// ```
/// use cellwise_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
/// let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
///
/// assert_eq!(a | b, DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3, Digit::D4]));
/// assert_eq!(a & b, DigitSet::from_iter([Digit::D2, Digit::D3]));
/// assert_eq!(a.difference(b), DigitSet::from_iter([Digit::D1]));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet {
    bits: u16,
}

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all nine digits.
    pub const FULL: Self = Self { bits: 0x1ff };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing a single digit.
    #[must_use]
    pub const fn from_elem(digit: Digit) -> Self {
        Self {
            bits: Self::bit(digit),
        }
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit as u16 - 1)
    }

    /// Inserts a digit. Returns `true` if the set changed.
    pub const fn insert(&mut self, digit: Digit) -> bool {
        let before = self.bits;
        self.bits |= Self::bit(digit);
        self.bits != before
    }

    /// Removes a digit. Returns `true` if the set changed.
    pub const fn remove(&mut self, digit: Digit) -> bool {
        let before = self.bits;
        self.bits &= !Self::bit(digit);
        self.bits != before
    }

    /// Removes every digit in `digits`. Returns `true` if the set changed.
    pub const fn remove_all(&mut self, digits: Self) -> bool {
        let before = self.bits;
        self.bits &= !digits.bits;
        self.bits != before
    }

    /// Returns `true` if the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the sole digit if the set has exactly one element.
    ///
    /// This is the naked-single test: a cell whose candidate set answers
    /// `Some` here is forced.
    #[must_use]
    pub const fn as_single(self) -> Option<Digit> {
        if self.bits.count_ones() != 1 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.bits.trailing_zeros() as u8 + 1;
        Digit::try_from_value(value)
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.iter() {
            fmt::Display::fmt(&digit, f)?;
        }
        Ok(())
    }
}

impl ops::BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl ops::BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl ops::BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl ops::BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl ops::Not for DigitSet {
    type Output = Self;

    fn not(self) -> Self {
        Self {
            bits: !self.bits & Self::FULL.bits,
        }
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Digit>,
    {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.bits.trailing_zeros() as u8 + 1;
        self.bits &= self.bits - 1;
        Digit::try_from_value(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use proptest::prelude::*;

    use super::*;
    use crate::digit::Digit::*;

    #[test]
    fn test_insert_remove() {
        let mut set = DigitSet::new();
        assert!(set.insert(D1));
        assert!(!set.insert(D1));
        assert!(set.insert(D9));
        assert_eq!(set.len(), 2);
        assert!(set.remove(D1));
        assert!(!set.remove(D1));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert!(DigitSet::EMPTY.is_empty());
        assert_eq!(DigitSet::FULL.len(), 9);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_as_single() {
        assert_eq!(DigitSet::EMPTY.as_single(), None);
        assert_eq!(DigitSet::FULL.as_single(), None);
        assert_eq!(DigitSet::from_elem(D7).as_single(), Some(D7));
        assert_eq!(DigitSet::from_iter([D2, D7]).as_single(), None);
    }

    #[test]
    fn test_iteration_order() {
        let set = DigitSet::from_iter([D9, D1, D5, D3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![D1, D3, D5, D9]);
        assert_eq!(set.iter().len(), 4);
    }

    #[test]
    fn test_set_operations() {
        let a = DigitSet::from_iter([D1, D2, D3]);
        let b = DigitSet::from_iter([D2, D3, D4]);

        assert_eq!((a | b).len(), 4);
        assert_eq!((a & b).len(), 2);
        assert_eq!(a.difference(b), DigitSet::from_elem(D1));
        assert_eq!((!DigitSet::FULL), DigitSet::EMPTY);
        assert_eq!((!a).len(), 6);
    }

    #[test]
    fn test_remove_all() {
        let mut set = DigitSet::FULL;
        assert!(set.remove_all(DigitSet::from_iter([D4, D7])));
        assert!(!set.remove_all(DigitSet::from_iter([D4, D7])));
        assert_eq!(set.len(), 7);
        assert!(!set.contains(D4));
        assert!(!set.contains(D7));
    }

    #[test]
    fn test_display() {
        let set = DigitSet::from_iter([D4, D1, D7]);
        assert_eq!(set.to_string(), "147");
        assert_eq!(DigitSet::EMPTY.to_string(), "");
    }

    proptest! {
        #[test]
        fn prop_matches_btree_set_model(values in proptest::collection::vec(1u8..=9, 0..32)) {
            let mut set = DigitSet::new();
            let mut model = BTreeSet::new();
            for value in values {
                let digit = Digit::from_value(value);
                prop_assert_eq!(set.insert(digit), model.insert(digit));
            }
            prop_assert_eq!(set.len(), model.len());
            let collected: Vec<_> = set.iter().collect();
            let expected: Vec<_> = model.into_iter().collect();
            prop_assert_eq!(collected, expected);
        }

        #[test]
        fn prop_remove_only_shrinks(
            start in 0u16..=0x1ff,
            removals in proptest::collection::vec(1u8..=9, 0..16),
        ) {
            let mut set = DigitSet::new();
            for digit in Digit::ALL {
                if start & (1 << (digit.value() - 1)) != 0 {
                    set.insert(digit);
                }
            }
            let mut prev = set.len();
            for value in removals {
                set.remove(Digit::from_value(value));
                prop_assert!(set.len() <= prev);
                prev = set.len();
            }
        }
    }
}
