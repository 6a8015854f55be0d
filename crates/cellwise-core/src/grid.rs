//! The 81-cell grid arena.
//!
//! [`Grid`] owns all 81 cells as a flat array and is the single source of
//! truth for cell state. Rows, columns, and boxes are derived index views
//! (see [`Unit`]); they never hold copies of cells, so an elimination made
//! while scanning one unit is immediately visible to the other two units
//! sharing the cell.

use std::{fmt, str::FromStr};

use crate::{
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    error::{ConsistencyError, InvalidInputSize, ParseGridError},
    position::Position,
    unit::Unit,
};

/// A 9×9 grid of [`Cell`]s, stored as a flat 81-element arena.
///
/// # Examples
///
/// ```
/// use cellwise_core::{Digit, Grid};
///
/// let grid: Grid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// assert_eq!(grid.value_at(cellwise_core::Position::new(0, 0)), Some(Digit::D5));
/// assert!(!grid.is_solved());
/// # Ok::<(), cellwise_core::ParseGridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; 81],
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}

impl Grid {
    /// Creates a grid with every cell unsolved and all candidates open.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [Cell::unsolved(); 81],
        }
    }

    /// Builds a grid from a sequence of exactly 81 optional digits.
    ///
    /// Known digits become solved cells; `None` entries start with all nine
    /// candidates.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputSize`] if `values` does not contain exactly 81
    /// elements.
    pub fn from_values(values: &[Option<Digit>]) -> Result<Self, InvalidInputSize> {
        if values.len() != 81 {
            return Err(InvalidInputSize { len: values.len() });
        }
        let mut grid = Self::empty();
        for (cell, value) in grid.cells.iter_mut().zip(values) {
            if let Some(digit) = value {
                *cell = Cell::solved(*digit);
            }
        }
        Ok(grid)
    }

    /// Returns the cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[usize::from(pos.index())]
    }

    fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.cells[usize::from(pos.index())]
    }

    /// Returns the committed value at `pos`, or `None` while unsolved.
    #[must_use]
    pub fn value_at(&self, pos: Position) -> Option<Digit> {
        self.cell(pos).value()
    }

    /// Returns the candidate set at `pos` (empty once solved).
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        self.cell(pos).candidates()
    }

    /// Returns `true` if the cell at `pos` is solved.
    #[must_use]
    pub fn is_solved_at(&self, pos: Position) -> bool {
        self.cell(pos).is_solved()
    }

    /// Returns the sole remaining candidate at `pos`, if the cell is
    /// unsolved with exactly one.
    #[must_use]
    pub fn single_candidate_at(&self, pos: Position) -> Option<Digit> {
        self.cell(pos).single_candidate()
    }

    /// Removes `digits` from the candidate set at `pos`.
    ///
    /// No-op (`Ok(false)`) on a solved cell. Returns `Ok(true)` if the
    /// candidate set shrank.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError::Contradiction`] if the elimination leaves
    /// an unsolved cell with no candidates.
    pub fn eliminate_at(
        &mut self,
        pos: Position,
        digits: DigitSet,
    ) -> Result<bool, ConsistencyError> {
        let cell = self.cell_mut(pos);
        let changed = cell.remove_candidates(digits);
        if cell.is_contradicted() {
            return Err(ConsistencyError::Contradiction { position: pos });
        }
        Ok(changed)
    }

    /// Commits `digit` at `pos`, discarding the cell's candidates.
    ///
    /// The caller guarantees `digit` was a legal candidate (established by
    /// the rule that found it); legality is debug-asserted only.
    pub fn commit_at(&mut self, pos: Position, digit: Digit) {
        self.cell_mut(pos).commit(digit);
    }

    /// Returns `true` if every cell is solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(Cell::is_solved)
    }

    /// Returns `true` if all nine cells of `unit` are solved.
    #[must_use]
    pub fn is_unit_solved(&self, unit: Unit) -> bool {
        unit.positions().iter().all(|&pos| self.is_solved_at(pos))
    }

    /// Returns the set of values already committed within `unit`.
    #[must_use]
    pub fn solved_values_in(&self, unit: Unit) -> DigitSet {
        let mut values = DigitSet::new();
        for pos in unit.positions() {
            if let Some(digit) = self.value_at(pos) {
                values.insert(digit);
            }
        }
        values
    }

    /// Recomputes the solved values of `unit` and checks them for
    /// duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`ConsistencyError::DuplicateValue`] naming the unit and the
    /// duplicated digit if any value appears more than once among solved
    /// cells.
    pub fn validate_unit(&self, unit: Unit) -> Result<(), ConsistencyError> {
        let mut seen = DigitSet::new();
        for pos in unit.positions() {
            if let Some(digit) = self.value_at(pos)
                && !seen.insert(digit)
            {
                return Err(ConsistencyError::DuplicateValue { unit, digit });
            }
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses a grid from text: digits `1`-`9` are givens; `.`, `_`, or `0`
    /// mark unknown cells; whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut values = Vec::with_capacity(81);
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            match c {
                '.' | '_' | '0' => values.push(None),
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = c.to_digit(10).map(|v| v as u8).and_then(Digit::try_from_value);
                    values.push(value);
                }
                _ => return Err(ParseGridError::UnexpectedChar(c)),
            }
        }
        Ok(Self::from_values(&values)?)
    }
}

impl fmt::Display for Grid {
    /// Renders the grid in the same text format accepted by
    /// [`from_str`](str::parse): nine lines of nine cells, `_` for unknown,
    /// a space between box columns.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0u8..9 {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, pos) in Position::ROWS[usize::from(y)].iter().enumerate() {
                if x > 0 && x % 3 == 0 {
                    write!(f, " ")?;
                }
                match self.value_at(*pos) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => write!(f, "_")?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digit::Digit::*;

    #[test]
    fn test_from_values_requires_81() {
        let err = Grid::from_values(&vec![None; 80]).unwrap_err();
        assert_eq!(err, InvalidInputSize { len: 80 });
        let err = Grid::from_values(&vec![None; 82]).unwrap_err();
        assert_eq!(err, InvalidInputSize { len: 82 });
        assert!(Grid::from_values(&vec![None; 81]).is_ok());
    }

    #[test]
    fn test_from_values_places_givens() {
        let mut values = vec![None; 81];
        values[0] = Some(D5);
        values[40] = Some(D9);
        let grid = Grid::from_values(&values).unwrap();

        assert_eq!(grid.value_at(Position::from_index(0)), Some(D5));
        assert_eq!(grid.value_at(Position::from_index(40)), Some(D9));
        assert_eq!(grid.value_at(Position::from_index(1)), None);
        assert_eq!(grid.candidates_at(Position::from_index(1)), DigitSet::FULL);
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let text = "\
            53_ _7_ ___\n\
            6__ 195 ___\n\
            _98 ___ _6_\n\
            8__ _6_ __3\n\
            4__ 8_3 __1\n\
            7__ _2_ __6\n\
            _6_ ___ 28_\n\
            ___ 419 __5\n\
            ___ _8_ _79";
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.value_at(Position::new(0, 0)), Some(D5));
        assert_eq!(grid.value_at(Position::new(4, 1)), Some(D9));
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn test_display_empty_grid() {
        let out = Grid::empty().to_string();
        assert_eq!(out.lines().count(), 9);
        for line in out.lines() {
            assert_eq!(line, "___ ___ ___");
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = "x".repeat(81).parse::<Grid>().unwrap_err();
        assert_eq!(err, ParseGridError::UnexpectedChar('x'));

        let err = ".".repeat(80).parse::<Grid>().unwrap_err();
        assert_eq!(err, ParseGridError::BadSize(InvalidInputSize { len: 80 }));
    }

    #[test]
    fn test_eliminate_at() {
        let mut grid = Grid::empty();
        let pos = Position::new(3, 3);

        assert!(grid.eliminate_at(pos, DigitSet::from_iter([D1, D2])).unwrap());
        assert!(!grid.eliminate_at(pos, DigitSet::from_iter([D1, D2])).unwrap());
        assert_eq!(grid.candidates_at(pos).len(), 7);

        // Solved cells ignore elimination.
        grid.commit_at(pos, D9);
        assert!(!grid.eliminate_at(pos, DigitSet::FULL).unwrap());
    }

    #[test]
    fn test_eliminate_at_reports_contradiction() {
        let mut grid = Grid::empty();
        let pos = Position::new(2, 6);

        let err = grid.eliminate_at(pos, DigitSet::FULL).unwrap_err();
        assert_eq!(err, ConsistencyError::Contradiction { position: pos });
    }

    #[test]
    fn test_validate_unit_detects_duplicates() {
        let mut grid = Grid::empty();
        grid.commit_at(Position::new(0, 4), D7);
        grid.commit_at(Position::new(6, 4), D7);

        let err = grid.validate_unit(Unit::Row { y: 4 }).unwrap_err();
        assert_eq!(
            err,
            ConsistencyError::DuplicateValue {
                unit: Unit::Row { y: 4 },
                digit: D7,
            }
        );
        // Other units are unaffected.
        grid.validate_unit(Unit::Column { x: 0 }).unwrap();
        grid.validate_unit(Unit::Box { index: 4 }).unwrap();
    }

    #[test]
    fn test_solved_values_in() {
        let mut grid = Grid::empty();
        grid.commit_at(Position::new(0, 0), D1);
        grid.commit_at(Position::new(8, 0), D9);

        let values = grid.solved_values_in(Unit::Row { y: 0 });
        assert_eq!(values, DigitSet::from_iter([D1, D9]));
        assert_eq!(grid.solved_values_in(Unit::Row { y: 1 }), DigitSet::EMPTY);
    }

    #[test]
    fn test_is_unit_solved() {
        let mut grid = Grid::empty();
        assert!(!grid.is_unit_solved(Unit::Row { y: 0 }));
        for (digit, pos) in Digit::ALL.into_iter().zip(Position::ROWS[0]) {
            grid.commit_at(pos, digit);
        }
        assert!(grid.is_unit_solved(Unit::Row { y: 0 }));
        assert!(!grid.is_solved());
    }
}
