//! Constraint units (rows, columns, and 3×3 boxes).

use std::fmt;

use crate::position::Position;

/// A constraint unit: a row, column, or 3×3 box.
///
/// Every cell belongs to exactly one unit of each kind, and each unit must
/// collectively contain each digit exactly once. Units never own cells; they
/// are index views over the shared grid arena, so a mutation made through one
/// view is immediately visible through the other two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl Unit {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { y: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row { y: i as u8 };
            i += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { x: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column { x: i as u8 };
            i += 1;
        }
        columns
    };

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            boxes[i] = Self::Box { index: i as u8 };
            i += 1;
        }
        boxes
    };

    /// Array containing all 27 units in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { y: 0 }; 27];
        let mut i = 0;
        while i < 9 {
            all[i] = Self::ROWS[i];
            all[i + 9] = Self::COLUMNS[i];
            all[i + 18] = Self::BOXES[i];
            i += 1;
        }
        all
    };

    /// Returns the three units containing `pos`: its row, column, and box.
    #[must_use]
    pub const fn of(pos: Position) -> [Self; 3] {
        [
            Self::Row { y: pos.y() },
            Self::Column { x: pos.x() },
            Self::Box {
                index: pos.box_index(),
            },
        ]
    }

    /// Returns this unit's index within its kind (0-8).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Row { y } => y,
            Self::Column { x } => x,
            Self::Box { index } => index,
        }
    }

    /// Converts a cell index within the unit (0-8) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub const fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            Self::Row { y } => Position::new(i, y),
            Self::Column { x } => Position::new(x, i),
            Self::Box { index } => Position::from_box(index, i),
        }
    }

    /// Returns the nine positions contained in this unit.
    #[must_use]
    pub const fn positions(self) -> [Position; 9] {
        match self {
            Self::Row { y } => Position::ROWS[y as usize],
            Self::Column { x } => Position::COLUMNS[x as usize],
            Self::Box { index } => Position::BOXES[index as usize],
        }
    }

    /// Returns `true` if this unit contains `pos`.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        match self {
            Self::Row { y } => pos.y() == y,
            Self::Column { x } => pos.x() == x,
            Self::Box { index } => pos.box_index() == index,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row { y } => write!(f, "row {y}"),
            Self::Column { x } => write!(f, "column {x}"),
            Self::Box { index } => write!(f, "box {index}"),
        }
    }
}
