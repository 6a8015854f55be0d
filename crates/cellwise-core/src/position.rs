//! Board position (cell coordinate) types.

use std::fmt;

/// One of the 81 grid positions, stored as a linear index in row-major order.
///
/// A position determines its three constraint-unit memberships once, at
/// creation: for linear index `i`, the row is `i / 9`, the column is `i % 9`,
/// and the box is `(row / 3) * 3 + column / 3`.
///
/// # Examples
///
/// ```
/// use cellwise_core::Position;
///
/// let pos = Position::new(4, 7); // column 4, row 7
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 7);
/// assert_eq!(pos.box_index(), 7);
/// assert_eq!(pos.index(), 67);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    index: u8,
}

impl Position {
    /// All positions of each row, indexed by row (y).
    pub const ROWS: [[Self; 9]; 9] = {
        let mut rows = [[Self { index: 0 }; 9]; 9];
        let mut y = 0;
        #[expect(clippy::cast_possible_truncation)]
        while y < 9 {
            let mut x = 0;
            while x < 9 {
                rows[y][x] = Self::new(x as u8, y as u8);
                x += 1;
            }
            y += 1;
        }
        rows
    };

    /// All positions of each column, indexed by column (x).
    pub const COLUMNS: [[Self; 9]; 9] = {
        let mut columns = [[Self { index: 0 }; 9]; 9];
        let mut x = 0;
        #[expect(clippy::cast_possible_truncation)]
        while x < 9 {
            let mut y = 0;
            while y < 9 {
                columns[x][y] = Self::new(x as u8, y as u8);
                y += 1;
            }
            x += 1;
        }
        columns
    };

    /// All positions of each 3×3 box, indexed by box.
    pub const BOXES: [[Self; 9]; 9] = {
        let mut boxes = [[Self { index: 0 }; 9]; 9];
        let mut b = 0;
        #[expect(clippy::cast_possible_truncation)]
        while b < 9 {
            let mut i = 0;
            while i < 9 {
                boxes[b][i] = Self::from_box(b as u8, i as u8);
                i += 1;
            }
            b += 1;
        }
        boxes
    };

    /// Creates a position from column (`x`) and row (`y`) coordinates.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is 9 or greater.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { index: y * 9 + x }
    }

    /// Creates a position from a linear index in `[0, 81)`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or greater.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        assert!(index < 81);
        Self { index }
    }

    /// Creates a position from a box index and a cell index within that box.
    ///
    /// Cells within a box are numbered 0-8, left to right, top to bottom.
    ///
    /// # Panics
    ///
    /// Panics if either index is 9 or greater.
    #[must_use]
    pub const fn from_box(box_index: u8, cell: u8) -> Self {
        assert!(box_index < 9 && cell < 9);
        let x = (box_index % 3) * 3 + cell % 3;
        let y = (box_index / 3) * 3 + cell / 3;
        Self::new(x, y)
    }

    /// Returns the linear index (0-80).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.index % 9
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.index / 9
    }

    /// Returns the index of the 3×3 box containing this position (0-8).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y() / 3) * 3 + self.x() / 3
    }

    /// Returns the cell index (0-8) of this position within its box.
    #[must_use]
    pub const fn box_cell_index(self) -> u8 {
        (self.y() % 3) * 3 + self.x() % 3
    }

    /// Returns an iterator over all 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Self::from_index)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.y(), self.x())
    }
}
