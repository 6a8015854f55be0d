//! Read-only grid rendering.
//!
//! Rendering is a pure read of cell state and never mutates the grid.

use std::fmt;

use cellwise_core::{Digit, Grid, Position};

/// Renders `grid` as text.
///
/// Compact mode lists one line per cell: the committed value, or the
/// remaining candidates for unsolved cells. Detailed mode draws each cell
/// as a 3×3 block of pencil marks, with solved cells shown as `*v*`.
#[must_use]
pub fn render(grid: &Grid, details: bool) -> String {
    if details {
        DetailView(grid).to_string()
    } else {
        CompactView(grid).to_string()
    }
}

struct CompactView<'a>(&'a Grid);

impl fmt::Display for CompactView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in Position::all() {
            match self.0.value_at(pos) {
                Some(digit) => writeln!(f, "{pos} = {digit}")?,
                None => writeln!(f, "{pos} ? {}", self.0.candidates_at(pos))?,
            }
        }
        Ok(())
    }
}

struct DetailView<'a>(&'a Grid);

impl DetailView<'_> {
    /// Writes one third of a cell: three pencil-mark columns for the digits
    /// `base + 1` to `base + 3`, or the centered value of a solved cell.
    fn write_cell_band(
        &self,
        f: &mut fmt::Formatter<'_>,
        pos: Position,
        band: u8,
    ) -> fmt::Result {
        if let Some(digit) = self.0.value_at(pos) {
            return if band == 1 {
                write!(f, "*{digit}*")
            } else {
                write!(f, "   ")
            };
        }
        let candidates = self.0.candidates_at(pos);
        for value in (band * 3 + 1)..=(band * 3 + 3) {
            match Digit::try_from_value(value) {
                Some(digit) if candidates.contains(digit) => write!(f, "{digit}")?,
                _ => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

impl fmt::Display for DetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..9u8 {
            if y > 0 && y % 3 == 0 {
                writeln!(f, "{}", "-".repeat(39))?;
            }
            for band in 0..3 {
                for x in 0..9u8 {
                    if x > 0 {
                        if x % 3 == 0 {
                            write!(f, " | ")?;
                        } else {
                            write!(f, " ")?;
                        }
                    }
                    self.write_cell_band(f, Position::new(x, y), band)?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
