//! The propagation board: grid state plus the solve driver.

use std::{collections::VecDeque, str::FromStr};

use cellwise_core::{
    Digit, Grid, InvalidInputSize, ParseGridError, Position, Unit,
};

use crate::error::SolverError;

/// Default bound on [`Board::start`]'s step loop.
///
/// Propagation-solvable puzzles settle well within this; the bound exists
/// only to stop stepping on puzzles propagation cannot finish.
pub const DEFAULT_STEP_LIMIT: usize = 20;

/// Where a board is in its solve lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum SolvePhase {
    /// No solve has been started.
    #[default]
    NotStarted,
    /// A solve loop is in progress.
    Solving,
    /// The grid is fully solved.
    Solved,
    /// The solve ended without solving the grid: propagation stalled or a
    /// contradiction was found.
    Failed,
}

/// Outcome of a bounded solve loop.
///
/// An unsolved report is a valid result, not an error: it means propagation
/// stalled before filling the grid (see [`Board::start`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveReport {
    /// Whether the grid is fully solved.
    pub solved: bool,
    /// Number of [`Board::step`] calls made.
    pub steps: usize,
}

/// A solving session over one [`Grid`].
///
/// The board owns the 81-cell arena and drives propagation over the 27 unit
/// views. Commits are recorded in order and queued for cascading: each
/// committed position is drained from a FIFO queue, re-running the unit pass
/// on its row, column, and box, which may commit further cells.
///
/// # Examples
///
/// ```
/// use cellwise_solver::Board;
///
/// let mut board: Board = "
///     _23 456 789
///     456 789 123
///     789 123 456
///     234 567 891
///     567 8_1 234
///     891 234 567
///     345 678 912
///     678 912 345
///     912 345 67_
/// "
/// .parse()?;
///
/// let report = board.start()?;
/// assert!(report.solved);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    phase: SolvePhase,
    pending: VecDeque<Position>,
    commits: Vec<(Position, Digit)>,
}

impl Board {
    /// Creates a board from a sequence of exactly 81 optional digits.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputSize`] if `values` does not contain exactly 81
    /// elements.
    pub fn new(values: &[Option<Digit>]) -> Result<Self, InvalidInputSize> {
        Ok(Self::from(Grid::from_values(values)?))
    }

    /// Returns the current grid state.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the current solve phase.
    #[must_use]
    pub fn phase(&self) -> SolvePhase {
        self.phase
    }

    /// Returns `true` once a solve has begun.
    #[must_use]
    pub fn started(&self) -> bool {
        !self.phase.is_not_started()
    }

    /// Renders the current grid state; see [`render`](crate::render).
    #[must_use]
    pub fn render(&self, details: bool) -> String {
        crate::render::render(&self.grid, details)
    }

    /// Returns every commit made so far, in order.
    #[must_use]
    pub fn commits(&self) -> &[(Position, Digit)] {
        &self.commits
    }

    /// Returns `true` if every cell is solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.grid.is_solved()
    }

    /// Records a commit and queues it for cascading.
    pub(crate) fn commit(&mut self, pos: Position, digit: Digit) {
        log::debug!("commit {digit} at {pos}");
        self.grid.commit_at(pos, digit);
        self.commits.push((pos, digit));
        self.pending.push_back(pos);
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Runs one coarse propagation iteration.
    ///
    /// For each index 0-8, runs the unit pass on that row, column, and box,
    /// draining the commit queue after each pass, and short-circuits as soon
    /// as the grid is solved. A no-op on an already-solved board.
    ///
    /// Returns `true` if any candidate set shrank or any cell was committed.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if propagation finds a
    /// contradiction.
    pub fn step(&mut self) -> Result<bool, SolverError> {
        if self.grid.is_solved() {
            return Ok(false);
        }
        let mut changed = false;
        for i in 0..9 {
            for unit in [Unit::ROWS[i], Unit::COLUMNS[i], Unit::BOXES[i]] {
                changed |= self.run_unit_pass(unit)?;
                changed |= self.drain_pending()?;
                if self.grid.is_solved() {
                    return Ok(changed);
                }
            }
        }
        Ok(changed)
    }

    /// Drains the commit queue, re-running the unit pass on the row, column,
    /// and box of each committed cell (skipping units already solved).
    /// Passes may commit further cells, extending the queue.
    fn drain_pending(&mut self) -> Result<bool, SolverError> {
        let mut changed = false;
        while let Some(pos) = self.pending.pop_front() {
            for unit in Unit::of(pos) {
                if self.grid.is_unit_solved(unit) {
                    continue;
                }
                changed |= self.run_unit_pass(unit)?;
            }
        }
        Ok(changed)
    }

    /// Runs the bounded solve loop with the default step limit.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if propagation finds a
    /// contradiction; the phase is left at [`SolvePhase::Failed`].
    pub fn start(&mut self) -> Result<SolveReport, SolverError> {
        self.start_with_limit(DEFAULT_STEP_LIMIT)
    }

    /// Runs up to `limit` steps, stopping early once solved or stalled.
    ///
    /// A stall (a step that changes nothing, or an exhausted limit) is a
    /// valid outcome reported as `solved: false`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if propagation finds a
    /// contradiction; the phase is left at [`SolvePhase::Failed`].
    pub fn start_with_limit(&mut self, limit: usize) -> Result<SolveReport, SolverError> {
        self.phase = SolvePhase::Solving;
        let mut steps = 0;
        while steps < limit && !self.grid.is_solved() {
            steps += 1;
            let changed = match self.step() {
                Ok(changed) => changed,
                Err(err) => {
                    self.phase = SolvePhase::Failed;
                    return Err(err);
                }
            };
            if !changed {
                break;
            }
        }
        let solved = self.grid.is_solved();
        if solved {
            self.phase = SolvePhase::Solved;
            log::info!("solved in {steps} steps ({} commits)", self.commits.len());
        } else {
            self.phase = SolvePhase::Failed;
            log::warn!("propagation stalled after {steps} steps");
        }
        Ok(SolveReport { solved, steps })
    }
}

impl From<Grid> for Board {
    fn from(grid: Grid) -> Self {
        Self {
            grid,
            phase: SolvePhase::NotStarted,
            pending: VecDeque::new(),
            commits: Vec::new(),
        }
    }
}

impl FromStr for Board {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        Ok(Self::from(s.parse::<Grid>()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_81_values() {
        let err = Board::new(&vec![None; 80]).unwrap_err();
        assert_eq!(err, InvalidInputSize { len: 80 });
        assert!(Board::new(&vec![None; 81]).is_ok());
    }

    #[test]
    fn test_phase_starts_not_started() {
        let board = Board::from(Grid::empty());
        assert!(board.phase().is_not_started());
        assert!(!board.started());
        assert!(board.commits().is_empty());
    }

    #[test]
    fn test_empty_grid_stalls() {
        let mut board = Board::from(Grid::empty());
        let report = board.start().unwrap();
        assert!(!report.solved);
        assert!(board.phase().is_failed());
        assert!(board.started());
        assert!(!board.is_solved());
        // Nothing to propagate from, so the first step is already a stall.
        assert_eq!(report.steps, 1);
    }
}
