//! The per-unit elimination pass.
//!
//! One pass over a unit applies, in order: consistency validation, naked
//! singles ([`reduce_from_solved`]), hidden singles
//! ([`assign_unique_candidates`]), then naked pairs and triples
//! ([`eliminate_groups`] with size 2 then 3). The order matters: singles
//! must be propagated before group elimination is meaningful, and pair
//! detection before triple detection avoids triple matches that are really
//! pairs with one stale candidate.
//!
//! [`reduce_from_solved`]: Board::reduce_from_solved
//! [`assign_unique_candidates`]: Board::assign_unique_candidates
//! [`eliminate_groups`]: Board::eliminate_groups

use cellwise_core::{Digit, Position, Unit};
use tinyvec::ArrayVec;

use crate::{board::Board, error::SolverError};

impl Board {
    /// Runs the full elimination pass on `unit`.
    ///
    /// Returns `true` if any candidate set shrank or any cell was committed.
    /// Solved units are skipped after validation.
    pub(crate) fn run_unit_pass(&mut self, unit: Unit) -> Result<bool, SolverError> {
        self.grid().validate_unit(unit)?;
        if self.grid().is_unit_solved(unit) {
            return Ok(false);
        }
        let mut changed = self.reduce_from_solved(unit)?;
        changed |= self.assign_unique_candidates(unit)?;
        changed |= self.eliminate_groups(unit, 2)?;
        changed |= self.eliminate_groups(unit, 3)?;
        Ok(changed)
    }

    /// The naked-single pass: eliminates every value already solved in
    /// `unit` from its unsolved cells, then commits any cell left with a
    /// single candidate.
    fn reduce_from_solved(&mut self, unit: Unit) -> Result<bool, SolverError> {
        let solved = self.grid().solved_values_in(unit);
        let mut changed = false;
        for pos in unit.positions() {
            changed |= self.grid_mut().eliminate_at(pos, solved)?;
        }
        changed |= self.force_singles(unit);
        Ok(changed)
    }

    /// Commits every unsolved cell of `unit` left with a single candidate.
    fn force_singles(&mut self, unit: Unit) -> bool {
        let mut changed = false;
        for pos in unit.positions() {
            if let Some(digit) = self.grid().single_candidate_at(pos) {
                self.commit(pos, digit);
                changed = true;
            }
        }
        changed
    }

    /// The hidden-single pass: commits each digit that appears as a
    /// candidate in exactly one cell of `unit`.
    ///
    /// Candidate sets may shift under commits made earlier in the same
    /// pass, so the naked-single reduction is re-run before each commit,
    /// and the unit is re-validated after it.
    fn assign_unique_candidates(&mut self, unit: Unit) -> Result<bool, SolverError> {
        let mut changed = false;
        for digit in Digit::ALL {
            let holders = unit
                .positions()
                .iter()
                .filter(|&&pos| self.grid().candidates_at(pos).contains(digit))
                .count();
            if holders != 1 {
                continue;
            }
            changed |= self.reduce_from_solved(unit)?;
            // The reduction may already have committed the hidden single;
            // only commit if a cell still lists the digit.
            let home = unit
                .positions()
                .into_iter()
                .find(|&pos| self.grid().candidates_at(pos).contains(digit));
            if let Some(pos) = home {
                self.commit(pos, digit);
                changed = true;
            }
            self.grid().validate_unit(unit)?;
        }
        Ok(changed)
    }

    /// The naked-group pass: if a candidate set of cardinality `size` is
    /// shared by exactly `size` cells of `unit`, those digits cannot appear
    /// anywhere else in the unit, so they are eliminated from every cell
    /// whose candidate set is not identical to it.
    fn eliminate_groups(&mut self, unit: Unit, size: usize) -> Result<bool, SolverError> {
        let mut changed = false;
        for anchor in unit.positions() {
            let set = self.grid().candidates_at(anchor);
            if set.len() != size {
                continue;
            }
            let mut members: ArrayVec<[Position; 9]> = ArrayVec::new();
            for pos in unit.positions() {
                if self.grid().candidates_at(pos) == set {
                    members.push(pos);
                }
            }
            // Each group is processed once, anchored at its first member.
            if members[0] != anchor || members.len() != size {
                continue;
            }
            log::trace!("naked group {set} in {unit}");
            for pos in unit.positions() {
                if self.grid().candidates_at(pos) == set {
                    continue;
                }
                changed |= self.grid_mut().eliminate_at(pos, set)?;
            }
        }
        Ok(changed)
    }
}
