//! Core data model for cell-and-unit Sudoku solving.
//!
//! Provides the grid arena ([`Grid`]), cell state ([`Cell`]), digit and
//! candidate-set types ([`Digit`], [`DigitSet`]), coordinates
//! ([`Position`]), and the constraint-unit views ([`Unit`]) that solvers
//! operate on. No solving logic lives here; the `cellwise-solver` crate
//! builds the propagation loop on top of these types.

mod cell;
mod digit;
mod digit_set;
mod error;
mod grid;
mod position;
mod unit;

pub use self::{
    cell::Cell,
    digit::Digit,
    digit_set::{DigitSet, Iter as DigitSetIter},
    error::{ConsistencyError, InvalidInputSize, ParseGridError},
    grid::Grid,
    position::Position,
    unit::Unit,
};
