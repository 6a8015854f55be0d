//! Constraint-propagation Sudoku solver.
//!
//! [`Board`] wraps a [`cellwise_core::Grid`] and drives iterative
//! candidate elimination over its 27 unit views until the grid is solved,
//! propagation stalls, or a contradiction surfaces. No backtracking search
//! is performed: puzzles that propagation alone cannot finish are reported
//! as stalled, which is a valid outcome rather than an error.

mod board;
mod error;
mod render;
mod unit_pass;

pub use self::{
    board::{Board, DEFAULT_STEP_LIMIT, SolvePhase, SolveReport},
    error::SolverError,
    render::render,
};
