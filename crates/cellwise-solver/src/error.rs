//! Solver error type.

use cellwise_core::ConsistencyError;

/// Failure of a solve: the grid reached a contradictory state.
///
/// A stalled solve is not an error; see
/// [`SolveReport`](crate::SolveReport).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolverError {
    /// Propagation drove the grid into an inconsistent state.
    #[display("inconsistency detected: {_0}")]
    Inconsistent(ConsistencyError),
}
