//! Solver error taxonomy.
//!
//! All input validation happens eagerly before any algorithm runs; no
//! partial results are returned on failure.

use thiserror::Error;

/// Errors returned by the spanning-tree and tour builders.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// The cost matrix is malformed: empty, asymmetric, non-finite or
    /// negative entries, a non-zero diagonal, or a disconnected graph.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The exact solver was asked for more locations than its DP table
    /// limit allows.
    #[error("exact solve of {locations} locations exceeds the limit of {limit}")]
    ResourceExhausted {
        /// Requested number of locations.
        locations: usize,
        /// Configured DP table limit.
        limit: usize,
    },

    /// An internal consistency check failed. Indicates a logic defect in
    /// the solver, not a user error.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
}
