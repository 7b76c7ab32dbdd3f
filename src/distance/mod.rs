//! Symmetric cost matrices.
//!
//! Provides the dense cost matrix consumed by the spanning-tree and tour
//! builders.

mod matrix;

pub use matrix::CostMatrix;
