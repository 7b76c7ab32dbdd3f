//! # u-tsp
//!
//! Travelling salesman solvers over a complete graph with a symmetric cost
//! matrix: an exact Held-Karp dynamic-programming solver and a fast metric
//! 2-approximation, both built on a Kruskal minimum-spanning-tree primitive.
//!
//! ## Modules
//!
//! - [`distance`] — Dense symmetric cost matrix
//! - [`mst`] — Disjoint-set forest and Kruskal spanning tree construction
//! - [`tour`] — Tour builders (metric 2-approximation, exact Held-Karp)
//! - [`error`] — Solver error taxonomy
//!
//! ## Example
//!
//! ```
//! use u_tsp::distance::CostMatrix;
//! use u_tsp::tour::{approximate_tour, exact_tour};
//!
//! let mut costs = CostMatrix::new(4);
//! for (i, j, c) in [(0, 1, 1.0), (0, 2, 3.0), (0, 3, 2.0),
//!                   (1, 2, 2.0), (1, 3, 4.0), (2, 3, 3.0)] {
//!     costs.set(i, j, c);
//!     costs.set(j, i, c);
//! }
//!
//! let exact = exact_tour(&costs).expect("valid matrix");
//! assert!((exact.total_cost() - 8.0).abs() < 1e-10);
//!
//! let approx = approximate_tour(&costs).expect("valid matrix");
//! assert!(approx.total_cost() <= 2.0 * exact.total_cost() + 1e-10);
//! ```

pub mod distance;
pub mod error;
pub mod mst;
pub mod tour;

pub use error::SolverError;
