//! Kruskal's minimum spanning tree algorithm.
//!
//! # Algorithm
//!
//! Enumerate all n(n−1)/2 undirected edges of the complete graph, sort them
//! by ascending cost, then scan in order: an edge whose endpoints lie in
//! different disjoint-set components is added to the tree and the components
//! are merged. The scan stops once n − 1 edges have been accepted.
//!
//! # Complexity
//!
//! O(n² log n), dominated by the edge sort.
//!
//! # Reference
//!
//! Kruskal, J.B. (1956). "On the shortest spanning subtree of a graph and
//! the traveling salesman problem", *Proc. AMS* 7(1), 48-50.

use serde::{Deserialize, Serialize};

use crate::distance::CostMatrix;
use crate::error::SolverError;
use crate::mst::DisjointSet;

/// An undirected edge of the complete graph, weighted by travel cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// One endpoint.
    pub head: usize,
    /// The other endpoint.
    pub tail: usize,
    /// Non-negative travel cost between the endpoints.
    pub cost: f64,
}

impl Edge {
    /// Creates an edge between `head` and `tail` with the given cost.
    pub fn new(head: usize, tail: usize, cost: f64) -> Self {
        Self { head, tail, cost }
    }
}

/// Builds a minimum spanning tree of the complete graph described by `costs`.
///
/// Returns exactly `n − 1` edges in acceptance order. Ties among equal-cost
/// edges are broken by enumeration order, so a different minimum tree may be
/// returned for inputs with duplicate costs; only the total weight is
/// guaranteed minimal.
///
/// # Errors
///
/// Returns [`SolverError::InvalidInput`] if the matrix fails
/// [`CostMatrix::validate`], or if the edge scan exhausts every edge before
/// connecting all vertices (a disconnected graph, impossible for a finite
/// complete matrix but guarded rather than looping past the edge list).
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::mst::spanning_tree;
///
/// let mut costs = CostMatrix::new(4);
/// for (i, j, c) in [(0, 1, 1.0), (0, 2, 3.0), (0, 3, 2.0),
///                   (1, 2, 2.0), (1, 3, 4.0), (2, 3, 3.0)] {
///     costs.set(i, j, c);
///     costs.set(j, i, c);
/// }
///
/// let tree = spanning_tree(&costs).expect("valid matrix");
/// assert_eq!(tree.len(), 3);
/// let weight: f64 = tree.iter().map(|e| e.cost).sum();
/// assert!((weight - 5.0).abs() < 1e-10);
/// ```
pub fn spanning_tree(costs: &CostMatrix) -> Result<Vec<Edge>, SolverError> {
    costs.validate()?;
    let n = costs.size();

    let mut edges = Vec::with_capacity(n * (n - 1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            edges.push(Edge::new(i, j, costs.get(i, j)));
        }
    }
    // Stable sort keeps enumeration order among equal costs.
    edges.sort_by(|a, b| a.cost.partial_cmp(&b.cost).expect("costs are finite"));

    let mut tree = Vec::with_capacity(n.saturating_sub(1));
    let mut forest = DisjointSet::new(n);

    for edge in &edges {
        if tree.len() == n - 1 {
            break;
        }
        if forest.find(edge.head) != forest.find(edge.tail) {
            tree.push(*edge);
            forest.union(edge.head, edge.tail);
        }
    }

    if tree.len() != n - 1 {
        return Err(SolverError::InvalidInput(format!(
            "graph is disconnected: only {} of {} tree edges found",
            tree.len(),
            n - 1
        )));
    }

    Ok(tree)
}
