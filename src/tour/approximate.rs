//! Metric 2-approximation via spanning-tree traversal.
//!
//! # Algorithm
//!
//! Build a minimum spanning tree, then walk it in preorder from location 0
//! with an explicit stack. Doubling every tree edge yields an Eulerian
//! circuit of weight 2·MST; skipping already-visited locations shortcuts
//! that circuit into a Hamiltonian cycle without ever materializing it.
//! Under the triangle inequality each shortcut can only shorten the walk,
//! and MST weight is a lower bound on the optimal tour, so the result costs
//! at most twice the optimum.
//!
//! # Complexity
//!
//! O(n² log n), dominated by the spanning tree construction.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E., Lewis, P.M. (1977). "An analysis of
//! several heuristics for the traveling salesman problem", *SIAM J. Comput.*
//! 6(3), 563-581.

use crate::distance::CostMatrix;
use crate::error::SolverError;
use crate::mst::spanning_tree;
use crate::tour::{tour_cost, Tour};

/// Builds a tour costing at most twice the optimum for metric inputs.
///
/// Always returns a valid Hamiltonian cycle for any valid symmetric matrix;
/// the 2× bound only holds when the costs also satisfy the triangle
/// inequality, which is not checked. The exact visit order depends on tree
/// shape and stack discipline and is deterministic for a fixed input.
///
/// # Errors
///
/// Returns [`SolverError::InvalidInput`] if the matrix fails validation.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::tour::approximate_tour;
///
/// let cm = CostMatrix::from_points(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
/// let tour = approximate_tour(&cm).expect("valid matrix");
/// assert_eq!(tour.order().len(), 5);
/// assert_eq!(tour.order()[0], 0);
/// assert_eq!(tour.order()[4], 0);
/// ```
pub fn approximate_tour(costs: &CostMatrix) -> Result<Tour, SolverError> {
    let tree = spanning_tree(costs)?;
    let n = costs.size();

    // Adjacency lists relative to the tree subgraph.
    let mut adjacency = vec![Vec::new(); n];
    for edge in &tree {
        adjacency[edge.head].push(edge.tail);
        adjacency[edge.tail].push(edge.head);
    }

    let mut order = Vec::with_capacity(n + 1);
    let mut visited = vec![false; n];
    let mut open = vec![0usize];

    // Preorder walk of the tree; a location popped twice is skipped, which
    // is what shortcuts the doubled-edge Eulerian circuit. Neighbors are
    // pushed in reverse so the stack pops them in adjacency order, matching
    // a recursive preorder.
    while order.len() < n {
        let u = match open.pop() {
            Some(u) => u,
            None => {
                return Err(SolverError::InternalInvariant(
                    "traversal stack drained before visiting every location".into(),
                ))
            }
        };
        if !visited[u] {
            order.push(u);
            visited[u] = true;
            open.extend(adjacency[u].iter().rev());
        }
    }
    order.push(0);

    let cost = tour_cost(costs, &order);
    Ok(Tour::new(order, cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tour::exact_tour;

    fn sample_matrix() -> CostMatrix {
        let mut cm = CostMatrix::new(4);
        for (i, j, c) in [
            (0, 1, 1.0),
            (0, 2, 3.0),
            (0, 3, 2.0),
            (1, 2, 2.0),
            (1, 3, 4.0),
            (2, 3, 3.0),
        ] {
            cm.set(i, j, c);
            cm.set(j, i, c);
        }
        cm
    }

    fn assert_hamiltonian(order: &[usize], n: usize) {
        assert_eq!(order.len(), n + 1);
        assert_eq!(order[0], 0);
        assert_eq!(order[n], 0);
        let mut seen = vec![false; n];
        for &v in &order[..n] {
            assert!(!seen[v], "location {v} visited twice");
            seen[v] = true;
        }
    }

    #[test]
    fn test_sample_is_hamiltonian() {
        let tour = approximate_tour(&sample_matrix()).expect("valid");
        assert_hamiltonian(tour.order(), 4);
    }

    #[test]
    fn test_sample_cost() {
        // For this tree shape the preorder walk recovers the optimal tour.
        let tour = approximate_tour(&sample_matrix()).expect("valid");
        assert!((tour.total_cost() - 8.0).abs() < 1e-10);
        assert!(tour.total_cost() <= 16.0);
    }

    #[test]
    fn test_within_twice_exact_on_euclidean_points() {
        let points = [
            (0.0, 0.0),
            (4.0, 1.0),
            (2.0, 6.0),
            (7.0, 3.0),
            (1.0, 4.0),
            (5.0, 5.0),
            (3.0, 2.0),
            (6.0, 7.0),
        ];
        let cm = CostMatrix::from_points(&points);
        let approx = approximate_tour(&cm).expect("valid");
        let exact = exact_tour(&cm).expect("valid");
        assert_hamiltonian(approx.order(), points.len());
        assert!(approx.total_cost() <= 2.0 * exact.total_cost() + 1e-9);
    }

    #[test]
    fn test_single_location() {
        let tour = approximate_tour(&CostMatrix::new(1)).expect("valid");
        assert_eq!(tour.order(), &[0, 0]);
        assert_eq!(tour.total_cost(), 0.0);
    }

    #[test]
    fn test_two_locations() {
        let cm = CostMatrix::from_data(2, vec![0.0, 7.0, 7.0, 0.0]).expect("valid");
        let tour = approximate_tour(&cm).expect("valid");
        assert_eq!(tour.order(), &[0, 1, 0]);
        assert!((tour.total_cost() - 14.0).abs() < 1e-10);
    }

    #[test]
    fn test_idempotent_cost() {
        let cm = sample_matrix();
        let a = approximate_tour(&cm).expect("valid");
        let b = approximate_tour(&cm).expect("valid");
        assert_eq!(a.total_cost(), b.total_cost());
        assert_eq!(a.order(), b.order());
    }

    #[test]
    fn test_rejects_invalid_matrix() {
        let mut cm = CostMatrix::new(3);
        cm.set(0, 1, 1.0);
        assert!(matches!(
            approximate_tour(&cm),
            Err(SolverError::InvalidInput(_))
        ));
    }
}
