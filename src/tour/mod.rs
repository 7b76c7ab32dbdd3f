//! Tour builders over a symmetric cost matrix.
//!
//! - [`approximate_tour`] — Metric 2-approximation via MST preorder traversal, O(n² log n)
//! - [`exact_tour`] — Held-Karp bitmask dynamic programming, O(2ⁿ·n²)
//! - [`tour_cost`] — Cost of an explicit visit order

mod approximate;
mod exact;

pub use approximate::approximate_tour;
pub use exact::{exact_tour, exact_tour_with_limit, MAX_EXACT_LOCATIONS};

use serde::{Deserialize, Serialize};

use crate::distance::CostMatrix;

/// A closed tour over all locations.
///
/// The visit order has length `n + 1`: it starts and ends at location 0 and
/// contains every location exactly once among the first `n` positions.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::tour::exact_tour;
///
/// let cm = CostMatrix::from_data(2, vec![0.0, 3.0, 3.0, 0.0]).expect("valid");
/// let tour = exact_tour(&cm).expect("valid matrix");
/// assert_eq!(tour.order(), &[0, 1, 0]);
/// assert!((tour.total_cost() - 6.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    order: Vec<usize>,
    total_cost: f64,
}

impl Tour {
    pub(crate) fn new(order: Vec<usize>, total_cost: f64) -> Self {
        Self { order, total_cost }
    }

    /// Returns the visit order, including the closing return to location 0.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Returns the total cost of the tour.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Number of distinct locations visited.
    pub fn len(&self) -> usize {
        self.order.len() - 1
    }

    /// Always `false`: a tour visits at least location 0.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Sums the matrix costs over consecutive pairs of the visit order.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::tour::tour_cost;
///
/// let cm = CostMatrix::from_data(2, vec![0.0, 3.0, 3.0, 0.0]).expect("valid");
/// assert!((tour_cost(&cm, &[0, 1, 0]) - 6.0).abs() < 1e-10);
/// ```
pub fn tour_cost(costs: &CostMatrix, order: &[usize]) -> f64 {
    order.windows(2).map(|w| costs.get(w[0], w[1])).sum()
}
