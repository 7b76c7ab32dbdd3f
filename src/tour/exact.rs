//! Exact solver using Held-Karp dynamic programming.
//!
//! # Algorithm
//!
//! Subsets of locations containing location 0 are encoded as bitmasks.
//! `opt[s][i]` holds the minimum cost of a path that starts at 0, visits
//! exactly the locations in `s`, and ends at `i`. Masks are filled in
//! ascending order, which visits every proper subset before its supersets
//! because removing a location from a mask always lowers its value. The
//! optimal cycle is then reconstructed greedily backwards from the full
//! mask.
//!
//! # Complexity
//!
//! O(2ⁿ·n²) time and O(2ⁿ·n) space. Exponential by nature; the solver
//! refuses inputs beyond [`MAX_EXACT_LOCATIONS`] before allocating the
//! table.
//!
//! # Reference
//!
//! Held, M., Karp, R.M. (1962). "A dynamic programming approach to
//! sequencing problems", *J. SIAM* 10(1), 196-210.

use crate::distance::CostMatrix;
use crate::error::SolverError;
use crate::tour::{tour_cost, Tour};

/// Largest number of locations the exact solver accepts by default.
///
/// At 22 locations the DP table already holds 2²²·22 entries; beyond that
/// the table no longer fits commodity memory.
pub const MAX_EXACT_LOCATIONS: usize = 22;

/// Computes a minimum-cost Hamiltonian cycle starting and ending at
/// location 0, with the default size limit of [`MAX_EXACT_LOCATIONS`].
///
/// # Errors
///
/// Returns [`SolverError::InvalidInput`] if the matrix fails validation and
/// [`SolverError::ResourceExhausted`] if it has more than
/// [`MAX_EXACT_LOCATIONS`] locations.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CostMatrix;
/// use u_tsp::tour::exact_tour;
///
/// let cm = CostMatrix::from_points(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
/// let tour = exact_tour(&cm).expect("valid matrix");
/// assert!((tour.total_cost() - 4.0).abs() < 1e-10);
/// ```
pub fn exact_tour(costs: &CostMatrix) -> Result<Tour, SolverError> {
    exact_tour_with_limit(costs, MAX_EXACT_LOCATIONS)
}

/// Computes a minimum-cost Hamiltonian cycle with a caller-supplied size
/// limit.
///
/// The limit caps the DP table at `2^limit · limit` entries; the check runs
/// before any allocation.
///
/// # Errors
///
/// Same as [`exact_tour`], with [`SolverError::ResourceExhausted`] raised
/// when the matrix has more than `limit` locations.
pub fn exact_tour_with_limit(costs: &CostMatrix, limit: usize) -> Result<Tour, SolverError> {
    costs.validate()?;
    let n = costs.size();
    if n > limit {
        return Err(SolverError::ResourceExhausted {
            locations: n,
            limit,
        });
    }
    if n == 1 {
        return Ok(Tour::new(vec![0, 0], 0.0));
    }

    let nsub = 1usize << n;
    // opt[s * n + i]: cheapest path 0 → i visiting exactly the mask s.
    let mut opt = vec![f64::INFINITY; nsub * n];

    // Odd masks only: every subset contains location 0.
    for s in (1..nsub).step_by(2) {
        if s.count_ones() < 2 {
            continue;
        }
        for i in 1..n {
            if s & (1 << i) == 0 {
                continue;
            }
            if s.count_ones() == 2 {
                opt[s * n + i] = costs.get(0, i);
                continue;
            }
            let t = s & !(1 << i);
            let mut min_subpath = f64::INFINITY;
            for j in 1..n {
                if j == i || t & (1 << j) == 0 {
                    continue;
                }
                let candidate = opt[t * n + j] + costs.get(j, i);
                if candidate < min_subpath {
                    min_subpath = candidate;
                }
            }
            opt[s * n + i] = min_subpath;
        }
    }

    // Walk backwards from the full set, peeling off the best last hop.
    let mut order = vec![0usize];
    let mut selected = vec![false; n];
    selected[0] = true;
    let mut s = nsub - 1;

    for _ in 0..n - 1 {
        let last = *order.last().expect("order starts with location 0");
        let mut best: Option<(usize, f64)> = None;
        for (k, &taken) in selected.iter().enumerate() {
            if taken {
                continue;
            }
            let candidate = opt[s * n + k] + costs.get(k, last);
            if best.map_or(true, |(_, c)| candidate < c) {
                best = Some((k, candidate));
            }
        }
        let (k, _) = best.ok_or_else(|| {
            SolverError::InternalInvariant(
                "tour reconstruction found no unvisited candidate".into(),
            )
        })?;
        order.push(k);
        selected[k] = true;
        s &= !(1 << k);
    }
    order.push(0);

    let cost = tour_cost(costs, &order);
    Ok(Tour::new(order, cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

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

    /// Cheapest tour by enumerating every permutation of 1..n.
    fn brute_force_cost(costs: &CostMatrix) -> f64 {
        fn permute(rest: &mut Vec<usize>, path: &mut Vec<usize>, costs: &CostMatrix, best: &mut f64) {
            if rest.is_empty() {
                let mut order = vec![0];
                order.extend(path.iter());
                order.push(0);
                let c = tour_cost(costs, &order);
                if c < *best {
                    *best = c;
                }
                return;
            }
            for idx in 0..rest.len() {
                let v = rest.remove(idx);
                path.push(v);
                permute(rest, path, costs, best);
                path.pop();
                rest.insert(idx, v);
            }
        }
        let mut best = f64::INFINITY;
        let n = costs.size();
        permute(&mut (1..n).collect::<Vec<_>>(), &mut Vec::new(), costs, &mut best);
        best
    }

    fn random_symmetric(n: usize, seed: u64) -> CostMatrix {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut cm = CostMatrix::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let c = rng.random_range(1.0..100.0);
                cm.set(i, j, c);
                cm.set(j, i, c);
            }
        }
        cm
    }

    #[test]
    fn test_sample_optimal_cost() {
        let tour = exact_tour(&sample_matrix()).expect("valid");
        assert_hamiltonian(tour.order(), 4);
        assert!((tour.total_cost() - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_matches_brute_force() {
        for n in 3..=8 {
            let cm = random_symmetric(n, 0xC0FFEE + n as u64);
            let tour = exact_tour(&cm).expect("valid");
            assert_hamiltonian(tour.order(), n);
            assert!(
                (tour.total_cost() - brute_force_cost(&cm)).abs() < 1e-9,
                "suboptimal tour for n={n}"
            );
        }
    }

    #[test]
    fn test_single_location() {
        let tour = exact_tour(&CostMatrix::new(1)).expect("valid");
        assert_eq!(tour.order(), &[0, 0]);
        assert_eq!(tour.total_cost(), 0.0);
    }

    #[test]
    fn test_two_locations() {
        let cm = CostMatrix::from_data(2, vec![0.0, 7.0, 7.0, 0.0]).expect("valid");
        let tour = exact_tour(&cm).expect("valid");
        assert_eq!(tour.order(), &[0, 1, 0]);
        assert!((tour.total_cost() - 14.0).abs() < 1e-10);
    }

    #[test]
    fn test_idempotent() {
        let cm = random_symmetric(7, 42);
        let a = exact_tour(&cm).expect("valid");
        let b = exact_tour(&cm).expect("valid");
        assert_eq!(a.total_cost(), b.total_cost());
        assert_eq!(a.order(), b.order());
    }

    #[test]
    fn test_size_limit() {
        let cm = random_symmetric(6, 7);
        assert!(matches!(
            exact_tour_with_limit(&cm, 5),
            Err(SolverError::ResourceExhausted {
                locations: 6,
                limit: 5
            })
        ));
        assert!(exact_tour_with_limit(&cm, 6).is_ok());
    }

    #[test]
    fn test_rejects_invalid_matrix() {
        let mut cm = CostMatrix::new(3);
        cm.set(0, 1, 1.0);
        assert!(matches!(exact_tour(&cm), Err(SolverError::InvalidInput(_))));
    }
}
