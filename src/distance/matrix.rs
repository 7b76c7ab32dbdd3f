//! Dense cost matrix.

use crate::error::SolverError;

/// Tolerance used when checking matrix symmetry and the zero diagonal.
const SYMMETRY_TOL: f64 = 1e-9;

/// A dense n×n cost matrix stored in row-major order.
///
/// Both tour builders require symmetric, finite, non-negative costs with a
/// zero diagonal. The 2-approximation bound additionally requires the
/// triangle inequality, which is the caller's responsibility — it is not
/// checked at runtime.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::CostMatrix;
///
/// let cm = CostMatrix::from_points(&[(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)]);
/// assert!((cm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(cm.size(), 3);
/// assert!(cm.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Creates a cost matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean cost matrix from planar coordinates.
    ///
    /// Euclidean costs are symmetric and satisfy the triangle inequality,
    /// so matrices built this way meet the preconditions of both solvers.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let n = points.len();
        let mut cm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let (xi, yi) = points[i];
                let (xj, yj) = points[j];
                let d = ((xi - xj).powi(2) + (yi - yj).powi(2)).sqrt();
                cm.set(i, j, d);
                cm.set(j, i, d);
            }
        }
        cm
    }

    /// Creates a cost matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the cost of travelling from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost of travelling from `from` to `to`.
    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Checks the solver preconditions: at least one location, finite
    /// non-negative entries, a zero diagonal, and symmetry.
    ///
    /// Every solver entry point calls this before running any algorithm.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.size == 0 {
            return Err(SolverError::InvalidInput(
                "cost matrix must contain at least one location".into(),
            ));
        }
        for i in 0..self.size {
            for j in 0..self.size {
                let c = self.get(i, j);
                if !c.is_finite() {
                    return Err(SolverError::InvalidInput(format!(
                        "cost[{i}][{j}] is not finite"
                    )));
                }
                if c < 0.0 {
                    return Err(SolverError::InvalidInput(format!(
                        "cost[{i}][{j}] is negative"
                    )));
                }
            }
            if self.get(i, i).abs() > SYMMETRY_TOL {
                return Err(SolverError::InvalidInput(format!(
                    "cost[{i}][{i}] must be zero"
                )));
            }
        }
        if !self.is_symmetric(SYMMETRY_TOL) {
            return Err(SolverError::InvalidInput(
                "cost matrix is not symmetric".into(),
            ));
        }
        Ok(())
    }
}
