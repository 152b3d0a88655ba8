//! Pheromone matrix, its bootstrap, and the per-generation deposit buffer.
//!
//! Ants never write to [`PheromoneMatrix`] directly. Deposits accumulate in
//! a [`DeltaMatrix`] while a generation is running and are folded in by
//! [`PheromoneMatrix::apply`] once every ant has finished, so all ants of a
//! generation read the same snapshot.

use crate::distance::DistanceMatrix;
use crate::error::{AcoError, AcoResult};
use crate::models::closed_edges;

use super::random::RandomSource;

/// Upper bound on the number of random seed tours used by the bootstrap.
pub const BOOTSTRAP_TOURS: usize = 10;

/// Smallest value a cell can evaporate down to. Edges that are never
/// reinforced settle here instead of reaching zero.
pub const PHEROMONE_FLOOR: f64 = f64::MIN_POSITIVE;

/// Shared n×n edge desirability, strictly positive.
///
/// # Examples
///
/// ```
/// use u_aco::colony::{DeltaMatrix, PheromoneMatrix};
///
/// let mut p = PheromoneMatrix::filled(3, 1.0);
/// let mut delta = DeltaMatrix::new(3);
/// delta.deposit_tour(&[0, 1, 2], 0.5);
/// p.apply(&delta, 0.5);
/// assert_eq!(p.get(0, 1), 1.0);  // 1.0 * 0.5 + 0.5
/// assert_eq!(p.get(1, 0), 0.5);  // evaporation only
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneMatrix {
    /// A matrix with every cell set to `value`.
    pub fn filled(size: usize, value: f64) -> Self {
        Self {
            data: vec![value; size * size],
            size,
        }
    }

    /// Pheromone on the edge `from -> to`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Smallest cell value, `+inf` for an empty matrix.
    pub fn min_value(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Seeds the matrix from `min(10, n)` uniformly random tours.
    ///
    /// Each seed tour writes `1 / cost` onto the edges it traverses and adds
    /// its cost to a running total. The matrix is then overwritten
    /// uniformly with `1 / total`, which is returned. Only the uniform value
    /// survives; the per-edge writes are superseded.
    pub fn bootstrap<R: RandomSource + ?Sized>(
        &mut self,
        distances: &DistanceMatrix,
        rng: &mut R,
    ) -> AcoResult<f64> {
        let n = self.size;
        if n == 0 || distances.size() != n {
            return Err(AcoError::Domain(format!(
                "cannot bootstrap a {n}-city pheromone matrix from {} costs",
                distances.size()
            )));
        }

        let mut total_distance = 0.0;
        let mut order: Vec<usize> = (0..n).collect();
        for _ in 0..BOOTSTRAP_TOURS.min(n) {
            rng.shuffle(&mut order);
            let cost = distances.tour_cost(&order);
            if !(cost.is_finite() && cost > 0.0) {
                return Err(AcoError::Domain(format!("seed tour has cost {cost}")));
            }
            for (from, to) in closed_edges(&order) {
                self.data[from * n + to] = 1.0 / cost;
            }
            total_distance += cost;
        }

        let uniform = 1.0 / total_distance;
        self.data.fill(uniform);
        Ok(uniform)
    }

    /// Evaporates every cell and folds in the generation's deposits:
    /// `P[i][j] = max(P[i][j] * (1 - rho) + delta[i][j], PHEROMONE_FLOOR)`.
    pub fn apply(&mut self, delta: &DeltaMatrix, rho: f64) {
        debug_assert_eq!(self.size, delta.size);
        let keep = 1.0 - rho;
        for (cell, deposit) in self.data.iter_mut().zip(&delta.data) {
            *cell = (*cell * keep + deposit).max(PHEROMONE_FLOOR);
        }
    }
}

/// Transient accumulator for one generation's deposits.
#[derive(Debug, Clone, PartialEq)]
pub struct DeltaMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DeltaMatrix {
    /// An all-zero buffer for `size` cities.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Zeroes every cell.
    pub fn reset(&mut self) {
        self.data.fill(0.0);
    }

    /// Adds `amount` to the edge `from -> to`.
    pub fn deposit_edge(&mut self, from: usize, to: usize, amount: f64) {
        self.data[from * self.size + to] += amount;
    }

    /// Adds `amount` to every directed edge of the closed tour `order`.
    pub fn deposit_tour(&mut self, order: &[usize], amount: f64) {
        for (from, to) in closed_edges(order) {
            self.deposit_edge(from, to, amount);
        }
    }

    /// Accumulated deposit on the edge `from -> to`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sum of all deposits.
    pub fn total(&self) -> f64 {
        self.data.iter().sum()
    }
}
