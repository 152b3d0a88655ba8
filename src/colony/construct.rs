//! Probabilistic tour construction for a single ant.
//!
//! # Algorithm
//!
//! From the current city `i`, every unvisited city `j` gets the weight
//!
//! ```text
//! w[j] = P[i][j]^alpha * V[i][j]^beta
//! ```
//!
//! One uniform draw `u` in `[0, 1)` is taken and unvisited cities are
//! scanned in index order, accumulating `w[j] / sum(w)`; the first city
//! whose cumulative probability reaches `u` is chosen (roulette wheel).
//!
//! Weights are computed as logarithms and rescaled by the largest one
//! before exponentiation. Products such as `1e-200^2` that underflow in
//! plain arithmetic keep their relative sizes.
//!
//! # Reference
//!
//! Dorigo, M., Maniezzo, V., Colorni, A. (1996). "Ant system: optimization
//! by a colony of cooperating agents", *IEEE Trans. SMC-B* 26(1), 29-41.

use crate::error::{AcoError, AcoResult};

use super::pheromone::PheromoneMatrix;
use super::random::RandomSource;
use super::visibility::Visibility;

/// One ant's walk in progress: visited set, partial tour, cursor.
#[derive(Debug, Clone)]
pub struct Ant {
    visited: Vec<bool>,
    tour: Vec<usize>,
    current: usize,
}

impl Ant {
    /// Places an ant on `start` in an instance of `n` cities.
    ///
    /// # Panics
    ///
    /// Panics if `start >= n`.
    pub fn new(n: usize, start: usize) -> Self {
        let mut visited = vec![false; n];
        visited[start] = true;
        let mut tour = Vec::with_capacity(n);
        tour.push(start);
        Self {
            visited,
            tour,
            current: start,
        }
    }

    /// City the ant is standing on.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns `true` if `city` is already on the tour.
    pub fn has_visited(&self, city: usize) -> bool {
        self.visited[city]
    }

    /// Cities visited so far, in order.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// Returns `true` once every city has been visited.
    pub fn is_complete(&self) -> bool {
        self.tour.len() == self.visited.len()
    }

    /// Moves the ant to `city`.
    pub fn visit(&mut self, city: usize) {
        debug_assert!(!self.visited[city], "city {city} visited twice");
        self.visited[city] = true;
        self.tour.push(city);
        self.current = city;
    }

    /// Consumes the ant, returning its tour.
    pub fn into_tour(self) -> Vec<usize> {
        self.tour
    }
}

/// Picks the ant's next city by roulette-wheel selection.
///
/// Returns `None` when no unvisited city has a positive weight, which
/// leaves no city selectable. Cities with zero weight are never chosen. If
/// rounding keeps the cumulative probability below the draw, the last city
/// with positive weight is taken.
pub fn select_next<R: RandomSource + ?Sized>(
    ant: &Ant,
    pheromone: &PheromoneMatrix,
    visibility: &Visibility,
    alpha: f64,
    beta: f64,
    rng: &mut R,
) -> Option<usize> {
    let n = pheromone.size();
    let from = ant.current();

    let mut weights = vec![f64::NEG_INFINITY; n];
    let mut max_log = f64::NEG_INFINITY;
    for (j, w) in weights.iter_mut().enumerate() {
        if ant.has_visited(j) {
            continue;
        }
        *w = scaled_ln(pheromone.get(from, j), alpha) + scaled_ln(visibility.get(from, j), beta);
        max_log = max_log.max(*w);
    }
    if !max_log.is_finite() {
        return None;
    }

    // Relative to the heaviest candidate, so the largest weight is 1.
    let mut total = 0.0;
    for w in weights.iter_mut() {
        *w = (*w - max_log).exp();
        total += *w;
    }
    if !(total > 0.0 && total.is_finite()) {
        return None;
    }

    let draw = rng.next_unit();
    let mut cumulative = 0.0;
    let mut last_positive = None;
    for (j, &w) in weights.iter().enumerate() {
        if ant.has_visited(j) || w <= 0.0 {
            continue;
        }
        cumulative += w / total;
        last_positive = Some(j);
        if cumulative >= draw {
            return Some(j);
        }
    }
    last_positive
}

/// `exponent * ln(value)`, with `value^0 = 1` even for a zero value.
fn scaled_ln(value: f64, exponent: f64) -> f64 {
    if exponent == 0.0 {
        0.0
    } else {
        exponent * value.ln()
    }
}

/// Builds one complete tour starting at `start`.
///
/// All ants of a generation call this against the same pheromone and
/// visibility snapshots. Fails with [`AcoError::Construction`] instead of
/// returning a partial tour when selection stalls.
///
/// # Examples
///
/// ```
/// use u_aco::models::City;
/// use u_aco::distance::DistanceMatrix;
/// use u_aco::colony::{construct_tour, PheromoneMatrix, Visibility};
/// use rand::SeedableRng;
///
/// let dm = DistanceMatrix::from_cities(&[
///     City::new(0.0, 0.0),
///     City::new(0.0, 1.0),
///     City::new(1.0, 1.0),
///     City::new(1.0, 0.0),
/// ]);
/// let vis = Visibility::from_distances(&dm).unwrap();
/// let pheromone = PheromoneMatrix::filled(4, 0.1);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
///
/// let tour = construct_tour(2, &pheromone, &vis, 1.0, 2.0, &mut rng).unwrap();
/// assert_eq!(tour.len(), 4);
/// assert_eq!(tour[0], 2);
/// ```
pub fn construct_tour<R: RandomSource + ?Sized>(
    start: usize,
    pheromone: &PheromoneMatrix,
    visibility: &Visibility,
    alpha: f64,
    beta: f64,
    rng: &mut R,
) -> AcoResult<Vec<usize>> {
    let n = pheromone.size();
    let mut ant = Ant::new(n, start);
    for step in 1..n {
        match select_next(&ant, pheromone, visibility, alpha, beta, rng) {
            Some(next) => ant.visit(next),
            None => {
                return Err(AcoError::Construction {
                    step,
                    city: ant.current(),
                })
            }
        }
    }
    debug_assert!(ant.is_complete());
    Ok(ant.into_tour())
}
