//! Static edge desirability derived from travel cost.

use crate::distance::DistanceMatrix;
use crate::error::{AcoError, AcoResult};

/// Visibility matrix: `V[i][j] = 1 / cost(i, j)` for `i != j`.
///
/// Built once per instance and read-only afterwards. Diagonal entries are
/// zero and never read by tour construction.
///
/// # Examples
///
/// ```
/// use u_aco::models::City;
/// use u_aco::distance::DistanceMatrix;
/// use u_aco::colony::Visibility;
///
/// let dm = DistanceMatrix::from_cities(&[City::new(0.0, 0.0), City::new(0.0, 4.0)]);
/// let vis = Visibility::from_distances(&dm).unwrap();
/// assert_eq!(vis.get(0, 1), 0.25);
/// assert_eq!(vis.get(1, 1), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Visibility {
    data: Vec<f64>,
    size: usize,
}

impl Visibility {
    /// Inverts every off-diagonal cost.
    ///
    /// Fails with [`AcoError::Domain`] if two distinct cities are at zero
    /// distance, or if a cost is negative or not finite.
    pub fn from_distances(distances: &DistanceMatrix) -> AcoResult<Self> {
        let n = distances.size();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let d = distances.get(i, j);
                if d == 0.0 {
                    return Err(AcoError::Domain(format!(
                        "cities {i} and {j} are at zero distance"
                    )));
                }
                if !d.is_finite() || d < 0.0 {
                    return Err(AcoError::Domain(format!(
                        "cost from city {i} to city {j} is {d}"
                    )));
                }
                data[i * n + j] = 1.0 / d;
            }
        }
        Ok(Self { data, size: n })
    }

    /// Visibility of the edge `from -> to`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All entries in row-major order.
    pub fn values(&self) -> &[f64] {
        &self.data
    }
}
