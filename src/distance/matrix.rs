//! Dense distance matrix.

use crate::models::City;

/// A dense n×n cost matrix stored in row-major order.
///
/// Supports both Euclidean distance computation from city coordinates and
/// explicit (possibly asymmetric) cost specification. `get(i, j)` is the
/// cost of travelling from `i` to `j`.
///
/// # Examples
///
/// ```
/// use u_aco::models::City;
/// use u_aco::distance::DistanceMatrix;
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(3.0, 4.0),
///     City::new(6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// assert!((dm.tour_cost(&[0, 1, 2]) - 20.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix from city coordinates.
    pub fn from_cities(cities: &[City]) -> Self {
        let n = cities.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid in row-major order.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the cost from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost from city `from` to city `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// First pair `(i, j)`, `i < j`, whose two directed costs differ by more
    /// than `tol`. `None` for a symmetric matrix.
    pub fn asymmetric_pair(&self, tol: f64) -> Option<(usize, usize)> {
        (0..self.size)
            .flat_map(|i| ((i + 1)..self.size).map(move |j| (i, j)))
            .find(|&(i, j)| (self.get(i, j) - self.get(j, i)).abs() > tol)
    }

    /// Cost of the closed tour visiting `order` and returning to its first city.
    ///
    /// An empty order costs zero.
    pub fn tour_cost(&self, order: &[usize]) -> f64 {
        if order.is_empty() {
            return 0.0;
        }
        let mut cost = 0.0;
        for pair in order.windows(2) {
            cost += self.get(pair[0], pair[1]);
        }
        cost + self.get(order[order.len() - 1], order[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cities() -> Vec<City> {
        vec![City::new(0.0, 0.0), City::new(3.0, 4.0), City::new(0.0, 8.0)]
    }

    #[test]
    fn test_from_cities() {
        let dm = DistanceMatrix::from_cities(&sample_cities());
        assert_eq!(dm.size(), 3);
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert!((dm.get(0, 0)).abs() < 1e-10);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_cities(&sample_cities());
        assert_eq!(dm.asymmetric_pair(1e-10), None);
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert_eq!(dm.asymmetric_pair(1e-10), Some((0, 1)));
        // 0→1→0
        assert!((dm.tour_cost(&[0, 1]) - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_tour_cost_includes_closing_edge() {
        let square = vec![
            City::new(0.0, 0.0),
            City::new(0.0, 1.0),
            City::new(1.0, 1.0),
            City::new(1.0, 0.0),
        ];
        let dm = DistanceMatrix::from_cities(&square);
        assert!((dm.tour_cost(&[0, 1, 2, 3]) - 4.0).abs() < 1e-10);
        // Crossing tour: two sides + two diagonals
        let crossing = 2.0 + 2.0 * 2.0_f64.sqrt();
        assert!((dm.tour_cost(&[0, 2, 1, 3]) - crossing).abs() < 1e-10);
    }

    #[test]
    fn test_tour_cost_degenerate() {
        let dm = DistanceMatrix::from_cities(&sample_cities());
        assert_eq!(dm.tour_cost(&[]), 0.0);
        assert_eq!(dm.tour_cost(&[1]), 0.0);
    }
}
