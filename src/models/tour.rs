//! Closed tours.

use serde::{Deserialize, Serialize};

/// A closed tour: an ordered permutation of city indices plus its cost.
///
/// The last city connects back to the first; the closing edge is part of
/// the cost but not repeated in [`order`](Tour::order).
///
/// # Examples
///
/// ```
/// use u_aco::models::Tour;
///
/// let tour = Tour::new(vec![2, 0, 1], 12.0);
/// assert!(tour.is_permutation(3));
/// assert_eq!(tour.edges().collect::<Vec<_>>(), vec![(2, 0), (0, 1), (1, 2)]);
/// assert_eq!(tour.starting_at(0).order(), &[0, 1, 2]);
///
/// let none = Tour::unfound();
/// assert!(!none.is_found());
/// assert!(tour.is_better_than(&none));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    order: Vec<usize>,
    cost: f64,
}

impl Tour {
    /// Creates a tour from a city order and its precomputed cost.
    pub fn new(order: Vec<usize>, cost: f64) -> Self {
        Self { order, cost }
    }

    /// The placeholder best tour before anything has been found:
    /// empty order, infinite cost.
    pub fn unfound() -> Self {
        Self {
            order: Vec::new(),
            cost: f64::INFINITY,
        }
    }

    /// City indices in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Total closed-tour cost.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits no city.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns `true` once a real tour has been recorded (finite cost).
    pub fn is_found(&self) -> bool {
        self.cost.is_finite()
    }

    /// Strict comparison on cost; ties are not an improvement.
    pub fn is_better_than(&self, other: &Tour) -> bool {
        self.cost < other.cost
    }

    /// Returns `true` if the order visits each of `0..n` exactly once.
    pub fn is_permutation(&self, n: usize) -> bool {
        if self.order.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &city in &self.order {
            if city >= n || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }

    /// Directed edges of the closed tour, including the closing edge.
    ///
    /// A single-city tour yields the self-loop `(c, c)`; an empty tour
    /// yields nothing.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        closed_edges(&self.order)
    }

    /// Returns the same closed tour rotated so it begins at `city`.
    ///
    /// The cost is unchanged. If `city` is not on the tour, the tour is
    /// returned as is.
    pub fn starting_at(&self, city: usize) -> Tour {
        let mut order = self.order.clone();
        if let Some(pos) = order.iter().position(|&c| c == city) {
            order.rotate_left(pos);
        }
        Tour::new(order, self.cost)
    }
}

/// Directed edges `order[i] -> order[i + 1]` plus the closing edge back to
/// `order[0]`.
pub(crate) fn closed_edges(order: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    let n = order.len();
    (0..n).map(move |i| (order[i], order[(i + 1) % n]))
}
